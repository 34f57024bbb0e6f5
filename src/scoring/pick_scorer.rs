use chrono::{DateTime, Utc};
use log::warn;

use crate::config::ScoringSettings;
use crate::domain::{
    AmateurMatch, ProMatch, StarTeamState, TeamPick, TeamRef, TeamSwap, TeamType,
};

use super::rules;
use super::types::{MatchStats, ScoredPick, ScoredTeam};

/// Score one user's working team set against the round's cached match
/// sets. Teams whose id cannot be resolved are skipped with a warning so
/// malformed picks do not fail invisibly.
pub fn score_pick(
    teams: &[TeamPick],
    star: Option<&StarTeamState>,
    swap: Option<&TeamSwap>,
    pro_matches: &[ProMatch],
    amateur_matches: &[AmateurMatch],
    settings: &ScoringSettings,
) -> ScoredPick {
    let mut scored_teams = Vec::with_capacity(teams.len());

    for team in teams {
        let Some(team_ref) = TeamRef::resolve(team) else {
            warn!(
                "Skipping unresolvable {} team pick with id {:?}",
                team.team_type.as_str(),
                team.id
            );
            continue;
        };
        scored_teams.push(score_team(
            team,
            &team_ref,
            star,
            swap,
            pro_matches,
            amateur_matches,
            settings,
        ));
    }

    let total_score = scored_teams.iter().map(|t| t.final_score).sum();
    ScoredPick {
        total_score,
        teams: scored_teams,
    }
}

fn score_team(
    team: &TeamPick,
    team_ref: &TeamRef,
    star: Option<&StarTeamState>,
    swap: Option<&TeamSwap>,
    pro_matches: &[ProMatch],
    amateur_matches: &[AmateurMatch],
    settings: &ScoringSettings,
) -> ScoredTeam {
    let swapped_out = swap.is_some_and(|s| s.old_team_id == team.id);
    let star_team = star.is_some_and(|s| {
        s.star_team_id == team.id || s.previous_star_team_id.as_deref() == Some(&team.id)
    });

    let mut breakdowns = Vec::new();
    match team.team_type {
        TeamType::Pro => {
            for m in pro_matches.iter().filter(|m| m.involves(team_ref)) {
                if !swap_allows(swap, &team.id, m.start_time) {
                    continue;
                }
                let star_applied = star_applies(star, &team.id, m.start_time);
                if let Some(b) = rules::score_pro_match(m, team_ref, star_applied, settings) {
                    breakdowns.push(b);
                }
            }
        }
        TeamType::Amateur => {
            for m in amateur_matches.iter().filter(|m| m.involves(team_ref)) {
                if !swap_allows(swap, &team.id, m.started_at) {
                    continue;
                }
                let star_applied = star_applies(star, &team.id, m.started_at);
                if let Some(b) = rules::score_amateur_match(m, team_ref, star_applied, settings) {
                    breakdowns.push(b);
                }
            }
        }
    }

    let recomputed: i64 = breakdowns.iter().map(|b| b.points_earned).sum();
    // A swapped-out team keeps the score it had at the moment of the swap,
    // even when match data has since changed under it.
    let final_score = if swapped_out {
        swap.map(|s| s.points_at_swap).unwrap_or(recomputed)
    } else {
        recomputed
    };

    let stats = MatchStats::from_breakdowns(&breakdowns);
    ScoredTeam {
        team: team.clone(),
        star_team,
        swapped_out,
        final_score,
        breakdowns,
        stats,
    }
}

/// Whether the 2x star multiplier covers a match. With a mid-round star
/// change the current star earns it from the change instant onward (or
/// unconditionally when no change happened); the previous star only for
/// matches strictly before it.
fn star_applies(
    star: Option<&StarTeamState>,
    team_id: &str,
    match_date: DateTime<Utc>,
) -> bool {
    let Some(star) = star else {
        return false;
    };
    if star.star_team_id == team_id {
        return match star.star_changed_at {
            Some(changed_at) => match_date >= changed_at,
            None => true,
        };
    }
    if star.previous_star_team_id.as_deref() == Some(team_id) {
        if let Some(changed_at) = star.star_changed_at {
            return match_date < changed_at;
        }
    }
    false
}

/// Swap timing gate: a swapped-out team only keeps matches strictly
/// before the swap, a swapped-in team only matches at or after it. Teams
/// untouched by the swap keep everything.
fn swap_allows(swap: Option<&TeamSwap>, team_id: &str, match_date: DateTime<Utc>) -> bool {
    let Some(swap) = swap else {
        return true;
    };
    if swap.old_team_id == team_id {
        return match_date < swap.swapped_at;
    }
    if swap.new_team_id == team_id {
        return match_date >= swap.swapped_at;
    }
    true
}
