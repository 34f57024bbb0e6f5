use crate::config::ScoringSettings;
use crate::domain::{AmateurMatch, Faction, ProMatch, TeamRef};

use super::types::{MatchBreakdown, MatchOutcome};

/// A win counts as a tournament win when the event name carries one of
/// these markers.
const TOURNAMENT_KEYWORDS: [&str; 4] = ["championship", "final", "cup", "major"];

/// Score one finished professional match for a team. Returns None when
/// the team occupies neither slot of the match.
pub fn score_pro_match(
    m: &ProMatch,
    team: &TeamRef,
    star_applied: bool,
    settings: &ScoringSettings,
) -> Option<MatchBreakdown> {
    m.teams
        .iter()
        .find(|slot| slot.opponent.id.is_some_and(|id| team.matches_opponent_id(id)))?;
    let opponent = m
        .teams
        .iter()
        .find(|slot| !slot.opponent.id.is_some_and(|id| team.matches_opponent_id(id)));

    let outcome = match m.winner_id {
        Some(winner) if team.matches_opponent_id(winner) => MatchOutcome::Win,
        Some(_) => MatchOutcome::Loss,
        None => MatchOutcome::Draw,
    };

    let team_score = m
        .results
        .iter()
        .find(|r| r.team_id.is_some_and(|id| team.matches_opponent_id(id)))
        .map(|r| r.score)
        .unwrap_or(0);
    let opponent_score = m
        .results
        .iter()
        .find(|r| !r.team_id.is_some_and(|id| team.matches_opponent_id(id)))
        .map(|r| r.score)
        .unwrap_or(0);

    // A 1-0 in a best-of-1 is not a sweep.
    let is_clean_sweep = outcome == MatchOutcome::Win
        && opponent_score == 0
        && team_score >= 2
        && m.number_of_games >= 2;

    let is_tournament_win = outcome == MatchOutcome::Win
        && (contains_keyword(m.tournament_name.as_deref())
            || contains_keyword(m.league_name.as_deref()));

    let base = base_points(team_score, outcome, is_clean_sweep, is_tournament_win, settings);
    let points = apply_star_multiplier(base, star_applied, settings);

    Some(MatchBreakdown {
        match_id: m.match_id.to_string(),
        match_date: m.start_time,
        opponent_name: opponent
            .and_then(|slot| slot.opponent.name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        opponent_logo: opponent.and_then(|slot| slot.opponent.image_url.clone()),
        outcome,
        score: format!("{team_score}-{opponent_score}"),
        map_wins: team_score,
        map_losses: opponent_score,
        points_earned: points,
        is_clean_sweep,
        is_tournament_win,
        tournament_name: m
            .tournament_name
            .clone()
            .or_else(|| m.league_name.clone())
            .unwrap_or_default(),
        star_multiplier_applied: star_applied,
    })
}

/// Score one finished amateur match for a team. Returns None when the
/// team matches neither faction name.
pub fn score_amateur_match(
    m: &AmateurMatch,
    team: &TeamRef,
    star_applied: bool,
    settings: &ScoringSettings,
) -> Option<MatchBreakdown> {
    let is_team1 = team.matches_faction_name(&m.faction1_name);
    if !is_team1 && !team.matches_faction_name(&m.faction2_name) {
        return None;
    }

    let outcome = match m.winner {
        Some(Faction::Faction1) if is_team1 => MatchOutcome::Win,
        Some(Faction::Faction2) if !is_team1 => MatchOutcome::Win,
        Some(_) => MatchOutcome::Loss,
        None => MatchOutcome::Draw,
    };

    let (team_score, opponent_score) = if is_team1 {
        (m.faction1_score, m.faction2_score)
    } else {
        (m.faction2_score, m.faction1_score)
    };
    let opponent_name = if is_team1 {
        &m.faction2_name
    } else {
        &m.faction1_name
    };

    // The amateur feed has no series-length field, so no best-of-1 gate.
    let is_clean_sweep = outcome == MatchOutcome::Win && opponent_score == 0 && team_score >= 2;

    let is_tournament_win =
        outcome == MatchOutcome::Win && m.competition_type.as_deref() == Some("championship");

    let base = base_points(team_score, outcome, is_clean_sweep, is_tournament_win, settings);
    // The amateur bonus floors before the star multiplier rounds. The two
    // stages must stay in this order for parity with the stored scores.
    let boosted = ((base as f64) * settings.amateur_multiplier).floor() as i64;
    let points = apply_star_multiplier(boosted, star_applied, settings);

    Some(MatchBreakdown {
        match_id: m.match_id.clone(),
        match_date: m.started_at,
        opponent_name: if opponent_name.is_empty() {
            "Unknown".to_string()
        } else {
            opponent_name.clone()
        },
        opponent_logo: None,
        outcome,
        score: format!("{team_score}-{opponent_score}"),
        map_wins: team_score,
        map_losses: opponent_score,
        points_earned: points,
        is_clean_sweep,
        is_tournament_win,
        tournament_name: m.competition_name.clone().unwrap_or_default(),
        star_multiplier_applied: star_applied,
    })
}

fn base_points(
    map_wins: i64,
    outcome: MatchOutcome,
    is_clean_sweep: bool,
    is_tournament_win: bool,
    settings: &ScoringSettings,
) -> i64 {
    let mut points = map_wins * settings.map_win_points;
    if outcome == MatchOutcome::Win {
        points += settings.match_win_points;
    }
    if is_clean_sweep {
        points += settings.clean_sweep_points;
    }
    if is_tournament_win {
        points += settings.tournament_win_points;
    }
    points
}

fn apply_star_multiplier(points: i64, star_applied: bool, settings: &ScoringSettings) -> i64 {
    if star_applied {
        ((points as f64) * settings.star_multiplier).round() as i64
    } else {
        points
    }
}

fn contains_keyword(name: Option<&str>) -> bool {
    name.is_some_and(|n| {
        let lower = n.to_lowercase();
        TOURNAMENT_KEYWORDS.iter().any(|k| lower.contains(k))
    })
}
