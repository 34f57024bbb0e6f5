use chrono::{DateTime, Utc};

use crate::domain::TeamPick;

/// Outcome of a single match from the scored team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win,
    Loss,
    Draw,
}

impl MatchOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            MatchOutcome::Win => "win",
            MatchOutcome::Loss => "loss",
            MatchOutcome::Draw => "draw",
        }
    }
}

/// Point derivation for one team in one match. These rows are the source
/// of truth the aggregates are recomputed from.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchBreakdown {
    pub match_id: String,
    pub match_date: DateTime<Utc>,
    pub opponent_name: String,
    pub opponent_logo: Option<String>,
    pub outcome: MatchOutcome,
    pub score: String,
    pub map_wins: i64,
    pub map_losses: i64,
    pub points_earned: i64,
    pub is_clean_sweep: bool,
    pub is_tournament_win: bool,
    pub tournament_name: String,
    pub star_multiplier_applied: bool,
}

/// Denormalized per-team counters derived from the breakdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchStats {
    pub match_wins: i64,
    pub map_wins: i64,
    pub clean_sweeps: i64,
    pub tournaments_won: i64,
    pub matches_played: i64,
}

impl MatchStats {
    pub fn from_breakdowns(breakdowns: &[MatchBreakdown]) -> Self {
        let mut stats = MatchStats::default();
        for breakdown in breakdowns {
            stats.matches_played += 1;
            stats.map_wins += breakdown.map_wins;
            if breakdown.outcome == MatchOutcome::Win {
                stats.match_wins += 1;
            }
            if breakdown.is_clean_sweep {
                stats.clean_sweeps += 1;
            }
            if breakdown.is_tournament_win {
                stats.tournaments_won += 1;
            }
        }
        stats
    }
}

/// One team's fully scored contribution to a pick.
#[derive(Debug, Clone)]
pub struct ScoredTeam {
    pub team: TeamPick,
    /// Current or previous star team for this user.
    pub star_team: bool,
    /// Score pinned to `points_at_swap` instead of the breakdown sum.
    pub swapped_out: bool,
    pub final_score: i64,
    pub breakdowns: Vec<MatchBreakdown>,
    pub stats: MatchStats,
}

/// Scoring result for one user's pick.
#[derive(Debug, Clone)]
pub struct ScoredPick {
    pub total_score: i64,
    pub teams: Vec<ScoredTeam>,
}
