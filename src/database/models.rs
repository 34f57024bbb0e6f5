use chrono::{DateTime, Utc};

use crate::domain::TeamType;
use crate::scoring::{MatchBreakdown, MatchStats};

/// Fully keyed breakdown row as persisted to
/// `fantasy_team_match_breakdown`.
#[derive(Debug, Clone)]
pub struct BreakdownRow {
    pub round_id: String,
    pub user_id: String,
    pub team_id: String,
    pub team_name: String,
    pub team_type: TeamType,
    pub is_star_team: bool,
    pub amateur_bonus_applied: bool,
    pub breakdown: MatchBreakdown,
}

/// Denormalized per-team score row as persisted to
/// `fantasy_round_scores`.
#[derive(Debug, Clone)]
pub struct ScoreRow {
    pub round_id: String,
    pub user_id: String,
    pub team_id: String,
    pub team_name: String,
    pub team_type: TeamType,
    pub current_score: i64,
    pub stats: MatchStats,
    pub last_updated: DateTime<Utc>,
}

/// Team identity recovered from a stored score row, used to rebuild a
/// swapped-out team that is no longer among the declared picks.
#[derive(Debug, Clone)]
pub struct StoredTeamInfo {
    pub team_name: String,
    pub team_type: TeamType,
}
