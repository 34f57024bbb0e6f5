use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::team_ref::TeamRef;

/// Lifecycle of a scoring round. Only open and closed rounds are scored;
/// a finished round is immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Open,
    Closed,
    Finished,
}

impl RoundStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "open" => RoundStatus::Open,
            "closed" => RoundStatus::Closed,
            _ => RoundStatus::Finished,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RoundStatus::Open => "open",
            RoundStatus::Closed => "closed",
            RoundStatus::Finished => "finished",
        }
    }
}

/// A scored competition period (daily/weekly/monthly). Created and closed
/// by the platform; the engine only reads it.
#[derive(Debug, Clone)]
pub struct Round {
    pub id: String,
    pub round_name: Option<String>,
    pub round_type: String,
    pub status: RoundStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Round {
    pub fn display_name(&self) -> &str {
        self.round_name.as_deref().unwrap_or(&self.round_type)
    }
}

/// One user's entry into a round. `team_picks` is kept raw until the
/// defensive parse at scoring time, since a malformed pick must only skip
/// that one pick.
#[derive(Debug, Clone)]
pub struct Pick {
    pub id: String,
    pub round_id: String,
    pub user_id: String,
    pub team_picks: Option<String>,
}

/// Which feed a team is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamType {
    Pro,
    Amateur,
}

impl TeamType {
    /// Anything other than exactly "amateur" (case-insensitive) is pro.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("amateur") {
            TeamType::Amateur
        } else {
            TeamType::Pro
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TeamType::Pro => "pro",
            TeamType::Amateur => "amateur",
        }
    }
}

/// A normalized team selection from a pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamPick {
    pub id: String,
    pub name: String,
    pub team_type: TeamType,
}

/// Per (round, user) star team designation, including the change history
/// needed to apply the 2x multiplier by match timing.
#[derive(Debug, Clone)]
pub struct StarTeamState {
    pub user_id: String,
    pub star_team_id: String,
    pub previous_star_team_id: Option<String>,
    pub star_changed_at: Option<DateTime<Utc>>,
    pub change_used: bool,
}

/// Per (round, user) one-time team replacement. The old team's score is
/// frozen at `points_at_swap`.
#[derive(Debug, Clone)]
pub struct TeamSwap {
    pub user_id: String,
    pub old_team_id: String,
    pub new_team_id: String,
    pub swapped_at: DateTime<Utc>,
    pub points_at_swap: i64,
}

/// One side of a professional match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamSlot {
    #[serde(default)]
    pub opponent: Opponent,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Opponent {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Per-team map score nested in a pro match's raw results.
#[derive(Debug, Clone, Deserialize)]
pub struct MapResult {
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub score: i64,
}

/// A finished professional match inside a round window.
#[derive(Debug, Clone)]
pub struct ProMatch {
    pub match_id: i64,
    pub start_time: DateTime<Utc>,
    pub winner_id: Option<i64>,
    pub number_of_games: i64,
    pub tournament_name: Option<String>,
    pub league_name: Option<String>,
    pub teams: Vec<TeamSlot>,
    pub results: Vec<MapResult>,
}

impl ProMatch {
    pub fn involves(&self, team: &TeamRef) -> bool {
        self.teams
            .iter()
            .any(|slot| slot.opponent.id.is_some_and(|id| team.matches_opponent_id(id)))
    }
}

/// Winner encoding used by the amateur feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faction {
    Faction1,
    Faction2,
}

/// A finished amateur match. Amateur teams have no stable numeric id, so
/// identity is the faction name matched case-insensitively.
#[derive(Debug, Clone)]
pub struct AmateurMatch {
    pub match_id: String,
    pub started_at: DateTime<Utc>,
    pub faction1_name: String,
    pub faction2_name: String,
    pub winner: Option<Faction>,
    pub faction1_score: i64,
    pub faction2_score: i64,
    pub competition_type: Option<String>,
    pub competition_name: Option<String>,
}

impl AmateurMatch {
    pub fn involves(&self, team: &TeamRef) -> bool {
        team.matches_faction_name(&self.faction1_name)
            || team.matches_faction_name(&self.faction2_name)
    }
}
