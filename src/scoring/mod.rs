pub mod pick_scorer;
pub mod rules;
pub mod types;

pub use pick_scorer::score_pick;
pub use types::{MatchBreakdown, MatchOutcome, MatchStats, ScoredPick, ScoredTeam};
