pub mod models;
pub mod progress;
pub mod team_picks;
pub mod team_ref;

pub use models::*;
pub use progress::RunSummary;
pub use team_picks::parse_team_picks;
pub use team_ref::TeamRef;
