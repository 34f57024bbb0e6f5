pub mod amateur_matches;
pub mod breakdowns;
pub mod connection;
pub mod models;
pub mod picks;
pub mod pro_matches;
pub mod rounds;
pub mod scores;
pub mod setup;
pub mod star_teams;
pub mod team_swaps;

pub use connection::{DbConn, DbPool, create_pool, get_connection};
pub use models::*;
