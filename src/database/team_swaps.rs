use anyhow::{Context, Result};
use rusqlite::params;

use crate::domain::TeamSwap;

use super::connection::DbConn;

/// Only consumed swaps affect scoring.
pub fn list_used_by_round(conn: &mut DbConn, round_id: &str) -> Result<Vec<TeamSwap>> {
    let sql = "SELECT user_id, old_team_id, new_team_id, swapped_at, points_at_swap FROM fantasy_round_team_swaps WHERE round_id = ?1 AND swap_used = 1";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![round_id], parse_team_swap_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list team swaps for round")?;

    Ok(rows)
}

fn parse_team_swap_row(row: &rusqlite::Row) -> rusqlite::Result<TeamSwap> {
    Ok(TeamSwap {
        user_id: row.get(0)?,
        old_team_id: row.get(1)?,
        new_team_id: row.get(2)?,
        swapped_at: row.get(3)?,
        points_at_swap: row.get(4)?,
    })
}
