use anyhow::{Context, Result};
use rusqlite::params;

use crate::domain::StarTeamState;

use super::connection::DbConn;

pub fn list_by_round(conn: &mut DbConn, round_id: &str) -> Result<Vec<StarTeamState>> {
    let sql = "SELECT user_id, star_team_id, previous_star_team_id, star_changed_at, change_used FROM fantasy_round_star_teams WHERE round_id = ?1";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![round_id], parse_star_team_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list star teams for round")?;

    Ok(rows)
}

fn parse_star_team_row(row: &rusqlite::Row) -> rusqlite::Result<StarTeamState> {
    Ok(StarTeamState {
        user_id: row.get(0)?,
        star_team_id: row.get(1)?,
        previous_star_team_id: row.get(2)?,
        star_changed_at: row.get(3)?,
        change_used: row.get(4)?,
    })
}
