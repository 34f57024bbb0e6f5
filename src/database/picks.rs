use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::params;

use crate::domain::Pick;

use super::connection::DbConn;

pub fn list_by_round(conn: &mut DbConn, round_id: &str) -> Result<Vec<Pick>> {
    let sql =
        "SELECT id, round_id, user_id, team_picks FROM fantasy_round_picks WHERE round_id = ?1";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![round_id], parse_pick_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list picks for round")?;

    Ok(rows)
}

pub fn update_total_score(
    conn: &mut DbConn,
    pick_id: &str,
    total_score: i64,
    updated_at: DateTime<Utc>,
) -> Result<()> {
    let sql = "UPDATE fantasy_round_picks SET total_score = ?1, updated_at = ?2 WHERE id = ?3";

    conn.execute(sql, params![total_score, updated_at, pick_id])
        .context("Failed to update pick total score")?;
    Ok(())
}

fn parse_pick_row(row: &rusqlite::Row) -> rusqlite::Result<Pick> {
    Ok(Pick {
        id: row.get(0)?,
        round_id: row.get(1)?,
        user_id: row.get(2)?,
        team_picks: row.get(3)?,
    })
}
