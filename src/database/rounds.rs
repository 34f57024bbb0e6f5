use anyhow::{Context, Result};

use crate::domain::{Round, RoundStatus};

use super::connection::DbConn;

/// Rounds still accepting score updates, most recent first. Ordering has
/// no correctness weight but keeps runs deterministic.
pub fn list_active(conn: &mut DbConn) -> Result<Vec<Round>> {
    let sql = "SELECT id, round_name, type, status, start_date, end_date FROM fantasy_rounds WHERE status IN ('open', 'closed') ORDER BY start_date DESC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_round_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list active rounds")?;

    Ok(rows)
}

fn parse_round_row(row: &rusqlite::Row) -> rusqlite::Result<Round> {
    let status: String = row.get(3)?;
    Ok(Round {
        id: row.get(0)?,
        round_name: row.get(1)?,
        round_type: row.get(2)?,
        status: RoundStatus::parse(&status),
        start_date: row.get(4)?,
        end_date: row.get(5)?,
    })
}
