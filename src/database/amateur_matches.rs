use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::params;
use serde::Deserialize;

use crate::domain::{AmateurMatch, Faction};

use super::connection::DbConn;

/// Winner and per-faction scores as nested in the amateur feed's raw
/// payload.
#[derive(Debug, Default, Deserialize)]
struct RawResults {
    #[serde(default)]
    winner: Option<String>,
    #[serde(default)]
    score: RawScore,
}

#[derive(Debug, Default, Deserialize)]
struct RawScore {
    #[serde(default)]
    faction1: i64,
    #[serde(default)]
    faction2: i64,
}

/// Finished amateur matches whose start time falls inside the round
/// window, with the raw result payload decoded into typed fields.
pub fn list_finished_in_window(
    conn: &mut DbConn,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<AmateurMatch>> {
    let sql = "SELECT match_id, started_at, faction1_name, faction2_name, competition_type, competition_name, raw_data FROM faceit_matches WHERE started_at >= ?1 AND started_at <= ?2 AND is_finished = 1";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![start, end], parse_amateur_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list amateur matches in window")?;

    Ok(rows)
}

fn parse_amateur_match_row(row: &rusqlite::Row) -> rusqlite::Result<AmateurMatch> {
    let raw_json: Option<String> = row.get(6)?;
    let raw: RawResults = raw_json
        .as_deref()
        .and_then(|j| serde_json::from_str(j).ok())
        .unwrap_or_default();

    let winner = match raw.winner.as_deref() {
        Some("faction1") => Some(Faction::Faction1),
        Some("faction2") => Some(Faction::Faction2),
        _ => None,
    };

    Ok(AmateurMatch {
        match_id: row.get(0)?,
        started_at: row.get(1)?,
        faction1_name: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        faction2_name: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        winner,
        faction1_score: raw.score.faction1,
        faction2_score: raw.score.faction2,
        competition_type: row.get(4)?,
        competition_name: row.get(5)?,
    })
}
