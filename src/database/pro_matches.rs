use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::params;
use serde::Deserialize;

use crate::domain::{MapResult, ProMatch, TeamSlot};

use super::connection::DbConn;

/// The ingested feed stores per-map results nested under `raw_data`.
#[derive(Debug, Default, Deserialize)]
struct RawData {
    #[serde(default)]
    results: Vec<MapResult>,
}

/// Finished professional matches whose start time falls inside the round
/// window. The nested team and result JSON is decoded here so nothing
/// untyped leaves this module; an undecodable payload degrades to empty.
pub fn list_finished_in_window(
    conn: &mut DbConn,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<ProMatch>> {
    let sql = "SELECT match_id, start_time, winner_id, number_of_games, tournament_name, league_name, teams, raw_data FROM pandascore_matches WHERE start_time >= ?1 AND start_time <= ?2 AND status = 'finished'";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![start, end], parse_pro_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list pro matches in window")?;

    Ok(rows)
}

fn parse_pro_match_row(row: &rusqlite::Row) -> rusqlite::Result<ProMatch> {
    let teams_json: Option<String> = row.get(6)?;
    let raw_data_json: Option<String> = row.get(7)?;

    Ok(ProMatch {
        match_id: row.get(0)?,
        start_time: row.get(1)?,
        winner_id: row.get(2)?,
        number_of_games: row.get::<_, Option<i64>>(3)?.unwrap_or(1),
        tournament_name: row.get(4)?,
        league_name: row.get(5)?,
        teams: decode_json::<Vec<TeamSlot>>(teams_json.as_deref()),
        results: decode_json::<RawData>(raw_data_json.as_deref()).results,
    })
}

fn decode_json<T: Default + for<'de> Deserialize<'de>>(json: Option<&str>) -> T {
    json.and_then(|j| serde_json::from_str(j).ok())
        .unwrap_or_default()
}
