use anyhow::{Context, Result};
use rusqlite::{OptionalExtension, params};

use crate::domain::TeamType;

use super::connection::DbConn;
use super::models::{ScoreRow, StoredTeamInfo};

/// Recover a team's display name and type from its stored score row.
/// Used to rebuild a swapped-out team no longer present in the picks.
pub fn find_team_info(
    conn: &mut DbConn,
    round_id: &str,
    user_id: &str,
    team_id: &str,
) -> Result<Option<StoredTeamInfo>> {
    let sql = "SELECT team_name, team_type FROM fantasy_round_scores WHERE round_id = ?1 AND user_id = ?2 AND team_id = ?3";

    conn.query_row(sql, params![round_id, user_id, team_id], |row| {
        let team_type: String = row.get(1)?;
        Ok(StoredTeamInfo {
            team_name: row.get(0)?,
            team_type: TeamType::parse(&team_type),
        })
    })
    .optional()
    .context("Failed to look up stored team info")
}

pub fn upsert_score(conn: &mut DbConn, row: &ScoreRow) -> Result<()> {
    let sql = "INSERT INTO fantasy_round_scores (round_id, user_id, team_id, team_name, team_type, current_score, match_wins, map_wins, clean_sweeps, tournaments_won, matches_played, last_updated) \
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12) \
               ON CONFLICT (round_id, user_id, team_id) DO UPDATE SET \
               team_name = excluded.team_name, team_type = excluded.team_type, current_score = excluded.current_score, \
               match_wins = excluded.match_wins, map_wins = excluded.map_wins, clean_sweeps = excluded.clean_sweeps, \
               tournaments_won = excluded.tournaments_won, matches_played = excluded.matches_played, \
               last_updated = excluded.last_updated";

    conn.execute(
        sql,
        params![
            row.round_id,
            row.user_id,
            row.team_id,
            row.team_name,
            row.team_type.as_str(),
            row.current_score,
            row.stats.match_wins,
            row.stats.map_wins,
            row.stats.clean_sweeps,
            row.stats.tournaments_won,
            row.stats.matches_played,
            row.last_updated,
        ],
    )
    .context("Failed to upsert score row")?;

    Ok(())
}
