use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::BreakdownRow;

/// Match ids currently stored for one team in one pick, used for
/// stale-row detection.
pub fn list_match_ids(
    conn: &mut DbConn,
    round_id: &str,
    user_id: &str,
    team_id: &str,
) -> Result<Vec<String>> {
    let sql = "SELECT match_id FROM fantasy_team_match_breakdown WHERE round_id = ?1 AND user_id = ?2 AND team_id = ?3";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![round_id, user_id, team_id], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()
        .context("Failed to list stored breakdown match ids")?;

    Ok(rows)
}

/// Delete breakdown rows whose matches no longer resolve for this team
/// (cancelled or rescheduled out of the round window).
pub fn delete_by_match_ids(
    conn: &mut DbConn,
    round_id: &str,
    user_id: &str,
    team_id: &str,
    match_ids: &[String],
) -> Result<usize> {
    let sql = "DELETE FROM fantasy_team_match_breakdown WHERE round_id = ?1 AND user_id = ?2 AND team_id = ?3 AND match_id = ?4";

    let mut stmt = conn.prepare(sql)?;
    let mut deleted = 0;
    for match_id in match_ids {
        deleted += stmt
            .execute(params![round_id, user_id, team_id, match_id])
            .context("Failed to delete stale breakdown row")?;
    }

    Ok(deleted)
}

/// Idempotent write: re-running with identical input produces identical
/// rows.
pub fn upsert_breakdown(conn: &mut DbConn, row: &BreakdownRow) -> Result<()> {
    let sql = "INSERT INTO fantasy_team_match_breakdown (round_id, user_id, team_id, team_name, team_type, match_id, match_date, opponent_name, opponent_logo, result, score, map_wins, map_losses, points_earned, is_clean_sweep, is_tournament_win, tournament_name, is_star_team, star_multiplier_applied, amateur_bonus_applied) \
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20) \
               ON CONFLICT (round_id, user_id, team_id, match_id) DO UPDATE SET \
               team_name = excluded.team_name, team_type = excluded.team_type, match_date = excluded.match_date, \
               opponent_name = excluded.opponent_name, opponent_logo = excluded.opponent_logo, result = excluded.result, \
               score = excluded.score, map_wins = excluded.map_wins, map_losses = excluded.map_losses, \
               points_earned = excluded.points_earned, is_clean_sweep = excluded.is_clean_sweep, \
               is_tournament_win = excluded.is_tournament_win, tournament_name = excluded.tournament_name, \
               is_star_team = excluded.is_star_team, star_multiplier_applied = excluded.star_multiplier_applied, \
               amateur_bonus_applied = excluded.amateur_bonus_applied";

    let b = &row.breakdown;
    conn.execute(
        sql,
        params![
            row.round_id,
            row.user_id,
            row.team_id,
            row.team_name,
            row.team_type.as_str(),
            b.match_id,
            b.match_date,
            b.opponent_name,
            b.opponent_logo,
            b.outcome.as_str(),
            b.score,
            b.map_wins,
            b.map_losses,
            b.points_earned,
            b.is_clean_sweep,
            b.is_tournament_win,
            b.tournament_name,
            row.is_star_team,
            b.star_multiplier_applied,
            row.amateur_bonus_applied,
        ],
    )
    .context("Failed to upsert breakdown row")?;

    Ok(())
}
