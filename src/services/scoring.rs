use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use chrono::Utc;
use log::{error, info, warn};

use crate::config::settings::AppConfig;
use crate::database::{self, BreakdownRow, DbConn, DbPool, ScoreRow};
use crate::domain::{
    self, AmateurMatch, Pick, ProMatch, Round, RunSummary, StarTeamState, TeamPick, TeamSwap,
    TeamType,
};
use crate::scoring::{self, ScoredPick, ScoredTeam};

/// The scoring batch: iterates active rounds, replays match results
/// against every pick, and reconciles the stored breakdowns and
/// aggregates. Each run is idempotent, so a partial failure is repaired
/// by the next scheduled invocation.
pub struct ScoringService {
    config: AppConfig,
    pool: DbPool,
}

/// Both match feeds for one round, fetched once and shared across every
/// pick in the round.
struct RoundMatches {
    pro: Vec<ProMatch>,
    amateur: Vec<AmateurMatch>,
}

impl ScoringService {
    pub fn new(config: AppConfig, pool: DbPool) -> Self {
        Self { config, pool }
    }

    pub async fn run(&self) -> Result<()> {
        info!("=== Starting Fantasy Score Calculation ===");

        let rounds = self.load_active_rounds()?;
        info!("Found {} active rounds to process", rounds.len());

        let mut summary = RunSummary::new();
        for round in &rounds {
            info!(
                "Processing round {} ({} to {})",
                round.display_name(),
                round.start_date,
                round.end_date
            );

            // One round's infrastructure failure must not abort the batch.
            let outcome = self.process_round(round, &mut summary).await;
            match outcome {
                Ok(()) => summary.round_processed(),
                Err(e) => {
                    error!("Skipping round {}: {:?}", round.id, e);
                    summary.round_skipped();
                }
            }
        }

        summary.log();
        info!("=== Fantasy Score Calculation Complete ===");
        Ok(())
    }

    fn load_active_rounds(&self) -> Result<Vec<Round>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::rounds::list_active(&mut conn).context("Failed to fetch active rounds")
    }

    async fn process_round(&self, round: &Round, summary: &mut RunSummary) -> Result<()> {
        // Scope the connection so the parallel match fetch below can draw
        // from the pool.
        let (picks, stars, swaps) = {
            let mut conn = database::get_connection(&self.pool)?;
            let picks = database::picks::list_by_round(&mut conn, &round.id)
                .context("Failed to fetch picks")?;
            let stars = self.load_star_states(&mut conn, round);
            let swaps = self.load_used_swaps(&mut conn, round);
            (picks, stars, swaps)
        };

        info!("  Found {} picks to process", picks.len());
        if picks.is_empty() {
            return Ok(());
        }

        let matches = self.fetch_round_matches(round).await?;
        info!(
            "  Found {} pro matches, {} amateur matches",
            matches.pro.len(),
            matches.amateur.len()
        );

        let mut conn = database::get_connection(&self.pool)?;
        for pick in &picks {
            match self.process_pick(&mut conn, round, pick, &stars, &swaps, &matches) {
                Ok(true) => summary.pick_processed(),
                Ok(false) => summary.pick_skipped(),
                Err(e) => {
                    error!(
                        "  Failed to process pick for user {} in round {}: {:?}",
                        pick.user_id, round.id, e
                    );
                    summary.pick_skipped();
                }
            }
        }

        Ok(())
    }

    /// Star-team fetch failures degrade gracefully: scoring proceeds
    /// without multipliers rather than skipping the round.
    fn load_star_states(&self, conn: &mut DbConn, round: &Round) -> HashMap<String, StarTeamState> {
        match database::star_teams::list_by_round(conn, &round.id) {
            Ok(rows) => rows.into_iter().map(|s| (s.user_id.clone(), s)).collect(),
            Err(e) => {
                warn!("  Failed to fetch star teams for round {}: {:?}", round.id, e);
                HashMap::new()
            }
        }
    }

    fn load_used_swaps(&self, conn: &mut DbConn, round: &Round) -> HashMap<String, TeamSwap> {
        match database::team_swaps::list_used_by_round(conn, &round.id) {
            Ok(rows) => rows.into_iter().map(|s| (s.user_id.clone(), s)).collect(),
            Err(e) => {
                warn!("  Failed to fetch team swaps for round {}: {:?}", round.id, e);
                HashMap::new()
            }
        }
    }

    /// Fetch both match feeds for the round window once, in parallel.
    /// Every pick in the round shares the result, keeping store reads per
    /// round constant regardless of participant count.
    async fn fetch_round_matches(&self, round: &Round) -> Result<RoundMatches> {
        let (start, end) = (round.start_date, round.end_date);

        let pro_pool = self.pool.clone();
        let pro_task = tokio::task::spawn_blocking(move || {
            let mut conn = database::get_connection(&pro_pool)?;
            database::pro_matches::list_finished_in_window(&mut conn, start, end)
        });

        let amateur_pool = self.pool.clone();
        let amateur_task = tokio::task::spawn_blocking(move || {
            let mut conn = database::get_connection(&amateur_pool)?;
            database::amateur_matches::list_finished_in_window(&mut conn, start, end)
        });

        let (pro, amateur) =
            tokio::try_join!(pro_task, amateur_task).context("Match fetch task failed")?;

        Ok(RoundMatches {
            pro: pro.context("Failed to fetch pro matches")?,
            amateur: amateur.context("Failed to fetch amateur matches")?,
        })
    }

    /// Returns Ok(true) when the pick was scored, Ok(false) when it was
    /// skipped (no picks, or malformed team_picks — logged, nothing
    /// written).
    fn process_pick(
        &self,
        conn: &mut DbConn,
        round: &Round,
        pick: &Pick,
        stars: &HashMap<String, StarTeamState>,
        swaps: &HashMap<String, TeamSwap>,
        matches: &RoundMatches,
    ) -> Result<bool> {
        let Some(raw_picks) = pick.team_picks.as_deref() else {
            return Ok(false);
        };

        let team_picks = match domain::parse_team_picks(raw_picks) {
            Ok(picks) => picks,
            Err(e) => {
                error!(
                    "  Failed to parse team_picks for user {}: {:?}",
                    pick.user_id, e
                );
                return Ok(false);
            }
        };
        if team_picks.is_empty() {
            return Ok(false);
        }

        let star = stars.get(&pick.user_id);
        let swap = swaps.get(&pick.user_id);

        let teams = self.teams_to_score(conn, round, pick, team_picks, swap);
        let scored = scoring::score_pick(
            &teams,
            star,
            swap,
            &matches.pro,
            &matches.amateur,
            &self.config.scoring,
        );

        self.reconcile_pick(conn, round, pick, &scored);
        Ok(true)
    }

    /// The declared picks, plus a reconstructed entry for a swapped-out
    /// team no longer among them, so its preserved score keeps a row.
    fn teams_to_score(
        &self,
        conn: &mut DbConn,
        round: &Round,
        pick: &Pick,
        mut teams: Vec<TeamPick>,
        swap: Option<&TeamSwap>,
    ) -> Vec<TeamPick> {
        let Some(swap) = swap else {
            return teams;
        };
        if teams.iter().any(|t| t.id == swap.old_team_id) {
            return teams;
        }
        teams.push(self.swapped_out_entry(conn, round, pick, swap));
        teams
    }

    fn swapped_out_entry(
        &self,
        conn: &mut DbConn,
        round: &Round,
        pick: &Pick,
        swap: &TeamSwap,
    ) -> TeamPick {
        let stored =
            database::scores::find_team_info(conn, &round.id, &pick.user_id, &swap.old_team_id)
                .unwrap_or_else(|e| {
                    warn!(
                        "  Failed to look up swapped-out team {}: {:?}",
                        swap.old_team_id, e
                    );
                    None
                });

        match stored {
            Some(info) => TeamPick {
                id: swap.old_team_id.clone(),
                name: info.team_name,
                team_type: info.team_type,
            },
            None => TeamPick {
                id: swap.old_team_id.clone(),
                name: "Swapped Team".to_string(),
                team_type: TeamType::Pro,
            },
        }
    }

    /// Persist one scored pick. Each write failure is logged with user
    /// and round context and the remaining writes are still attempted;
    /// the next idempotent run repairs any transient inconsistency.
    fn reconcile_pick(&self, conn: &mut DbConn, round: &Round, pick: &Pick, scored: &ScoredPick) {
        let now = Utc::now();

        for team in &scored.teams {
            if let Err(e) = self.cleanup_stale_breakdowns(conn, round, pick, team) {
                warn!(
                    "  Failed to clean up stale breakdowns for team {} (user {}): {:?}",
                    team.team.id, pick.user_id, e
                );
            }
        }

        for team in &scored.teams {
            for breakdown in &team.breakdowns {
                let row = BreakdownRow {
                    round_id: round.id.clone(),
                    user_id: pick.user_id.clone(),
                    team_id: team.team.id.clone(),
                    team_name: team.team.name.clone(),
                    team_type: team.team.team_type,
                    is_star_team: team.star_team,
                    amateur_bonus_applied: team.team.team_type == TeamType::Amateur,
                    breakdown: breakdown.clone(),
                };
                if let Err(e) = database::breakdowns::upsert_breakdown(conn, &row) {
                    error!(
                        "  Failed to upsert breakdown for user {} match {}: {:?}",
                        pick.user_id, breakdown.match_id, e
                    );
                }
            }
        }

        for team in &scored.teams {
            let row = self.score_row(round, pick, team, now);
            if let Err(e) = database::scores::upsert_score(conn, &row) {
                error!(
                    "  Failed to upsert score for user {} team {}: {:?}",
                    pick.user_id, team.team.id, e
                );
            }
        }

        if let Err(e) =
            database::picks::update_total_score(conn, &pick.id, scored.total_score, now)
        {
            error!(
                "  Failed to update pick total for user {} in round {}: {:?}",
                pick.user_id, round.id, e
            );
        }
    }

    fn score_row(
        &self,
        round: &Round,
        pick: &Pick,
        team: &ScoredTeam,
        now: chrono::DateTime<Utc>,
    ) -> ScoreRow {
        // The aggregate is the sum of the reconciled breakdown rows. The
        // one exception: a swapped-out team keeps the points preserved at
        // swap time instead of the recomputed sum.
        let current_score = if team.swapped_out {
            team.final_score
        } else {
            team.breakdowns.iter().map(|b| b.points_earned).sum()
        };

        ScoreRow {
            round_id: round.id.clone(),
            user_id: pick.user_id.clone(),
            team_id: team.team.id.clone(),
            team_name: team.team.name.clone(),
            team_type: team.team.team_type,
            current_score,
            stats: team.stats.clone(),
            last_updated: now,
        }
    }

    /// Stored breakdown rows whose match ids fell out of the freshly
    /// computed valid set belong to cancelled or rescheduled matches and
    /// are deleted.
    fn cleanup_stale_breakdowns(
        &self,
        conn: &mut DbConn,
        round: &Round,
        pick: &Pick,
        team: &ScoredTeam,
    ) -> Result<()> {
        let stored =
            database::breakdowns::list_match_ids(conn, &round.id, &pick.user_id, &team.team.id)?;

        let valid: HashSet<&str> = team.breakdowns.iter().map(|b| b.match_id.as_str()).collect();
        let stale: Vec<String> = stored
            .into_iter()
            .filter(|id| !valid.contains(id.as_str()))
            .collect();

        if stale.is_empty() {
            return Ok(());
        }

        info!(
            "  Removing {} stale breakdown rows for team {} (user {})",
            stale.len(),
            team.team.id,
            pick.user_id
        );
        database::breakdowns::delete_by_match_ids(
            conn,
            &round.id,
            &pick.user_id,
            &team.team.id,
            &stale,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use r2d2_sqlite::SqliteConnectionManager;
    use rusqlite::params;

    // A single-connection pool over one in-memory database: every handle
    // the service draws sees the same data.
    fn test_pool() -> DbPool {
        let manager = SqliteConnectionManager::memory();
        let pool = r2d2::Pool::builder().max_size(1).build(manager).unwrap();
        let mut conn = pool.get().unwrap();
        database::setup::apply_schema(&mut conn).unwrap();
        pool
    }

    fn service(pool: &DbPool) -> ScoringService {
        ScoringService::new(AppConfig::new(), pool.clone())
    }

    fn day(d: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, d, hour, 0, 0).unwrap()
    }

    fn insert_round(conn: &DbConn, id: &str) {
        conn.execute(
            "INSERT INTO fantasy_rounds (id, round_name, type, status, start_date, end_date) VALUES (?1, ?2, 'weekly', 'open', ?3, ?4)",
            params![id, format!("Week {id}"), day(1, 0), day(30, 0)],
        )
        .unwrap();
    }

    fn insert_pick(conn: &DbConn, id: &str, round_id: &str, user_id: &str, team_picks: &str) {
        conn.execute(
            "INSERT INTO fantasy_round_picks (id, round_id, user_id, team_picks) VALUES (?1, ?2, ?3, ?4)",
            params![id, round_id, user_id, team_picks],
        )
        .unwrap();
    }

    fn insert_pro_match(
        conn: &DbConn,
        match_id: i64,
        start: DateTime<Utc>,
        winner_id: i64,
        team_id: i64,
        opponent_id: i64,
        team_score: i64,
        opponent_score: i64,
        tournament_name: &str,
    ) {
        let teams = format!(
            r#"[{{"opponent": {{"id": {team_id}, "name": "Team {team_id}"}}}}, {{"opponent": {{"id": {opponent_id}, "name": "Team {opponent_id}"}}}}]"#
        );
        let raw_data = format!(
            r#"{{"results": [{{"team_id": {team_id}, "score": {team_score}}}, {{"team_id": {opponent_id}, "score": {opponent_score}}}]}}"#
        );
        conn.execute(
            "INSERT INTO pandascore_matches (match_id, start_time, status, winner_id, number_of_games, tournament_name, teams, raw_data) VALUES (?1, ?2, 'finished', ?3, 3, ?4, ?5, ?6)",
            params![match_id, start, winner_id, tournament_name, teams, raw_data],
        )
        .unwrap();
    }

    fn insert_amateur_match(
        conn: &DbConn,
        match_id: &str,
        start: DateTime<Utc>,
        faction1: &str,
        faction2: &str,
        winner: &str,
        score1: i64,
        score2: i64,
    ) {
        let raw_data = format!(
            r#"{{"winner": "{winner}", "score": {{"faction1": {score1}, "faction2": {score2}}}}}"#
        );
        conn.execute(
            "INSERT INTO faceit_matches (match_id, started_at, is_finished, faction1_name, faction2_name, competition_type, competition_name, raw_data) VALUES (?1, ?2, 1, ?3, ?4, 'matchmaking', 'Weekly Ladder', ?5)",
            params![match_id, start, faction1, faction2, raw_data],
        )
        .unwrap();
    }

    fn breakdown_count(conn: &DbConn, team_id: &str) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM fantasy_team_match_breakdown WHERE team_id = ?1",
            params![team_id],
            |row| row.get(0),
        )
        .unwrap()
    }

    fn current_score(conn: &DbConn, team_id: &str) -> i64 {
        conn.query_row(
            "SELECT current_score FROM fantasy_round_scores WHERE team_id = ?1",
            params![team_id],
            |row| row.get(0),
        )
        .unwrap()
    }

    fn pick_total(conn: &DbConn, pick_id: &str) -> i64 {
        conn.query_row(
            "SELECT total_score FROM fantasy_round_picks WHERE id = ?1",
            params![pick_id],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_end_to_end_sweep_in_major_scores_41() {
        let pool = test_pool();
        {
            let conn = pool.get().unwrap();
            insert_round(&conn, "r1");
            insert_pick(
                &conn,
                "p1",
                "r1",
                "user-1",
                r#"[{"id": "5", "name": "Team 5", "type": "pro"}]"#,
            );
            // Team 5 beats team 9 2-0 in a BO3 at the Summer Major:
            // 2*3 + 10 + 5 + 20 = 41, no star entry for this user.
            insert_pro_match(&conn, 1001, day(10, 18), 5, 5, 9, 2, 0, "Summer Major");
        }

        service(&pool).run().await.unwrap();

        let conn = pool.get().unwrap();
        let (points, result, sweep, tournament, starred): (i64, String, bool, bool, bool) = conn
            .query_row(
                "SELECT points_earned, result, is_clean_sweep, is_tournament_win, star_multiplier_applied FROM fantasy_team_match_breakdown WHERE round_id = 'r1' AND user_id = 'user-1' AND team_id = '5' AND match_id = '1001'",
                [],
                |row| {
                    Ok((
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                        row.get(4)?,
                    ))
                },
            )
            .unwrap();

        assert_eq!(points, 41);
        assert_eq!(result, "win");
        assert!(sweep);
        assert!(tournament);
        assert!(!starred);
        assert_eq!(current_score(&conn, "5"), 41);
        assert_eq!(pick_total(&conn, "p1"), 41);
    }

    #[tokio::test]
    async fn test_rerun_is_idempotent() {
        let pool = test_pool();
        {
            let conn = pool.get().unwrap();
            insert_round(&conn, "r1");
            insert_pick(
                &conn,
                "p1",
                "r1",
                "user-1",
                r#"[{"id": "5", "name": "Team 5", "type": "pro"}]"#,
            );
            insert_pro_match(&conn, 1001, day(10, 18), 5, 5, 9, 2, 0, "Summer Major");
        }

        let svc = service(&pool);
        svc.run().await.unwrap();
        svc.run().await.unwrap();

        let conn = pool.get().unwrap();
        assert_eq!(breakdown_count(&conn, "5"), 1);
        assert_eq!(current_score(&conn, "5"), 41);
        assert_eq!(pick_total(&conn, "p1"), 41);
    }

    #[tokio::test]
    async fn test_cancelled_match_breakdown_is_removed_on_rerun() {
        let pool = test_pool();
        {
            let conn = pool.get().unwrap();
            insert_round(&conn, "r1");
            insert_pick(
                &conn,
                "p1",
                "r1",
                "user-1",
                r#"[{"id": "5", "name": "Team 5", "type": "pro"}]"#,
            );
            insert_pro_match(&conn, 1001, day(10, 18), 5, 5, 9, 2, 0, "Summer Major");
            insert_pro_match(&conn, 1002, day(12, 18), 9, 5, 9, 0, 2, "Summer Series");
        }

        let svc = service(&pool);
        svc.run().await.unwrap();
        {
            let conn = pool.get().unwrap();
            assert_eq!(breakdown_count(&conn, "5"), 2);
            // Match 1002 gets cancelled and disappears from the feed.
            conn.execute("DELETE FROM pandascore_matches WHERE match_id = 1002", [])
                .unwrap();
        }

        svc.run().await.unwrap();

        let conn = pool.get().unwrap();
        assert_eq!(breakdown_count(&conn, "5"), 1);
        assert_eq!(current_score(&conn, "5"), 41);
        assert_eq!(pick_total(&conn, "p1"), 41);
    }

    #[tokio::test]
    async fn test_swapped_out_team_keeps_preserved_points() {
        let pool = test_pool();
        {
            let conn = pool.get().unwrap();
            insert_round(&conn, "r1");
            // The pick only declares the swapped-in team 7; the old team 5
            // must be reconstructed to keep its frozen score on record.
            insert_pick(
                &conn,
                "p1",
                "r1",
                "user-1",
                r#"[{"id": "7", "name": "Team 7", "type": "pro"}]"#,
            );
            conn.execute(
                "INSERT INTO fantasy_round_team_swaps (round_id, user_id, old_team_id, new_team_id, swapped_at, points_at_swap, swap_used) VALUES ('r1', 'user-1', '5', '7', ?1, 37, 1)",
                params![day(15, 0)],
            )
            .unwrap();
            // Old team wins after the swap: must not move its frozen score.
            insert_pro_match(&conn, 2001, day(20, 18), 5, 5, 9, 2, 0, "Summer Major");
            // New team wins after the swap: counts. 2*3 + 10 = 16.
            insert_pro_match(&conn, 2002, day(21, 18), 7, 7, 9, 2, 1, "Summer Series");
            // New team win before the swap: must not count.
            insert_pro_match(&conn, 2003, day(10, 18), 7, 7, 9, 2, 0, "Summer Series");
        }

        service(&pool).run().await.unwrap();

        let conn = pool.get().unwrap();
        assert_eq!(current_score(&conn, "5"), 37);
        assert_eq!(breakdown_count(&conn, "5"), 0);
        assert_eq!(current_score(&conn, "7"), 16);
        assert_eq!(breakdown_count(&conn, "7"), 1);
        assert_eq!(pick_total(&conn, "p1"), 53);

        let old_team_name: String = conn
            .query_row(
                "SELECT team_name FROM fantasy_round_scores WHERE team_id = '5'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(old_team_name, "Swapped Team");
    }

    #[tokio::test]
    async fn test_star_multiplier_and_amateur_bonus_flow_to_rows() {
        let pool = test_pool();
        {
            let conn = pool.get().unwrap();
            insert_round(&conn, "r1");
            insert_pick(
                &conn,
                "p1",
                "r1",
                "user-1",
                r#"[{"id": "5", "name": "Team 5", "type": "pro"}, {"id": "Iron Wolves", "name": "Iron Wolves", "type": "amateur"}]"#,
            );
            conn.execute(
                "INSERT INTO fantasy_round_star_teams (round_id, user_id, star_team_id, previous_star_team_id, star_changed_at, change_used) VALUES ('r1', 'user-1', '5', NULL, NULL, 0)",
                [],
            )
            .unwrap();
            // Starred pro team: (2*3 + 10) * 2 = 32.
            insert_pro_match(&conn, 3001, day(10, 18), 5, 5, 9, 2, 1, "Summer Series");
            // Amateur sweep: floor((2*3 + 10 + 5) * 1.25) = 26.
            insert_amateur_match(
                &conn,
                "1-abc",
                day(11, 20),
                "Iron Wolves",
                "Night Owls",
                "faction1",
                2,
                0,
            );
        }

        service(&pool).run().await.unwrap();

        let conn = pool.get().unwrap();
        assert_eq!(current_score(&conn, "5"), 32);
        assert_eq!(current_score(&conn, "Iron Wolves"), 26);
        assert_eq!(pick_total(&conn, "p1"), 58);

        let (star_row, starred): (bool, bool) = conn
            .query_row(
                "SELECT is_star_team, star_multiplier_applied FROM fantasy_team_match_breakdown WHERE team_id = '5'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert!(star_row);
        assert!(starred);

        let amateur_bonus: bool = conn
            .query_row(
                "SELECT amateur_bonus_applied FROM fantasy_team_match_breakdown WHERE team_id = 'Iron Wolves'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(amateur_bonus);
    }

    #[tokio::test]
    async fn test_malformed_pick_skips_only_that_pick() {
        let pool = test_pool();
        {
            let conn = pool.get().unwrap();
            insert_round(&conn, "r1");
            insert_pick(&conn, "p1", "r1", "user-1", "not json at all");
            insert_pick(
                &conn,
                "p2",
                "r1",
                "user-2",
                r#"[{"id": "5", "name": "Team 5", "type": "pro"}]"#,
            );
            insert_pro_match(&conn, 4001, day(10, 18), 5, 5, 9, 2, 0, "Summer Major");
        }

        service(&pool).run().await.unwrap();

        let conn = pool.get().unwrap();
        // The malformed pick is untouched; the healthy one is scored.
        assert_eq!(pick_total(&conn, "p1"), 0);
        assert_eq!(pick_total(&conn, "p2"), 41);
        let breakdowns_for_user1: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM fantasy_team_match_breakdown WHERE user_id = 'user-1'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(breakdowns_for_user1, 0);
    }

    #[tokio::test]
    async fn test_finished_rounds_are_not_touched() {
        let pool = test_pool();
        {
            let conn = pool.get().unwrap();
            conn.execute(
                "INSERT INTO fantasy_rounds (id, type, status, start_date, end_date) VALUES ('r9', 'weekly', 'finished', ?1, ?2)",
                params![day(1, 0), day(30, 0)],
            )
            .unwrap();
            insert_pick(
                &conn,
                "p9",
                "r9",
                "user-1",
                r#"[{"id": "5", "name": "Team 5", "type": "pro"}]"#,
            );
            insert_pro_match(&conn, 5001, day(10, 18), 5, 5, 9, 2, 0, "Summer Major");
        }

        service(&pool).run().await.unwrap();

        let conn = pool.get().unwrap();
        assert_eq!(pick_total(&conn, "p9"), 0);
        assert_eq!(breakdown_count(&conn, "5"), 0);
    }
}
