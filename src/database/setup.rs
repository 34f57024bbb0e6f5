use anyhow::{Context, Result};

use super::connection::DbConn;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Apply the engine schema. Every statement is `IF NOT EXISTS`, so this
/// is safe against a database that already carries data.
pub fn apply_schema(conn: &mut DbConn) -> Result<()> {
    for (idx, statement) in split_sql_statements(SCHEMA_SQL).iter().enumerate() {
        conn.execute(statement, [])
            .with_context(|| format!("Failed to execute schema statement {}", idx + 1))?;
    }

    log::info!("Database schema applied");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
