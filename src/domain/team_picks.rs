use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use super::models::{TeamPick, TeamType};

/// Raw pick entry as stored by the platform. Historic rows disagree on
/// field names and on whether ids are numbers or strings, so every field
/// is taken as a loose JSON value and normalized afterwards.
#[derive(Debug, Default, Deserialize)]
struct RawTeamPick {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    team_id: Value,
    #[serde(default)]
    name: Value,
    #[serde(default)]
    team_name: Value,
    #[serde(default, rename = "type")]
    kind: Value,
    #[serde(default, rename = "team_type")]
    kind_alt: Value,
}

/// Parse the `team_picks` column, which holds either a JSON array of pick
/// entries or a JSON string wrapping one. The untyped form stops here.
pub fn parse_team_picks(raw: &str) -> Result<Vec<TeamPick>> {
    let value: Value =
        serde_json::from_str(raw).context("team_picks is not valid JSON")?;

    let entries: Vec<RawTeamPick> = match value {
        Value::String(inner) => serde_json::from_str(&inner)
            .context("team_picks string does not wrap a pick array")?,
        other => serde_json::from_value(other)
            .context("team_picks is not an array of pick entries")?,
    };

    Ok(entries.iter().map(normalize).collect())
}

fn normalize(raw: &RawTeamPick) -> TeamPick {
    let id = first_non_empty(&raw.id, &raw.team_id);
    let name = first_non_empty(&raw.name, &raw.team_name);
    let kind = first_non_empty(&raw.kind, &raw.kind_alt);

    TeamPick {
        id,
        name,
        team_type: TeamType::parse(&kind),
    }
}

fn first_non_empty(primary: &Value, fallback: &Value) -> String {
    let first = value_to_string(primary);
    if first.is_empty() {
        value_to_string(fallback)
    } else {
        first
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
