use super::models::{TeamPick, TeamType};

/// Team identity in one of the two id spaces used by the match feeds.
///
/// Professional teams carry a stable numeric id. Amateur teams are only
/// addressable by name, matched case-insensitively against the faction
/// names on a match, so a renamed amateur team stops matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamRef {
    Pro(i64),
    Amateur(String),
}

impl TeamRef {
    /// Resolve a pick entry into a typed reference. Returns None when the
    /// id cannot identify a team in its id space: empty after trimming, or
    /// non-numeric for a professional team.
    pub fn resolve(pick: &TeamPick) -> Option<Self> {
        let id = pick.id.trim();
        if id.is_empty() {
            return None;
        }
        match pick.team_type {
            TeamType::Pro => id.parse::<i64>().ok().map(TeamRef::Pro),
            TeamType::Amateur => Some(TeamRef::Amateur(id.to_lowercase())),
        }
    }

    pub fn matches_opponent_id(&self, opponent_id: i64) -> bool {
        matches!(self, TeamRef::Pro(id) if *id == opponent_id)
    }

    pub fn matches_faction_name(&self, faction_name: &str) -> bool {
        matches!(self, TeamRef::Amateur(name) if *name == faction_name.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(id: &str, team_type: TeamType) -> TeamPick {
        TeamPick {
            id: id.to_string(),
            name: "Team".to_string(),
            team_type,
        }
    }

    #[test]
    fn test_resolve_pro_numeric_id() {
        let resolved = TeamRef::resolve(&pick("134", TeamType::Pro));
        assert_eq!(resolved, Some(TeamRef::Pro(134)));
    }

    #[test]
    fn test_resolve_pro_rejects_non_numeric_id() {
        assert_eq!(TeamRef::resolve(&pick("navi", TeamType::Pro)), None);
    }

    #[test]
    fn test_resolve_rejects_blank_id() {
        assert_eq!(TeamRef::resolve(&pick("   ", TeamType::Pro)), None);
        assert_eq!(TeamRef::resolve(&pick("", TeamType::Amateur)), None);
    }

    #[test]
    fn test_resolve_amateur_lowercases_name() {
        let resolved = TeamRef::resolve(&pick("Iron Wolves", TeamType::Amateur));
        assert_eq!(resolved, Some(TeamRef::Amateur("iron wolves".to_string())));
    }

    #[test]
    fn test_faction_matching_is_case_insensitive() {
        let team = TeamRef::Amateur("iron wolves".to_string());
        assert!(team.matches_faction_name("IRON Wolves"));
        assert!(!team.matches_faction_name("Iron Wolves 2"));
        assert!(!team.matches_opponent_id(5));
    }

    #[test]
    fn test_pro_matching_is_numeric() {
        let team = TeamRef::Pro(5);
        assert!(team.matches_opponent_id(5));
        assert!(!team.matches_opponent_id(9));
        assert!(!team.matches_faction_name("5"));
    }
}
