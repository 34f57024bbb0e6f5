/// Scoring constants, shared with every other scoring implementation on
/// the platform. Changing a value here changes every recomputed score on
/// the next run, so treat these as part of the product contract.
pub struct ScoringSettings {
    pub match_win_points: i64,
    pub map_win_points: i64,
    pub clean_sweep_points: i64,
    pub tournament_win_points: i64,
    pub amateur_multiplier: f64,
    pub star_multiplier: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            match_win_points: 10,
            map_win_points: 3,
            clean_sweep_points: 5,
            tournament_win_points: 20,
            amateur_multiplier: 1.25,
            star_multiplier: 2.0,
        }
    }
}

pub struct AppConfig {
    pub scoring: ScoringSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scoring: ScoringSettings::default(),
        }
    }
}

// Prefer passing the config explicitly (Dependency Injection) rather than
// module-level globals, so alternate scoring configs stay testable.
