use log::info;

/// Running counters for one scoring invocation, logged at the end so
/// operators can spot silently skipped work.
#[derive(Debug, Default)]
pub struct RunSummary {
    rounds_processed: usize,
    rounds_skipped: usize,
    picks_processed: usize,
    picks_skipped: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn round_processed(&mut self) {
        self.rounds_processed += 1;
    }

    pub fn round_skipped(&mut self) {
        self.rounds_skipped += 1;
    }

    pub fn pick_processed(&mut self) {
        self.picks_processed += 1;
    }

    pub fn pick_skipped(&mut self) {
        self.picks_skipped += 1;
    }

    pub fn picks_processed(&self) -> usize {
        self.picks_processed
    }

    pub fn log(&self) {
        info!(
            "Processed {} rounds ({} skipped), {} picks ({} skipped)",
            self.rounds_processed, self.rounds_skipped, self.picks_processed, self.picks_skipped
        );
    }
}
