/// Tunable limits for the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Plies of capture-only search below the nominal horizon.
    pub quiescence_depth: u32,
    /// Upper bound on iterative deepening when no depth is configured.
    pub max_depth: u32,
    /// Nodes between checks of the deadline and stop flag.
    pub poll_interval: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            quiescence_depth: 3,
            max_depth: 64,
            poll_interval: 1024,
        }
    }
}

impl SearchParams {
    #[must_use]
    pub fn with_quiescence_depth(mut self, quiescence_depth: u32) -> Self {
        self.quiescence_depth = quiescence_depth;
        self
    }

    #[must_use]
    pub fn with_poll_interval(mut self, poll_interval: u64) -> Self {
        self.poll_interval = poll_interval.max(1);
        self
    }
}
