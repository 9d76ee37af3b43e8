use super::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MEMO_CAPACITY, DEFAULT_MOVE_OVERHEAD_MS};

/// Tunable search knobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Deepest iterative-deepening round that will be started.
    pub max_depth: u32,
    /// Milliseconds subtracted from every deadline before searching.
    pub move_overhead_ms: u64,
    /// Most memo entries kept; a full memo stores nothing new and is purged
    /// of earlier rounds before the next one.
    pub memo_capacity: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            max_depth: DEFAULT_MAX_DEPTH,
            move_overhead_ms: DEFAULT_MOVE_OVERHEAD_MS,
            memo_capacity: DEFAULT_MEMO_CAPACITY,
        }
    }
}
