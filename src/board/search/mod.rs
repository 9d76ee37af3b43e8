//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening bounded by a deadline and an external stop flag
//! - Depth-1 fallback that is always completed
//! - Forced-move compression (single legal moves do not use depth)
//! - Per-round memo partitioned by piece count
//! - Previous best root move searched first
//! - History heuristic ordering of freshly generated moves

mod alphabeta;
pub mod constants;
mod history;
mod iterative;
mod memo;
mod params;

use std::time::Instant;

use crate::sync::StopFlag;

use super::eval::EvalParams;
use super::{Board, Move};
pub use alphabeta::Interrupted;
pub use history::HistoryTable;
pub use memo::{Bound, Memo, MemoEntry};
pub use params::SearchParams;

/// Outcome of a search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Value of `best_move` for the side to move, in `[0, 1]`.
    pub value: f32,
    /// Deepest fully completed round; 0 when the move was forced.
    pub depth: u32,
    pub nodes: u64,
    pub memo_hits: u64,
}

/// Statistics tracked during search
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub memo_hits: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        self.nodes = 0;
        self.memo_hits = 0;
    }
}

/// Search state persisted across searches
pub struct SearchState {
    pub memo: Memo,
    pub history: HistoryTable,
    pub stats: SearchStats,
    pub params: SearchParams,
    pub eval: EvalParams,
    /// Counter of rounds run so far; tags memo entries.
    pub(crate) round: u32,
}

impl SearchState {
    #[must_use]
    pub fn new(params: SearchParams, eval: EvalParams) -> Self {
        SearchState {
            memo: Memo::new(),
            history: HistoryTable::new(),
            stats: SearchStats::default(),
            params,
            eval,
            round: 0,
        }
    }

    pub fn params_mut(&mut self) -> &mut SearchParams {
        &mut self.params
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Forget everything learned in earlier searches.
    pub fn clear(&mut self) {
        self.memo.clear();
        self.history.clear();
        self.stats.reset();
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(SearchParams::default(), EvalParams::default())
    }
}

// ============================================================================
// UNIFIED SEARCH API
// ============================================================================

/// Configuration for a search operation.
#[derive(Clone, Debug, Default)]
pub struct SearchConfig {
    /// Maximum depth to search (None = the state's `max_depth`)
    pub max_depth: Option<u32>,
    /// Wall-clock deadline (None = unlimited); the move overhead is
    /// subtracted before searching
    pub deadline: Option<Instant>,
}

impl SearchConfig {
    /// Depth-limited search without a deadline.
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchConfig {
            max_depth: Some(max_depth),
            deadline: None,
        }
    }

    /// Search until `deadline`.
    #[must_use]
    pub fn until(deadline: Instant) -> Self {
        SearchConfig {
            max_depth: None,
            deadline: Some(deadline),
        }
    }
}

/// Search `board` for the best move of the side to move.
///
/// Returns `None` only when there is no legal move. A single legal move is
/// returned at once with depth 0. Otherwise depth 1 always completes, and
/// deeper rounds run until the position is decided, the tree is exhausted,
/// the depth cap is reached, the stop flag is raised or the deadline comes
/// close; the result of the last completed round is returned.
pub fn search(
    board: &Board,
    state: &mut SearchState,
    config: &SearchConfig,
    stop: &StopFlag,
) -> Option<SearchResult> {
    let max_depth = config.max_depth.unwrap_or(state.params.max_depth);
    let deadline = config
        .deadline
        .map(|d| iterative::effective_deadline(d, state.params.move_overhead_ms));
    state.iterative_deepening(board, max_depth, deadline, stop)
}

/// Best move before `deadline`, or `None` without legal moves.
pub fn find_best_move(
    board: &Board,
    state: &mut SearchState,
    deadline: Instant,
    stop: &StopFlag,
) -> Option<Move> {
    search(board, state, &SearchConfig::until(deadline), stop).map(|r| r.best_move)
}

/// One round at exactly `depth` (at least 1), with no deadline and no
/// single-move shortcut.
pub fn search_fixed_depth(
    board: &Board,
    state: &mut SearchState,
    depth: u32,
) -> Option<SearchResult> {
    state.fixed_depth(board, depth)
}
