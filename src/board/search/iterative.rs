use std::time::{Duration, Instant};

use super::alphabeta::{Interrupted, SearchContext};
use super::constants::{INFINITY, LOSS, NEG_INFINITY, WIN};
use super::{SearchResult, SearchState};
use crate::board::{Board, Move};
use crate::sync::StopFlag;

/// Outcome of one completed root round.
struct Round {
    best: usize,
    value: f32,
    /// False if the whole tree was explored without hitting the depth bound.
    limited: bool,
}

impl SearchState {
    fn context<'a>(
        &'a mut self,
        board: &Board,
        deadline: Option<Instant>,
        stop: Option<&'a StopFlag>,
    ) -> SearchContext<'a> {
        self.round = self.round.wrapping_add(1);
        SearchContext {
            memo: &mut self.memo,
            memo_capacity: self.params.memo_capacity,
            history: &mut self.history,
            eval: &self.eval,
            root_side: board.side_to_move(),
            round: self.round,
            deadline,
            stop,
            nodes: 0,
            memo_hits: 0,
            depth_limited: false,
        }
    }

    /// Search every root move to `depth`, in the given order.
    fn search_root(
        &mut self,
        board: &Board,
        moves: &[Move],
        depth: u32,
        deadline: Option<Instant>,
        stop: Option<&StopFlag>,
    ) -> Result<Round, Interrupted> {
        let mut ctx = self.context(board, deadline, stop);
        let mut alpha = NEG_INFINITY;
        let mut best = 0;

        let mut outcome = Ok(());
        for (i, mv) in moves.iter().enumerate() {
            let child = board.copy_and_move(mv);
            match ctx.alphabeta(&child, alpha, INFINITY, depth.saturating_sub(1), 1) {
                Ok(value) if value > alpha => {
                    alpha = value;
                    best = i;
                }
                Ok(_) => {}
                Err(interrupted) => {
                    outcome = Err(interrupted);
                    break;
                }
            }
        }

        let (nodes, hits, limited) = (ctx.nodes, ctx.memo_hits, ctx.depth_limited);
        self.stats.nodes += nodes;
        self.stats.memo_hits += hits;
        outcome.map(|()| Round {
            best,
            value: alpha,
            limited,
        })
    }

    /// Iterative deepening from depth 1 up to `max_depth`.
    ///
    /// Depth 1 always completes and is the fallback; later rounds that are
    /// interrupted are discarded.
    pub(crate) fn iterative_deepening(
        &mut self,
        board: &Board,
        max_depth: u32,
        deadline: Option<Instant>,
        stop: &StopFlag,
    ) -> Option<SearchResult> {
        let mut moves = board.find_possible_moves();
        if moves.is_empty() {
            return None;
        }
        self.stats.reset();
        self.history.age();

        self.memo.evict_above(board.piece_count());
        self.trim_memo();

        if moves.len() == 1 {
            return Some(SearchResult {
                best_move: moves[0],
                value: board.evaluate_with(&moves, &self.eval),
                depth: 0,
                nodes: 0,
                memo_hits: 0,
            });
        }

        let started = Instant::now();
        // Depth 1 runs without deadline or stop flag and cannot be interrupted.
        let round = self.search_root(board, &moves, 1, None, None).ok()?;
        let mut completed = 1;
        let mut best = round.best;
        let mut value = round.value;
        let mut limited = round.limited;
        let mut last_round = started.elapsed();
        self.log_round(completed, value, &moves[best]);

        for depth in 2..=max_depth {
            if value == WIN || value == LOSS || !limited || stop.is_stopped() {
                break;
            }
            if let Some(deadline) = deadline {
                let now = Instant::now();
                if now >= deadline || last_round * 2 > deadline - now {
                    break;
                }
            }

            self.trim_memo();
            moves[..=best].rotate_right(1);
            best = 0;
            let round_start = Instant::now();
            match self.search_root(board, &moves, depth, deadline, Some(stop)) {
                Ok(round) => {
                    completed = depth;
                    best = round.best;
                    value = round.value;
                    limited = round.limited;
                    last_round = round_start.elapsed();
                    self.log_round(completed, value, &moves[best]);
                }
                Err(Interrupted) => {
                    log::debug!("depth {depth} interrupted, keeping depth {completed}");
                    break;
                }
            }
        }

        Some(SearchResult {
            best_move: moves[best],
            value,
            depth: completed,
            nodes: self.stats.nodes,
            memo_hits: self.stats.memo_hits,
        })
    }

    /// A single uninterruptible round at exactly `depth`, forced moves
    /// included.
    pub(crate) fn fixed_depth(&mut self, board: &Board, depth: u32) -> Option<SearchResult> {
        let moves = board.find_possible_moves();
        if moves.is_empty() {
            return None;
        }
        self.stats.reset();
        let depth = depth.max(1);
        let round = self.search_root(board, &moves, depth, None, None).ok()?;
        self.log_round(depth, round.value, &moves[round.best]);
        Some(SearchResult {
            best_move: moves[round.best],
            value: round.value,
            depth,
            nodes: self.stats.nodes,
            memo_hits: self.stats.memo_hits,
        })
    }

    /// Drop every entry written before the next round once the memo is full.
    fn trim_memo(&mut self) {
        if self.memo.len() >= self.params.memo_capacity {
            self.memo.purge_before(self.round.wrapping_add(1));
        }
    }

    fn log_round(&self, depth: u32, value: f32, best: &Move) {
        log::debug!(
            "depth {depth} value {value:.4} best {best} nodes {} memo hits {} memo size {}",
            self.stats.nodes,
            self.stats.memo_hits,
            self.memo.len()
        );
    }
}

/// Deadline shortened by the move overhead, never earlier than `now`.
pub(crate) fn effective_deadline(deadline: Instant, overhead_ms: u64) -> Instant {
    let now = Instant::now();
    deadline
        .checked_sub(Duration::from_millis(overhead_ms))
        .map_or(now, |d| d.max(now))
}
