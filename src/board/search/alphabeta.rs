//! Depth-bounded alpha-beta over `[0, 1]` values from the root side's view.

use std::sync::Arc;
use std::time::Instant;

use super::constants::{CLOCK_CHECK_INTERVAL, INFINITY, MAX_PLY, NEG_INFINITY};
use super::history::HistoryTable;
use super::memo::{Bound, Memo, MemoEntry};
use crate::board::eval::EvalParams;
use crate::board::types::Side;
use crate::board::{Board, Move};
use crate::sync::StopFlag;

/// The deadline passed or the stop flag was raised mid-round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interrupted;

pub(crate) struct SearchContext<'a> {
    pub memo: &'a mut Memo,
    /// New entries are not stored once the memo holds this many.
    pub memo_capacity: usize,
    pub history: &'a mut HistoryTable,
    pub eval: &'a EvalParams,
    pub root_side: Side,
    pub round: u32,
    pub deadline: Option<Instant>,
    pub stop: Option<&'a StopFlag>,
    pub nodes: u64,
    pub memo_hits: u64,
    /// Set when any node of the round stopped at the depth bound.
    pub depth_limited: bool,
}

impl SearchContext<'_> {
    fn should_stop(&self) -> bool {
        if self.stop.is_some_and(StopFlag::is_stopped) {
            return true;
        }
        match self.deadline {
            Some(deadline) if self.nodes % CLOCK_CHECK_INTERVAL == 0 => Instant::now() >= deadline,
            _ => false,
        }
    }

    /// Static value of `board` from the root side's point of view.
    #[inline]
    fn leaf_value(&self, board: &Board, moves: &[Move]) -> f32 {
        let value = board.evaluate_with(moves, self.eval);
        if board.side_to_move() == self.root_side {
            value
        } else {
            1.0 - value
        }
    }

    pub fn alphabeta(
        &mut self,
        board: &Board,
        alpha: f32,
        beta: f32,
        depth: u32,
        ply: usize,
    ) -> Result<f32, Interrupted> {
        self.nodes += 1;
        if self.should_stop() {
            return Err(Interrupted);
        }

        let key = board.key();
        let pieces = board.piece_count();
        let moves = match self.memo.lookup(pieces, key) {
            Some(entry) => {
                if let Some(value) = entry.value_for(self.round, depth, alpha, beta) {
                    self.memo_hits += 1;
                    self.depth_limited |= entry.limited;
                    return Ok(value);
                }
                Arc::clone(&entry.moves)
            }
            None => {
                let mut fresh = board.find_possible_moves();
                self.history.order(&mut fresh);
                Arc::from(fresh)
            }
        };

        // Leaves and forced moves never touch the depth budget.
        let limited_before = self.depth_limited;
        self.depth_limited = false;
        let result = self.expand(board, &moves, alpha, beta, depth, ply);
        let limited = self.depth_limited;
        self.depth_limited |= limited_before;
        let (value, best) = result?;

        let ordered = match best {
            Some(i) if i > 0 => {
                let mut reordered = moves.to_vec();
                reordered[..=i].rotate_right(1);
                Arc::from(reordered)
            }
            _ => moves,
        };
        if self.memo.len() < self.memo_capacity || self.memo.lookup(pieces, key).is_some() {
            self.memo.store(
                pieces,
                key,
                MemoEntry {
                    round: self.round,
                    depth,
                    value,
                    bound: if best.is_some() {
                        Bound::classify(value, alpha, beta)
                    } else {
                        Bound::Exact
                    },
                    limited,
                    moves: ordered,
                },
            );
        }
        Ok(value)
    }

    /// Value of `board` and the index of the best move, `None` for leaves.
    fn expand(
        &mut self,
        board: &Board,
        moves: &[Move],
        mut alpha: f32,
        mut beta: f32,
        depth: u32,
        ply: usize,
    ) -> Result<(f32, Option<usize>), Interrupted> {
        if moves.is_empty() {
            return Ok((self.leaf_value(board, moves), None));
        }
        if moves.len() == 1 && ply < MAX_PLY {
            let child = board.copy_and_move(&moves[0]);
            let value = self.alphabeta(&child, alpha, beta, depth, ply + 1)?;
            return Ok((value, Some(0)));
        }
        if depth == 0 || ply >= MAX_PLY {
            self.depth_limited = true;
            return Ok((self.leaf_value(board, moves), None));
        }

        let maximizing = board.side_to_move() == self.root_side;
        let mut best = if maximizing { NEG_INFINITY } else { INFINITY };
        let mut best_index = 0;

        for (i, mv) in moves.iter().enumerate() {
            let child = board.copy_and_move(mv);
            let value = self.alphabeta(&child, alpha, beta, depth - 1, ply + 1)?;
            if maximizing {
                if value > best {
                    best = value;
                    best_index = i;
                }
                if best >= beta {
                    self.history.credit(mv, depth);
                    break;
                }
                alpha = alpha.max(best);
            } else {
                if value < best {
                    best = value;
                    best_index = i;
                }
                if best <= alpha {
                    self.history.credit(mv, depth);
                    break;
                }
                beta = beta.min(best);
            }
        }

        Ok((best, Some(best_index)))
    }
}
