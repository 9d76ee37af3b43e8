//! Static evaluation.
//!
//! Scores are a share of material in `[0.0, 1.0]` from the point of view of
//! the side to move: 0.0 is a lost position, 0.5 an even one.

use super::tables::STEPS;
use super::types::{cell_to_col, cell_to_row, NUM_ROWS};
use super::{Board, Move, Piece};

/// Evaluator weights.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalParams {
    pub man_weight: i32,
    /// Multiplied by the square of a man's distance from its back row.
    pub man_advance: i32,
    pub king_weight: i32,
    /// Added once per board edge (row 0/7, column 0/7) a king stands on.
    pub king_edge: i32,
    /// Endgame bonus for a king diagonally adjacent to an enemy piece.
    pub king_aggression: i32,
    /// Total piece count at or below which the aggression bonus applies.
    pub endgame_pieces: u8,
}

impl Default for EvalParams {
    fn default() -> Self {
        EvalParams {
            man_weight: 1000,
            man_advance: 5,
            king_weight: 2000,
            king_edge: -100,
            king_aggression: 150,
            endgame_pieces: 6,
        }
    }
}

const LAST: usize = NUM_ROWS - 1;

impl Board {
    /// Evaluate with default weights.
    #[must_use]
    pub fn evaluate(&self) -> f32 {
        self.evaluate_with(&self.find_possible_moves(), &EvalParams::default())
    }

    /// Evaluate given the legal moves of the side to move.
    ///
    /// Returns exactly 0.0 when `moves` is empty.
    #[must_use]
    pub fn evaluate_with(&self, moves: &[Move], params: &EvalParams) -> f32 {
        if self.game_over_with(moves) {
            return 0.0;
        }

        let endgame = self.pieces <= params.endgame_pieces;
        let mut own = 0i64;
        let mut other = 0i64;
        for (cell, piece) in self.pieces() {
            let score = i64::from(self.piece_score(cell, piece, endgame, params).max(1));
            if piece.side == self.side_to_move {
                own += score;
            } else {
                other += score;
            }
        }

        let total = own + other;
        if total == 0 {
            return 0.0;
        }
        (own as f32 / total as f32).clamp(0.0, 1.0)
    }

    fn piece_score(&self, cell: usize, piece: Piece, endgame: bool, params: &EvalParams) -> i32 {
        let row = cell_to_row(cell);
        if !piece.king {
            let advance = piece.side.advancement(row) as i32;
            return params.man_weight + params.man_advance * advance * advance;
        }

        let col = cell_to_col(cell);
        let mut score = params.king_weight;
        if row == 0 || row == LAST {
            score += params.king_edge;
        }
        if col == 0 || col == LAST {
            score += params.king_edge;
        }
        if endgame && self.next_to_enemy(cell, piece) {
            score += params.king_aggression;
        }
        score
    }

    fn next_to_enemy(&self, cell: usize, piece: Piece) -> bool {
        STEPS[cell]
            .iter()
            .flatten()
            .any(|&n| self.cells[n as usize].is_some_and(|p| p.side != piece.side))
    }
}
