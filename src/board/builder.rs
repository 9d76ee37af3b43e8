//! Fluent builder for constructing checkers positions.
//!
//! Allows creating positions piece by piece rather than from raw cell codes.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, Side};
//!
//! let board = BoardBuilder::new()
//!     .man(9, Side::Own)
//!     .king(22, Side::Other)
//!     .side_to_move(Side::Own)
//!     .build();
//! assert_eq!(board.piece_count(), 2);
//! ```

use super::{Board, Piece, Side, NUM_CELLS};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    cells: [Option<Piece>; NUM_CELLS],
    side_to_move: Side,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder with the own side to move.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            cells: [None; NUM_CELLS],
            side_to_move: Side::Own,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            cells: Board::new().cells,
            side_to_move: Side::Own,
        }
    }

    /// Place a piece on a cell, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, cell: usize, piece: Piece) -> Self {
        self.cells[cell] = Some(piece);
        self
    }

    /// Place a man on a cell.
    #[must_use]
    pub fn man(self, cell: usize, side: Side) -> Self {
        self.piece(cell, Piece::man(side))
    }

    /// Place a king on a cell.
    #[must_use]
    pub fn king(self, cell: usize, side: Side) -> Self {
        self.piece(cell, Piece::king(side))
    }

    /// Empty a cell.
    #[must_use]
    pub fn clear(mut self, cell: usize) -> Self {
        self.cells[cell] = None;
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, side: Side) -> Self {
        self.side_to_move = side;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty(self.side_to_move);
        for (cell, piece) in self.cells.into_iter().enumerate() {
            board.set_piece(cell, piece);
        }
        board
    }
}
