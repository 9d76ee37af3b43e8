use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::types::{
    cell_to_row, is_dark, row_col_to_cell, Cell, Piece, Side, NUM_CELLS, NUM_ROWS,
    PIECES_PER_SIDE,
};

/// Compact, hashable snapshot of the cells and the side to move.
///
/// Three bits per cell (the raw cell code without the invalid bit) plus one
/// bit for the side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BoardKey(u128);

/// A checkers position: 32 dark cells, the side to move and a piece count.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) cells: [Option<Piece>; NUM_CELLS],
    pub(crate) side_to_move: Side,
    pub(crate) pieces: u8,
}

impl Board {
    /// Standard layout with the own side to move.
    #[must_use]
    pub fn new() -> Self {
        Board::starting(Side::Own)
    }

    /// Standard layout: own men on cells 0-11, other men on cells 20-31.
    #[must_use]
    pub fn starting(side_to_move: Side) -> Self {
        let mut board = Board::empty(side_to_move);
        for i in 0..PIECES_PER_SIDE {
            board.set_piece(i, Some(Piece::man(Side::Own)));
            board.set_piece(NUM_CELLS - 1 - i, Some(Piece::man(Side::Other)));
        }
        board
    }

    pub(crate) fn empty(side_to_move: Side) -> Self {
        Board {
            cells: [None; NUM_CELLS],
            side_to_move,
            pieces: 0,
        }
    }

    /// Build a board from 32 raw cell codes (`CELL_OWN`, `CELL_OTHER`,
    /// optionally or-ed with `CELL_KING`, or `CELL_EMPTY`).
    pub fn from_cells(codes: &[u8], side_to_move: Side) -> Result<Self, BoardError> {
        if codes.len() != NUM_CELLS {
            return Err(BoardError::CellCount { found: codes.len() });
        }
        let mut board = Board::empty(side_to_move);
        for (cell, &code) in codes.iter().enumerate() {
            let piece =
                Piece::from_code(code).map_err(|code| BoardError::InvalidCellCode { cell, code })?;
            board.set_piece(cell, piece);
        }
        Ok(board)
    }

    /// Place or remove a piece, keeping the piece count in sync.
    pub(crate) fn set_piece(&mut self, cell: usize, piece: Option<Piece>) {
        let slot = &mut self.cells[cell];
        match (slot.is_some(), piece.is_some()) {
            (false, true) => self.pieces += 1,
            (true, false) => self.pieces -= 1,
            _ => {}
        }
        *slot = piece;
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Total number of pieces on the board.
    #[inline]
    #[must_use]
    pub fn piece_count(&self) -> u8 {
        self.pieces
    }

    /// Number of pieces belonging to `side`.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().flatten().filter(|p| p.side == side).count()
    }

    /// Content of a cell index. Panics if `cell` is not in `[0, 32)`.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, cell: usize) -> Option<Piece> {
        self.cells[cell]
    }

    /// Content of the square at `(row, col)`; [`Cell::Invalid`] for light
    /// squares and squares off the board.
    #[must_use]
    pub fn at(&self, row: i32, col: i32) -> Cell {
        if !is_dark(row, col) {
            return Cell::Invalid;
        }
        Cell::from(self.cells[row_col_to_cell(row as usize, col as usize)])
    }

    /// Occupied cells in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(cell, piece)| piece.map(|p| (cell, p)))
    }

    /// Raw cell codes, the inverse of [`Board::from_cells`].
    #[must_use]
    pub fn to_cells(&self) -> [u8; NUM_CELLS] {
        let mut codes = [0; NUM_CELLS];
        for (code, piece) in codes.iter_mut().zip(self.cells.iter()) {
            *code = Cell::from(*piece).code();
        }
        codes
    }

    /// Memo key covering the cells and the side to move.
    #[must_use]
    pub fn key(&self) -> BoardKey {
        let mut key = 0u128;
        for (cell, piece) in self.pieces() {
            key |= u128::from(piece.code()) << (3 * cell);
        }
        if self.side_to_move == Side::Other {
            key |= 1u128 << (3 * NUM_CELLS);
        }
        BoardKey(key)
    }

    /// The same position seen by the opposite player: rotated 180 degrees
    /// with the sides swapped.
    #[must_use]
    pub fn flipped(&self) -> Board {
        let mut board = Board::empty(self.side_to_move.opponent());
        for (cell, piece) in self.pieces() {
            let swapped = Piece {
                side: piece.side.opponent(),
                king: piece.king,
            };
            board.set_piece(NUM_CELLS - 1 - cell, Some(swapped));
        }
        board
    }

    /// True if the man on `cell` would be crowned there.
    #[inline]
    pub(crate) fn is_promotion_cell(piece: Piece, cell: usize) -> bool {
        !piece.king && cell_to_row(cell) == piece.side.promotion_row()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Row 7 on top, column 7 on the left, as in the cell numbering diagram.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------------")?;
        for row in (0..NUM_ROWS as i32).rev() {
            for col in (0..NUM_ROWS as i32).rev() {
                let glyph = match self.at(row, col) {
                    Cell::Invalid => "  ",
                    Cell::Empty => "..",
                    Cell::Occupied(piece) => piece.glyph(),
                };
                f.write_str(glyph)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "----------------")?;
        write!(f, "{} to move", self.side_to_move)
    }
}
