//! Side, piece and cell content types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw cell code: empty cell.
pub const CELL_EMPTY: u8 = 0;
/// Raw cell code bit: piece belongs to the own side.
pub const CELL_OWN: u8 = 1 << 0;
/// Raw cell code bit: piece belongs to the other side.
pub const CELL_OTHER: u8 = 1 << 1;
/// Raw cell code bit: piece is a king.
pub const CELL_KING: u8 = 1 << 2;
/// Raw cell code for light or off-board squares.
pub const CELL_INVALID: u8 = 1 << 3;

/// The two players, named from the point of view of the program.
///
/// Own pieces start on rows 0-2 and advance toward row 7; other pieces
/// start on rows 5-7 and advance toward row 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Own,
    Other,
}

impl Side {
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Own => Side::Other,
            Side::Other => Side::Own,
        }
    }

    /// Row where a man of this side is crowned.
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Side::Own => 7,
            Side::Other => 0,
        }
    }

    /// How far a man on `row` has advanced from its own back row.
    #[inline]
    #[must_use]
    pub const fn advancement(self, row: usize) -> usize {
        match self {
            Side::Own => row,
            Side::Other => 7 - row,
        }
    }

    #[inline]
    pub(crate) const fn code(self) -> u8 {
        match self {
            Side::Own => CELL_OWN,
            Side::Other => CELL_OTHER,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Own => write!(f, "own"),
            Side::Other => write!(f, "other"),
        }
    }
}

/// A piece standing on a cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub side: Side,
    pub king: bool,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn man(side: Side) -> Self {
        Piece { side, king: false }
    }

    #[inline]
    #[must_use]
    pub const fn king(side: Side) -> Self {
        Piece { side, king: true }
    }

    /// The same piece with the king flag set.
    #[inline]
    #[must_use]
    pub const fn crowned(self) -> Self {
        Piece {
            side: self.side,
            king: true,
        }
    }

    /// Raw cell code (`CELL_OWN`/`CELL_OTHER`, plus `CELL_KING`).
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        if self.king {
            self.side.code() | CELL_KING
        } else {
            self.side.code()
        }
    }

    /// Decode a raw cell code. `Ok(None)` is an empty cell.
    ///
    /// Returns `Err(code)` for codes that are not a legal cell content.
    pub fn from_code(code: u8) -> Result<Option<Piece>, u8> {
        match code {
            CELL_EMPTY => Ok(None),
            CELL_OWN => Ok(Some(Piece::man(Side::Own))),
            CELL_OTHER => Ok(Some(Piece::man(Side::Other))),
            c if c == CELL_OWN | CELL_KING => Ok(Some(Piece::king(Side::Own))),
            c if c == CELL_OTHER | CELL_KING => Ok(Some(Piece::king(Side::Other))),
            other => Err(other),
        }
    }

    /// Two-character glyph used by the text board printer.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match (self.side, self.king) {
            (Side::Own, false) => "ww",
            (Side::Own, true) => "WW",
            (Side::Other, false) => "rr",
            (Side::Other, true) => "RR",
        }
    }
}

/// Content of a `(row, col)` square as returned by `Board::at`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Empty,
    Occupied(Piece),
    /// Light square or outside the board.
    Invalid,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            _ => None,
        }
    }

    /// Raw cell code, `CELL_INVALID` for invalid squares.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => CELL_EMPTY,
            Cell::Occupied(piece) => piece.code(),
            Cell::Invalid => CELL_INVALID,
        }
    }
}

impl From<Option<Piece>> for Cell {
    fn from(piece: Option<Piece>) -> Self {
        piece.map_or(Cell::Empty, Cell::Occupied)
    }
}
