//! Cell index <-> (row, col) codec.
//!
//! Only the 32 dark squares of the 8x8 grid are addressable. They are
//! numbered from the lower right corner, as seen by the own side:
//!
//! ```text
//!    31    30    29    28
//! 27    26    25    24
//!    23    22    21    20
//! 19    18    17    16
//!    15    14    13    12
//! 11    10     9     8
//!    7      6     5     4
//!  3     2     1     0
//! ```
//!
//! Rows count upward from 0, columns count leftward from 0.

/// Number of playable (dark) cells.
pub const NUM_CELLS: usize = 32;
/// Number of rows (and columns) on the board.
pub const NUM_ROWS: usize = 8;
/// Pieces each side starts with.
pub const PIECES_PER_SIDE: usize = 12;

/// Row of a cell index.
#[inline]
#[must_use]
pub const fn cell_to_row(cell: usize) -> usize {
    assert!(cell < NUM_CELLS, "cell index out of range");
    cell >> 2
}

/// Column of a cell index.
#[inline]
#[must_use]
pub const fn cell_to_col(cell: usize) -> usize {
    assert!(cell < NUM_CELLS, "cell index out of range");
    let col = (cell & 3) << 1;
    if cell & 4 == 0 {
        col + 1
    } else {
        col
    }
}

/// Cell index of a dark square.
///
/// The square must be on the board and dark; see [`is_dark`].
#[inline]
#[must_use]
pub const fn row_col_to_cell(row: usize, col: usize) -> usize {
    assert!(row < NUM_ROWS && col < NUM_ROWS, "square off the board");
    row * 4 + (col >> 1)
}

/// True if `(row, col)` lies on the board and is a playable square.
#[inline]
#[must_use]
pub const fn is_dark(row: i32, col: i32) -> bool {
    row >= 0 && row < NUM_ROWS as i32 && col >= 0 && col < NUM_ROWS as i32 && (row & 1) != (col & 1)
}
