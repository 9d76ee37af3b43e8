//! Precomputed diagonal neighbour tables.

use once_cell::sync::Lazy;

use super::types::{cell_to_col, cell_to_row, is_dark, row_col_to_cell, Piece, Side, NUM_CELLS};

/// Diagonal directions as (row, col) deltas, in generation order:
/// forward-right, forward-left, backward-right, backward-left.
/// "Forward" is toward row 7.
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

const OWN_MAN_DIRS: [usize; 2] = [0, 1];
const OTHER_MAN_DIRS: [usize; 2] = [2, 3];
const KING_DIRS: [usize; 4] = [0, 1, 2, 3];

/// Direction indices a piece may move and capture along.
#[inline]
pub(crate) fn directions(piece: Piece) -> &'static [usize] {
    match (piece.king, piece.side) {
        (true, _) => &KING_DIRS,
        (false, Side::Own) => &OWN_MAN_DIRS,
        (false, Side::Other) => &OTHER_MAN_DIRS,
    }
}

fn offset(cell: usize, steps: i32, dir: usize) -> Option<u8> {
    let (dr, dc) = DIRECTIONS[dir];
    let row = cell_to_row(cell) as i32 + dr * steps;
    let col = cell_to_col(cell) as i32 + dc * steps;
    is_dark(row, col).then(|| row_col_to_cell(row as usize, col as usize) as u8)
}

/// `STEPS[cell][dir]`: the adjacent cell in direction `dir`.
pub(crate) static STEPS: Lazy<[[Option<u8>; 4]; NUM_CELLS]> = Lazy::new(|| {
    let mut steps = [[None; 4]; NUM_CELLS];
    for (cell, row) in steps.iter_mut().enumerate() {
        for (dir, slot) in row.iter_mut().enumerate() {
            *slot = offset(cell, 1, dir);
        }
    }
    steps
});

/// `JUMPS[cell][dir]`: (jumped-over cell, landing cell) in direction `dir`.
pub(crate) static JUMPS: Lazy<[[Option<(u8, u8)>; 4]; NUM_CELLS]> = Lazy::new(|| {
    let mut jumps = [[None; 4]; NUM_CELLS];
    for (cell, row) in jumps.iter_mut().enumerate() {
        for (dir, slot) in row.iter_mut().enumerate() {
            *slot = offset(cell, 1, dir).zip(offset(cell, 2, dir));
        }
    }
    jumps
});
