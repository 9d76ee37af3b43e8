//! Core checkers types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Side`, `Piece` and `Cell` - players and cell contents
//! - cell index <-> (row, col) codec
//! - `Move`, `Chain` and `EndReason` - move representation and wire codec

mod cell;
mod coords;
mod moves;

pub use cell::{Cell, Piece, Side, CELL_EMPTY, CELL_INVALID, CELL_KING, CELL_OTHER, CELL_OWN};
pub use coords::{
    cell_to_col, cell_to_row, is_dark, row_col_to_cell, NUM_CELLS, NUM_ROWS, PIECES_PER_SIDE,
};
pub use moves::{Chain, EndReason, Move, MAX_CHAIN_CELLS, MAX_WIRE_CELLS};
