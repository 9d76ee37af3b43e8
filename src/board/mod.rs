//! Checkers board representation and game logic.
//!
//! 32 playable cells, forced captures with maximal multi-jump chains and
//! promotion on the far row.
//!
//! # Example
//! ```
//! use checkers_engine::board::Board;
//!
//! let board = Board::new();
//! let moves = board.find_possible_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod error;
mod eval;
mod make_move;
mod movegen;
mod search;
mod state;
mod tables;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, MoveParseError};
pub use eval::EvalParams;
pub use state::{Board, BoardKey};
pub use types::{
    cell_to_col, cell_to_row, is_dark, row_col_to_cell, Cell, Chain, EndReason, Move, Piece, Side,
    CELL_EMPTY, CELL_INVALID, CELL_KING, CELL_OTHER, CELL_OWN, MAX_CHAIN_CELLS, MAX_WIRE_CELLS,
    NUM_CELLS, NUM_ROWS, PIECES_PER_SIDE,
};

// Public API - search functions and configuration
pub use search::{
    find_best_move, search, search_fixed_depth, SearchConfig, SearchResult, SearchState,
};

// Search internals for callers who need fine-grained control
pub use search::constants::{
    DEFAULT_MAX_DEPTH, DEFAULT_MEMO_CAPACITY, DEFAULT_MOVE_OVERHEAD_MS, LOSS, MAX_PLY, WIN,
};
pub use search::{Bound, Interrupted, Memo, MemoEntry, SearchParams, SearchStats};
