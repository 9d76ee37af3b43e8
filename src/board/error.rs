//! Error types for board construction and move decoding.

use std::fmt;

/// Error type for wire move decoding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Line contains no tokens
    Empty,
    /// A token is not an integer
    InvalidToken { token: String },
    /// Move type is below the null-move code
    UnknownType { found: i64 },
    /// Payload longer than the wire format allows
    TooLong { cells: usize },
    /// Cell index (or end-of-game code) outside `[0, 32)`
    CellOutOfRange { cell: i64 },
    /// Payload length does not match what the move type requires
    LengthMismatch { expected: usize, found: usize },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::Empty => write!(f, "Empty move line"),
            MoveParseError::InvalidToken { token } => {
                write!(f, "Invalid integer token '{token}' in move")
            }
            MoveParseError::UnknownType { found } => {
                write!(f, "Unknown move type {found}")
            }
            MoveParseError::TooLong { cells } => {
                write!(f, "Move carries {cells} cells, at most 12 allowed")
            }
            MoveParseError::CellOutOfRange { cell } => {
                write!(f, "Cell {cell} out of range (must be 0-31)")
            }
            MoveParseError::LengthMismatch { expected, found } => {
                write!(f, "Move needs {expected} values, found {found}")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for building a board from raw cell codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Wrong number of raw cells (must be 32)
    CellCount { found: usize },
    /// Code is not empty, own, other, or a king of either side
    InvalidCellCode { cell: usize, code: u8 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::CellCount { found } => {
                write!(f, "Board needs 32 cells, found {found}")
            }
            BoardError::InvalidCellCode { cell, code } => {
                write!(f, "Invalid code {code} for cell {cell}")
            }
        }
    }
}

impl std::error::Error for BoardError {}
