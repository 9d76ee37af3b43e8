//! Move types and the line-oriented wire codec.
//!
//! Wire format: whitespace-separated integers, the first being the type.
//! `0` is a normal move followed by two cells, a positive `n` is a chain of
//! `n` captures followed by `n + 1` cells, `-1` is end of game followed by a
//! reason code, `-2` is beginning of game and `-3` is the null move.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coords::NUM_CELLS;
use crate::board::error::MoveParseError;

/// Longest chain a move can hold (12 captures).
pub const MAX_CHAIN_CELLS: usize = 13;
/// Longest payload accepted on the wire.
pub const MAX_WIRE_CELLS: usize = 12;

const TYPE_NORMAL: i32 = 0;
const TYPE_END_OF_GAME: i32 = -1;
const TYPE_BEGIN_OF_GAME: i32 = -2;
const TYPE_NULL: i32 = -3;

/// Ordered cells visited by a capturing piece, origin first.
///
/// Unused slots are always zero so that derived equality is structural.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chain {
    cells: [u8; MAX_CHAIN_CELLS],
    len: u8,
}

impl Chain {
    /// A chain holding only its origin cell.
    #[inline]
    pub(crate) const fn start(cell: u8) -> Self {
        let mut cells = [0; MAX_CHAIN_CELLS];
        cells[0] = cell;
        Chain { cells, len: 1 }
    }

    #[inline]
    pub(crate) fn push(&mut self, cell: u8) {
        assert!((self.len as usize) < MAX_CHAIN_CELLS, "capture chain too long");
        self.cells[self.len as usize] = cell;
        self.len += 1;
    }

    #[inline]
    pub(crate) fn pop(&mut self) {
        if self.len > 1 {
            self.len -= 1;
            self.cells[self.len as usize] = 0;
        }
    }

    fn from_slice(cells: &[u8]) -> Self {
        assert!(
            (2..=MAX_CHAIN_CELLS).contains(&cells.len()),
            "capture chain must hold 2..=13 cells"
        );
        let mut chain = Chain::start(cells[0]);
        for &cell in &cells[1..] {
            chain.push(cell);
        }
        chain
    }

    /// Visited cells, origin first.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells[..self.len as usize]
    }

    /// Number of captures taken so far.
    #[inline]
    #[must_use]
    pub fn jumps(&self) -> usize {
        self.len as usize - 1
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cells()).finish()
    }
}

/// Payload of an end-of-game message.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EndReason {
    Win,
    Loss,
    Draw,
    /// Any code other than 1, 2 or 3.
    Invalid(u8),
}

impl EndReason {
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => EndReason::Win,
            2 => EndReason::Loss,
            3 => EndReason::Draw,
            other => EndReason::Invalid(other),
        }
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            EndReason::Win => 1,
            EndReason::Loss => 2,
            EndReason::Draw => 3,
            EndReason::Invalid(code) => code,
        }
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::Win => write!(f, "win"),
            EndReason::Loss => write!(f, "loss"),
            EndReason::Draw => write!(f, "draw"),
            EndReason::Invalid(code) => write!(f, "invalid game ({code})"),
        }
    }
}

/// A move or protocol sentinel. Immutable once built.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    /// One diagonal step.
    Normal { from: u8, to: u8 },
    /// One or more consecutive captures by the same piece.
    Jump(Chain),
    EndOfGame(EndReason),
    BeginOfGame,
    /// Invalid move; also the result of decoding a malformed line.
    Null,
}

impl Move {
    #[inline]
    #[must_use]
    pub fn normal(from: u8, to: u8) -> Self {
        debug_assert!((from as usize) < NUM_CELLS && (to as usize) < NUM_CELLS);
        Move::Normal { from, to }
    }

    /// Build a capture chain from its visited cells (2 to 13 of them).
    #[must_use]
    pub fn jump(cells: &[u8]) -> Self {
        Move::Jump(Chain::from_slice(cells))
    }

    #[inline]
    #[must_use]
    pub const fn end_of_game(reason: EndReason) -> Self {
        Move::EndOfGame(reason)
    }

    /// Build a move from its wire type and payload, validating the length.
    pub fn new(move_type: i32, data: &[u8]) -> Result<Self, MoveParseError> {
        let expected = payload_len(move_type)?;
        if data.len() != expected {
            return Err(MoveParseError::LengthMismatch {
                expected,
                found: data.len(),
            });
        }
        if let Some(&cell) = data.iter().find(|&&c| c as usize >= NUM_CELLS) {
            return Err(MoveParseError::CellOutOfRange {
                cell: i64::from(cell),
            });
        }
        Ok(match move_type {
            TYPE_NORMAL => Move::Normal {
                from: data[0],
                to: data[1],
            },
            TYPE_END_OF_GAME => Move::EndOfGame(EndReason::from_code(data[0])),
            TYPE_BEGIN_OF_GAME => Move::BeginOfGame,
            TYPE_NULL => Move::Null,
            _ => Move::Jump(Chain::from_slice(data)),
        })
    }

    /// Decode a wire line, falling back to [`Move::Null`] on any error.
    #[must_use]
    pub fn decode(line: &str) -> Self {
        line.parse().unwrap_or(Move::Null)
    }

    /// Wire type code.
    #[must_use]
    pub fn move_type(&self) -> i32 {
        match self {
            Move::Normal { .. } => TYPE_NORMAL,
            Move::Jump(chain) => chain.jumps() as i32,
            Move::EndOfGame(_) => TYPE_END_OF_GAME,
            Move::BeginOfGame => TYPE_BEGIN_OF_GAME,
            Move::Null => TYPE_NULL,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bog(&self) -> bool {
        matches!(self, Move::BeginOfGame)
    }

    #[inline]
    #[must_use]
    pub const fn is_eog(&self) -> bool {
        matches!(self, Move::EndOfGame(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_jump(&self) -> bool {
        matches!(self, Move::Jump(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_normal(&self) -> bool {
        matches!(self, Move::Normal { .. })
    }

    /// Number of captures (0 for anything but a jump).
    #[must_use]
    pub fn number_of_jumps(&self) -> usize {
        match self {
            Move::Jump(chain) => chain.jumps(),
            _ => 0,
        }
    }

    /// Payload length.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Move::Normal { .. } => 2,
            Move::Jump(chain) => chain.cells().len(),
            Move::EndOfGame(_) => 1,
            Move::BeginOfGame | Move::Null => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Payload value at `index`: a visited cell, or the end-of-game code.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        match (self, index) {
            (Move::Normal { from, .. }, 0) => Some(*from),
            (Move::Normal { to, .. }, 1) => Some(*to),
            (Move::Jump(chain), i) => chain.cells().get(i).copied(),
            (Move::EndOfGame(reason), 0) => Some(reason.code()),
            _ => None,
        }
    }

    /// Iterate over the payload values in wire order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Cell the moving piece starts on.
    #[must_use]
    pub fn from(&self) -> Option<u8> {
        match self {
            Move::Normal { from, .. } => Some(*from),
            Move::Jump(chain) => chain.cells().first().copied(),
            _ => None,
        }
    }

    /// Cell the moving piece ends on.
    #[must_use]
    pub fn to(&self) -> Option<u8> {
        match self {
            Move::Normal { to, .. } => Some(*to),
            Move::Jump(chain) => chain.cells().last().copied(),
            _ => None,
        }
    }

    /// The same move seen by the opposite player (cell `i` becomes `31 - i`).
    #[must_use]
    pub fn mirror(&self) -> Self {
        let flip = |cell: u8| (NUM_CELLS as u8 - 1) - cell;
        match self {
            Move::Normal { from, to } => Move::Normal {
                from: flip(*from),
                to: flip(*to),
            },
            Move::Jump(chain) => {
                let mut mirrored = Chain::start(flip(chain.cells()[0]));
                for &cell in &chain.cells()[1..] {
                    mirrored.push(flip(cell));
                }
                Move::Jump(mirrored)
            }
            other => *other,
        }
    }
}

/// Payload length required by a move type.
fn payload_len(move_type: i32) -> Result<usize, MoveParseError> {
    match move_type {
        TYPE_NORMAL => Ok(2),
        n if n > 0 => {
            let cells = n as usize + 1;
            if cells > MAX_CHAIN_CELLS {
                Err(MoveParseError::TooLong { cells })
            } else {
                Ok(cells)
            }
        }
        TYPE_END_OF_GAME => Ok(1),
        TYPE_BEGIN_OF_GAME | TYPE_NULL => Ok(0),
        other => Err(MoveParseError::UnknownType {
            found: i64::from(other),
        }),
    }
}

fn parse_token(token: &str) -> Result<i64, MoveParseError> {
    token
        .parse::<i64>()
        .map_err(|_| MoveParseError::InvalidToken {
            token: token.to_string(),
        })
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Strict wire decoding. A trailing carriage return is ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\n', '\r']);
        let mut tokens = line.split_whitespace();

        let first = parse_token(tokens.next().ok_or(MoveParseError::Empty)?)?;
        let move_type = i32::try_from(first).map_err(|_| {
            if first < 0 {
                MoveParseError::UnknownType { found: first }
            } else {
                MoveParseError::TooLong { cells: usize::MAX }
            }
        })?;
        let expected = payload_len(move_type)?;
        if expected > MAX_WIRE_CELLS {
            return Err(MoveParseError::TooLong { cells: expected });
        }

        let mut data = Vec::with_capacity(expected);
        for token in tokens {
            let value = parse_token(token)?;
            if !(0..NUM_CELLS as i64).contains(&value) {
                return Err(MoveParseError::CellOutOfRange { cell: value });
            }
            data.push(value as u8);
        }

        Move::new(move_type, &data)
    }
}

impl fmt::Display for Move {
    /// Wire encoding: type first, then the payload, space separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.move_type())?;
        for value in self.iter() {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}
