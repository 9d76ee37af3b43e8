//! History heuristic: moves that caused cutoffs before are tried earlier.

use crate::board::types::NUM_CELLS;
use crate::board::Move;

/// Cutoff scores indexed by (origin, destination) cell.
#[derive(Clone)]
pub struct HistoryTable {
    entries: [[u32; NUM_CELLS]; NUM_CELLS],
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTable {
    #[must_use]
    pub fn new() -> Self {
        HistoryTable {
            entries: [[0; NUM_CELLS]; NUM_CELLS],
        }
    }

    #[must_use]
    pub fn score(&self, mv: &Move) -> u32 {
        match (mv.from(), mv.to()) {
            (Some(from), Some(to)) => self.entries[from as usize][to as usize],
            _ => 0,
        }
    }

    /// Reward a move that cut off a node searched with `depth` plies left.
    pub fn credit(&mut self, mv: &Move, depth: u32) {
        if let (Some(from), Some(to)) = (mv.from(), mv.to()) {
            let entry = &mut self.entries[from as usize][to as usize];
            *entry = entry.saturating_add(depth.saturating_mul(depth));
        }
    }

    /// Sort freshly generated moves by descending score.
    ///
    /// The sort is stable and keyed on chain length first, so captures stay
    /// ordered by the number of pieces they take.
    pub fn order(&self, moves: &mut [Move]) {
        moves.sort_by_key(|mv| (mv.number_of_jumps(), std::cmp::Reverse(self.score(mv))));
    }

    /// Halve every score so that old cutoffs fade between searches.
    pub fn age(&mut self) {
        for row in &mut self.entries {
            for entry in row.iter_mut() {
                *entry /= 2;
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries = [[0; NUM_CELLS]; NUM_CELLS];
    }
}
