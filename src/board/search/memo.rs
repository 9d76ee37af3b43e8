//! Per-round position memo.
//!
//! Entries are tagged with the iterative-deepening round that wrote them.
//! Within a round a cached value may be returned directly; across rounds only
//! the cached move list is reused. Buckets are keyed by the number of pieces
//! on the board so whole buckets can be dropped once captures make them
//! unreachable.

use std::collections::HashMap;
use std::sync::Arc;

use crate::board::state::BoardKey;
use crate::board::types::PIECES_PER_SIDE;
use crate::board::Move;

const BUCKETS: usize = 2 * PIECES_PER_SIDE + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// The value is exact.
    Exact,
    /// The value is at least this (failed high).
    Lower,
    /// The value is at most this (failed low).
    Upper,
}

impl Bound {
    /// Classify a fail-soft result against the window it was searched with.
    #[inline]
    pub(crate) fn classify(value: f32, alpha: f32, beta: f32) -> Self {
        if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Clone, Debug)]
pub struct MemoEntry {
    pub round: u32,
    /// Remaining depth the value was searched with.
    pub depth: u32,
    pub value: f32,
    pub bound: Bound,
    /// True if the subtree below was cut off by the depth bound somewhere.
    pub limited: bool,
    /// Legal moves of the position, best known move first.
    pub moves: Arc<[Move]>,
}

impl MemoEntry {
    /// The cached value, if it can stand in for a search of `depth` in the
    /// window `(alpha, beta)` during `round`.
    #[inline]
    pub(crate) fn value_for(&self, round: u32, depth: u32, alpha: f32, beta: f32) -> Option<f32> {
        if self.round != round || self.depth != depth {
            return None;
        }
        match self.bound {
            Bound::Exact => Some(self.value),
            Bound::Lower if self.value >= beta => Some(self.value),
            Bound::Upper if self.value <= alpha => Some(self.value),
            _ => None,
        }
    }
}

pub struct Memo {
    buckets: Vec<HashMap<BoardKey, MemoEntry>>,
}

impl Default for Memo {
    fn default() -> Self {
        Self::new()
    }
}

impl Memo {
    #[must_use]
    pub fn new() -> Self {
        Memo {
            buckets: (0..BUCKETS).map(|_| HashMap::new()).collect(),
        }
    }

    #[inline]
    fn bucket(&self, pieces: u8) -> &HashMap<BoardKey, MemoEntry> {
        &self.buckets[(pieces as usize).min(BUCKETS - 1)]
    }

    #[inline]
    fn bucket_mut(&mut self, pieces: u8) -> &mut HashMap<BoardKey, MemoEntry> {
        &mut self.buckets[(pieces as usize).min(BUCKETS - 1)]
    }

    #[must_use]
    pub fn lookup(&self, pieces: u8, key: BoardKey) -> Option<&MemoEntry> {
        self.bucket(pieces).get(&key)
    }

    pub fn store(&mut self, pieces: u8, key: BoardKey, entry: MemoEntry) {
        self.bucket_mut(pieces).insert(key, entry);
    }

    /// Drop every bucket for positions with more than `pieces` pieces.
    pub fn evict_above(&mut self, pieces: u8) {
        let mut dropped = 0;
        for bucket in self.buckets.iter_mut().skip(pieces as usize + 1) {
            dropped += bucket.len();
            bucket.clear();
        }
        if dropped > 0 {
            log::trace!("memo: evicted {dropped} entries above {pieces} pieces");
        }
    }

    /// Drop entries written before `round`.
    pub fn purge_before(&mut self, round: u32) {
        let before = self.len();
        for bucket in &mut self.buckets {
            bucket.retain(|_, entry| entry.round >= round);
        }
        log::trace!("memo: purged {} stale entries", before - self.len());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(HashMap::is_empty)
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
    }
}
