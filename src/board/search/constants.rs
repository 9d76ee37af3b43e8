//! Search constants.

// ============================================================================
// SCORES
// ============================================================================

/// Value of a position the root side has won.
pub const WIN: f32 = 1.0;

/// Value of a position the root side has lost.
pub const LOSS: f32 = 0.0;

/// Above any reachable value; the initial beta bound.
pub const INFINITY: f32 = 2.0;

/// Below any reachable value; the initial alpha bound.
pub const NEG_INFINITY: f32 = -1.0;

// ============================================================================
// LIMITS
// ============================================================================

/// Hard cap on the distance from the root, counting compressed forced moves.
pub const MAX_PLY: usize = 128;

/// Iterative deepening stops here when no smaller cap is configured.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// Memo size at which new entries stop being stored.
pub const DEFAULT_MEMO_CAPACITY: usize = 1_000_000;

/// Default safety margin subtracted from every deadline.
pub const DEFAULT_MOVE_OVERHEAD_MS: u64 = 50;

/// The deadline is polled once every this many nodes.
pub(crate) const CLOCK_CHECK_INTERVAL: u64 = 256;
