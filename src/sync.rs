//! Abort signal for a running search.
//!
//! The input reader of a [`ThreadedChannel`](crate::client::ThreadedChannel)
//! raises it when the game server hangs up; the alpha-beta search reads it on
//! entry to every node and unwinds the round in progress.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Once raised, a flag stays raised for the rest of the game.
///
/// Every clone observes the same flag, so a [`SearchPlayer`](crate::SearchPlayer)
/// can hand one to the transport and keep the other for its searches.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A flag that is raised from the start; searches given it only run
    /// their first depth.
    #[must_use]
    pub fn stopped() -> Self {
        StopFlag(Arc::new(AtomicBool::new(true)))
    }

    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Ask every search holding this flag to give up.
    #[inline]
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}
