//! Players: the contract the game session drives, a searching player and a
//! random one.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{search, Board, Move, SearchConfig, SearchState};
use crate::engine::EngineOptions;
use crate::sync::StopFlag;

/// Something that picks moves for the own side.
pub trait Player {
    /// Called once before the game starts. `moving_first` is true if this
    /// player makes the first move; must return before `deadline`.
    fn initialize(&mut self, moving_first: bool, deadline: Instant);

    /// Choose a move for the side to move on `board` before `deadline`.
    ///
    /// Returns [`Move::Null`] if there is no legal move to play.
    fn play(&mut self, board: &Board, deadline: Instant) -> Move;

    /// Called while waiting for the opponent. Return false to be called
    /// again on the next tick, true to block until the opponent's move.
    fn idle(&mut self, _board: &Board) -> bool {
        true
    }
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn initialize(&mut self, moving_first: bool, deadline: Instant) {
        (**self).initialize(moving_first, deadline);
    }

    fn play(&mut self, board: &Board, deadline: Instant) -> Move {
        (**self).play(board, deadline)
    }

    fn idle(&mut self, board: &Board) -> bool {
        (**self).idle(board)
    }
}

/// Plays the best move found by the iterative-deepening search.
pub struct SearchPlayer {
    state: SearchState,
    stop: StopFlag,
}

impl SearchPlayer {
    #[must_use]
    pub fn new(options: &EngineOptions) -> Self {
        SearchPlayer {
            state: SearchState::new(options.search.clone(), options.eval.clone()),
            stop: StopFlag::new(),
        }
    }

    /// Share a stop flag with the transport so a hang-up aborts the search.
    #[must_use]
    pub fn with_stop_flag(mut self, stop: StopFlag) -> Self {
        self.stop = stop;
        self
    }

    #[must_use]
    pub fn stop_flag(&self) -> StopFlag {
        self.stop.clone()
    }

    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }
}

impl Player for SearchPlayer {
    fn initialize(&mut self, moving_first: bool, _deadline: Instant) {
        self.state.clear();
        log::debug!("search player ready, moving first: {moving_first}");
    }

    fn play(&mut self, board: &Board, deadline: Instant) -> Move {
        let config = SearchConfig::until(deadline);
        match search(board, &mut self.state, &config, &self.stop) {
            Some(result) => {
                log::info!(
                    "playing {} (value {:.3}, depth {}, {} nodes, {} memo hits)",
                    result.best_move,
                    result.value,
                    result.depth,
                    result.nodes,
                    result.memo_hits
                );
                result.best_move
            }
            None => {
                log::warn!("asked to play without a legal move");
                Move::Null
            }
        }
    }
}

/// Plays a uniformly random legal move.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new() -> Self {
        RandomPlayer {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible move choices.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        RandomPlayer {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn initialize(&mut self, _moving_first: bool, _deadline: Instant) {}

    fn play(&mut self, board: &Board, _deadline: Instant) -> Move {
        board
            .find_possible_moves()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Move::Null)
    }
}
