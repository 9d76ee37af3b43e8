pub mod board;
pub mod client;
pub mod engine;
pub mod player;
pub mod sync;

pub use board::{Board, EndReason, Move, Piece, Side};
pub use player::{Player, RandomPlayer, SearchPlayer};
pub use sync::StopFlag;
