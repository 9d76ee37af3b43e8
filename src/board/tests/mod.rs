//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `codec.rs` - Cell numbering, raw board codes and the wire move format
//! - `movegen.rs` - Legal moves, forced captures and chain search
//! - `make_move.rs` - Move application, captures and promotion
//! - `perft.rs` - Leaf counts for move generation
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Alpha-beta and iterative deepening
//! - `proptest.rs` - Property-based tests

mod codec;
mod movegen;
mod search;
