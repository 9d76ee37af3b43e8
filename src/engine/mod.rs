//! Engine configuration.
//!
//! Options are set by name, either from `--set name=value` on the command
//! line or programmatically, and carried into the search and the evaluator.

mod options;

pub use options::{parse_assignment, EngineOptions};
