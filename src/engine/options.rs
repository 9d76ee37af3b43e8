use std::fmt::Display;
use std::str::FromStr;

use crate::board::{EvalParams, SearchParams};

/// Runtime-tunable engine options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub search: SearchParams,
    pub eval: EvalParams,
}

fn parse_into<T>(slot: &mut T, name: &str, value: &str)
where
    T: FromStr,
{
    match value.trim().parse::<T>() {
        Ok(v) => *slot = v,
        Err(_) => log::warn!("ignoring option {name:?}: bad value {value:?}"),
    }
}

impl EngineOptions {
    /// Set an option by its (case-insensitive) name.
    ///
    /// Returns false, after logging a warning, for unknown names.
    /// Unparsable values are logged and leave the option unchanged.
    pub fn apply_option(&mut self, name: &str, value: &str) -> bool {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "max depth" => {
                parse_into(&mut self.search.max_depth, name, value);
                self.search.max_depth = self.search.max_depth.max(1);
            }
            "move overhead" => parse_into(&mut self.search.move_overhead_ms, name, value),
            "memo capacity" => parse_into(&mut self.search.memo_capacity, name, value),
            "man weight" => parse_into(&mut self.eval.man_weight, name, value),
            "man advance" => parse_into(&mut self.eval.man_advance, name, value),
            "king weight" => parse_into(&mut self.eval.king_weight, name, value),
            "king edge" => parse_into(&mut self.eval.king_edge, name, value),
            "king aggression" => parse_into(&mut self.eval.king_aggression, name, value),
            "endgame pieces" => parse_into(&mut self.eval.endgame_pieces, name, value),
            _ => {
                log::warn!("ignoring unknown option {name:?}");
                return false;
            }
        }
        true
    }

    /// Apply a `name=value` assignment as given on the command line.
    pub fn apply_assignment(&mut self, assignment: &str) -> bool {
        match parse_assignment(assignment) {
            Some((name, value)) => self.apply_option(name, value),
            None => {
                log::warn!("ignoring malformed option {assignment:?}, expected name=value");
                false
            }
        }
    }

    /// One `name = value` line per option, in table order.
    #[must_use]
    pub fn option_lines(&self) -> Vec<String> {
        fn line(name: &str, value: impl Display) -> String {
            format!("{name} = {value}")
        }
        vec![
            line("max depth", self.search.max_depth),
            line("move overhead", self.search.move_overhead_ms),
            line("memo capacity", self.search.memo_capacity),
            line("man weight", self.eval.man_weight),
            line("man advance", self.eval.man_advance),
            line("king weight", self.eval.king_weight),
            line("king edge", self.eval.king_edge),
            line("king aggression", self.eval.king_aggression),
            line("endgame pieces", self.eval.endgame_pieces),
        ]
    }
}

/// Split `name=value`; both halves are trimmed and the name must be non-empty.
#[must_use]
pub fn parse_assignment(assignment: &str) -> Option<(&str, &str)> {
    let (name, value) = assignment.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, value.trim()))
}
