//! Everything related to the description of a cellular automaton rule,
//! primarily the transition function.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

mod ant;
mod totalistic;
mod wireworld;

use crate::cells::CellState;
use crate::vec2::IVec2;
pub use ant::Ant;
pub use totalistic::{Totalistic, LIFE};
pub use wireworld::WireWorld;

/// Result type returned by fallible rule lookups.
pub type RuleResult<T> = Result<T, RuleParseError>;

/// Error encountered when looking up or parsing a rule.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RuleParseError {
    #[error("invalid rule string: {0:?}")]
    InvalidRule(String),
    #[error("unknown rule: {0:?}")]
    UnknownRule(String),
}

/// Moore neighborhood: the cell itself followed by its eight surrounding
/// cells.
pub const MOORE: [IVec2; 9] = [
    IVec2::new(0, 0),
    IVec2::new(0, 1),
    IVec2::new(0, -1),
    IVec2::new(1, 0),
    IVec2::new(1, 1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(-1, 1),
    IVec2::new(-1, -1),
];

/// Von Neumann neighborhood: the cell itself followed by its four
/// orthogonally adjacent cells.
pub const VON_NEUMANN: [IVec2; 5] = [
    IVec2::new(0, 0),
    IVec2::new(0, 1),
    IVec2::new(0, -1),
    IVec2::new(1, 0),
    IVec2::new(-1, 0),
];

/// Cellular automaton rule.
///
/// A rule must be local and time-invariant: `next_state()` may depend only on
/// the values it is given. The board relies on this to skip cells whose
/// neighborhood did not change.
pub trait RuleSet: fmt::Debug + fmt::Display + Send + Sync {
    /// Returns the number of distinct cell states.
    fn num_states(&self) -> usize;
    /// Returns the offsets of the cells whose states determine a cell's next
    /// state, in the order that `next_state()` receives them.
    ///
    /// The first offset must be `(0, 0)`.
    fn neighborhood(&self) -> &[IVec2];
    /// Computes a cell's next state, given the states of its neighborhood in
    /// the same order as `neighborhood()`.
    fn next_state(&self, values: &[CellState]) -> CellState;

    /// Returns the rule as an `Arc<dyn RuleSet>`.
    fn into_arc(self) -> Arc<dyn RuleSet>
    where
        Self: 'static + Sized,
    {
        Arc::new(self)
    }
}

/// Returns the neighborhood with every offset negated.
///
/// If a cell at `pos` changes, then the cells that might change as a result
/// are `pos + offset` for each `offset` in the inverse neighborhood.
pub fn inverse_neighborhood(neighborhood: &[IVec2]) -> Vec<IVec2> {
    neighborhood.iter().map(|&offset| -offset).collect()
}

/// A basic rule that never changes any cell states.
#[derive(Debug, Default, Copy, Clone)]
pub struct DummyRule;
impl fmt::Display for DummyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dummy")
    }
}
impl RuleSet for DummyRule {
    fn num_states(&self) -> usize {
        CellState::MAX as usize + 1
    }
    fn neighborhood(&self) -> &[IVec2] {
        &MOORE[..1]
    }
    fn next_state(&self, values: &[CellState]) -> CellState {
        values[0]
    }
}

/// Looks up a rule by name (case-insensitive), or parses a Life-like rule
/// string such as `B36/S23`.
pub fn from_name(name: &str) -> RuleResult<Arc<dyn RuleSet>> {
    let name = name.trim();
    match name.to_ascii_lowercase().as_str() {
        "life" => Ok(LIFE.into_arc()),
        "wireworld" => Ok(WireWorld.into_arc()),
        "ant" | "langton" => Ok(Ant.into_arc()),
        "dummy" => Ok(DummyRule.into_arc()),
        s if is_rule_string(s) => Ok(name.parse::<Totalistic>()?.into_arc()),
        _ => Err(RuleParseError::UnknownRule(name.to_owned())),
    }
}

/// Returns true if `s` looks like a lowercase `b…/s…` rule string rather than
/// a rule name.
fn is_rule_string(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next() == Some('b')
        && chars
            .next()
            .map_or(false, |c| c.is_ascii_digit() || c == '/' || c == 's')
}
