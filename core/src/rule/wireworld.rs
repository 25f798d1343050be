use std::fmt;

use super::{RuleSet, MOORE};
use crate::cells::CellState;
use crate::vec2::IVec2;

/// Brian Silverman's WireWorld.
///
/// States are `0` (empty), `1` (electron head), `2` (electron tail), and `3`
/// (conductor).
#[derive(Debug, Default, Copy, Clone)]
pub struct WireWorld;

impl WireWorld {
    /// Empty cell.
    pub const EMPTY: CellState = 0;
    /// Electron head.
    pub const HEAD: CellState = 1;
    /// Electron tail.
    pub const TAIL: CellState = 2;
    /// Conductor.
    pub const CONDUCTOR: CellState = 3;
}

impl fmt::Display for WireWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WireWorld")
    }
}

impl RuleSet for WireWorld {
    fn num_states(&self) -> usize {
        4
    }
    fn neighborhood(&self) -> &[IVec2] {
        &MOORE
    }
    fn next_state(&self, values: &[CellState]) -> CellState {
        match values[0] {
            Self::HEAD => Self::TAIL,
            Self::TAIL => Self::CONDUCTOR,
            Self::CONDUCTOR => {
                let heads = values[1..].iter().filter(|&&v| v == Self::HEAD).count();
                if heads == 1 || heads == 2 {
                    Self::HEAD
                } else {
                    Self::CONDUCTOR
                }
            }
            _ => Self::EMPTY,
        }
    }
}
