use std::fmt;

use super::{RuleSet, VON_NEUMANN};
use crate::cells::CellState;
use crate::vec2::IVec2;

/// Langton's ant, expressed as a 10-state von Neumann cellular automaton.
///
/// State `0` is an unvisited cell and `5` is a visited cell. States `1..=4`
/// are an ant standing on an unvisited cell and states `6..=9` are an ant
/// standing on a visited cell; the offset from the base state encodes the
/// ant's heading.
///
/// Each generation the ant leaves its cell (flipping it between unvisited and
/// visited) and moves onto the adjacent cell it is heading toward.
#[derive(Debug, Default, Copy, Clone)]
pub struct Ant;

impl Ant {
    /// Unvisited cell with no ant.
    pub const UNVISITED: CellState = 0;
    /// Visited cell with no ant.
    pub const VISITED: CellState = 5;
}

impl fmt::Display for Ant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ant")
    }
}

impl RuleSet for Ant {
    fn num_states(&self) -> usize {
        10
    }
    fn neighborhood(&self) -> &[IVec2] {
        &VON_NEUMANN
    }
    fn next_state(&self, values: &[CellState]) -> CellState {
        let this = values[0];
        match this {
            1..=4 => return Self::VISITED,
            6..=9 => return Self::UNVISITED,
            _ => (),
        }
        // An ant arrives from whichever neighbor is heading this way. The
        // heading it arrives with depends on the color of the cell it left.
        match (values[1], values[2], values[3], values[4]) {
            (2, _, _, _) | (8, _, _, _) => this + 1,
            (_, 3, _, _) | (_, 7, _, _) => this + 4,
            (_, _, 1, _) | (_, _, 9, _) => this + 3,
            (_, _, _, 4) | (_, _, _, 6) => this + 2,
            _ => this,
        }
    }
}
