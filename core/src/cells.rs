//! Cell states and collections of cells keyed by position.

use seahash::SeaHasher;
use std::collections::{HashMap, HashSet};
use std::hash::BuildHasherDefault;

use crate::vec2::IVec2;

/// State of a single cell, in the range `0..num_states` of the active rule.
pub type CellState = u8;

/// Hasher used for position-keyed collections.
///
/// Unlike the default `RandomState`, this is deterministic, so iteration order
/// is the same from one run to the next.
pub type CellHasher = BuildHasherDefault<SeaHasher>;

/// Set of cell positions.
pub type CellSet = HashSet<IVec2, CellHasher>;

/// Map from cell position to cell state.
pub type CellMap = HashMap<IVec2, CellState, CellHasher>;

/// Builds a `CellMap` from `(x, y, state)` triples.
pub fn cell_map<I>(cells: I) -> CellMap
where
    I: IntoIterator<Item = (isize, isize, CellState)>,
{
    cells
        .into_iter()
        .map(|(x, y, state)| (IVec2::new(x, y), state))
        .collect()
}
