//! Toroidal 2D cellular automaton simulation backend.
//!
//! There are two independent pieces here:
//!
//! - `Board`, a dense grid that wraps around at the edges and steps any
//!   `RuleSet` incrementally, re-evaluating only cells that might change.
//! - `Quadtree`, a sparse store that keeps uniform regions as single nodes.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod axis;
pub mod board;
pub mod cells;
pub mod patterns;
pub mod quadtree;
pub mod rect;
pub mod rule;
pub mod sim;
pub mod vec2;

pub mod traits {
    //! Traits that are useful to have in scope.
    pub use crate::rule::RuleSet;
}

pub mod prelude {
    //! Commonly used types and traits.
    pub use crate::traits::*;

    pub use crate::axis::Axis;
    pub use crate::board::{Board, BoardError, BoardResult};
    pub use crate::cells::{cell_map, CellMap, CellSet, CellState};
    pub use crate::quadtree::{Node, Quadtree, QuadtreeError, QuadtreeResult};
    pub use crate::rect::Rect2;
    pub use crate::rule::{Ant, DummyRule, RuleParseError, Totalistic, WireWorld, LIFE};
    pub use crate::sim::Simulation;
    pub use crate::vec2::IVec2;
}

#[cfg(test)]
mod tests;
