//! Enumeration of axes.
//!
//! These are mainly used for indexing specific components of an `IVec2` or
//! the ranges of a `Rect2`.

pub use Axis::*;

/// Enumeration of the two dimensions of a board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (generally horizontal/"width").
    X = 0,
    /// Y axis (generally vertical/"height").
    Y = 1,
}

impl Axis {
    /// Returns the name of the axis.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
        }
    }

    /// Returns the bit in a quadtree child index corresponding to this axis.
    #[inline]
    pub const fn bit(self) -> usize {
        1 << self as usize
    }
}

/// List of axes in order.
pub const AXES: &[Axis] = &[Axis::X, Axis::Y];
