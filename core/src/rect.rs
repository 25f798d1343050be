//! Half-open 2D rectangles.

use std::fmt;

use crate::axis::{Axis, AXES};
use crate::vec2::IVec2;

/// Half-open 2D rectangle `[start.x, end.x) × [start.y, end.y)`.
///
/// A rectangle may have zero width or height, in which case it contains no
/// positions at all. Such a rectangle is called _trivial_.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect2 {
    /// Most negative corner (inclusive).
    start: IVec2,
    /// Most positive corner (exclusive).
    end: IVec2,
}

impl fmt::Display for Rect2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect2({}..{}, {}..{})",
            self.start.x, self.end.x, self.start.y, self.end.y,
        )
    }
}

impl Rect2 {
    /// Creates a rectangle spanning from `start` (inclusive) to `end`
    /// (exclusive).
    ///
    /// # Panics
    ///
    /// This function panics if `end` is less than `start` along either axis.
    pub fn new(start: IVec2, end: IVec2) -> Self {
        assert!(
            start.x <= end.x && start.y <= end.y,
            "Rectangle end {} is before start {}",
            end,
            start,
        );
        Self { start, end }
    }
    /// Creates the square `[0, size) × [0, size)`.
    pub fn square(size: usize) -> Self {
        let size = size as isize;
        Self::new(IVec2::origin(), IVec2::new(size, size))
    }

    /// Returns the most negative corner (inclusive).
    #[inline]
    pub fn start(self) -> IVec2 {
        self.start
    }
    /// Returns the most positive corner (exclusive).
    #[inline]
    pub fn end(self) -> IVec2 {
        self.end
    }
    /// Returns the length of the rectangle along an axis.
    #[inline]
    pub fn len(self, axis: Axis) -> isize {
        self.end[axis] - self.start[axis]
    }
    /// Returns the number of positions in the rectangle.
    #[inline]
    pub fn area(self) -> usize {
        (self.len(Axis::X) * self.len(Axis::Y)) as usize
    }

    /// Returns true if the rectangle has zero area.
    #[inline]
    pub fn is_trivial(self) -> bool {
        AXES.iter().any(|&ax| self.len(ax) == 0)
    }
    /// Returns true if the rectangle covers exactly one position.
    #[inline]
    pub fn is_unit(self) -> bool {
        AXES.iter().all(|&ax| self.len(ax) == 1)
    }
    /// Returns true if the rectangle contains `pos`.
    #[inline]
    pub fn contains(self, pos: IVec2) -> bool {
        AXES.iter()
            .all(|&ax| self.start[ax] <= pos[ax] && pos[ax] < self.end[ax])
    }

    /// Returns the point at which the rectangle is split into quadrants; the
    /// floored average of the bounds along each axis.
    #[inline]
    pub fn midpoint(self) -> IVec2 {
        IVec2::new(
            (self.start.x + self.end.x).div_euclid(2),
            (self.start.y + self.end.y).div_euclid(2),
        )
    }

    /// Returns the index of the quadrant that would contain `pos`, where bit
    /// `axis.bit()` is set if `pos` is in the upper half along that axis.
    ///
    /// The result is meaningless if `pos` is not inside the rectangle.
    #[inline]
    pub fn quadrant_index(self, pos: IVec2) -> usize {
        let mid = self.midpoint();
        AXES.iter()
            .filter(|&&ax| pos[ax] >= mid[ax])
            .map(|&ax| ax.bit())
            .sum()
    }

    /// Splits the rectangle at its midpoint into four quadrants, indexed as
    /// described in `quadrant_index()`. Some quadrants may be trivial if the
    /// rectangle has odd or unit length along an axis.
    pub fn quadrants(self) -> [Rect2; 4] {
        let mid = self.midpoint();
        let quadrant = |index: usize| {
            let mut start = self.start;
            let mut end = self.end;
            for &ax in AXES {
                if index & ax.bit() == 0 {
                    end[ax] = mid[ax];
                } else {
                    start[ax] = mid[ax];
                }
            }
            Rect2::new(start, end)
        };
        [quadrant(0), quadrant(1), quadrant(2), quadrant(3)]
    }
}
