//! 2D integer vectors and toroidal wrapping.

use num::Integer;
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Neg, Sub, SubAssign};

use crate::axis::Axis;

/// 2D vector with signed integer coordinates, used both for positions and for
/// neighborhood offsets.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IVec2 {
    /// X coordinate.
    pub x: isize,
    /// Y coordinate.
    pub y: isize,
}

impl fmt::Display for IVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl From<(isize, isize)> for IVec2 {
    #[inline]
    fn from((x, y): (isize, isize)) -> Self {
        Self::new(x, y)
    }
}

impl Index<Axis> for IVec2 {
    type Output = isize;
    fn index(&self, axis: Axis) -> &isize {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}
impl IndexMut<Axis> for IVec2 {
    fn index_mut(&mut self, axis: Axis) -> &mut isize {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

impl Add for IVec2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}
impl AddAssign for IVec2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}
impl Sub for IVec2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}
impl SubAssign for IVec2 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}
impl Neg for IVec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl IVec2 {
    /// Creates a vector from its coordinates.
    #[inline]
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }
    /// Creates a vector consisting of all zeros.
    #[inline]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }
    /// Returns true if the vector is all zeros, or false otherwise.
    #[inline]
    pub fn is_zero(self) -> bool {
        self == Self::origin()
    }

    /// Wraps each coordinate into `[0, modulus)`, treating the plane as a
    /// torus with the given side length.
    #[inline]
    pub fn wrap(self, modulus: isize) -> Self {
        Self::new(wrap(self.x, modulus), wrap(self.y, modulus))
    }
}

/// Wraps a single coordinate into `[0, modulus)`.
///
/// This is floored modulo, so negative values wrap around from the top:
/// `wrap(-1, 5) == 4`. The result is periodic with period `modulus`.
///
/// # Panics
///
/// This function panics if `modulus` is zero.
#[inline]
pub fn wrap(value: isize, modulus: isize) -> isize {
    value.mod_floor(&modulus)
}
