//! Integer points on a tile grid.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use libm::sqrt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on an integer grid `(x, y)`, usually a tile's column and row.
///
/// Coordinates are signed so that offsets and positions left of or below the
/// origin can be expressed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    /// The x-coordinate (column index).
    pub x: i32,
    /// The y-coordinate (row index).
    pub y: i32,
}

impl GridPoint {
    /// Creates a new `GridPoint`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Overwrites both coordinates in place.
    pub fn set(&mut self, x: i32, y: i32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Copies the coordinates of `other` into this point.
    pub fn set_point(&mut self, other: GridPoint) -> &mut Self {
        self.set(other.x, other.y)
    }

    /// Returns this point offset by `(x, y)`.
    #[must_use]
    pub const fn add_xy(self, x: i32, y: i32) -> Self {
        Self::new(self.x + x, self.y + y)
    }

    /// Returns this point offset by `(-x, -y)`.
    #[must_use]
    pub const fn sub_xy(self, x: i32, y: i32) -> Self {
        Self::new(self.x - x, self.y - y)
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Computed in `u128`, so the result is exact for every pair of `i32` points
    /// (the largest, between opposite corners of the `i32` plane, needs 66 bits).
    #[must_use]
    pub const fn dst2(self, other: GridPoint) -> u128 {
        self.dst2_xy(other.x, other.y)
    }

    /// Squared Euclidean distance to `(x, y)`.
    #[must_use]
    pub const fn dst2_xy(self, x: i32, y: i32) -> u128 {
        let xd = (x as i64 - self.x as i64).unsigned_abs() as u128;
        let yd = (y as i64 - self.y as i64).unsigned_abs() as u128;
        xd * xd + yd * yd
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn dst(self, other: GridPoint) -> f32 {
        sqrt(self.dst2(other) as f64) as f32
    }

    /// Euclidean distance to `(x, y)`.
    #[must_use]
    pub fn dst_xy(self, x: i32, y: i32) -> f32 {
        sqrt(self.dst2_xy(x, y) as f64) as f32
    }
}

impl Add for GridPoint {
    type Output = GridPoint;

    fn add(self, rhs: GridPoint) -> GridPoint {
        self.add_xy(rhs.x, rhs.y)
    }
}

impl AddAssign for GridPoint {
    fn add_assign(&mut self, rhs: GridPoint) {
        *self = *self + rhs;
    }
}

impl Sub for GridPoint {
    type Output = GridPoint;

    fn sub(self, rhs: GridPoint) -> GridPoint {
        self.sub_xy(rhs.x, rhs.y)
    }
}

impl SubAssign for GridPoint {
    fn sub_assign(&mut self, rhs: GridPoint) {
        *self = *self - rhs;
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<GridPoint> for (i32, i32) {
    fn from(p: GridPoint) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_distance_pythagorean_triple_is_exact() {
        let origin = GridPoint::new(0, 0);
        let p = GridPoint::new(3, 4);
        assert_eq!(origin.dst2(p), 25);
        assert_eq!(origin.dst(p), 5.0);
        assert_eq!(p.dst(origin), 5.0);
        assert_eq!(origin.dst_xy(3, 4), 5.0);
        assert_eq!(origin.dst2_xy(-3, -4), 25);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = GridPoint::new(-7, 12);
        assert_eq!(p.dst2(p), 0);
        assert_eq!(p.dst(p), 0.0);
    }

    #[test]
    fn test_dst2_does_not_overflow_at_extremes() {
        let span = (i32::MAX as i64 - i32::MIN as i64) as u128;

        let left = GridPoint::new(i32::MIN, 0);
        let right = GridPoint::new(i32::MAX, 0);
        assert_eq!(left.dst2(right), span * span);
        assert_eq!(right.dst2(left), span * span);

        let a = GridPoint::new(i32::MIN, i32::MIN);
        let b = GridPoint::new(i32::MAX, i32::MAX);
        assert_eq!(a.dst2(b), 2 * span * span);
        assert!(a.dst2(b) > u64::MAX as u128);
        let expected = 2.0f64.sqrt() * span as f64;
        assert!((a.dst(b) as f64 - expected).abs() / expected < 1e-6);
    }

    #[test]
    fn test_vector_arithmetic() {
        let a = GridPoint::new(2, -3);
        let b = GridPoint::new(5, 7);
        assert_eq!(a + b, GridPoint::new(7, 4));
        assert_eq!(b - a, GridPoint::new(3, 10));
        assert_eq!(a.add_xy(1, 1), GridPoint::new(3, -2));
        assert_eq!(a.sub_xy(1, 1), GridPoint::new(1, -4));

        let mut c = a;
        c += b;
        c -= GridPoint::new(1, 1);
        assert_eq!(c, GridPoint::new(6, 3));
        // `a` is a copy, untouched by the in-place ops on `c`.
        assert_eq!(a, GridPoint::new(2, -3));
    }

    #[test]
    fn test_set_chains() {
        let mut p = GridPoint::default();
        p.set(4, 5).set_point(GridPoint::new(9, 1));
        assert_eq!(p, GridPoint::new(9, 1));
    }

    #[test]
    fn test_equality_and_hashing() {
        let mut seen = HashSet::new();
        assert!(seen.insert(GridPoint::new(1, 2)));
        assert!(!seen.insert(GridPoint::new(1, 2)));
        assert!(seen.insert(GridPoint::new(2, 1)));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_display_and_tuple_conversions() {
        let p: GridPoint = (3, -8).into();
        assert_eq!(p.to_string(), "(3, -8)");
        let t: (i32, i32) = p.into();
        assert_eq!(t, (3, -8));
    }
}
