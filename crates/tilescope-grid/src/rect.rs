//! Half-open rectangles of grid cells.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{GridError, GridPoint, RectIter};

/// A rectangle of grid cells covering columns `[x1, x2)` and rows `[y1, y2)`.
///
/// Rows are numbered upward (y-up world space), so `y2 - 1` is the top row.
/// The invariant `x1 <= x2 && y1 <= y2` always holds; a rectangle with
/// `x1 == x2` or `y1 == y2` is empty.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "RawRect"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridRect {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl GridRect {
    /// Creates a rectangle from its lower (inclusive) and upper (exclusive) bounds.
    ///
    /// # Arguments
    /// * `x1`, `y1` - Lower-left corner, inclusive.
    /// * `x2`, `y2` - Upper-right corner, exclusive.
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The rectangle, or `InvalidBounds` if `x1 > x2` or `y1 > y2`
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self, GridError> {
        if x1 > x2 || y1 > y2 {
            return Err(GridError::InvalidBounds(
                "lower bound must be below and to the left of upper bound",
            ));
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Creates a rectangle from two corner points, see [`GridRect::new`].
    pub const fn from_corners(
        lower_left: GridPoint,
        upper_right: GridPoint,
    ) -> Result<Self, GridError> {
        Self::new(lower_left.x, lower_left.y, upper_right.x, upper_right.y)
    }

    /// Creates an empty rectangle anchored at `(x, y)`.
    #[must_use]
    pub const fn empty_at(x: i32, y: i32) -> Self {
        Self { x1: x, y1: y, x2: x, y2: y }
    }

    /// Inclusive lower column bound.
    pub const fn x1(&self) -> i32 {
        self.x1
    }

    /// Inclusive lower row bound.
    pub const fn y1(&self) -> i32 {
        self.y1
    }

    /// Exclusive upper column bound.
    pub const fn x2(&self) -> i32 {
        self.x2
    }

    /// Exclusive upper row bound.
    pub const fn y2(&self) -> i32 {
        self.y2
    }

    /// Number of columns.
    pub const fn width(&self) -> u32 {
        self.x2.abs_diff(self.x1)
    }

    /// Number of rows.
    pub const fn height(&self) -> u32 {
        self.y2.abs_diff(self.y1)
    }

    /// Number of cells in the rectangle.
    pub const fn len(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Returns `true` if the rectangle holds no cells.
    pub const fn is_empty(&self) -> bool {
        self.x1 == self.x2 || self.y1 == self.y2
    }

    /// Returns `true` if `p` lies inside the rectangle.
    pub const fn contains(&self, p: GridPoint) -> bool {
        p.x >= self.x1 && p.x < self.x2 && p.y >= self.y1 && p.y < self.y2
    }

    /// Returns a row-major iterator over the cells of this rectangle.
    pub fn iter(&self) -> RectIter {
        RectIter::from_rect(*self)
    }
}

// Deserialized rectangles go through the checked constructor.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRect {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRect> for GridRect {
    type Error = GridError;

    fn try_from(raw: RawRect) -> Result<Self, GridError> {
        GridRect::new(raw.x1, raw.y1, raw.x2, raw.y2)
    }
}

impl IntoIterator for GridRect {
    type Item = GridPoint;
    type IntoIter = RectIter;

    fn into_iter(self) -> RectIter {
        RectIter::from_rect(self)
    }
}

impl fmt::Display for GridRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}) x [{}, {})", self.x1, self.x2, self.y1, self.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_order_bounds() {
        assert!(matches!(GridRect::new(5, 0, 4, 3), Err(GridError::InvalidBounds(_))));
        assert!(matches!(GridRect::new(0, 3, 4, 2), Err(GridError::InvalidBounds(_))));
        assert!(GridRect::new(4, 2, 4, 2).is_ok());
    }

    #[test]
    fn test_dimensions() {
        let r = GridRect::new(-2, 1, 3, 4).unwrap();
        assert_eq!(r.width(), 5);
        assert_eq!(r.height(), 3);
        assert_eq!(r.len(), 15);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_full_range_width_fits() {
        let r = GridRect::new(i32::MIN, 0, i32::MAX, 1).unwrap();
        assert_eq!(r.width(), u32::MAX);
        assert_eq!(r.len(), u32::MAX as u64);
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = GridRect::from_corners(GridPoint::new(0, 0), GridPoint::new(2, 2)).unwrap();
        assert!(r.contains(GridPoint::new(0, 0)));
        assert!(r.contains(GridPoint::new(1, 1)));
        assert!(!r.contains(GridPoint::new(2, 1)));
        assert!(!r.contains(GridPoint::new(1, 2)));
        assert!(!r.contains(GridPoint::new(-1, 0)));
    }

    #[test]
    fn test_empty_rectangles() {
        assert!(GridRect::empty_at(7, 7).is_empty());
        assert!(GridRect::new(0, 0, 0, 9).unwrap().is_empty());
        assert!(GridRect::new(0, 0, 9, 0).unwrap().is_empty());
        assert_eq!(GridRect::default().len(), 0);
    }

    #[test]
    fn test_display() {
        let r = GridRect::new(4, 4, 7, 7).unwrap();
        assert_eq!(r.to_string(), "[4, 7) x [4, 7)");
    }
}
