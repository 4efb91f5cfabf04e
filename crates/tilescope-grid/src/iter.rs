//! Row-major iteration over the cells of a [`GridRect`].
//!
//! Traversal starts at the top row (`y2 - 1`) and walks down to `y1`. Within
//! each row columns run left to right from `x1` to `x2 - 1`, which is the order
//! an orthogonal tile renderer draws a y-up map in.

use core::iter::FusedIterator;

use crate::{GridError, GridPoint, GridRect};

/// A restartable iterator over every cell of a rectangle.
///
/// The iterator owns a copy of its bounds and a cursor. After construction or
/// [`RectIter::reset`] the cursor sits before the first cell; each call to
/// `next` moves it one cell forward and yields the new position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectIter {
    rect: GridRect,
    // `None` is the before-first position.
    cursor: Option<GridPoint>,
}

impl RectIter {
    /// Creates an iterator over columns `[x1, x2)` and rows `[y1, y2)`.
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The iterator, or `InvalidBounds` if `x1 > x2` or `y1 > y2`
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self, GridError> {
        GridRect::new(x1, y1, x2, y2).map(Self::from_rect)
    }

    /// Creates an iterator from a lower-left (inclusive) and upper-right (exclusive) corner.
    pub fn from_corners(lower_left: GridPoint, upper_right: GridPoint) -> Result<Self, GridError> {
        GridRect::from_corners(lower_left, upper_right).map(Self::from_rect)
    }

    /// Creates an iterator over an already validated rectangle.
    #[must_use]
    pub const fn from_rect(rect: GridRect) -> Self {
        Self { rect, cursor: None }
    }

    /// The rectangle being traversed.
    pub const fn rect(&self) -> GridRect {
        self.rect
    }

    /// Moves the cursor back before the first cell so the same sequence can be walked again.
    pub fn reset(&mut self) -> &mut Self {
        self.cursor = None;
        self
    }

    /// Replaces the bounds and rewinds the cursor.
    pub fn reset_to(&mut self, rect: GridRect) -> &mut Self {
        self.rect = rect;
        self.reset()
    }

    /// Returns `true` if at least one more cell remains.
    pub fn has_next(&self) -> bool {
        if self.rect.is_empty() {
            return false;
        }
        match self.cursor {
            None => true,
            Some(c) => !(c.y == self.rect.y1() && c.x + 1 >= self.rect.x2()),
        }
    }

    /// Advances the cursor and writes the new cell into `fill_in`.
    ///
    /// This avoids handing out a fresh value on every step for callers that keep
    /// one scratch point around. Returns `false` and leaves `fill_in` untouched
    /// once the rectangle is exhausted.
    pub fn next_into(&mut self, fill_in: &mut GridPoint) -> bool {
        match self.step() {
            Some(p) => {
                fill_in.set_point(p);
                true
            }
            None => false,
        }
    }

    /// Always fails: rectangle iterators are read-only views of their bounds.
    pub fn remove(&mut self) -> Result<(), GridError> {
        Err(GridError::UnsupportedOperation("rectangle iterators cannot remove cells"))
    }

    /// Number of cells not yet produced.
    pub fn remaining(&self) -> u64 {
        if !self.has_next() {
            return 0;
        }
        match self.cursor {
            None => self.rect.len(),
            Some(c) => {
                let rows_below = c.y.abs_diff(self.rect.y1()) as u64;
                let left_in_row = (self.rect.x2() - 1).abs_diff(c.x) as u64;
                rows_below * self.rect.width() as u64 + left_in_row
            }
        }
    }

    fn step(&mut self) -> Option<GridPoint> {
        if !self.has_next() {
            return None;
        }
        let next = match self.cursor {
            None => GridPoint::new(self.rect.x1(), self.rect.y2() - 1),
            Some(c) if c.x + 1 >= self.rect.x2() => GridPoint::new(self.rect.x1(), c.y - 1),
            Some(c) => GridPoint::new(c.x + 1, c.y),
        };
        self.cursor = Some(next);
        Some(next)
    }
}

impl Iterator for RectIter {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for RectIter {}
