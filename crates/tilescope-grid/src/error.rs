//! Error types for the grid library.
//!
//! This module defines the errors that can occur when building rectangles
//! or using the rectangle iterator.

use core::fmt;

/// Errors that can occur in grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Error for an out-of-order rectangle.
    /// This variant is returned when the lower bound of a rectangle is not
    /// below and to the left of its upper bound.
    InvalidBounds(&'static str),
    /// Error for an operation the iterator does not support.
    /// Grid iterators are read-only, so any attempt to remove cells fails with this.
    UnsupportedOperation(&'static str),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidBounds(msg) => write!(f, "Invalid rectangle bounds: {}", msg),
            GridError::UnsupportedOperation(msg) => write!(f, "Unsupported operation: {}", msg),
        }
    }
}

impl core::error::Error for GridError {}
