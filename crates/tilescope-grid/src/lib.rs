#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library of integer grid points and rectangle iteration."]
#![doc = ""]
#![doc = "This crate provides the `GridPoint` type used for tile indices, the half-open"]
#![doc = "`GridRect` and `RectIter`, a restartable row-major walk over every cell of a rectangle."]

pub mod error;
pub mod iter;
pub mod point;
pub mod rect;

pub use error::GridError;
pub use iter::RectIter;
pub use point::GridPoint;
pub use rect::GridRect;
