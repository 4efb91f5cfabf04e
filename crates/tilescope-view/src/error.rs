//! This module defines the error types used by the `tilescope-view` crate.

use thiserror::Error;
use tilescope_grid::GridError;

/// Error type for visible-range computation.
///
/// An empty visible area (camera looking entirely off the layer) is not an
/// error; it yields an empty rectangle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    /// Tile width or height, after applying the unit scale, is zero, negative or not finite.
    #[error(
        "invalid tile size {width}x{height}: scaled tile dimensions must be finite and positive"
    )]
    InvalidTileSize {
        /// Scaled tile width in world units.
        width: f32,
        /// Scaled tile height in world units.
        height: f32,
    },
    /// The unit scale is zero, negative or not finite.
    #[error("invalid unit scale {0}: must be finite and positive")]
    InvalidUnitScale(f32),
    /// A grid rectangle could not be built.
    #[error(transparent)]
    Grid(#[from] GridError),
}
