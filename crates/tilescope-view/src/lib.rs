#![warn(missing_docs)]
//! Visible tile enumeration for orthographic tile maps.
//!
//! Given a camera (position, zoom, viewport size) and a tile layer (size in
//! tiles, tile size in world units), this crate works out which tile indices
//! fall inside the camera's view and iterates over them in the same order an
//! orthogonal tile renderer draws them. Use it to draw overlays on top of the
//! visible tiles without touching the rest of the map.

pub mod bounds;
pub mod error;
pub mod source;
pub mod visible;

pub use bounds::{ViewBounds, compute_bounds, visible_tile_rect};
pub use error::ViewError;
pub use source::{CameraView, LayerDims, OrthoCamera, TileLayerInfo};
pub use visible::VisibleTiles;

pub use tilescope_grid::{GridPoint, GridRect, RectIter};
