//! Visible tile range computation.
//!
//! Converts a camera's visible world rectangle into the rectangle of tile
//! indices a renderer has to draw. One extra tile is added past the far edge
//! so tiles only partly on screen are included, and the result is clamped to
//! the layer. Nothing here is cached: call again whenever the camera moves,
//! zooms or the viewport is resized.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use tilescope_grid::GridRect;

use crate::error::ViewError;
use crate::source::{CameraView, TileLayerInfo};

/// The axis-aligned world rectangle visible through a camera.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    /// Left edge in world units.
    pub x: f32,
    /// Bottom edge in world units.
    pub y: f32,
    /// Visible width in world units (viewport width times zoom).
    pub width: f32,
    /// Visible height in world units (viewport height times zoom).
    pub height: f32,
}

impl ViewBounds {
    /// Builds the visible rectangle from raw camera parameters.
    ///
    /// # Arguments
    /// * `position` - Camera centre in world units.
    /// * `viewport` - Viewport width and height at zoom 1.
    /// * `zoom` - Zoom factor applied to the viewport size.
    pub fn new(position: (f32, f32), viewport: (f32, f32), zoom: f32) -> Self {
        let width = viewport.0 * zoom;
        let height = viewport.1 * zoom;
        Self {
            x: position.0 - width / 2.0,
            y: position.1 - height / 2.0,
            width,
            height,
        }
    }

    /// Builds the visible rectangle of `camera`.
    pub fn from_camera(camera: &impl CameraView) -> Self {
        Self::new(camera.position(), camera.viewport_size(), camera.zoom())
    }
}

/// Computes the tile rectangle covering `view` on `layer`.
///
/// Tile dimensions are multiplied by `unit_scale` before dividing, so a layer
/// drawn at a non-default world-to-tile ratio lines up with the camera.
///
/// # Returns
/// * `Result<GridRect, ViewError>` - Columns `[x1, x2)` and rows `[y1, y2)`, empty
///   when the view lies entirely off the layer. Fails if the unit scale or the
///   scaled tile size is not finite and positive.
pub fn compute_bounds(
    view: &ViewBounds,
    layer: &impl TileLayerInfo,
    unit_scale: f32,
) -> Result<GridRect, ViewError> {
    if !unit_scale.is_finite() || unit_scale <= 0.0 {
        return Err(ViewError::InvalidUnitScale(unit_scale));
    }
    let tile_w = layer.tile_width() * unit_scale;
    let tile_h = layer.tile_height() * unit_scale;
    if !(tile_w.is_finite() && tile_h.is_finite() && tile_w > 0.0 && tile_h > 0.0) {
        return Err(ViewError::InvalidTileSize { width: tile_w, height: tile_h });
    }

    let (x1, x2) = axis_range(view.x, view.width, tile_w, layer.width());
    let (y1, y2) = axis_range(view.y, view.height, tile_h, layer.height());
    let rect = GridRect::new(x1, y1, x2, y2)?;

    debug!(%rect, tiles = rect.len(), "computed visible tile bounds");
    Ok(rect)
}

/// Computes the tile rectangle visible through `camera` on `layer`.
pub fn visible_tile_rect(
    camera: &impl CameraView,
    layer: &impl TileLayerInfo,
    unit_scale: f32,
) -> Result<GridRect, ViewError> {
    compute_bounds(&ViewBounds::from_camera(camera), layer, unit_scale)
}

// Lower bound clamped to 0, upper bound padded by one tile and clamped to the
// layer; an upper bound below the lower one collapses to an empty range.
fn axis_range(start: f32, extent: f32, tile: f32, layer_tiles: i32) -> (i32, i32) {
    let lo = ((start / tile).floor() as i32).max(0);
    let hi = (((start + extent + tile) / tile).floor() as i32).min(layer_tiles);
    (lo, hi.max(lo))
}
