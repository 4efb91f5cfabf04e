//! Capabilities read from the camera and tile layer.
//!
//! The visible-range computation only needs a handful of scalars from the
//! rendering side. These traits expose exactly those, so any engine camera or
//! map layer can be plugged in with a thin adapter. [`OrthoCamera`] and
//! [`LayerDims`] are plain value implementations for callers without one.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tilescope_grid::GridPoint;

/// An orthographic camera as seen by the visible-range computer.
pub trait CameraView {
    /// Camera centre in world units.
    fn position(&self) -> (f32, f32);
    /// Zoom factor; the visible area is the viewport size multiplied by it.
    fn zoom(&self) -> f32;
    /// Viewport width and height in world units at zoom 1.
    fn viewport_size(&self) -> (f32, f32);
}

/// A rectangular layer of fixed-size tiles.
pub trait TileLayerInfo {
    /// Layer width in tiles.
    fn width(&self) -> i32;
    /// Layer height in tiles.
    fn height(&self) -> i32;
    /// Tile width in the layer's native units.
    fn tile_width(&self) -> f32;
    /// Tile height in the layer's native units.
    fn tile_height(&self) -> f32;

    /// Lower-left corner of `tile` in native units, i.e. where to draw it.
    fn tile_origin(&self, tile: GridPoint) -> (f32, f32) {
        (tile.x as f32 * self.tile_width(), tile.y as f32 * self.tile_height())
    }

    /// Returns `true` if `tile` is a valid cell index of this layer.
    fn contains(&self, tile: GridPoint) -> bool {
        tile.x >= 0 && tile.y >= 0 && tile.x < self.width() && tile.y < self.height()
    }
}

impl<T: CameraView + ?Sized> CameraView for &T {
    fn position(&self) -> (f32, f32) {
        (**self).position()
    }

    fn zoom(&self) -> f32 {
        (**self).zoom()
    }

    fn viewport_size(&self) -> (f32, f32) {
        (**self).viewport_size()
    }
}

impl<T: TileLayerInfo + ?Sized> TileLayerInfo for &T {
    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }

    fn tile_width(&self) -> f32 {
        (**self).tile_width()
    }

    fn tile_height(&self) -> f32 {
        (**self).tile_height()
    }
}

/// A plain orthographic camera.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoCamera {
    /// Camera centre x in world units.
    pub x: f32,
    /// Camera centre y in world units.
    pub y: f32,
    /// Viewport width in world units at zoom 1.
    pub viewport_width: f32,
    /// Viewport height in world units at zoom 1.
    pub viewport_height: f32,
    /// Zoom factor, 1.0 shows exactly one viewport.
    pub zoom: f32,
}

impl OrthoCamera {
    /// Creates a camera at the origin with zoom 1.
    pub const fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self { x: 0.0, y: 0.0, viewport_width, viewport_height, zoom: 1.0 }
    }

    /// Returns this camera moved to `(x, y)`.
    #[must_use]
    pub const fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Returns this camera with the given zoom.
    #[must_use]
    pub const fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Moves the camera centre to `(x, y)`.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Centres the camera on the middle of `tile` in a layer drawn at `unit_scale`.
    pub fn look_at_tile(&mut self, tile: GridPoint, layer: &impl TileLayerInfo, unit_scale: f32) {
        let tw = layer.tile_width() * unit_scale;
        let th = layer.tile_height() * unit_scale;
        self.set_position(tile.x as f32 * tw + tw / 2.0, tile.y as f32 * th + th / 2.0);
    }
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl CameraView for OrthoCamera {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn zoom(&self) -> f32 {
        self.zoom
    }

    fn viewport_size(&self) -> (f32, f32) {
        (self.viewport_width, self.viewport_height)
    }
}

/// Dimensions of a tile layer without any cell storage.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerDims {
    /// Width in tiles.
    pub width: i32,
    /// Height in tiles.
    pub height: i32,
    /// Tile width in native units.
    pub tile_width: f32,
    /// Tile height in native units.
    pub tile_height: f32,
}

impl LayerDims {
    /// Creates layer dimensions.
    pub const fn new(width: i32, height: i32, tile_width: f32, tile_height: f32) -> Self {
        Self { width, height, tile_width, tile_height }
    }
}

impl TileLayerInfo for LayerDims {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn tile_width(&self) -> f32 {
        self.tile_width
    }

    fn tile_height(&self) -> f32 {
        self.tile_height
    }
}
