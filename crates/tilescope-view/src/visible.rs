//! Iteration over the tiles currently visible through a camera.

use std::iter::FusedIterator;

use tracing::trace;

use tilescope_grid::{GridError, GridPoint, GridRect, RectIter};

use crate::bounds::visible_tile_rect;
use crate::error::ViewError;
use crate::source::{CameraView, TileLayerInfo};

/// Iterates over the tile indices visible through `camera` on `layer`.
///
/// Bounds are worked out the same way an orthogonal tile renderer culls its
/// draw calls, so overlays drawn for each yielded tile line up with what is on
/// screen. Tiles come top row first, left to right within a row.
///
/// The bounds are computed on construction and again on every [`reset`]. Keep
/// one instance around and, each frame, update the camera through
/// [`camera_mut`] and call [`reset`] before walking it.
///
/// [`reset`]: VisibleTiles::reset
/// [`camera_mut`]: VisibleTiles::camera_mut
#[derive(Debug, Clone)]
pub struct VisibleTiles<C, L> {
    camera: C,
    layer: L,
    unit_scale: f32,
    tiles: RectIter,
}

impl<C: CameraView, L: TileLayerInfo> VisibleTiles<C, L> {
    /// Creates an iterator with a unit scale of 1.0.
    pub fn new(camera: C, layer: L) -> Result<Self, ViewError> {
        Self::with_unit_scale(camera, layer, 1.0)
    }

    /// Creates an iterator whose tile sizes are multiplied by `unit_scale`.
    ///
    /// # Returns
    /// * `Result<Self, ViewError>` - Fails if the unit scale or scaled tile size is not
    ///   finite and positive
    pub fn with_unit_scale(camera: C, layer: L, unit_scale: f32) -> Result<Self, ViewError> {
        let rect = visible_tile_rect(&camera, &layer, unit_scale)?;
        Ok(Self {
            camera,
            layer,
            unit_scale,
            tiles: RectIter::from_rect(rect),
        })
    }

    /// Recomputes the visible bounds from the current camera and layer and rewinds.
    ///
    /// On error the previous bounds are kept but the cursor is still rewound.
    pub fn reset(&mut self) -> Result<&mut Self, ViewError> {
        self.tiles.reset();
        let rect = visible_tile_rect(&self.camera, &self.layer, self.unit_scale)?;
        trace!(%rect, "visible tiles reset");
        self.tiles.reset_to(rect);
        Ok(self)
    }

    /// Changes the unit scale and recomputes the bounds.
    pub fn set_unit_scale(&mut self, unit_scale: f32) -> Result<&mut Self, ViewError> {
        let rect = visible_tile_rect(&self.camera, &self.layer, unit_scale)?;
        self.unit_scale = unit_scale;
        self.tiles.reset_to(rect);
        Ok(self)
    }
}

impl<C, L> VisibleTiles<C, L> {
    /// The camera the bounds are computed from.
    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Mutable access to the camera. Changes take effect on the next [`VisibleTiles::reset`].
    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// The tile layer the bounds are clamped to.
    pub fn layer(&self) -> &L {
        &self.layer
    }

    /// Multiplier applied to tile sizes.
    pub fn unit_scale(&self) -> f32 {
        self.unit_scale
    }

    /// Visible tile rectangle as of the last construction or reset.
    pub fn bounds(&self) -> GridRect {
        self.tiles.rect()
    }

    /// Returns `true` if another visible tile remains.
    pub fn has_next(&self) -> bool {
        self.tiles.has_next()
    }

    /// Number of visible tiles not yet produced.
    pub fn remaining(&self) -> u64 {
        self.tiles.remaining()
    }

    /// Writes the next visible tile into `fill_in`, see [`RectIter::next_into`].
    pub fn next_into(&mut self, fill_in: &mut GridPoint) -> bool {
        self.tiles.next_into(fill_in)
    }

    /// Always fails: the visible set is derived from the camera and cannot be edited.
    pub fn remove(&mut self) -> Result<(), GridError> {
        self.tiles.remove()
    }

    /// Splits into the camera and layer.
    pub fn into_parts(self) -> (C, L) {
        (self.camera, self.layer)
    }
}

impl<C, L> Iterator for VisibleTiles<C, L> {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        self.tiles.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tiles.size_hint()
    }
}

impl<C, L> FusedIterator for VisibleTiles<C, L> {}
