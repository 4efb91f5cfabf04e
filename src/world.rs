//! The demo world: a checkerboard of land and water tiles and a player to follow.

use tilescope_grid::GridPoint;
use tilescope_view::{CameraView, LayerDims, TileLayerInfo, ViewError, VisibleTiles};

use crate::config::ViewerConfig;

/// What a tile is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    /// Drawn green, gets a marker overlay.
    Land,
    /// Drawn blue.
    Water,
}

/// Land sits on odd columns of odd rows. Uses remainder semantics, so
/// negative coordinates are never land.
pub fn is_land(x: i32, y: i32) -> bool {
    x % 2 == 1 && y % 2 == 1
}

/// A synthetic tile map; terrain is a function of the tile index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoMap {
    layer: LayerDims,
}

impl DemoMap {
    /// Builds the map described by `config`.
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            layer: LayerDims::new(
                config.map_width,
                config.map_height,
                config.tile_width,
                config.tile_height,
            ),
        }
    }

    /// Terrain of `tile`.
    pub fn terrain(&self, tile: GridPoint) -> Terrain {
        if is_land(tile.x, tile.y) { Terrain::Land } else { Terrain::Water }
    }
}

impl TileLayerInfo for DemoMap {
    fn width(&self) -> i32 {
        self.layer.width
    }

    fn height(&self) -> i32 {
        self.layer.height
    }

    fn tile_width(&self) -> f32 {
        self.layer.tile_width
    }

    fn tile_height(&self) -> f32 {
        self.layer.tile_height
    }
}

/// The tile the camera follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    /// Current tile.
    pub tile: GridPoint,
}

impl Player {
    /// Places the player at `tile`.
    pub fn new(tile: GridPoint) -> Self {
        Self { tile }
    }

    /// Moves by `(dx, dy)` tiles, staying on the map.
    pub fn step(&mut self, dx: i32, dy: i32, map: &impl TileLayerInfo) {
        let x = (self.tile.x + dx).clamp(0, (map.width() - 1).max(0));
        let y = (self.tile.y + dy).clamp(0, (map.height() - 1).max(0));
        self.tile.set(x, y);
    }
}

/// Recomputes the visible tiles and returns the ones to draw a marker on.
///
/// A visible tile `(x, y)` gets a marker when `(x - 1, y - 1)` is land, so the
/// markers sit one tile up and to the right of each land tile.
pub fn land_markers<C: CameraView, L: TileLayerInfo>(
    visible: &mut VisibleTiles<C, L>,
) -> Result<Vec<GridPoint>, ViewError> {
    Ok(visible
        .reset()?
        .by_ref()
        .filter(|p| is_land(p.x - 1, p.y - 1))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilescope_view::OrthoCamera;

    fn small_map() -> DemoMap {
        DemoMap { layer: LayerDims::new(10, 10, 8.0, 8.0) }
    }

    #[test]
    fn test_is_land_checkerboard() {
        assert!(is_land(1, 1));
        assert!(is_land(3, 5));
        assert!(!is_land(0, 1));
        assert!(!is_land(1, 2));
        assert!(!is_land(-1, -1));
        assert!(!is_land(-1, 1));
    }

    #[test]
    fn test_terrain() {
        let map = small_map();
        assert_eq!(map.terrain(GridPoint::new(5, 7)), Terrain::Land);
        assert_eq!(map.terrain(GridPoint::new(4, 7)), Terrain::Water);
    }

    #[test]
    fn test_player_stays_on_map() {
        let map = small_map();
        let mut player = Player::new(GridPoint::new(0, 9));
        player.step(-1, 1, &map);
        assert_eq!(player.tile, GridPoint::new(0, 9));
        player.step(3, -4, &map);
        assert_eq!(player.tile, GridPoint::new(3, 5));
    }

    #[test]
    fn test_markers_follow_land_offset() {
        let map = small_map();
        let cam = OrthoCamera::new(16.0, 16.0).at(40.0, 40.0);
        let mut visible = VisibleTiles::new(cam, map).unwrap();
        // Visible columns and rows are [4, 7); land at (3|5, 3|5) marks (4|6, 4|6).
        let expected: Vec<GridPoint> =
            [(4, 6), (6, 6), (4, 4), (6, 4)].into_iter().map(Into::into).collect();
        assert_eq!(land_markers(&mut visible).unwrap(), expected);
    }

    #[test]
    fn test_markers_at_map_corner() {
        let map = small_map();
        let cam = OrthoCamera::new(32.0, 32.0).at(0.0, 0.0);
        let mut visible = VisibleTiles::new(cam, map).unwrap();
        // Visible [0, 3) x [0, 3): (2, 2) is the only tile whose lower-left neighbour is land.
        assert_eq!(land_markers(&mut visible).unwrap(), vec![GridPoint::new(2, 2)]);
    }

    #[test]
    fn test_markers_recomputed_after_camera_moves() {
        let map = small_map();
        let cam = OrthoCamera::new(16.0, 16.0).at(-100.0, -100.0);
        let mut visible = VisibleTiles::new(cam, map).unwrap();
        assert!(land_markers(&mut visible).unwrap().is_empty());

        visible.camera_mut().look_at_tile(GridPoint::new(5, 5), &map, 1.0);
        // Centre (44, 44): visible [4, 7) x [4, 7) again.
        assert_eq!(land_markers(&mut visible).unwrap().len(), 4);
        assert!(visible.bounds().contains(GridPoint::new(6, 6)));
    }
}
