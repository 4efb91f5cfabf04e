use macroquad::prelude::*;
use tracing::{debug, info};

use tilescope_grid::GridPoint;
use tilescope_view::{OrthoCamera, TileLayerInfo, ViewBounds, VisibleTiles};

use crate::config::ViewerConfig;
use crate::world::{DemoMap, Player, Terrain, land_markers};

const WORLD_BACKGROUND: Color = LIGHTGRAY;
const SCREEN_BACKGROUND: Color = DARKGRAY;
const ZOOM_STEP: f32 = 1.25;
const MIN_ZOOM: f32 = 0.25;
const MAX_ZOOM: f32 = 8.0;

// Function to configure the macroquad window
pub fn window_conf() -> Conf {
    Conf {
        window_title: "Tilescope".to_string(),
        window_width: 640,
        window_height: 640,
        high_dpi: true,
        ..Default::default()
    }
}

/// Maps world coordinates (y up) onto the screen, letterboxed to keep the
/// camera's aspect ratio.
struct ScreenTransform {
    centre: Vec2,
    camera: Vec2,
    scale: f32,
}

impl ScreenTransform {
    fn fit(view: &ViewBounds, camera: &OrthoCamera) -> Self {
        let scale = (screen_width() / view.width).min(screen_height() / view.height);
        Self {
            centre: vec2(screen_width() / 2.0, screen_height() / 2.0),
            camera: vec2(camera.x, camera.y),
            scale,
        }
    }

    /// Screen rectangle of the world rectangle with lower-left `(x, y)`.
    fn rect(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(
            self.centre.x + (x - self.camera.x) * self.scale,
            self.centre.y - (y + h - self.camera.y) * self.scale,
            w * self.scale,
            h * self.scale,
        )
    }
}

fn tile_rect(transform: &ScreenTransform, map: &DemoMap, tile: GridPoint) -> Rect {
    let (x, y) = map.tile_origin(tile);
    transform.rect(x, y, map.tile_width(), map.tile_height())
}

fn handle_input(player: &mut Player, camera: &mut OrthoCamera, map: &DemoMap) -> bool {
    let moves = [
        (KeyCode::Left, -1, 0),
        (KeyCode::Right, 1, 0),
        (KeyCode::Up, 0, 1),
        (KeyCode::Down, 0, -1),
    ];
    for (key, dx, dy) in moves {
        if is_key_pressed(key) {
            player.step(dx, dy, map);
            debug!(tile = %player.tile, "player moved");
        }
    }
    if is_key_pressed(KeyCode::Equal) {
        camera.zoom = (camera.zoom / ZOOM_STEP).max(MIN_ZOOM);
        debug!(zoom = camera.zoom, "zoomed in");
    }
    if is_key_pressed(KeyCode::Minus) {
        camera.zoom = (camera.zoom * ZOOM_STEP).min(MAX_ZOOM);
        debug!(zoom = camera.zoom, "zoomed out");
    }
    !is_key_pressed(KeyCode::Escape)
}

/// Draws the visible part of the map every frame and overlays a red, white
/// outlined marker on each visible tile whose lower-left neighbour is land.
pub async fn run_render_loop(config: ViewerConfig) -> anyhow::Result<()> {
    let map = DemoMap::from_config(&config);
    let (px, py) = config.player_start();
    let mut player = Player::new(GridPoint::new(px, py));
    player.step(0, 0, &map);

    let camera =
        OrthoCamera::new(config.virtual_width, config.virtual_height).with_zoom(config.zoom);
    let mut visible = VisibleTiles::with_unit_scale(camera, map, config.unit_scale)?;

    info!(start = %player.tile, "Render loop starting...");

    loop {
        if !handle_input(&mut player, visible.camera_mut(), &map) {
            info!("Escape pressed, leaving render loop.");
            return Ok(());
        }
        visible.camera_mut().look_at_tile(player.tile, &map, config.unit_scale);
        let markers = land_markers(&mut visible)?;

        let camera = *visible.camera();
        let view = ViewBounds::from_camera(&camera);
        let transform = ScreenTransform::fit(&view, &camera);

        clear_background(SCREEN_BACKGROUND);
        let backdrop = transform.rect(view.x, view.y, view.width, view.height);
        draw_rectangle(backdrop.x, backdrop.y, backdrop.w, backdrop.h, WORLD_BACKGROUND);

        // The marker pass above exhausted the iterator, walk the same bounds again.
        for tile in visible.bounds() {
            let r = tile_rect(&transform, &map, tile);
            let color = match map.terrain(tile) {
                Terrain::Land => GREEN,
                Terrain::Water => BLUE,
            };
            draw_rectangle(r.x, r.y, r.w, r.h, color);
        }

        for tile in &markers {
            let r = tile_rect(&transform, &map, *tile);
            draw_rectangle(r.x, r.y, r.w, r.h, RED);
            draw_rectangle_lines(r.x, r.y, r.w, r.h, transform.scale.max(1.0), WHITE);
        }

        let player_rect = tile_rect(&transform, &map, player.tile);
        draw_rectangle_lines(
            player_rect.x,
            player_rect.y,
            player_rect.w,
            player_rect.h,
            2.0,
            YELLOW,
        );

        draw_text(
            &format!(
                "Player: {}  visible: {} ({} tiles, {} markers)  zoom: {:.2}",
                player.tile,
                visible.bounds(),
                visible.bounds().len(),
                markers.len(),
                camera.zoom
            ),
            10.0,
            20.0,
            20.0,
            WHITE,
        );
        draw_text("arrows: move   = / -: zoom   esc: quit", 10.0, 40.0, 20.0, WHITE);

        next_frame().await
    }
}
