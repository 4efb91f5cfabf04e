use tilescope_view::{GridPoint, LayerDims, OrthoCamera, TileLayerInfo, VisibleTiles, ViewBounds};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .init();

    // A 10x10 layer of 8x8 tiles, viewed through a 16x16 camera
    let layer = LayerDims::new(10, 10, 8.0, 8.0);
    let camera = OrthoCamera::new(16.0, 16.0).at(40.0, 40.0);

    let view = ViewBounds::from_camera(&camera);
    println!(
        "Camera sees world x in [{:.1}, {:.1}), y in [{:.1}, {:.1})",
        view.x,
        view.x + view.width,
        view.y,
        view.y + view.height
    );

    let mut visible = VisibleTiles::new(camera, layer).unwrap();
    println!("Visible tile bounds: {}", visible.bounds());
    for tile in visible.by_ref() {
        let (px, py) = layer.tile_origin(tile);
        println!("  tile {} drawn at ({:.0}, {:.0})", tile, px, py);
    }

    // Walk the camera off the bottom-left corner of the map
    let mut scratch = GridPoint::default();
    for step in 0..4 {
        let pos = 40.0 - step as f32 * 30.0;
        visible.camera_mut().set_position(pos, pos);
        visible.reset().unwrap();
        let mut count = 0;
        while visible.next_into(&mut scratch) {
            count += 1;
        }
        println!(
            "Camera at ({:.0}, {:.0}): {} visible tiles in {}",
            pos,
            pos,
            count,
            visible.bounds()
        );
    }
}
