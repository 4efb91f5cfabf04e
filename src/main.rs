mod config;   // viewer settings, `config/default.toml` + environment
mod graphics; // macroquad render loop
mod world;    // demo map, player and marker selection

use graphics::window_conf;

use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Tilescope started.");

    let config = config::load_config_or_default(config::DEFAULT_CONFIG_PATH);

    match graphics::run_render_loop(config).await {
        Ok(()) => info!("Tilescope finished."),
        Err(e) => error!("Render loop failed: {:#}", e),
    }
}
