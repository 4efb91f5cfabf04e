use anyhow::{Context, ensure};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "TILESCOPE";

/// Settings for the demo viewer. Every field has a default, so the config
/// file and environment only need to name what they change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Map width in tiles.
    pub map_width: i32,
    /// Map height in tiles.
    pub map_height: i32,
    /// Tile width in world units.
    pub tile_width: f32,
    /// Tile height in world units.
    pub tile_height: f32,
    /// Width of the world view in world units at zoom 1.
    pub virtual_width: f32,
    /// Height of the world view in world units at zoom 1.
    pub virtual_height: f32,
    pub zoom: f32,
    /// Multiplier applied to tile sizes before culling.
    pub unit_scale: f32,
    /// Starting tile; defaults to the middle of the map.
    pub player_x: Option<i32>,
    pub player_y: Option<i32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            map_width: 128,
            map_height: 128,
            tile_width: 8.0,
            tile_height: 8.0,
            virtual_width: 128.0,
            virtual_height: 128.0,
            zoom: 1.0,
            unit_scale: 1.0,
            player_x: None,
            player_y: None,
        }
    }
}

impl ViewerConfig {
    pub fn player_start(&self) -> (i32, i32) {
        (
            self.player_x.unwrap_or(self.map_width / 2),
            self.player_y.unwrap_or(self.map_height / 2),
        )
    }

    fn validate(self) -> anyhow::Result<Self> {
        ensure!(
            self.map_width > 0 && self.map_height > 0,
            "map size must be positive, got {}x{}",
            self.map_width,
            self.map_height
        );
        ensure!(
            positive_finite(self.tile_width) && positive_finite(self.tile_height),
            "tile size must be finite and positive, got {}x{}",
            self.tile_width,
            self.tile_height
        );
        ensure!(
            positive_finite(self.virtual_width) && positive_finite(self.virtual_height),
            "virtual viewport must be finite and positive, got {}x{}",
            self.virtual_width,
            self.virtual_height
        );
        ensure!(positive_finite(self.zoom), "zoom must be finite and positive, got {}", self.zoom);
        ensure!(
            positive_finite(self.unit_scale),
            "unit scale must be finite and positive, got {}",
            self.unit_scale
        );
        Ok(self)
    }
}

fn positive_finite(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

/// Loads `path` (optional) with `TILESCOPE_*` environment overrides on top.
pub fn load_config(path: &str) -> anyhow::Result<ViewerConfig> {
    info!("Attempting to load configuration from {}", path);
    let builder = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

    let config =
        build(builder).with_context(|| format!("failed to load configuration from {path}"))?;
    info!(?config, "Successfully loaded configuration");
    Ok(config)
}

/// Loads configuration, falling back to defaults if it cannot be read or is invalid.
pub fn load_config_or_default(path: &str) -> ViewerConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{:#}. Falling back to defaults.", e);
            ViewerConfig::default()
        }
    }
}

fn build(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<ViewerConfig> {
    let config: ViewerConfig = builder.build()?.try_deserialize()?;
    config.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> anyhow::Result<ViewerConfig> {
        build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(from_toml("").unwrap(), ViewerConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = from_toml("zoom = 2.5\nmap_width = 64\nplayer_x = 3\n").unwrap();
        assert_eq!(config.zoom, 2.5);
        assert_eq!(config.map_width, 64);
        assert_eq!(config.tile_width, 8.0);
        assert_eq!(config.player_start(), (3, 64));
    }

    #[test]
    fn test_player_start_defaults_to_centre() {
        assert_eq!(ViewerConfig::default().player_start(), (64, 64));
    }

    #[test]
    fn test_rejects_invalid_values() {
        for bad in [
            "zoom = 0.0",
            "tile_width = -8.0",
            "map_height = 0",
            "unit_scale = 0.0",
            "virtual_width = 0.0",
        ] {
            assert!(from_toml(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_rejects_non_finite_values() {
        for bad in [
            "zoom = inf",
            "zoom = nan",
            "tile_width = inf",
            "tile_height = -inf",
            "virtual_height = inf",
            "unit_scale = inf",
        ] {
            assert!(from_toml(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        // Same file source as `load_config`, without the process environment.
        let builder = Config::builder()
            .add_source(File::new("config/does-not-exist.toml", FileFormat::Toml).required(false));
        assert_eq!(build(builder).unwrap(), ViewerConfig::default());
    }
}
