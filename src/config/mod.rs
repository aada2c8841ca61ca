use serde::Deserialize;
use std::path::PathBuf;

/// Built-in defaults shared by the CLI and the config file.
///
/// The generated set matches what the renderer expects to load from
/// `assets/models/primitives/`: a ground tile, a tower base cube, and a
/// barn roof pyramid.
pub mod defaults {
    /// Half-extent of the square ground tile
    pub const TILE_HALF_EXTENT: f32 = 0.5;

    /// Half-extent of the tower base cube
    pub const CUBE_HALF_EXTENT: f32 = 0.45;

    /// Side length of the roof pyramid's square base
    pub const PYRAMID_BASE: f32 = 0.6;

    /// Height of the roof pyramid apex above its base
    pub const PYRAMID_HEIGHT: f32 = 0.5;

    /// Directory the generated models are written to
    pub const OUTPUT_DIR: &str = "assets/models/primitives";
}

fn default_tile_size() -> f32 {
    defaults::TILE_HALF_EXTENT
}
fn default_cube_size() -> f32 {
    defaults::CUBE_HALF_EXTENT
}
fn default_pyramid_base() -> f32 {
    defaults::PYRAMID_BASE
}
fn default_pyramid_height() -> f32 {
    defaults::PYRAMID_HEIGHT
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
    #[serde(default = "default_cube_size")]
    pub cube_size: f32,
    #[serde(default = "default_pyramid_base")]
    pub pyramid_base: f32,
    #[serde(default = "default_pyramid_height")]
    pub pyramid_height: f32,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("primgen.toml"));
    paths.push(PathBuf::from(".primgen.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("primgen").join("config.toml"));
        paths.push(config_dir.join("primgen.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".primgen.toml"));
        paths.push(home.join(".config").join("primgen").join("config.toml"));
    }

    paths
}
