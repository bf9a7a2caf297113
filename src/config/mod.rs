pub mod core;
pub mod worldgen;

pub use self::core::WorldConfig;
pub use worldgen::WorldGenConfig;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub worldgen: WorldGenConfig,
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "MetroManDevTeam", "sandvox")
            .map(|dirs| dirs.config_dir().join("sandvox.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Loads the config from the default location, falling back to defaults
    /// when it is missing or malformed.
    pub fn load_or_default() -> Self {
        match Self::default_path() {
            Some(path) if path.exists() => match Self::load(&path) {
                Ok(config) => config,
                Err(err) => {
                    warn!("{:#}; using default config", err);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip() {
        let config = Config::default();
        let raw = toml::to_string(&config).expect("serializes");
        let parsed: Config = toml::from_str(&raw).expect("parses");
        assert_eq!(parsed.world.sector_size, config.world.sector_size);
        assert_eq!(parsed.worldgen.hill_count, config.worldgen.hill_count);
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("[world]\nsector_size = 32\nticks_per_sec = 30\nmax_distance = 8\nsector_pad = 4\n").expect("parses");
        assert_eq!(parsed.world.sector_size, 32);
        assert_eq!(parsed.worldgen.ground_radius, 80);
    }

    #[test]
    fn load_reads_a_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sandvox.toml");
        fs::write(
            &path,
            "[worldgen]\nworld_seed = 7\nground_radius = 10\nground_level = 0\nhill_count = 2\nhill_margin = 2\nhill_height_min = 1\nhill_height_max = 3\nhill_size_min = 2\nhill_size_max = 4\nspawn_clearing = 3\nheight_variation = 0.0\nnoise_scale = 0.03\n",
        )
        .expect("write");

        let config = Config::load(&path).expect("loads");
        assert_eq!(config.worldgen.world_seed, 7);
        assert_eq!(config.world.sector_size, 16);
    }

    #[test]
    fn load_of_missing_file_is_an_error() {
        assert!(Config::load(Path::new("/definitely/not/there.toml")).is_err());
    }
}
