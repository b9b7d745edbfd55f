use std::path::Path;

use serde::Deserialize;

use crate::error::GameError;

/// Game balance. Every field is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Simulation ticks per second. The board moves one tile per tick.
    pub ticks_per_second: f64,
    pub scatter_ticks: u32,
    pub chase_ticks: u32,
    /// How long an energizer keeps ghosts frightened.
    pub scared_ticks: u32,
    pub pinky_release_ticks: u32,
    pub inky_release_ticks: u32,
    pub clyde_release_ticks: u32,
    /// Fixed RNG seed for reproducible runs. Random when unset.
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ticks_per_second: 8.0,
            scatter_ticks: 56,
            chase_ticks: 160,
            scared_ticks: 48,
            pinky_release_ticks: 0,
            inky_release_ticks: 24,
            clyde_release_ticks: 64,
            seed: None,
        }
    }
}

impl Tuning {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = std::fs::read_to_string(path)?;
        let tuning = Self::from_toml(&text).map_err(|source| GameError::Config {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Tuning from the first CLI argument if given, defaults otherwise.
    pub fn from_args() -> Result<Self, GameError> {
        match std::env::args_os().nth(1) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}
