//! Configuration management for Remotui
//!
//! Handles config file loading/saving. Config is stored at
//! ~/.config/remotui/config.toml; missing or unknown fields fall back to
//! defaults so old config files keep working.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ui::starfield::{DEFAULT_SEED, DEFAULT_STAR_COUNT};

/// Cells moved per key press in the terminal shell
///
/// The cursor controller's own default step is sized for pixel-space hosts;
/// in cell space a smaller step is comfortable.
pub const DEFAULT_CELL_STEP: f32 = 2.0;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cursor step size in cells per key press
    pub step_size: f32,
    /// Number of stars in the backdrop
    pub star_count: u16,
    /// Star layout seed (same seed, same sky)
    pub star_seed: u64,
    /// Whether the starfield backdrop is drawn
    pub starfield: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_CELL_STEP,
            star_count: DEFAULT_STAR_COUNT,
            star_seed: DEFAULT_SEED,
            starfield: true,
        }
    }
}

impl Config {
    /// Get config file path (~/.config/remotui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("remotui").join("config.toml"))
    }

    /// Load config from the default path, or return defaults if missing or
    /// unreadable (best effort, never fails)
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| Self::load_from(&p).ok())
            .unwrap_or_default()
    }

    /// Load config from a specific path, surfacing IO and parse errors
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to a specific path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }
}
