use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DEFAULT_TICK_MS;
use crate::error::{Error, Result};

/// Runtime settings, read from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Gravity interval in milliseconds.
    pub tick_ms: u64,
    /// Fixed seed for the piece sequence; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Draw the landing preview under the active piece.
    pub show_ghost: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_ghost: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Write logs under the data directory. The terminal belongs to the UI,
    /// so there is no stderr fallback.
    pub file_logging: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "stratoblocks=info".to_string(),
            file_logging: true,
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        super::config_dir()
            .map(|p| p.join("config.toml"))
            .unwrap_or_else(|_| PathBuf::from("config.toml"))
    }

    /// Loads from `path` (or the default location). A missing file yields
    /// defaults; an unreadable or malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&config_path)?;
        let settings = Self::from_toml(&content)?;
        debug!(path = %config_path.display(), "loaded config");
        Ok(settings)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.game.tick_ms == 0 {
            return Err(Error::config("game.tick_ms must be greater than zero"));
        }
        Ok(())
    }
}
