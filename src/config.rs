//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.config/gridfacts/config.toml` (XDG standard).
//! A missing or malformed file never fails a command; defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Errors raised while reading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Global gridfacts configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default output format: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,

    /// Whether human output uses terminal colors
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_format() -> String {
    "human".to_owned()
}

const fn default_color() -> bool {
    true
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: default_color(),
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or fall back to defaults
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring config at {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
