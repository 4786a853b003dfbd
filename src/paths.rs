//! Centralized path definitions for gridfacts
//!
//! ```text
//! ~/.config/gridfacts/
//! └── config.toml               # User preferences
//! ```

use std::path::PathBuf;

/// Global config directory (`~/.config/gridfacts`)
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gridfacts")
}

/// Global config file (`~/.config/gridfacts/config.toml`)
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join("config.toml")
}
