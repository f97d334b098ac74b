//! Configuration file support
//!
//! Loads configuration from TOML file at ~/.config/picklist/config.toml
//! Falls back to defaults if the file doesn't exist or can't be parsed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants;

/// Configuration file path relative to home
const CONFIG_SUBDIR: &str = ".config/picklist";
const CONFIG_FILE: &str = "config.toml";

/// Picklist configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Title drawn on the list border
    pub title: String,

    /// How often the items file is checked for changes (milliseconds)
    pub watch_interval_ms: u64,

    /// Items file used when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: constants::DEFAULT_TITLE.to_string(),
            watch_interval_ms: constants::DEFAULT_WATCH_INTERVAL_MS,
            items_file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `path`, or return defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Generate example configuration content
    pub fn example_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the configuration file path
pub fn config_file_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(CONFIG_SUBDIR).join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from("/tmp/picklist.toml"))
}
