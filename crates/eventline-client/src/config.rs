//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/eventline/config.toml` by default.

use std::path::{Path, PathBuf};

use eventline_core::{FormatOptions, RangeFilter};
use serde::{Deserialize, Serialize};

/// Configuration for the eventline client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug mode.
    pub debug: bool,

    /// Display settings.
    #[serde(default)]
    pub display: DisplaySettings,

    /// Event store settings.
    #[serde(default)]
    pub store: StoreSettings,
}

/// Display settings for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Maximum title length in the timeline (truncated with ellipsis).
    pub max_title_length: Option<usize>,

    /// Range shown by `eventline timeline` when `--range` is not given.
    pub default_range: RangeFilter,

    /// List days without events in the timeline.
    pub show_empty_days: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let format = FormatOptions::default();
        Self {
            max_title_length: format.max_title_length,
            default_range: RangeFilter::Month,
            show_empty_days: format.show_empty_days,
        }
    }
}

impl DisplaySettings {
    /// Converts to formatter options.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            max_title_length: self.max_title_length,
            show_empty_days: self.show_empty_days,
        }
    }
}

/// Event store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Path to the events file.
    pub events_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the events file path, from the config or the default location.
    pub fn events_path(&self) -> PathBuf {
        self.store
            .events_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join("events.json"))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eventline")
    }

    /// Returns the default data directory path.
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eventline")
    }
}
