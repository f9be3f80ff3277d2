//! rk_config - Configuration for Rakshak
//!
//! This crate provides:
//! - TOML config loading with full defaults
//! - Config directory resolution
//! - The volatile settings toggle store backing the Settings screen

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod settings;

pub use settings::{SettingKey, SettingsStore};

/// Config errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Top-level configuration loaded from `config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RkConfig {
    pub general: GeneralConfig,
    pub ui: UiConfig,
}

/// General settings: the home area the demo feed is scoped to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Display name for the user's home area
    pub location_name: String,
    /// Home latitude
    pub latitude: f64,
    /// Home longitude
    pub longitude: f64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            location_name: "San Francisco, CA".to_string(),
            latitude: 37.7749,
            longitude: -122.4194,
        }
    }
}

/// UI behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show the onboarding flow on startup
    pub show_onboarding: bool,
    /// Event loop poll interval in milliseconds
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_onboarding: true,
            tick_ms: 250,
        }
    }
}

impl RkConfig {
    /// Default config file location (`~/.config/rakshak/config.toml`)
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rakshak")
            .join("config.toml")
    }

    /// Load config from a file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from an explicit path or the default location
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Self::load(&Self::default_path()),
        }
    }
}
