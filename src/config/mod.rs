// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[clock]` - Clock face colors, density and the second-hand highlight color
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `ICED_CLOCK_CONFIG_DIR` environment variable or pass `--config-dir`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_clock::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("using default settings: {key}");
//! }
//! let style = config.clock.style.resolve();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::clock::{ClockColor, ClockStyleConfig, Density};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Clock face settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClockConfig {
    /// The seven face colors; each one falls back on its own default.
    #[serde(flatten)]
    pub style: ClockStyleConfig,

    /// Pixels per density-independent unit, clamped to a sane range.
    #[serde(default = "default_density", skip_serializing_if = "Option::is_none")]
    pub density: Option<f32>,

    /// Second-hand color while the toggle button is engaged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_color: Option<ClockColor>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            style: ClockStyleConfig::default(),
            density: default_density(),
            highlight_color: Some(DEFAULT_HIGHLIGHT_COLOR),
        }
    }
}

impl ClockConfig {
    #[must_use]
    pub fn density(&self) -> Density {
        let factor = self
            .density
            .unwrap_or(DEFAULT_DENSITY)
            .clamp(MIN_DENSITY, MAX_DENSITY);
        Density::new(factor)
    }

    #[must_use]
    pub fn highlight_color(&self) -> ClockColor {
        self.highlight_color.unwrap_or(DEFAULT_HIGHLIGHT_COLOR)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub clock: ClockConfig,
}

impl Config {
    /// Renders the configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(Error::from)
    }
}

fn default_density() -> Option<f32> {
    Some(DEFAULT_DENSITY)
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::debug!(%err, path = %path.display(), "config rejected");
                    return (Config::default(), Some("config-load-error".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, config.to_toml()?)?;
    Ok(())
}
