// SPDX-License-Identifier: MPL-2.0
//! Application configuration stored in `settings.toml`.
//!
//! Settings are grouped into sections:
//! - `[alerts]` - Stack capacity, request defaults, Escape and stack release
//! - `[diagnostics]` - Lifecycle event buffer
//!
//! # Path Resolution Order
//!
//! 1. **Explicit path** passed to [`load_from_path`] / [`save_to_path`]
//! 2. **Environment variable** `ICED_ALERTS_CONFIG_DIR`
//! 3. **Platform default** via the `dirs` crate (`<config dir>/IcedAlerts`)
//!
//! # Examples
//!
//! ```no_run
//! use iced_alerts::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.alerts.max_per_stack = Some(3);
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::alerts::AlertSettings;
use crate::domain::alert::{Direction, Position, StackCapacity};
use crate::domain::diagnostics::BufferCapacity;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
pub const APP_NAME: &str = "IcedAlerts";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_ALERTS_CONFIG_DIR";

/// `[alerts]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertsConfig {
    /// Maximum alerts per position before the oldest is evicted.
    pub max_per_stack: Option<usize>,
    /// Auto-dismiss delay applied to requests built from settings. `0` keeps alerts open.
    pub default_timeout_ms: Option<u64>,
    /// Position name, e.g. `"top-right"`.
    pub default_position: Option<String>,
    /// `"ltr"` or `"rtl"`.
    pub default_direction: Option<String>,
    /// Whether Escape closes every open alert.
    pub escape_closes_all: bool,
    /// Whether empty stacks are handed back to the renderer.
    pub release_empty_stacks: bool,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            max_per_stack: Some(DEFAULT_MAX_ALERTS),
            default_timeout_ms: Some(DEFAULT_TIMEOUT_MS),
            default_position: Some(Position::default().as_str().to_string()),
            default_direction: Some(Direction::default().as_str().to_string()),
            escape_closes_all: true,
            release_empty_stacks: false,
        }
    }
}

/// `[diagnostics]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Number of lifecycle events kept in memory.
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub alerts: AlertsConfig,
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Resolves the `[alerts]` section into service settings.
    ///
    /// Out-of-range capacities are clamped and unknown names fall back to
    /// their defaults.
    #[must_use]
    pub fn alert_settings(&self) -> AlertSettings {
        let alerts = &self.alerts;
        AlertSettings {
            capacity: alerts
                .max_per_stack
                .map(StackCapacity::new)
                .unwrap_or_default(),
            default_timeout_ms: alerts.default_timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
            default_position: alerts
                .default_position
                .as_deref()
                .map(Position::parse)
                .unwrap_or_default(),
            default_direction: alerts
                .default_direction
                .as_deref()
                .map(Direction::parse)
                .unwrap_or_default(),
            escape_closes_all: alerts.escape_closes_all,
            release_empty_stacks: alerts.release_empty_stacks,
        }
    }

    /// Clamped diagnostics buffer capacity.
    #[must_use]
    pub fn diagnostics_capacity(&self) -> BufferCapacity {
        self.diagnostics
            .buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }
}

/// Returns the config directory, honoring `ICED_ALERTS_CONFIG_DIR`.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|path| path.join(APP_NAME))
}

fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads settings from the default location, or defaults if none exist.
pub fn load() -> Result<Config> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves settings to the default location.
pub fn save(config: &Config) -> Result<()> {
    match default_config_path() {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".into())),
    }
}

/// Loads settings from `path`. Invalid TOML yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let mut config = Config::default();
        config.alerts.max_per_stack = Some(3);
        config.alerts.default_position = Some("top-left".to_string());
        config.alerts.release_empty_stacks = true;
        config.diagnostics.buffer_capacity = Some(64);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_keys_use_section_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[alerts]\nmax_per_stack = 2\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.alerts.max_per_stack, Some(2));
        assert!(loaded.alerts.escape_closes_all);
        assert_eq!(loaded.diagnostics, DiagnosticsConfig::default());
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn alert_settings_normalize_values() {
        let mut config = Config::default();
        config.alerts.max_per_stack = Some(500);
        config.alerts.default_position = Some("somewhere".to_string());
        config.alerts.default_direction = Some("rtl".to_string());

        let settings = config.alert_settings();
        assert_eq!(settings.capacity.value(), MAX_MAX_ALERTS);
        assert_eq!(settings.default_position, Position::BottomRight);
        assert_eq!(settings.default_direction, Direction::RightToLeft);
        assert_eq!(settings.default_timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn default_settings_match_defaults() {
        let settings = Config::default().alert_settings();
        assert_eq!(settings, AlertSettings::default());
        assert_eq!(
            Config::default().diagnostics_capacity(),
            BufferCapacity::default()
        );
    }
}
