// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[display]` - Sorting and thumbnail strip
//! - `[gestures]` - Swipe recognition
//! - `[timing]` - Click suppression after a swipe
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI flag or `LENS_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use lens_gallery::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.gestures.swipe_min_distance = Some(60.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::{SuppressionWindow, SwipeThreshold};
use crate::error::{Error, Result};
use crate::gallery::GallerySettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Gallery display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Slide ordering when a directory is scanned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Whether the thumbnail strip is shown.
    #[serde(
        default = "default_show_thumbnails",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_thumbnails: Option<bool>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sort_order: Some(SortOrder::default()),
            show_thumbnails: default_show_thumbnails(),
        }
    }
}

/// Pointer gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GesturesConfig {
    /// Minimum horizontal travel (px) for a swipe.
    #[serde(
        default = "default_swipe_min_distance",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_min_distance: Option<f32>,
}

impl Default for GesturesConfig {
    fn default() -> Self {
        Self {
            swipe_min_distance: default_swipe_min_distance(),
        }
    }
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// How long a click after a swipe is ignored (ms).
    #[serde(
        default = "default_click_suppression_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub click_suppression_ms: Option<u32>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            click_suppression_ms: default_click_suppression_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub gestures: GesturesConfig,

    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Gallery tunables derived from this configuration, clamped to range.
    #[must_use]
    pub fn gallery_settings(&self) -> GallerySettings {
        GallerySettings {
            swipe_threshold: SwipeThreshold::new(
                self.gestures
                    .swipe_min_distance
                    .unwrap_or(DEFAULT_SWIPE_MIN_DISTANCE),
            ),
            suppression_window: SuppressionWindow::new(
                self.timing
                    .click_suppression_ms
                    .unwrap_or(DEFAULT_CLICK_SUPPRESSION_MS),
            ),
            alt_prefix: DEFAULT_ALT_PREFIX.to_string(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_show_thumbnails() -> Option<bool> {
    Some(DEFAULT_SHOW_THUMBNAILS)
}

fn default_swipe_min_distance() -> Option<f32> {
    Some(DEFAULT_SWIPE_MIN_DISTANCE)
}

fn default_click_suppression_ms() -> Option<u32> {
    Some(DEFAULT_CLICK_SUPPRESSION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
                    );
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

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            display: DisplayConfig {
                sort_order: Some(SortOrder::ModifiedDate),
                show_thumbnails: Some(false),
            },
            gestures: GesturesConfig {
                swipe_min_distance: Some(60.0),
            },
            timing: TimingConfig {
                click_suppression_ms: Some(400),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_warns_and_defaults_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[timing\n").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_default_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[gestures]\nswipe_min_distance = 80.0\n")
            .expect("partial config parses");
        assert_eq!(config.gestures.swipe_min_distance, Some(80.0));
        assert_eq!(
            config.timing.click_suppression_ms,
            Some(DEFAULT_CLICK_SUPPRESSION_MS)
        );
        assert_eq!(config.display.show_thumbnails, Some(true));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn gallery_settings_clamp_out_of_range_values() {
        let config = Config {
            gestures: GesturesConfig {
                swipe_min_distance: Some(-5.0),
            },
            timing: TimingConfig {
                click_suppression_ms: Some(90_000),
            },
            ..Config::default()
        };
        let settings = config.gallery_settings();
        assert_eq!(settings.swipe_threshold.value(), MIN_SWIPE_MIN_DISTANCE);
        assert_eq!(
            settings.suppression_window.as_duration(),
            Duration::from_millis(u64::from(MAX_CLICK_SUPPRESSION_MS))
        );
    }

    #[test]
    fn default_gallery_settings_match_defaults() {
        let settings = Config::default().gallery_settings();
        assert_eq!(settings, GallerySettings::default());
    }
}
