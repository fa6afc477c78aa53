// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[wizard]` - Presentation variant
//! - `[upload]` - Simulated upload timing
//! - `[display]` - Backdrop animation
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. CLI `--config-dir`
//! 3. Set `PHOTO_UPLOADER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use photo_uploader::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("upload delay: {:?}", config.upload.delay());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use crate::wizard::Variant;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "he").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Wizard presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WizardConfig {
    #[serde(default)]
    pub variant: Variant,
}

/// Simulated upload settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// Delay before the simulated upload reports success.
    #[serde(
        default = "default_upload_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub simulated_delay_ms: Option<u64>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_upload_delay_ms(),
        }
    }
}

impl UploadConfig {
    /// Effective delay, clamped to the supported range.
    #[must_use]
    pub fn delay(&self) -> Duration {
        let ms = self
            .simulated_delay_ms
            .unwrap_or(DEFAULT_UPLOAD_DELAY_MS)
            .clamp(MIN_UPLOAD_DELAY_MS, MAX_UPLOAD_DELAY_MS);
        Duration::from_millis(ms)
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Whether the gradient backdrop drifts over time.
    #[serde(
        default = "default_animate_background",
        skip_serializing_if = "Option::is_none"
    )]
    pub animate_background: Option<bool>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            animate_background: default_animate_background(),
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
    pub general: GeneralConfig,

    #[serde(default)]
    pub wizard: WizardConfig,

    #[serde(default)]
    pub upload: UploadConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_upload_delay_ms() -> Option<u64> {
    Some(DEFAULT_UPLOAD_DELAY_MS)
}

fn default_animate_background() -> Option<bool> {
    Some(true)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with the i18n key of a warning to show.
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
                    log::warn!("ignoring unreadable config {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
