//! Configuration and settings management for ShapeKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform-specific config directory.
//!
//! Configuration is organized into logical sections:
//! - Scene settings (precision, default appearance)
//! - Logging (level filter, output format)
//! - Interaction preferences (scale drag variant)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use shapekit_core::{AppearanceSettings, PrecisionSettings, SceneConfig};

use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "shapekit";
const CONFIG_FILE: &str = "config.toml";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level filter, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// How a scale drag derives each new transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Recompute from the transform captured at drag start
    #[default]
    Snapshot,
    /// Accumulate from the previous move; drifts on long drags
    Incremental,
}

/// Interaction preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    pub canonical_scale: ScaleMode,
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Recent files list, most recent first
    pub recent_files: Vec<PathBuf>,
    /// Maximum length of the recent files list
    pub max_recent_files: usize,
    /// Scene settings
    pub scene: SceneConfig,
    /// Logging settings
    pub logging: LoggingSettings,
    /// Interaction preferences
    pub interaction: InteractionSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_files: Vec::new(),
            max_recent_files: 10,
            scene: SceneConfig::default(),
            logging: LoggingSettings::default(),
            interaction: InteractionSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the config file inside the platform config directory.
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or(SettingsError::ConfigDirectory)?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load config from file (JSON or TOML, by extension)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML, by extension)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let precision = &self.scene.precision;
        if !(precision.tiny_magnitude > 0.0) {
            return Err(SettingsError::invalid(
                "scene.precision.tiny_magnitude",
                "must be > 0",
            ));
        }
        if !(precision.tolerance > 0.0) {
            return Err(SettingsError::invalid(
                "scene.precision.tolerance",
                "must be > 0",
            ));
        }

        let appearance = &self.scene.appearance;
        if !(0.0..=1.0).contains(&appearance.opacity) {
            return Err(SettingsError::invalid(
                "scene.appearance.opacity",
                "must be within [0, 1]",
            ));
        }
        if !(appearance.line_width >= 0.0) {
            return Err(SettingsError::invalid(
                "scene.appearance.line_width",
                "must be >= 0",
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(SettingsError::invalid(
                "logging.level",
                format!("unknown level '{}'", self.logging.level),
            ));
        }

        if self.max_recent_files == 0 {
            return Err(SettingsError::invalid("max_recent_files", "must be > 0"));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_files.retain(|f| f != &path);

        // Add to front
        self.recent_files.insert(0, path);

        // Trim to max size
        self.recent_files.truncate(self.max_recent_files);
    }
}
