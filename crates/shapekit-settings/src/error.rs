//! Error types for the settings crate.

use std::io;
use thiserror::Error;

/// Errors raised while loading, saving or validating configuration.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// I/O error reading or writing a config file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A setting failed validation.
    #[error("Invalid setting '{key}': {reason}")]
    Validation { key: String, reason: String },

    /// The platform config directory could not be determined.
    #[error("Config directory not found")]
    ConfigDirectory,
}

impl SettingsError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        SettingsError::Validation {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
