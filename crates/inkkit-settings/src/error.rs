//! Error types for the settings crate.
//!
//! This module provides structured error types for configuration loading,
//! saving and validation.

use std::io;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The configuration file could not be saved.
    #[error("Failed to save settings: {0}")]
    SaveError(String),

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The configuration directory could not be found or created.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// The configuration file extension is neither `.toml` nor `.json`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// A setting refers to something the core does not know.
    #[error(transparent)]
    Core(#[from] inkkit_core::Error),
}

impl SettingsError {
    pub(crate) fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        SettingsError::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
