//! Settings manager
//!
//! Resolves the platform configuration directory and loads or saves the
//! configuration file there.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const APP_DIR: &str = "inkkit";
const CONFIG_FILE: &str = "config.toml";

/// Owns the current configuration and the file it belongs to.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    path: PathBuf,
    config: Config,
}

impl SettingsManager {
    /// Platform configuration directory for InkKit.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Default configuration file path.
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Creates the configuration directory if needed.
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
        Ok(dir)
    }

    /// Loads the configuration at `path`, falling back to defaults if the file
    /// is missing or broken.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = if path.exists() {
            match Config::load_from_file(&path) {
                Ok(config) => {
                    info!(path = %path.display(), "loaded settings");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load settings, using defaults");
                    Config::default()
                }
            }
        } else {
            info!(path = %path.display(), "no settings file, using defaults");
            Config::default()
        };

        Self { path, config }
    }

    /// Loads the configuration from the default location.
    pub fn load_default_location() -> SettingsResult<Self> {
        Ok(Self::load_or_default(Self::config_file_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Writes the configuration back to its file.
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.config
            .save_to_file(&self.path)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", self.path.display(), e)))
    }
}
