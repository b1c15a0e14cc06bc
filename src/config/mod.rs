//! Configuration loading.
//!
//! `respiro` reads an optional TOML file from
//! `~/.config/respiro/config.toml` (via `dirs::config_dir`). A missing
//! file means defaults; a present file must parse and validate.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{BreathingTechnique, CatalogError, TechniqueCatalog};
use crate::session::DEFAULT_SESSION_DURATION_SECONDS;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {message}")]
    ValidationError { message: String },

    #[error("config technique table is invalid: {source}")]
    Catalog {
        #[from]
        source: CatalogError,
    },
}

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    /// User-defined techniques, appended to the built-in catalog.
    #[serde(default)]
    pub techniques: Vec<BreathingTechnique>,
}

/// Session-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Total session length in seconds (default: 120).
    #[serde(default = "default_duration_seconds")]
    pub duration_seconds: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_seconds: default_duration_seconds(),
        }
    }
}

fn default_duration_seconds() -> u32 {
    DEFAULT_SESSION_DURATION_SECONDS
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/respiro/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("respiro").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`; a present file must
    /// read, parse and validate.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - the session duration is positive
    /// - every user-defined technique has a non-empty id
    ///
    /// Technique duration and id-collision checks happen when the catalog
    /// is assembled in [`Config::catalog`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.duration_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "session duration_seconds must be greater than zero".to_string(),
            });
        }

        if self.techniques.iter().any(|t| t.id.is_empty()) {
            return Err(ConfigError::ValidationError {
                message: "every technique must have a non-empty id".to_string(),
            });
        }

        Ok(())
    }

    /// Assemble the technique catalog: built-ins plus config extras.
    pub fn catalog(&self) -> Result<TechniqueCatalog, ConfigError> {
        Ok(TechniqueCatalog::with_extras(self.techniques.clone())?)
    }
}
