//! Configuration management for itemctl
//!
//! The configuration file is optional and read-only. Sessions are never
//! written back to it.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::client::DEFAULT_HOST;
use crate::client::items::DEFAULT_TIMEOUT;
use crate::error::{ConfigError, Result};

/// Application configuration as read from `config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// API host, e.g. `http://localhost:3000`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Username used to log in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".itemctl").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// A missing file at the default location yields the built-in defaults;
    /// a missing file at an explicit path is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let resolved = Self::resolve_path(path)?;
        if !resolved.exists() {
            if path.is_some() {
                return Err(ConfigError::NotFound(resolved.display().to_string()).into());
            }
            log::debug!("No config file at {}, using defaults", resolved.display());
            return Ok(Self::default());
        }
        Self::load_from(resolved)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Validate field values
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == Some(0) {
            return Err(
                ConfigError::Invalid("timeout_secs must be greater than 0".to_string()).into(),
            );
        }
        if let Some(host) = &self.host {
            if host.trim().is_empty() {
                return Err(ConfigError::Invalid("host must not be empty".to_string()).into());
            }
        }
        Ok(())
    }

    /// Host from the file, or the built-in default
    pub fn host_or_default(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Request timeout from the file, or the built-in default
    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}
