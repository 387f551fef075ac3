//! Configuration service implementation.
//!
//! Loads the application configuration from `~/.config/loadcheck/config.toml`
//! and applies environment overrides on top of it.

use std::path::{Path, PathBuf};

use loadcheck_core::config::AppConfig;
use loadcheck_core::error::{LoadcheckError, Result};

use crate::paths::LoadcheckPaths;

/// Environment variable overriding the configured endpoint.
pub const ENDPOINT_ENV: &str = "LOADCHECK_ENDPOINT";

/// Loads `AppConfig` from a TOML file.
///
/// A missing file is not an error: the defaults are used instead.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
}

impl ConfigService {
    /// Creates a service reading the platform config file.
    pub fn new() -> Self {
        Self {
            path: LoadcheckPaths::config_file().ok(),
        }
    }

    /// Creates a service reading an explicit config file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the file this service reads, if one could be resolved.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads the configuration, falling back to defaults when no file exists,
    /// then applies `LOADCHECK_ENDPOINT` if it is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<AppConfig> {
        let config = match &self.path {
            Some(path) => Self::load_file(path)?,
            None => {
                tracing::debug!("[ConfigService] No config directory, using defaults");
                AppConfig::default()
            }
        };

        Ok(apply_overrides(config, std::env::var(ENDPOINT_ENV).ok()))
    }

    fn load_file(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            tracing::debug!(
                "[ConfigService] {} not found, using defaults",
                path.display()
            );
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            LoadcheckError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            LoadcheckError::config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!("[ConfigService] Loaded {}", path.display());
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies environment-provided values on top of a loaded configuration.
///
/// Blank values are ignored.
pub fn apply_overrides(mut config: AppConfig, endpoint: Option<String>) -> AppConfig {
    if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
        tracing::debug!("[ConfigService] Endpoint overridden by {}", ENDPOINT_ENV);
        config.endpoint = endpoint;
    }
    config
}
