//! Configuration management for Storefront

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Catalog endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub endpoint: String,
    /// Whole-request timeout for the catalog fetch
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub format: String,
    pub level: String,
    /// Log file path; the TUI stays silent when unset
    pub file: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error: defaults are returned instead.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_or_default(&config_path)
    }

    /// Load configuration from `path`, falling back to defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Resolved log file path, tilde-expanded
    pub fn log_file(&self) -> Option<PathBuf> {
        self.logging
            .file
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(p).to_string()))
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("STOREFRONT_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("storefront").join("config.toml"))
}
