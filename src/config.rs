/// Application configuration
///
/// Settings come from an optional JSON file; command line flags override them.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

/// Input file used when nothing else is given
pub const DEFAULT_INPUT: &str = "kniha.txt";

/// Error raised while loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in configuration file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Book to analyze
    pub input: PathBuf,
    /// Wrap output in a markdown code fence
    pub markdown: bool,
    /// Highlight section headers
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            markdown: false,
            color: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from file if provided
    ///
    /// A path that does not exist is logged and the defaults are used.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = config_path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            warn!("Configuration file not found: {}", path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&config_str).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
