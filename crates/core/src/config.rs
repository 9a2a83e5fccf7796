//! Configuration management
//!
//! The optional configuration file is TOML, stored at
//! `$S3TOOLS_CONFIG_DIR/config.toml` or `~/.config/s3tools/config.toml`.
//! Command-line flags always win over the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Current configuration schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Region used when neither the command line nor the file names one
pub const DEFAULT_REGION: &str = "us-east-1";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "S3TOOLS_CONFIG_DIR";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Schema version
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default settings
    #[serde(default)]
    pub defaults: Defaults,
}

/// Defaults applied when the command line leaves a setting out
#[derive(Debug, Clone, Deserialize)]
pub struct Defaults {
    /// Region of the target buckets
    #[serde(default = "default_region")]
    pub region: String,

    /// Upload with the reduced redundancy storage class
    #[serde(default)]
    pub reduced_redundancy: bool,

    /// Show progress bars
    #[serde(default = "default_true")]
    pub progress: bool,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            region: default_region(),
            reduced_redundancy: false,
            progress: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            defaults: Defaults::default(),
        }
    }
}

/// Settings for one invocation, after flags and file are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Region handed to the storage client
    pub region: String,

    /// Upload with the reduced redundancy storage class
    pub reduced_redundancy: bool,

    /// Show progress bars
    pub progress: bool,
}

impl Settings {
    /// Merge command-line values over the loaded configuration
    pub fn resolve(config: &Config, region: Option<&str>, reduced_redundancy: bool) -> Self {
        let region = region
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(config.defaults.region.as_str())
            .to_string();

        Self {
            region,
            reduced_redundancy: reduced_redundancy || config.defaults.reduced_redundancy,
            progress: config.defaults.progress,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(&Config::default(), None, false)
    }
}

/// Loads the configuration file
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a ConfigManager for the default config path
    ///
    /// Honors `S3TOOLS_CONFIG_DIR` before the platform config directory.
    pub fn new() -> Result<Self> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::config_dir()
                .ok_or_else(|| Error::Config("Could not determine config directory".into()))?
                .join("s3tools"),
        };
        Ok(Self::with_path(config_dir.join(CONFIG_FILE_NAME)))
    }

    /// Create a ConfigManager with a custom path (useful for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from disk
    ///
    /// A missing file yields the default configuration.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&self.config_path)
            .map_err(|e| Error::local_io(&self.config_path, e))?;
        let config: Config = toml::from_str(&content)?;

        if config.schema_version > SCHEMA_VERSION {
            return Err(Error::Config(format!(
                "Configuration file version {} is newer than supported version {}. Please upgrade s3tools.",
                config.schema_version, SCHEMA_VERSION
            )));
        }

        tracing::debug!(path = %self.config_path.display(), ?config, "loaded config file");
        Ok(config)
    }
}
