// Rust guideline compliant 2026-10-14

//! Configuration management for Helium Commander.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// JSON array of objects.
    Json,
    /// Human-readable table format.
    #[default]
    Tabular,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "tabular" => Ok(OutputFormat::Tabular),
            _ => Err(Error::Config(format!(
                "output format must be csv, json, or tabular, got '{}'",
                value
            ))),
        }
    }
}

/// Configuration for Helium Commander behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Whether to display full UUIDs instead of short ids.
    #[serde(default)]
    pub show_uuid: bool,

    /// Directory holding the API snapshot documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if it exists
    /// 3. Environment variables with `HELIUM_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("invalid config file: {}", e)))?;
            tracing::debug!(path = %path.display(), "loaded config file");
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `HELIUM_OUTPUT_FORMAT` - Output format (csv/json/tabular)
    /// - `HELIUM_UUID` - Display full identifiers (true/false)
    /// - `HELIUM_DATA_DIR` - Snapshot directory
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("HELIUM_OUTPUT_FORMAT") {
            self.output_format = val.parse()?;
        }

        if let Ok(val) = std::env::var("HELIUM_UUID") {
            self.show_uuid = val
                .parse()
                .map_err(|_| Error::Config("HELIUM_UUID must be true or false".to_string()))?;
        }

        if let Ok(val) = std::env::var("HELIUM_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(val));
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::Config("data_dir must not be empty".to_string()));
            }
        }
        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
