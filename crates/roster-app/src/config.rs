//! Configuration management for roster
//!
//! Config stored at: ~/.config/roster/config.json

use roster_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// People data file override
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::NotFound)?
            .join("roster");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the people data file path
    pub fn data_file(&self) -> Result<PathBuf> {
        if let Some(ref file) = self.data_file {
            return Ok(file.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| ConfigError::NotFound)?
            .join("roster");
        Ok(data_dir.join("people.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_table_output() {
        let config = Config::default();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_data_file_override_wins() {
        let config = Config {
            data_file: Some(PathBuf::from("/tmp/custom.json")),
            ..Config::default()
        };
        assert_eq!(config.data_file().unwrap(), PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config {
            data_file: Some(PathBuf::from("/srv/people.json")),
            output_format: OutputFormat::Json,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.data_file, config.data_file);
        assert_eq!(parsed.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.output_format, OutputFormat::Table);
        assert!(parsed.data_file.is_none());
    }
}
