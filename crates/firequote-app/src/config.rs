//! Configuration management for firequote
//!
//! Config stored at: ~/.config/firequote/config.json

use firequote_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Default area unit for floor input ("meters" or "feet")
    #[serde(default = "default_unit")]
    pub default_unit: String,

    /// Currency symbol for table output
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_unit() -> String {
    "meters".to_string()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            default_unit: default_unit(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("firequote");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from disk, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(config)
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(Self::config_path()?, content)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.default_unit, "meters");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"output_format":"json"}"#).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.default_unit, "meters");
        assert_eq!(config.currency_symbol, "₹");
    }
}
