//! YAML configuration parsing.
//!
//! Parses and validates the board configuration file.

use chrono_tz::Tz;
use std::path::Path;

use super::error::ConfigError;
use super::types::{BoardConfig, FixtureConfig};

/// Configuration file loader.
pub struct YamlLoader;

impl YamlLoader {
    /// Load board configuration from a file.
    pub fn load_board_config(path: impl AsRef<Path>) -> Result<BoardConfig, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadError {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse_board_config(&content)
    }

    /// Parse board configuration from a YAML string.
    pub fn parse_board_config(yaml: &str) -> Result<BoardConfig, ConfigError> {
        // An empty file is a valid, all-defaults config.
        if yaml.trim().is_empty() {
            return Ok(BoardConfig::default());
        }
        let config: BoardConfig = serde_yaml::from_str(yaml)?;
        Self::validate_board_config(&config)?;
        Ok(config)
    }

    /// Validate a board configuration.
    fn validate_board_config(config: &BoardConfig) -> Result<(), ConfigError> {
        if config.default_timezone.parse::<Tz>().is_err() {
            return Err(ConfigError::InvalidConfig(format!(
                "unknown default_timezone: {}",
                config.default_timezone
            )));
        }

        if config.occurrences_per_job == 0 {
            return Err(ConfigError::InvalidConfig(
                "occurrences_per_job cannot be zero".into(),
            ));
        }

        if config.refresh_interval_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "refresh_interval_secs cannot be zero".into(),
            ));
        }

        if let FixtureConfig::Http { base_url } = &config.fixtures
            && !(base_url.starts_with("http://") || base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidConfig(format!(
                "fixtures.base_url must be an http(s) URL: {}",
                base_url
            )));
        }

        Ok(())
    }
}

impl BoardConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        YamlLoader::load_board_config(path)
    }
}
