//! Configuration loading and parsing.
//!
//! This module provides YAML-based configuration for the board.

mod error;
mod types;
mod yaml;

pub use error::ConfigError;
pub use types::{BoardConfig, FixtureConfig};
pub use yaml::YamlLoader;
