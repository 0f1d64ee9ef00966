//! Configuration Module
//!
//! This module defines the configuration for the txgate binary.
//! Configuration is loaded from TOML files and parsed using serde.
//! The library itself takes no configuration; the set of valid
//! transaction type codes is fixed by the message format.

use serde::Deserialize;
use std::fs;

/// Main configuration structure
///
/// # Example TOML
/// ```toml
/// [input]
/// records_path = "data/records.json"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub input: InputConfig,
}

/// Input configuration
///
/// # Fields
/// - `records_path`: Path to a JSON file holding an array of transaction
///   records to validate
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub records_path: String,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }
}
