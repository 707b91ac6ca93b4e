//! Configuration management for the contact store.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is read if present. Field limits are fixed and
//! are not part of the configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for a contact store host.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,

    /// Number of contacts to pre-allocate room for (default: 16)
    pub initial_capacity: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_STORE_LOG_LEVEL`: trace, debug, info, warn or error (default: "info")
    /// - `CONTACT_STORE_INITIAL_CAPACITY`: pre-allocated contact slots (default: 16)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let log_level = match env::var("CONTACT_STORE_LOG_LEVEL") {
            Ok(val) => Self::parse_log_level(&val)?,
            Err(_) => defaults.log_level,
        };

        let initial_capacity =
            Self::parse_env_usize("CONTACT_STORE_INITIAL_CAPACITY", defaults.initial_capacity)?;

        Ok(Config {
            log_level,
            initial_capacity,
        })
    }

    fn parse_log_level(val: &str) -> ConfigResult<String> {
        let level = val.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_STORE_LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), val),
            });
        }
        Ok(level)
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            initial_capacity: 16,
        }
    }
}
