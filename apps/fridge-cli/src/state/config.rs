//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FRIDGE_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::env;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Start with the demo inventory instead of an empty fridge.
    /// Default: true
    pub sample_data: bool,

    /// Fixed reference date for expiration filters.
    /// Default: none (the local date at the time of the query)
    pub today: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            sample_data: true,
            today: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `FRIDGE_SAMPLE_DATA`: `true`/`false` (or `1`/`0`)
    /// - `FRIDGE_TODAY`: reference date as `YYYY-MM-DD`
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(raw) = lookup("FRIDGE_SAMPLE_DATA") {
            config.sample_data = match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(ConfigError::InvalidValue("FRIDGE_SAMPLE_DATA".to_string())),
            };
        }

        if let Some(raw) = lookup("FRIDGE_TODAY") {
            let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|_| ConfigError::InvalidValue("FRIDGE_TODAY".to_string()))?;
            config.today = Some(date);
        }

        Ok(config)
    }

    /// Reference date for expiration filters.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
