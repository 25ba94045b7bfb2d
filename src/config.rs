//! Configuration management for the assistant bot.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file. There are no command-line
//! flags.

use crate::domain::BirthdayDate;
use crate::error::{ConfigError, ConfigResult};
use crate::services::{Clock, FixedClock, SystemClock, DEFAULT_WINDOW_DAYS};
use chrono::NaiveDate;
use std::env;

/// Longest accepted birthday window, in days.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Length of the upcoming-birthday window in days (default: 7)
    pub birthday_window_days: u32,

    /// Fixed "today" instead of the system clock (default: none)
    pub today_override: Option<NaiveDate>,

    /// Log level used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: window length in days (default: 7, max: 366)
    /// - `ASSISTANT_TODAY`: fixed date in `DD.MM.YYYY` format
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;

        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be at most {}", MAX_WINDOW_DAYS),
            });
        }

        let today_override = Self::parse_env_date("ASSISTANT_TODAY")?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            birthday_window_days,
            today_override,
            log_level,
        })
    }

    /// The clock implied by this configuration.
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.today_override {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(SystemClock),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an optional `DD.MM.YYYY` environment variable.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => BirthdayDate::parse(val.trim())
                .map(|date| Some(date.date()))
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a date in DD.MM.YYYY format, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            today_override: None,
            log_level: "error".to_string(),
        }
    }
}
