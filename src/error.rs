//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that a command handler can return.
///
/// The session renders every variant as a single `Error: <message>` line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A phone number or date failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with this name exists
    #[error("Contact {0} not found.")]
    ContactNotFound(String),

    /// Wrong number of arguments for a command
    #[error("Invalid command. Please use '{usage}'.")]
    MalformedCommand { usage: &'static str },
}

impl CommandError {
    /// Short machine-friendly label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::InvalidPhone(_)) => "invalid_phone",
            Self::Validation(ValidationError::InvalidDateFormat(_)) => "invalid_date_format",
            Self::ContactNotFound(_) => "contact_not_found",
            Self::MalformedCommand { .. } => "malformed_command",
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
