//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided date is not a real `DD.MM.YYYY` calendar date.
    InvalidDateFormat(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Phone number must be a 10-digit number."),
            Self::InvalidDateFormat(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidPhone("123".to_string());
        assert_eq!(err.to_string(), "Phone number must be a 10-digit number.");

        let err = ValidationError::InvalidDateFormat("31.04.2024".to_string());
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }

    #[test]
    fn test_validation_error_keeps_input() {
        let err = "12ab".parse::<crate::domain::PhoneNumber>().unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12ab".to_string()));
    }
}
