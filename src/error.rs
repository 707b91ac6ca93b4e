//! Error types for the contact store.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by contact store operations.
///
/// Each failure kind is its own variant so callers can match on it
/// instead of inspecting messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactStoreError {
    /// A required identifier or contact was not supplied
    #[error("{0} cannot be null")]
    NullArgument(&'static str),

    /// A field value violates its shape rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A contact with this ID is already stored
    #[error("Contact ID must be unique: {0}")]
    DuplicateId(String),

    /// No stored contact has this ID
    #[error("Contact ID not found: {0}")]
    NotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactStoreError
pub type StoreResult<T> = Result<T, ContactStoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;

    #[test]
    fn test_error_display() {
        let err = ContactStoreError::NullArgument("Contact");
        assert_eq!(err.to_string(), "Contact cannot be null");

        let err = ContactStoreError::DuplicateId("123".to_string());
        assert_eq!(err.to_string(), "Contact ID must be unique: 123");

        let err = ContactStoreError::NotFound("456".to_string());
        assert_eq!(err.to_string(), "Contact ID not found: 456");

        let err = ConfigError::InvalidValue {
            var: "CONTACT_STORE_LOG_LEVEL".to_string(),
            reason: "unknown level".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTACT_STORE_LOG_LEVEL: unknown level"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: ContactStoreError = ValidationError::NonDigit { field: Field::Phone }.into();
        assert!(matches!(err, ContactStoreError::Validation(_)));
        assert_eq!(err.to_string(), "phone number must contain only digits 0-9");
    }
}
