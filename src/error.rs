//! Custom error types for teller
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for teller operations
#[derive(Error, Debug)]
pub enum TellerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors (settings file)
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Withdrawal exceeds available funds (plus credit limit, for checking)
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: f64, available: f64 },

    /// Operation not supported by this account kind (e.g. deposit on a loan).
    /// A normal domain rejection, recoverable at the caller boundary.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Unknown account kind string during construction or file parse
    #[error("Invalid account kind: {0}")]
    InvalidAccountKind(String),

    /// A roster or statement record does not match the expected shape
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Storage errors (unreadable or unwritable files)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TellerError {
    /// Create a "not found" error for customers
    pub fn customer_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Customer",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a recoverable domain rejection (state unchanged,
    /// report to the user and carry on)
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InsufficientFunds { .. } | Self::UnsupportedOperation(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TellerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TellerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for teller operations
pub type TellerResult<T> = Result<T, TellerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TellerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = TellerError::customer_not_found("alice");
        assert_eq!(err.to_string(), "Customer not found: alice");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_insufficient_funds_error() {
        let err = TellerError::InsufficientFunds {
            requested: 150.0,
            available: 100.0,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 150, available 100"
        );
        assert!(err.is_rejection());
    }

    #[test]
    fn test_unsupported_operation_is_rejection() {
        let err = TellerError::UnsupportedOperation("deposit on loan account".into());
        assert!(err.is_rejection());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let teller_err: TellerError = io_err.into();
        assert!(matches!(teller_err, TellerError::Io(_)));
    }
}
