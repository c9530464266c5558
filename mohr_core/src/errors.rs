//! # Error Types
//!
//! Structured error types for mohr_core. Each variant carries enough context
//! for a front end to tell the user which value was wrong and why, and every
//! error serializes to JSON for machine consumers.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::errors::{CalcError, CalcResult};
//!
//! fn validate_scale(factor: f64) -> CalcResult<()> {
//!     if factor <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "scaling_factor".to_string(),
//!             value: factor.to_string(),
//!             reason: "Scaling factor must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mohr_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (not a number, not finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Configuration file could not be parsed or holds bad values
    #[error("Configuration error in '{source_name}': {reason}")]
    ConfigError { source_name: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("sigma_x", "abc", "Expected a number");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_json_shape() {
        let error = CalcError::config_error("mohr.toml", "bad value");
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["type"], "ConfigError");
        assert_eq!(value["details"]["source_name"], "mohr.toml");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_input("a", "b", "c").error_code(), "INVALID_INPUT");
        assert_eq!(CalcError::config_error("a", "b").error_code(), "CONFIG_ERROR");
        assert_eq!(CalcError::file_error("write", "x", "y").error_code(), "FILE_ERROR");
        assert_eq!(CalcError::serialization("x").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::invalid_input("angle_deg", "ten", "Expected a number");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'angle_deg': ten - Expected a number"
        );
    }
}
