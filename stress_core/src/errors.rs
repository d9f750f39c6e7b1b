//! # Error Types
//!
//! Structured error types for stress_core. The transformation mathematics is
//! total over finite real inputs, so the taxonomy is short: the only thing a
//! caller can get wrong is handing the engine a non-finite number.
//!
//! ## Example
//!
//! ```rust
//! use stress_core::errors::{StressError, StressResult};
//!
//! fn validate_stress(sigma_x_mpa: f64) -> StressResult<()> {
//!     if !sigma_x_mpa.is_finite() {
//!         return Err(StressError::invalid_input(
//!             "sigma_x_mpa",
//!             sigma_x_mpa.to_string(),
//!             "Stress must be a finite number",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for stress_core operations
pub type StressResult<T> = Result<T, StressError>;

/// Structured error type for plane-stress operations.
///
/// Each variant provides specific context about what went wrong so the
/// UI layers can report it without string matching.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum StressError {
    /// An input value is invalid (non-finite, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl StressError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        StressError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            StressError::InvalidInput { .. } => "INVALID_INPUT",
            StressError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = StressError::invalid_input("sigma_x_mpa", "NaN", "Stress must be finite");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: StressError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StressError::invalid_input("alpha_deg", "inf", "must be finite").error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            StressError::SerializationError {
                reason: "eof".to_string()
            }
            .error_code(),
            "SERIALIZATION_ERROR"
        );
    }

    #[test]
    fn test_display_message() {
        let error = StressError::invalid_input("tau_xy_mpa", "inf", "Stress must be finite");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'tau_xy_mpa': inf - Stress must be finite"
        );
    }
}
