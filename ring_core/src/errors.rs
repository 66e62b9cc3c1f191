//! # Error Types
//!
//! Structured error types for ring_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use ring_core::errors::{CalcResult, RingError};
//!
//! fn validate_bore(diameter_in: f64) -> CalcResult<()> {
//!     if diameter_in <= 0.0 {
//!         return Err(RingError::invalid_dimension(
//!             "barrel_inside_diameter_in",
//!             diameter_in.to_string(),
//!             "Diameter must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ring_core operations
pub type CalcResult<T> = Result<T, RingError>;

/// Structured error type for ring geometry operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
/// Every failure is an input problem, never a transient one, so there
/// is no retry semantics attached to any variant.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RingError {
    /// Fewer than three bricks can never close a ring
    #[error("Invalid brick count: {count} - a ring needs at least 3 bricks to close")]
    InvalidBrickCount { count: u32 },

    /// A length input is out of range (negative, zero where positive is required, non-finite)
    #[error("Invalid dimension '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    /// The inputs are individually valid but describe a ring that cannot exist
    #[error("Infeasible geometry: {reason}")]
    InfeasibleGeometry { reason: String },
}

impl RingError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        RingError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InfeasibleGeometry error
    pub fn infeasible(reason: impl Into<String>) -> Self {
        RingError::InfeasibleGeometry {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RingError::InvalidBrickCount { .. } => "INVALID_BRICK_COUNT",
            RingError::InvalidDimension { .. } => "INVALID_DIMENSION",
            RingError::InfeasibleGeometry { .. } => "INFEASIBLE_GEOMETRY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = RingError::invalid_dimension(
            "brick_thickness_in",
            "-2.5",
            "Thickness must be positive",
        );
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: RingError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            RingError::InvalidBrickCount { count: 2 }.error_code(),
            "INVALID_BRICK_COUNT"
        );
        assert_eq!(
            RingError::infeasible("bricks do not fit").error_code(),
            "INFEASIBLE_GEOMETRY"
        );
    }

    #[test]
    fn test_display_names_the_field() {
        let error = RingError::invalid_dimension("saw_kerf_in", "-0.125", "Kerf cannot be negative");
        let message = error.to_string();
        assert!(message.contains("saw_kerf_in"));
        assert!(message.contains("-0.125"));
    }
}
