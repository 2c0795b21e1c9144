//! # Error Types
//!
//! Domain-specific error types for fridge-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fridge-core errors (this file)                                        │
//! │  ├── CoreError        - Resource exhaustion while growing storage       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  fridge-cli errors (app crate)                                         │
//! │  └── AppError         - Console I/O and configuration failures         │
//! │                                                                         │
//! │  Not-found is NOT an error: lookups answer with bool / Option.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core inventory errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Growing a collection or history stack could not allocate.
    ///
    /// ## When This Occurs
    /// - The doubled capacity overflows `usize`
    /// - The allocator refuses the request
    /// - A copy (snapshot, filter result) cannot reserve its slots
    ///
    /// Storage is left exactly as it was before the failed call.
    #[error("Could not grow {what} to {requested} slots")]
    CapacityExhausted { what: &'static str, requested: usize },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The core itself never validates items; these are raised by the helpers
/// in [`crate::validation`] that the presentation layer calls.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., not a number, not a date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CapacityExhausted {
            what: "collection",
            requested: 64,
        };
        assert_eq!(err.to_string(), "Could not grow collection to 64 slots");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "month".to_string(),
            min: 1,
            max: 12,
        };
        assert_eq!(err.to_string(), "month must be between 1 and 12");

        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }
}
