//! # Error Types
//!
//! Validation error types for wayfare-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  ValidationError (this module)                                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ApiError::Validation (wayfare-api)                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Rejected(<message>) lifecycle event                                │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Slice records status=Failed, error=<message>                       │
//! │                                                                     │
//! │  No failure escapes past the slice boundary; the UI reads `error`.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// These occur before any async work runs; the message text is what ends
/// up in the owning slice's `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required { field: "username" };
        assert_eq!(err.to_string(), "username is required");

        let err = ValidationError::TooShort {
            field: "password",
            min: 4,
        };
        assert_eq!(err.to_string(), "password must be at least 4 characters");
    }
}
