//! # Validation Module
//!
//! Input validation for registration and destination search.
//!
//! Validation runs at the operation boundary, before any artificial delay
//! or network work. A failed validation becomes a `Rejected` lifecycle
//! event; it never panics and never reaches the reducer as anything other
//! than data.

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_SEARCH_QUERY_LEN, MIN_PASSWORD_LEN};

/// Raw registration input as the UI collects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationInput {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Validates registration input.
///
/// ## Rules
/// - username, password and email must all be present (non-blank)
/// - password must be at least [`MIN_PASSWORD_LEN`] characters
///
/// ## Example
/// ```rust
/// use wayfare_core::validation::{validate_registration, RegistrationInput};
///
/// let input = RegistrationInput {
///     username: "ada".to_string(),
///     password: "lovelace".to_string(),
///     email: "ada@example.com".to_string(),
/// };
/// assert!(validate_registration(&input).is_ok());
/// ```
pub fn validate_registration(input: &RegistrationInput) -> ValidationResult<()> {
    if input.username.trim().is_empty() {
        return Err(ValidationError::Required { field: "username" });
    }
    if input.password.is_empty() {
        return Err(ValidationError::Required { field: "password" });
    }
    if input.email.trim().is_empty() {
        return Err(ValidationError::Required { field: "email" });
    }
    if input.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password",
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Validates a destination search query.
///
/// ## Rules
/// - Can be empty (an empty query clears nothing; the slice decides)
/// - Maximum [`MAX_SEARCH_QUERY_LEN`] characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query",
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
