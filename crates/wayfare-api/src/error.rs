//! # API Error Types
//!
//! Failure taxonomy for the async operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  reqwest::Error ──► ApiError::Network ──┐                           │
//! │  provider 4xx   ──► ApiError::Auth ─────┼──► Rejected(<message>)    │
//! │  bad payload    ──► ApiError::BadResponse                           │
//! │  ValidationError ─► ApiError::Validation┘                           │
//! │                                                                     │
//! │  The Rejected message lands in the owning slice's `error` field;    │
//! │  nothing is thrown past the operation boundary.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A schedule lookup with no entries is *not* an error - it resolves to
//! an empty sequence.

use thiserror::Error;

use wayfare_core::ValidationError;

/// Async operation errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The identity provider rejected the credentials (and no local
    /// fallback matched). Carries the provider's own message when one
    /// was supplied.
    #[error("{0}")]
    Auth(String),

    /// Transport-level failure talking to a provider.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A provider endpoint could not be constructed.
    #[error("invalid provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The provider answered with something other than the expected
    /// payload.
    #[error("unexpected provider response: {0}")]
    BadResponse(String),

    /// Input validation failed before any work ran.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for operation results.
pub type ApiResult<T> = Result<T, ApiError>;
