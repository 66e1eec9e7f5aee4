//! # Persistence Error Types
//!
//! Errors from snapshot storage and (de)serialization. None of these is
//! fatal: a failed write is logged and retried on the next state change,
//! and a failed read falls back to declared defaults.

use thiserror::Error;

/// Snapshot persistence errors.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Underlying storage I/O failed.
    ///
    /// ## When This Occurs
    /// - Data directory missing or unwritable
    /// - Disk full
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be serialized or deserialized.
    #[error("snapshot serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Convenience type alias for persistence results.
pub type PersistResult<T> = Result<T, PersistError>;
