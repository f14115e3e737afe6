//! Error types for MindWell core operations.
//!
//! This module defines the error taxonomy for all core operations.
//! Errors are descriptive at the core level; the transport layer maps
//! them to user-facing responses. None of the variants ever carry
//! secret material or journal plaintext.

use thiserror::Error;

/// Result type alias for MindWell operations.
pub type Result<T> = std::result::Result<T, MindwellError>;

/// Core error type for MindWell operations.
#[derive(Debug, Error)]
pub enum MindwellError {
    /// Missing or out-of-range caller input. Never retried.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Wrong secret or malformed/tampered ciphertext. Never retried,
    /// and never swallowed into corrupted output. Distinct from an
    /// empty result set, which is not an error.
    #[error("Decryption failed: {0}")]
    Decryption(String),

    /// Encrypt-side cipher failure.
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Transient record store failure. Safe for the caller to retry
    /// with backoff; the core performs no retries itself.
    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<rusqlite::Error> for MindwellError {
    fn from(err: rusqlite::Error) -> Self {
        MindwellError::StoreUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = MindwellError::InvalidInput("mood must be between 1 and 10".to_string());
        assert!(err.to_string().starts_with("Invalid input: "));

        let err = MindwellError::Decryption("secret does not match".to_string());
        assert!(err.to_string().starts_with("Decryption failed: "));

        let err = MindwellError::StoreUnavailable("database is locked".to_string());
        assert!(err.to_string().starts_with("Record store unavailable: "));
    }

    #[test]
    fn test_from_rusqlite_error() {
        let err: MindwellError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, MindwellError::StoreUnavailable(_)));
    }
}
