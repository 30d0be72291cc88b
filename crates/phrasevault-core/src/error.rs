//! Error types for phrasevault core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages.

use thiserror::Error;

/// Result type alias for phrasevault operations.
pub type Result<T> = std::result::Result<T, VaultError>;

/// Core error type for phrasevault operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// The cryptographic random source is missing or failed.
    ///
    /// Fatal to sampling and id generation; there is no fallback to
    /// non-cryptographic randomness.
    #[error("Random source unavailable: {0}")]
    RandomSource(String),

    /// Incorrect passphrase during decryption
    #[error("Incorrect passphrase")]
    IncorrectPassphrase,

    /// Encryption or decryption error
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        VaultError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        VaultError::Validation(err.to_string())
    }
}
