//! # Storage Error Types

use thiserror::Error;

/// Errors surfaced by persistence adapters.
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO failure while reading or writing the backing medium
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Key rejected before touching the backing medium
    #[error("Invalid storage key: {key}")]
    InvalidKey { key: String },

    /// Anything the adapter cannot classify further
    #[error("Storage error: {message}")]
    Other { message: String },
}

impl StorageError {
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

/// Result alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
