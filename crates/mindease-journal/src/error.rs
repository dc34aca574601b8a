//! # Journal Error Types

use thiserror::Error;

use mindease_storage::StorageError;

/// Errors surfaced by the mood journal
#[derive(Error, Debug)]
pub enum JournalError {
    /// Mood samples live on the 1-5 scale; anything else is rejected
    /// instead of stored
    #[error("Mood {mood} is outside the 1-5 scale")]
    MoodOutOfRange { mood: u8 },

    /// Underlying persistence adapter failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result alias for journal operations
pub type JournalResult<T> = Result<T, JournalError>;
