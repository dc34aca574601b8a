//! # Key-Value Store Trait
//!
//! The persistence contract shared by the mood journal and the session
//! layer. Values are opaque strings; callers own serialization.

use async_trait::async_trait;

use crate::error::StorageResult;

/// Minimal asynchronous key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` when absent.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> StorageResult<()>;
}

/// Keys must be usable as plain file names across adapters.
pub fn validate_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
}
