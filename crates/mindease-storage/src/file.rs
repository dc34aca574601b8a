//! # File-Backed Store
//!
//! Stores each key as a single `<key>.json` document under a root
//! directory. This mirrors the browser localStorage model the journal
//! expects: whole-value reads and whole-value replacement writes.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::kv::{validate_key, KeyValueStore};

/// Key-value store persisted as one file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for_key(&self, key: &str) -> StorageResult<PathBuf> {
        if !validate_key(key) {
            return Err(StorageError::invalid_key(key));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    async fn ensure_root(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for_key(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for_key(key)?;
        self.ensure_root().await?;
        fs::write(&path, value).await?;
        debug!(key, bytes = value.len(), "wrote value");
        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for_key(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(key, "deleted value");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store.set("mindease_user", "{\"name\":\"amy\"}").await.unwrap();
        let value = store.get("mindease_user").await.unwrap();
        assert_eq!(value.as_deref(), Some("{\"name\":\"amy\"}"));
    }

    #[tokio::test]
    async fn test_get_absent_key() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store.set("k", "v").await.unwrap();
        store.delete("k").await.unwrap();
        store.delete("k").await.unwrap();
        assert!(store.get("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejects_path_traversal_key() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        let err = store.set("../outside", "v").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey { .. }));
    }
}
