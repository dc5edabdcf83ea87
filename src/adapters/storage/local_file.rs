//! Local filesystem cart store.
//!
//! Persists the cart snapshot as a single JSON file, standing in for the
//! browser local storage the original storefront used.
//!
//! # Atomic Writes
//!
//! Uses a write-to-temp-then-rename pattern:
//! 1. Write the snapshot to `<path>.tmp`
//! 2. Rename to `<path>`
//!
//! This prevents a crash mid-write from leaving a truncated snapshot.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::cart::CartSnapshot;
use crate::ports::{CartStore, StoreError};

/// Cart store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileCartStore {
    path: PathBuf,
}

impl FileCartStore {
    /// Creates a store writing to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut path = self.path.clone().into_os_string();
        path.push(".tmp");
        PathBuf::from(path)
    }

    async fn ensure_parent_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                StoreError::io(format!(
                    "Failed to create cart directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl CartStore for FileCartStore {
    async fn read_snapshot(&self) -> Result<Option<CartSnapshot>, StoreError> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::io(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let snapshot = serde_json::from_str(&contents)
            .map_err(|e| StoreError::corrupt(format!("{}: {}", self.path.display(), e)))?;
        Ok(Some(snapshot))
    }

    async fn write_snapshot(&self, snapshot: &CartSnapshot) -> Result<(), StoreError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string(snapshot)
            .map_err(|e| StoreError::io(format!("Failed to encode cart snapshot: {}", e)))?;

        let temp = self.temp_path();
        fs::write(&temp, json.as_bytes()).await.map_err(|e| {
            StoreError::io(format!("Failed to write {}: {}", temp.display(), e))
        })?;
        fs::rename(&temp, &self.path).await.map_err(|e| {
            StoreError::io(format!(
                "Failed to move {} into place: {}",
                temp.display(),
                e
            ))
        })?;

        tracing::debug!(path = %self.path.display(), items = snapshot.len(), "cart snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::{LineItem, SimpleLineItem};
    use crate::domain::foundation::{LineItemId, Money};
    use tempfile::tempdir;

    fn snapshot() -> CartSnapshot {
        CartSnapshot::new(vec![LineItem::Simple(SimpleLineItem::new(
            LineItemId::new("1").unwrap(),
            "Chocolate Chip Cookie",
            Money::from_dollars(3.50),
            2,
        ))])
    }

    #[tokio::test]
    async fn missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileCartStore::new(dir.path().join("cart.json"));
        assert!(store.read_snapshot().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let store = FileCartStore::new(dir.path().join("cart.json"));

        let snapshot = snapshot();
        store.write_snapshot(&snapshot).await.unwrap();
        assert_eq!(store.read_snapshot().await.unwrap(), Some(snapshot));
    }

    #[tokio::test]
    async fn write_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let store = FileCartStore::new(dir.path().join("nested/state/cart.json"));

        store.write_snapshot(&snapshot()).await.unwrap();
        assert!(store.read_snapshot().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn overwrite_replaces_previous_snapshot() {
        let dir = tempdir().unwrap();
        let store = FileCartStore::new(dir.path().join("cart.json"));

        store.write_snapshot(&snapshot()).await.unwrap();
        store.write_snapshot(&CartSnapshot::empty()).await.unwrap();

        assert_eq!(
            store.read_snapshot().await.unwrap(),
            Some(CartSnapshot::empty())
        );
    }

    #[tokio::test]
    async fn corrupt_file_reads_as_corrupt_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cart.json");
        tokio::fs::write(&path, b"not json {").await.unwrap();

        let store = FileCartStore::new(&path);
        let result = store.read_snapshot().await;
        assert!(matches!(result, Err(StoreError::Corrupt(_))));
    }

    #[tokio::test]
    async fn no_temp_file_left_behind_after_write() {
        let dir = tempdir().unwrap();
        let store = FileCartStore::new(dir.path().join("cart.json"));

        store.write_snapshot(&snapshot()).await.unwrap();
        assert!(!store.temp_path().exists());
    }
}
