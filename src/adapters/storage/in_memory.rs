//! In-memory cart store for tests and demo sessions.
//!
//! Deterministic and synchronous under the hood; useful wherever the
//! filesystem-backed store would get in the way.
//!
//! # Panics
//!
//! Methods may panic if the internal lock is poisoned. This is
//! acceptable for test code but this adapter should NOT back a
//! production session.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::cart::CartSnapshot;
use crate::ports::{CartStore, StoreError};

/// Cart store holding the snapshot in process memory.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    snapshot: RwLock<Option<CartSnapshot>>,
    write_count: RwLock<usize>,
}

impl InMemoryCartStore {
    /// Creates an empty store (no snapshot saved yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a snapshot, as if a previous
    /// session had saved it.
    pub fn seeded(snapshot: CartSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Some(snapshot)),
            write_count: RwLock::new(0),
        }
    }

    // === Test Helpers ===

    /// The currently stored snapshot, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn stored_snapshot(&self) -> Option<CartSnapshot> {
        self.snapshot
            .read()
            .expect("InMemoryCartStore: snapshot lock poisoned")
            .clone()
    }

    /// How many writes have been performed (for asserting that every
    /// mutation persisted).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn write_count(&self) -> usize {
        *self
            .write_count
            .read()
            .expect("InMemoryCartStore: write_count lock poisoned")
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn read_snapshot(&self) -> Result<Option<CartSnapshot>, StoreError> {
        Ok(self
            .snapshot
            .read()
            .expect("InMemoryCartStore: snapshot lock poisoned")
            .clone())
    }

    async fn write_snapshot(&self, snapshot: &CartSnapshot) -> Result<(), StoreError> {
        *self
            .snapshot
            .write()
            .expect("InMemoryCartStore: snapshot write lock poisoned") = Some(snapshot.clone());
        *self
            .write_count
            .write()
            .expect("InMemoryCartStore: write_count write lock poisoned") += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::{LineItem, SimpleLineItem};
    use crate::domain::foundation::{LineItemId, Money};

    fn snapshot_with_one_item() -> CartSnapshot {
        CartSnapshot::new(vec![LineItem::Simple(SimpleLineItem::new(
            LineItemId::new("1").unwrap(),
            "Chocolate Chip Cookie",
            Money::from_dollars(3.50),
            1,
        ))])
    }

    #[tokio::test]
    async fn fresh_store_reads_none() {
        let store = InMemoryCartStore::new();
        assert!(store.read_snapshot().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn written_snapshot_reads_back_equal() {
        let store = InMemoryCartStore::new();
        let snapshot = snapshot_with_one_item();

        store.write_snapshot(&snapshot).await.unwrap();
        assert_eq!(store.read_snapshot().await.unwrap(), Some(snapshot));
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn empty_snapshot_reads_as_saved_and_empty() {
        let store = InMemoryCartStore::new();
        store.write_snapshot(&CartSnapshot::empty()).await.unwrap();

        let read = store.read_snapshot().await.unwrap();
        assert_eq!(read, Some(CartSnapshot::empty()));
    }

    #[tokio::test]
    async fn seeded_store_reads_seed() {
        let snapshot = snapshot_with_one_item();
        let store = InMemoryCartStore::seeded(snapshot.clone());
        assert_eq!(store.read_snapshot().await.unwrap(), Some(snapshot));
    }
}
