//! Cart store port - snapshot persistence for the cart.
//!
//! The cart persists after every mutation, so implementations must make
//! a completed `write_snapshot` durable before returning; callers treat
//! a returned write as visible to the next `read_snapshot`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::cart::CartSnapshot;

/// Errors raised by cart store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Underlying I/O failed.
    #[error("Cart store I/O error: {0}")]
    Io(String),

    /// A persisted snapshot could not be decoded.
    #[error("Cart snapshot is unreadable: {0}")]
    Corrupt(String),
}

impl StoreError {
    pub fn io(message: impl Into<String>) -> Self {
        StoreError::Io(message.into())
    }

    pub fn corrupt(message: impl Into<String>) -> Self {
        StoreError::Corrupt(message.into())
    }
}

/// Persistence port for cart snapshots.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Reads the persisted snapshot.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet - absence is
    /// not an error.
    async fn read_snapshot(&self) -> Result<Option<CartSnapshot>, StoreError>;

    /// Persists the given snapshot, replacing any previous one.
    ///
    /// Clearing the cart writes an empty snapshot rather than deleting
    /// the stored entry, so later reads see "saved and empty".
    async fn write_snapshot(&self, snapshot: &CartSnapshot) -> Result<(), StoreError>;
}
