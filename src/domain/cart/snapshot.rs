//! Persisted cart snapshot.
//!
//! The snapshot is a JSON array of line items, the exact shape written
//! by every storefront revision. It must round-trip losslessly so a cart
//! saved by one page load is identical after the next.

use serde::{Deserialize, Serialize};

use super::LineItem;

/// Serializable snapshot of a cart's line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartSnapshot {
    items: Vec<LineItem>,
}

impl CartSnapshot {
    /// Creates a snapshot from line items.
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// An empty snapshot (what `clear()` persists).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The snapshotted line items.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Consumes the snapshot, yielding its line items.
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    /// Number of line items (not cookie counts).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no line items are present.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
