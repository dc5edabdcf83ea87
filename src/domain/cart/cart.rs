//! Cart aggregate - the in-memory list of committed line items.
//!
//! # Design Decisions
//!
//! - **Insertion order**: items stay in the order they were added
//! - **No merging**: two commits of an identical pack stay two separate
//!   line items, each independently identified
//! - **Loaded flag**: distinguishes "not yet read from persistence" from
//!   "read and legitimately empty"
//!
//! The aggregate is pure in-memory state; persistence after each
//! mutation is owned by the application-layer cart service.

use crate::domain::foundation::{LineItemId, Money};

use super::{CartSnapshot, LineItem};

/// The cart's line items plus aggregate computations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    loaded: bool,
}

impl Cart {
    /// Creates an empty cart that has not been read from persistence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the cart from a persisted snapshot and marks it loaded.
    pub fn hydrate(&mut self, snapshot: CartSnapshot) {
        self.items = snapshot.into_items();
        self.loaded = true;
    }

    /// Marks the cart loaded without items (nothing was persisted yet).
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    /// True once the cart has been read from persistence.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Appends a line item. Identical configurations are not merged.
    pub fn add_line_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Sets a line item's quantity directly.
    ///
    /// A quantity of zero or less removes the item. A missing id is a
    /// benign no-op (a double-clicked remove must not fail the session).
    /// Returns true if the cart changed.
    pub fn set_quantity(&mut self, id: &LineItemId, quantity: i32) -> bool {
        if quantity <= 0 {
            return self.remove_line_item(id);
        }
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.set_quantity(quantity as u32);
                true
            }
            None => false,
        }
    }

    /// Removes a line item. Missing ids are a benign no-op.
    /// Returns true if the cart changed.
    pub fn remove_line_item(&mut self, id: &LineItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Empties the cart. The loaded flag is unaffected.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of line quantities across all items.
    pub fn total_item_count(&self) -> u32 {
        self.items.iter().map(LineItem::quantity).sum()
    }

    /// Sum of unit price times quantity across all items.
    ///
    /// Pack lines use the snapshotted pack price only; flavor surcharges
    /// are display metadata and do not enter the total.
    pub fn total_value(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Snapshot of the current items for persistence.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::new(self.items.clone())
    }
}
