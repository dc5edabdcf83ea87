//! CartService - the injectable cart with automatic persistence.
//!
//! Owns the [`Cart`] aggregate and a [`CartStore`] port. Every mutating
//! operation writes a snapshot before returning, because the storefront
//! treats each cart change as immediately durable; there is no separate
//! "save" step from the user's perspective.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::cart::{Cart, LineItem};
use crate::domain::foundation::{DomainError, ErrorCode, LineItemId, Money};
use crate::ports::{CartStore, StoreError};

/// Errors raised by cart operations.
#[derive(Debug, Clone, Error)]
pub enum CartError {
    /// Persisting the cart snapshot failed.
    #[error("Cart storage error: {0}")]
    Storage(#[from] StoreError),
}

impl CartError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CartError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<CartError> for DomainError {
    fn from(err: CartError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Cart operations bound to a persistence port.
pub struct CartService {
    cart: Cart,
    store: Arc<dyn CartStore>,
}

impl CartService {
    /// Creates a service over an unloaded cart.
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        Self {
            cart: Cart::new(),
            store,
        }
    }

    /// Reads the persisted snapshot into the cart.
    ///
    /// An absent snapshot loads as empty; an unreadable one is recovered
    /// as empty with a warning. Either way the cart ends up loaded -
    /// persistence problems never take the session down.
    pub async fn load(&mut self) {
        match self.store.read_snapshot().await {
            Ok(Some(snapshot)) => self.cart.hydrate(snapshot),
            Ok(None) => self.cart.mark_loaded(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read cart snapshot, starting empty");
                self.cart = Cart::new();
                self.cart.mark_loaded();
            }
        }
    }

    /// The underlying aggregate (read-only).
    pub fn aggregate(&self) -> &Cart {
        &self.cart
    }

    /// True once `load` has run.
    pub fn is_loaded(&self) -> bool {
        self.cart.is_loaded()
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Sum of line quantities.
    pub fn total_item_count(&self) -> u32 {
        self.cart.total_item_count()
    }

    /// Sum of unit price times quantity.
    pub fn total_value(&self) -> Money {
        self.cart.total_value()
    }

    /// Appends a line item and persists.
    pub async fn add_line_item(&mut self, item: LineItem) -> Result<(), CartError> {
        self.cart.add_line_item(item);
        self.persist().await
    }

    /// Sets a line item's quantity (zero or less removes it) and persists.
    /// A missing id is a benign no-op.
    pub async fn set_quantity(
        &mut self,
        id: &LineItemId,
        quantity: i32,
    ) -> Result<(), CartError> {
        self.cart.set_quantity(id, quantity);
        self.persist().await
    }

    /// Removes a line item and persists. A missing id is a benign no-op.
    pub async fn remove_line_item(&mut self, id: &LineItemId) -> Result<(), CartError> {
        self.cart.remove_line_item(id);
        self.persist().await
    }

    /// Empties the cart and persists an empty snapshot, so the next
    /// load sees "saved and empty" rather than "nothing saved yet".
    pub async fn clear(&mut self) -> Result<(), CartError> {
        self.cart.clear();
        self.persist().await
    }

    /// Writes the current snapshot.
    ///
    /// The in-memory mutation stays applied even when the write fails;
    /// the next successful mutation re-persists the whole list.
    async fn persist(&self) -> Result<(), CartError> {
        if let Err(err) = self.store.write_snapshot(&self.cart.snapshot()).await {
            tracing::warn!(error = %err, "failed to persist cart snapshot");
            return Err(CartError::Storage(err));
        }
        tracing::debug!(
            items = self.cart.items().len(),
            total = %self.cart.total_value(),
            "cart persisted"
        );
        Ok(())
    }
}
