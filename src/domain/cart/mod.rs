//! Cart - finalized line items and aggregate totals.
//!
//! Line items carry denormalized snapshots of pack and flavor data taken
//! at commit time, so the cart stays valid even if catalog data changes
//! later in the session.

mod cart;
mod line_item;
mod snapshot;

pub use cart::Cart;
pub use line_item::{CookieSelection, LineItem, PackLineItem, SimpleLineItem};
pub use snapshot::CartSnapshot;
