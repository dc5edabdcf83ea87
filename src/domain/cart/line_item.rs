//! Cart line items.
//!
//! Two shapes coexist in persisted carts: pack items produced by the
//! pack builder, and flat "simple" items from the legacy single-product
//! add-to-cart flow. They are modeled as an explicit tagged variant
//! rather than by optional-field sniffing.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::PackOption;
use crate::domain::foundation::{FlavorId, LineItemId, Money, PackOptionId};

/// One flavor's share of a committed pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookieSelection {
    /// Flavor id at commit time.
    pub id: FlavorId,

    /// Flavor name snapshot.
    pub name: String,

    /// Cookies of this flavor in the pack.
    pub quantity: u32,
}

/// A committed pack in the cart.
///
/// # Invariants
///
/// - Cookie entry quantities sum to `pack_size` (immutable once created;
///   editing flavors means removing the item and rebuilding the pack)
/// - `quantity >= 1`; decrementing below 1 removes the item instead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackLineItem {
    /// Unique id generated at commit time.
    pub id: LineItemId,

    /// Pack option id snapshot.
    pub pack_type: PackOptionId,

    /// Pack name snapshot.
    pub pack_name: String,

    /// Pack price snapshot; the unit price for this line.
    pub pack_price: Money,

    /// Pack capacity snapshot.
    pub pack_size: u32,

    /// Flavors filling the pack; order is not significant.
    pub cookies: Vec<CookieSelection>,

    /// How many identical copies of this exact configuration.
    pub quantity: u32,
}

impl PackLineItem {
    /// Creates a line item from a pack option and its filled slots,
    /// generating a fresh id and defaulting the line quantity to 1.
    pub fn from_pack(pack: &PackOption, cookies: Vec<CookieSelection>) -> Self {
        Self {
            id: LineItemId::generate(),
            pack_type: pack.id.clone(),
            pack_name: pack.name.clone(),
            pack_price: pack.price,
            pack_size: pack.capacity,
            cookies,
            quantity: 1,
        }
    }

    /// Total cookies across the pack's entries.
    pub fn cookie_total(&self) -> u32 {
        self.cookies.iter().map(|c| c.quantity).sum()
    }
}

/// A legacy flat product entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleLineItem {
    /// Cart entry id (a product id in legacy snapshots).
    pub id: LineItemId,

    /// Product name snapshot.
    pub name: String,

    /// Unit price snapshot.
    pub price: Money,

    /// How many units.
    pub quantity: u32,
}

impl SimpleLineItem {
    /// Creates a legacy simple line item.
    pub fn new(id: LineItemId, name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// A purchasable cart entry.
///
/// Serialized untagged: the two variants are distinguished by their
/// field sets, which is exactly how persisted snapshots from earlier
/// storefront revisions are shaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineItem {
    Pack(PackLineItem),
    Simple(SimpleLineItem),
}

impl LineItem {
    /// The line item's id.
    pub fn id(&self) -> &LineItemId {
        match self {
            LineItem::Pack(item) => &item.id,
            LineItem::Simple(item) => &item.id,
        }
    }

    /// Display name for the entry.
    pub fn display_name(&self) -> &str {
        match self {
            LineItem::Pack(item) => &item.pack_name,
            LineItem::Simple(item) => &item.name,
        }
    }

    /// Price of one unit of this line.
    pub fn unit_price(&self) -> Money {
        match self {
            LineItem::Pack(item) => item.pack_price,
            LineItem::Simple(item) => item.price,
        }
    }

    /// How many units of this line are in the cart.
    pub fn quantity(&self) -> u32 {
        match self {
            LineItem::Pack(item) => item.quantity,
            LineItem::Simple(item) => item.quantity,
        }
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        match self {
            LineItem::Pack(item) => item.quantity = quantity,
            LineItem::Simple(item) => item.quantity = quantity,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price() * self.quantity()
    }
}
