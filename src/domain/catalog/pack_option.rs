//! PackOption entity - a purchasable container size.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, PackOptionId, ValidationError};

/// A purchasable pack size with a fixed price and capacity.
///
/// The price is independent of which flavors fill the pack. A capacity
/// of 1 denotes the single-cookie "pack".
///
/// # Invariants
///
/// - `capacity >= 1`
/// - `price > 0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackOption {
    /// Stable identifier (e.g. "4pack").
    pub id: PackOptionId,

    /// Display name (e.g. "4-Pack").
    pub name: String,

    /// Fixed total price for the filled pack.
    pub price: Money,

    /// Number of cookies the pack must contain.
    pub capacity: u32,
}

impl PackOption {
    /// Creates a new pack option.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, the capacity is zero, or
    /// the price is not positive.
    pub fn new(
        id: PackOptionId,
        name: impl Into<String>,
        price: Money,
        capacity: u32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if capacity < 1 {
            return Err(ValidationError::below_minimum("capacity", 1, capacity as i64));
        }
        if price.cents() < 1 {
            return Err(ValidationError::below_minimum("price", 1, price.cents()));
        }
        Ok(Self {
            id,
            name,
            price,
            capacity,
        })
    }

    /// Percentage saved versus buying `capacity` cookies at the given
    /// single-cookie price, rounded to the nearest whole percent.
    pub fn savings_percent(&self, single_price: Money) -> i64 {
        let individual_total = single_price * self.capacity;
        if individual_total.is_zero() {
            return 0;
        }
        let saved = individual_total.cents() - self.price.cents();
        ((saved as f64 / individual_total.cents() as f64) * 100.0).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack_id(id: &str) -> PackOptionId {
        PackOptionId::new(id).unwrap()
    }

    #[test]
    fn valid_pack_option_is_accepted() {
        let pack = PackOption::new(pack_id("4pack"), "4-Pack", Money::from_dollars(18.99), 4);
        assert!(pack.is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let result = PackOption::new(pack_id("empty"), "Empty", Money::from_dollars(1.00), 0);
        assert!(matches!(
            result,
            Err(ValidationError::BelowMinimum { .. })
        ));
    }

    #[test]
    fn free_pack_is_rejected() {
        let result = PackOption::new(pack_id("free"), "Free", Money::ZERO, 4);
        assert!(result.is_err());
    }

    #[test]
    fn single_cookie_pack_is_allowed() {
        let pack =
            PackOption::new(pack_id("single"), "Single", Money::from_dollars(4.99), 1).unwrap();
        assert_eq!(pack.capacity, 1);
    }

    #[test]
    fn savings_percent_matches_storefront_math() {
        // 4 singles at $4.99 would be $19.96; the 4-pack is $18.99
        let pack =
            PackOption::new(pack_id("4pack"), "4-Pack", Money::from_dollars(18.99), 4).unwrap();
        assert_eq!(pack.savings_percent(Money::from_dollars(4.99)), 5);
    }

    #[test]
    fn savings_percent_is_zero_for_the_single() {
        let pack =
            PackOption::new(pack_id("single"), "Single", Money::from_dollars(4.99), 1).unwrap();
        assert_eq!(pack.savings_percent(Money::from_dollars(4.99)), 0);
    }
}
