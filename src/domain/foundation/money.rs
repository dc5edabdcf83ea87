//! Money value object for monetary amounts.
//!
//! Amounts are stored as i64 cents so cart totals stay cent-exact.
//! Serialization uses a dollars number (`18.99`) because that is the
//! shape persisted cart snapshots and order payloads carry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Monetary amount in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from whole cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates an amount from a dollars value, rounding to the nearest cent.
    pub fn from_dollars(dollars: f64) -> Self {
        Self((dollars * 100.0).round() as i64)
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the amount as a dollars value.
    pub fn as_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money(self.0 * rhs as i64)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_dollars())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        Ok(Money::from_dollars(dollars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_dollars_rounds_to_nearest_cent() {
        assert_eq!(Money::from_dollars(18.99).cents(), 1899);
        assert_eq!(Money::from_dollars(4.999).cents(), 500);
        assert_eq!(Money::from_dollars(0.0).cents(), 0);
    }

    #[test]
    fn multiplication_matches_cart_total_math() {
        let price = Money::from_dollars(18.99);
        assert_eq!(price * 3, Money::from_cents(5697));
    }

    #[test]
    fn sum_accumulates_cent_exactly() {
        let total: Money = [Money::from_dollars(18.99), Money::from_dollars(24.99)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 4398);
    }

    #[test]
    fn displays_with_two_decimal_places() {
        assert_eq!(format!("{}", Money::from_cents(1899)), "$18.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-99)), "-$0.99");
    }

    #[test]
    fn serializes_as_dollars_number() {
        let json = serde_json::to_string(&Money::from_cents(1899)).unwrap();
        assert_eq!(json, "18.99");
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let original = Money::from_dollars(48.99);
        let json = serde_json::to_string(&original).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn deserializes_from_integer_number() {
        let money: Money = serde_json::from_str("5").unwrap();
        assert_eq!(money.cents(), 500);
    }
}
