//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in the store's single display currency.
///
/// Wraps [`Decimal`] so monetary amounts are never held in binary floating
/// point. Serialized as a string (e.g. `"12.50"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Whether the amount is below zero. Catalog prices are expected to be
    /// non-negative; loaders use this to reject bad data.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl fmt::Display for Price {
    /// Formats as a dollar amount with two decimal places, e.g. `$12.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        s.parse().unwrap()
    }

    #[test]
    fn displays_with_two_decimal_places() {
        assert_eq!(price("50").to_string(), "$50.00");
        assert_eq!(price("12.5").to_string(), "$12.50");
        assert_eq!(price("0").to_string(), "$0.00");
    }

    #[test]
    fn multiplies_by_quantity() {
        assert_eq!(price("12.50") * 3, price("37.50"));
        assert_eq!(price("50") * 0, Price::ZERO);
    }

    #[test]
    fn sums_over_iterator() {
        let total: Price = [price("1.25"), price("2.75"), price("10")]
            .into_iter()
            .sum();
        assert_eq!(total, price("14.00"));
    }

    #[test]
    fn detects_negative_amounts() {
        assert!(price("-0.01").is_negative());
        assert!(!price("0").is_negative());
        assert!(!price("9.99").is_negative());
    }

    #[test]
    fn serializes_as_string() {
        assert_eq!(serde_json::to_string(&price("12.50")).unwrap(), "\"12.50\"");
        let back: Price = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(back, price("12.50"));
    }
}
