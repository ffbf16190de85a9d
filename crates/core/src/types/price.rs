//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A unit price in Brazilian reais.
///
/// Wraps [`Decimal`] so cart totals never go through floating point.
/// The marketplace is single-currency, so no currency code is carried.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero reais.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount in reais.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in centavos.
    #[must_use]
    pub fn from_centavos(centavos: i64) -> Self {
        Self(Decimal::new(centavos, 2))
    }

    /// The decimal amount in reais.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// This unit price multiplied by a quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, std::ops::Add::add)
    }
}

impl std::fmt::Display for Price {
    /// Format for display, e.g. `R$ 19.90`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R$ {:.2}", self.0.round_dp(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Price::from_centavos(1990).to_string(), "R$ 19.90");
        assert_eq!(Price::new(Decimal::new(5, 0)).to_string(), "R$ 5.00");
        assert_eq!(Price::new(Decimal::new(55, 1)).to_string(), "R$ 5.50");
    }

    #[test]
    fn test_times_and_sum() {
        let unit = Price::from_centavos(250);
        assert_eq!(unit.times(3), Price::from_centavos(750));

        let total: Price = [unit, unit.times(3)].into_iter().sum();
        assert_eq!(total, Price::from_centavos(1000));
    }

    #[test]
    fn test_zero() {
        let total: Price = std::iter::empty().sum();
        assert_eq!(total, Price::ZERO);
    }

    #[test]
    fn test_serde_transparent() {
        let price: Price = serde_json::from_str("\"4.50\"").expect("valid price");
        assert_eq!(price, Price::from_centavos(450));
    }
}
