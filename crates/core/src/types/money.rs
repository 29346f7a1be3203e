//! Money amounts using decimal arithmetic.
//!
//! All prices in the shop are whole peso amounts, but totals are stored
//! and reported with two decimal places, so money is carried as a
//! [`Decimal`] end to end rather than a float.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A money amount in the shop's single currency.
///
/// Thin wrapper over [`Decimal`] so amounts can't be mixed with bare
/// numeric quantities by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a money amount from a decimal value.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a money amount from a whole number of pesos.
    #[must_use]
    pub fn from_pesos(pesos: u32) -> Self {
        Self(Decimal::from(pesos))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display with a currency symbol, e.g. `$200.00`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let base = Money::from_pesos(80);
        let extras = Money::from_pesos(20);
        assert_eq!((base + extras) * 2, Money::from_pesos(200));
    }

    #[test]
    fn test_sum() {
        let total: Money = [40, 80, 120].into_iter().map(Money::from_pesos).sum();
        assert_eq!(total, Money::from_pesos(240));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_pesos(200).display(), "$200.00");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }
}
