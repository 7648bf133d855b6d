//! Exact currency arithmetic.
//!
//! Prices are kept as [`rust_decimal::Decimal`] so cart totals are exact;
//! display always rounds to two decimal places with a `$` prefix.

use rust_decimal::Decimal;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// An exact monetary amount in dollars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// The smallest chargeable amount: one cent.
    pub fn minimum_unit() -> Self {
        Money(Decimal::new(1, 2))
    }

    /// Builds an amount from a whole number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
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

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        Money(iter.map(|money| money.0).sum())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_to_two_decimal_places() {
        assert_eq!(Money::from_cents(300).to_string(), "$3.00");
        assert_eq!(Money::new(Decimal::new(5, 0)).to_string(), "$5.00");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn sums_are_exact() {
        let total: Money = [Money::from_cents(350), Money::from_cents(125)]
            .into_iter()
            .sum();
        assert_eq!(total.to_string(), "$4.75");
    }

    #[test]
    fn minimum_unit_is_one_cent() {
        assert_eq!(Money::minimum_unit(), Money::from_cents(1));
    }
}
