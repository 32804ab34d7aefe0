//! Money type for representing currency amounts
//!
//! Wraps an arbitrary-precision `Decimal` so that sums over any number of
//! transactions are exact. No floating-point value is ever involved, on disk
//! or in memory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Represents a monetary amount in a single implicit currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal value
    ///
    /// # Examples
    /// ```
    /// use moneytrack::models::Money;
    /// use rust_decimal_macros::dec;
    /// let amount = Money::new(dec!(10.50));
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money amount from a whole number of currency units
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal value
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Add, returning `None` if the result is out of range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract, returning `None` if the result is out of range
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Add, clamping to the representable range
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Subtract, clamping to the representable range
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let rest = rest.strip_prefix('$').unwrap_or(rest);

        if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value = Decimal::from_str(rest)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, self.0.abs())
        } else {
            format!("{}{}", symbol, self.0)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate so width/alignment flags apply to the rendered amount.
        fmt::Display::fmt(&self.0.to_string(), f)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

// Folds clamp instead of panicking so reports over stored data always render.
// Writes are range-checked before they reach a wallet.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc.saturating_add(*m))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_is_exact() {
        assert_eq!(Money::new(dec!(10.50)).to_string(), "10.50");
        assert_eq!(Money::new(dec!(0.001)).to_string(), "0.001");
        assert_eq!(Money::new(dec!(-3.2)).to_string(), "-3.2");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::new(dec!(10.50)).format_with_symbol("$"), "$10.50");
        assert_eq!(Money::new(dec!(-10.50)).format_with_symbol("$"), "-$10.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap(), Money::new(dec!(10.50)));
        assert_eq!(Money::parse("$10.50").unwrap(), Money::new(dec!(10.50)));
        assert_eq!(Money::parse("-10.5").unwrap(), Money::new(dec!(-10.5)));
        assert_eq!(Money::parse("1000").unwrap(), Money::from_units(1000));
        assert_eq!(Money::parse(" 0.01 ").unwrap(), Money::new(dec!(0.01)));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1e5").is_err());
        assert!(Money::parse("--5").is_err());
    }

    #[test]
    fn test_no_rounding_drift() {
        let total: Money = (0..1000).map(|_| Money::new(dec!(0.1))).sum();
        assert_eq!(total, Money::from_units(100));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(dec!(10.00));
        let b = Money::new(dec!(5.25));
        assert_eq!(a + b, Money::new(dec!(15.25)));
        assert_eq!(a - b, Money::new(dec!(4.75)));
        assert_eq!(-a, Money::new(dec!(-10)));

        let mut c = a;
        c -= b;
        c += Money::new(dec!(0.25));
        assert_eq!(c, Money::new(dec!(5)));
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::new(dec!(0.01)).is_positive());
        assert!(Money::new(dec!(-0.01)).is_negative());
        assert_eq!(Money::new(dec!(-7)).abs(), Money::new(dec!(7)));
    }

    #[test]
    fn test_checked_arithmetic_at_the_edges() {
        let max = Money::new(Decimal::MAX);
        let one = Money::new(dec!(1));

        assert_eq!(max.checked_add(one), None);
        assert_eq!((-max).checked_sub(one), None);
        assert_eq!(max.checked_sub(one), Some(Money::new(Decimal::MAX - dec!(1))));
        assert_eq!(one.checked_add(one), Some(Money::new(dec!(2))));

        assert_eq!(max.saturating_add(one), max);
        assert_eq!((-max).saturating_sub(one), -max);
    }

    #[test]
    fn test_sum_clamps_instead_of_panicking() {
        let max = Money::new(Decimal::MAX);
        let total: Money = [max, max, Money::new(dec!(1))].into_iter().sum();
        assert_eq!(total, max);

        let amounts = [Money::new(dec!(1.5)), Money::new(dec!(2.25))];
        assert_eq!(amounts.iter().sum::<Money>(), Money::new(dec!(3.75)));
    }

    #[test]
    fn test_serialization_is_string() {
        let m = Money::new(dec!(550.10));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"550.10\"");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
