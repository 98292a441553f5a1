//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64 prices:                                                       │
//! │    0.10 + 0.20 = 0.30000000000000004  ❌ WRONG!                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10 + 20 = 30 cents = $0.30  ✅                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bistro_core::money::Money;
//!
//! // Create from cents (preferred)
//! let soup = Money::from_cents(599); // $5.99
//!
//! // Or parse operator input
//! let steak: Money = "15.99".parse().unwrap();
//!
//! let total = soup + steak;
//! assert_eq!(total.cents(), 2198);
//! assert_eq!(total.to_string(), "$21.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction stays closed; menu prices are checked
///   for non-negativity at the catalog boundary instead
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
/// - **Saturating arithmetic**: a sum past `i64::MAX` cents pins at the
///   bound instead of panicking or wrapping negative
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► Order.total_price() ──► report::total_sales()
///                          │                         │
///                          └──► "$21.98" on receipt  └──► "$33.96" in report
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// let price = Money::from_cents(599); // Represents $5.99
    /// assert_eq!(price.cents(), 599);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// let price = Money::from_major_minor(15, 99); // $15.99
    /// assert_eq!(price.cents(), 1599);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -$5.50
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1599).dollars(), 15);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text such as `"5.99"`, `"$5.99"`, `"5"` or `"5.9"`.
///
/// ## Rules
/// - Optional leading `-` and optional `$`
/// - At most two fraction digits (`"5.999"` is rejected, never rounded)
/// - Digits only otherwise; no thousands separators
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let text = s.trim();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let text = text.strip_prefix('$').unwrap_or(text);

        let (major, minor) = text.split_once('.').unwrap_or((text, ""));

        if major.is_empty() && minor.is_empty() {
            return Err(invalid("expected an amount like 5.99"));
        }
        if !major.chars().chain(minor.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected an amount like 5.99"));
        }
        if minor.len() > 2 {
            return Err(invalid("at most two decimal places"));
        }

        let major_cents = if major.is_empty() {
            0
        } else {
            major
                .parse::<i64>()
                .ok()
                .and_then(|m| m.checked_mul(100))
                .ok_or_else(|| invalid("amount is too large"))?
        };

        // "5.9" means 90 cents, not 9
        let minor_cents = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| invalid("bad cents"))? * 10,
            _ => minor.parse::<i64>().map_err(|_| invalid("bad cents"))?,
        };

        let cents = major_cents
            .checked_add(minor_cents)
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money as `$D.CC`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Summing an iterator of Money; an empty iterator sums to zero.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1599);
        assert_eq!(money.cents(), 1599);
        assert_eq!(money.dollars(), 15);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(599)), "$5.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut running = Money::zero();
        running += a;
        running += b;
        assert_eq!(running.cents(), 1500);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(599), Money::from_cents(2098)];
        let total: Money = prices.iter().sum();
        assert_eq!(total.cents(), 2697);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_addition_saturates_at_bounds() {
        let max = Money::from_cents(i64::MAX);
        let one = Money::from_cents(1);

        assert_eq!(max + one, max);
        assert_eq!(Money::from_cents(i64::MIN) - one, Money::from_cents(i64::MIN));

        let mut running = max;
        running += max;
        assert_eq!(running, max);

        let total: Money = [max, max, one].into_iter().sum();
        assert_eq!(total, max);
        assert!(!total.is_negative());
    }

    #[test]
    fn test_parse_valid_amounts() {
        assert_eq!("5.99".parse::<Money>().unwrap().cents(), 599);
        assert_eq!("$15.99".parse::<Money>().unwrap().cents(), 1599);
        assert_eq!("  4.5 ".parse::<Money>().unwrap().cents(), 450);
        assert_eq!("3".parse::<Money>().unwrap().cents(), 300);
        assert_eq!("3.".parse::<Money>().unwrap().cents(), 300);
        assert_eq!(".99".parse::<Money>().unwrap().cents(), 99);
        assert_eq!("0.05".parse::<Money>().unwrap().cents(), 5);
        assert_eq!("-2.50".parse::<Money>().unwrap().cents(), -250);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("5.999".parse::<Money>().is_err());
        assert!("1,000.00".parse::<Money>().is_err());
        assert!("5.-9".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_float_drift_avoided() {
        let as_float: f64 = [0.1, 0.2].iter().sum();
        assert_ne!(as_float, 0.3);

        let as_money: Money = [10, 20].into_iter().map(Money::from_cents).sum();
        assert_eq!(as_money.to_string(), "$0.30");
    }
}
