//! # Money Module
//!
//! Provides the `Money` type used for prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The catalog is priced in whole rubles:                                 │
//! │                                                                         │
//! │    iPhone 15 Pro Max 256GB      89 990 ₽                               │
//! │    Toyota Camry 2023         2 499 000 ₽                               │
//! │                                                                         │
//! │  Cart totals are sums of price × quantity. With i64 whole units the    │
//! │  sum is exact, and there is no float drift to round away at display.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_rubles(89_990);
//! let line = price.multiply_quantity(2);
//! assert_eq!(line.rubles(), 179_980);
//! assert_eq!(line.to_string(), "179\u{a0}980\u{a0}₽");
//! ```
//!
//! Arithmetic saturates at the `i64` bounds instead of wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

/// Currency sign used by `Display`.
pub const RUBLE_SIGN: &str = "₽";

/// Digit group separator used by the ru-RU locale (no-break space).
const GROUP_SEPARATOR: char = '\u{a0}';

/// A monetary amount in whole currency units.
///
/// Serializes as a bare integer (newtype), so catalog files carry `"price": 89990`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rubles.
    #[inline]
    pub const fn from_rubles(rubles: i64) -> Self {
        Money(rubles)
    }

    /// Returns the amount in whole rubles.
    #[inline]
    pub const fn rubles(&self) -> i64 {
        self.0
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

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a cart quantity, saturating at the bounds.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_rubles(16_990);
    /// assert_eq!(unit_price.multiply_quantity(3).rubles(), 50_970);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// How much cheaper this price is than `reference`.
    ///
    /// Never negative: a price above its reference saves nothing.
    pub fn savings_from(&self, reference: Money) -> Money {
        if reference.0 > self.0 {
            Money(reference.0.saturating_sub(self.0))
        } else {
            Money::zero()
        }
    }

    /// Formats the digits with ru-RU grouping, without the currency sign.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_rubles(2_499_000).grouped(), "2\u{a0}499\u{a0}000");
    /// assert_eq!(Money::from_rubles(990).grouped(), "990");
    /// ```
    pub fn grouped(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

        if self.0 < 0 {
            out.push('-');
        }

        let lead = digits.len() % 3;
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && (i + 3 - lead) % 3 == 0 {
                out.push(GROUP_SEPARATOR);
            }
            out.push(ch);
        }

        out
    }

    /// Formats with a caller-chosen currency sign (`"89 990 ₽"` style).
    pub fn format_with(&self, symbol: &str) -> String {
        format!("{}{}{}", self.grouped(), GROUP_SEPARATOR, symbol)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(RUBLE_SIGN))
    }
}

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
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rubles() {
        let money = Money::from_rubles(89_990);
        assert_eq!(money.rubles(), 89_990);
        assert!(!money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_display_uses_ru_grouping() {
        assert_eq!(Money::from_rubles(89_990).to_string(), "89\u{a0}990\u{a0}₽");
        assert_eq!(Money::from_rubles(3_299_000).to_string(), "3\u{a0}299\u{a0}000\u{a0}₽");
        assert_eq!(Money::from_rubles(0).to_string(), "0\u{a0}₽");
        assert_eq!(Money::from_rubles(-1_500).to_string(), "-1\u{a0}500\u{a0}₽");
    }

    #[test]
    fn test_grouped_boundaries() {
        assert_eq!(Money::from_rubles(1).grouped(), "1");
        assert_eq!(Money::from_rubles(999).grouped(), "999");
        assert_eq!(Money::from_rubles(1_000).grouped(), "1\u{a0}000");
        assert_eq!(Money::from_rubles(100_000).grouped(), "100\u{a0}000");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_rubles(1_000);
        let b = Money::from_rubles(500);

        assert_eq!((a + b).rubles(), 1_500);
        assert_eq!((a - b).rubles(), 500);

        let total: Money = [a, b, Money::from_rubles(1)].into_iter().sum();
        assert_eq!(total.rubles(), 1_501);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_rubles(i64::MAX);

        assert_eq!(max.multiply_quantity(3), max);
        assert_eq!(max + Money::from_rubles(1), max);
        assert_eq!(Money::from_rubles(i64::MIN) - Money::from_rubles(1), Money::from_rubles(i64::MIN));

        let total: Money = [max, max, Money::from_rubles(10)].into_iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_savings_from_reference() {
        let price = Money::from_rubles(89_990);
        assert_eq!(price.savings_from(Money::from_rubles(139_990)).rubles(), 50_000);
        assert!(price.savings_from(Money::from_rubles(10)).is_zero());
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Money::from_rubles(42)).unwrap();
        assert_eq!(json, "42");
        let back: Money = serde_json::from_str("16990").unwrap();
        assert_eq!(back.rubles(), 16_990);
    }
}
