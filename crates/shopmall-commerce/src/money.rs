//! Money type for representing monetary values.
//!
//! Amounts are integers in the smallest unit of the store currency, which
//! avoids the floating-point drift that plagues monetary calculations. The
//! store trades in a single currency, so no currency tag is carried.
//!
//! All arithmetic saturates instead of overflowing so that cart transitions
//! stay total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// A monetary amount in the smallest currency unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money(0);

    /// Create a new amount from minor units.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the raw amount in minor units.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// Multiply by a quantity (e.g. unit price times line quantity).
    pub fn times(self, quantity: impl Into<i64>) -> Money {
        Money(self.0.saturating_mul(quantity.into()))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        *self = self.saturating_add(other);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        self.saturating_sub(other)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        *self = self.saturating_sub(other);
    }
}

impl Mul<u64> for Money {
    type Output = Money;

    fn mul(self, quantity: u64) -> Money {
        self.times(i64::try_from(quantity).unwrap_or(i64::MAX))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&PriceFormat::default().format(*self))
    }
}

/// How amounts are rendered for shoppers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFormat {
    /// Currency symbol printed before the amount (e.g. "NT$").
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Number of minor-unit digits after the decimal point.
    #[serde(default)]
    pub decimal_places: u32,
    /// Separator inserted between groups of three integer digits.
    #[serde(default = "default_separator")]
    pub thousands_separator: String,
}

fn default_symbol() -> String {
    "NT$".to_string()
}

fn default_separator() -> String {
    ",".to_string()
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            decimal_places: 0,
            thousands_separator: default_separator(),
        }
    }
}

impl PriceFormat {
    /// Format as a display string (e.g. "NT$ 36,900").
    pub fn format(&self, money: Money) -> String {
        let amount = money.amount();
        let sign = if amount < 0 { "-" } else { "" };
        let magnitude = amount.unsigned_abs();
        let divisor = 10_u64.saturating_pow(self.decimal_places);

        let whole = group_digits(magnitude / divisor, &self.thousands_separator);
        let body = if self.decimal_places == 0 {
            whole
        } else {
            let places = self.decimal_places as usize;
            format!("{whole}.{:0places$}", magnitude % divisor)
        };

        format!("{} {sign}{body}", self.symbol)
    }

    /// Format without the symbol (e.g. "36,900").
    pub fn format_amount(&self, money: Money) -> String {
        let formatted = self.format(money);
        formatted
            .strip_prefix(&self.symbol)
            .map(|s| s.trim_start().to_string())
            .unwrap_or(formatted)
    }
}

fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(300);
        assert_eq!((a + b).amount(), 1300);
        assert_eq!((a - b).amount(), 700);
        assert_eq!((a * 3).amount(), 3000);
        assert_eq!(a.times(-2_i64).amount(), -2000);
    }

    #[test]
    fn test_money_saturates() {
        let max = Money::new(i64::MAX);
        assert_eq!(max + Money::new(1), max);
        assert_eq!(Money::new(i64::MIN) - Money::new(1), Money::new(i64::MIN));
        assert_eq!(max * 2, max);
        assert_eq!(Money::new(1) * u64::MAX, Money::new(i64::MAX));
        assert_eq!(Money::new(-1) * u64::MAX, Money::new(-i64::MAX));
    }

    #[test]
    fn test_money_sum() {
        let amounts = [Money::new(100), Money::new(250), Money::new(50)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::new(400));

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_default_format() {
        assert_eq!(Money::new(36900).to_string(), "NT$ 36,900");
        assert_eq!(Money::new(999).to_string(), "NT$ 999");
        assert_eq!(Money::new(1_234_567).to_string(), "NT$ 1,234,567");
        assert_eq!(Money::ZERO.to_string(), "NT$ 0");
        assert_eq!(Money::new(-5000).to_string(), "NT$ -5,000");
    }

    #[test]
    fn test_format_with_decimals() {
        let format = PriceFormat {
            symbol: "$".to_string(),
            decimal_places: 2,
            thousands_separator: ",".to_string(),
        };
        assert_eq!(format.format(Money::new(4999)), "$ 49.99");
        assert_eq!(format.format(Money::new(123_456_05)), "$ 123,456.05");
        assert_eq!(format.format_amount(Money::new(5)), "0.05");
    }
}
