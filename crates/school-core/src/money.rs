//! Money
//!
//! Amounts are whole cents so that "balance is exactly zero" is an exact
//! comparison.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

use crate::error::MoneyParseError;

/// An amount in US cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Parse user input such as `"2500"`, `"1000.5"` or `"0.01"`.
    ///
    /// A leading minus sign is accepted so that the caller can reject the
    /// amount with its own message.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError(input.to_string());
        let text = input.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if fraction.len() > 2
            || !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|dollars| dollars.checked_mul(100))
                .ok_or_else(invalid)?
        };
        let fraction_cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse::<i64>().map_err(|_| invalid())?,
        };
        let cents = whole_cents.checked_add(fraction_cents).ok_or_else(invalid)?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// `$15,000.00` style, always with cents
    pub fn to_currency_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}${}.{:02}", sign, group_thousands(abs / 100), abs % 100)
    }

    /// Plain decimal text for form prefill: `2500` or `1000.50`
    pub fn to_input_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        if abs % 100 == 0 {
            format!("{}{}", sign, abs / 100)
        } else {
            format!("{}{}.{:02}", sign, abs / 100, abs % 100)
        }
    }
}

/// `$2,500`, with cents only when there are any
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let dollars = group_thousands(abs / 100);
        match abs % 100 {
            0 => write!(f, "{}${}", sign, dollars),
            cents => write!(f, "{}${}.{:02}", sign, dollars, cents),
        }
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

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!(Money::parse("2500"), Ok(Money::from_dollars(2500)));
        assert_eq!(Money::parse(" 1000.5 "), Ok(Money::from_cents(100_050)));
        assert_eq!(Money::parse("0.01"), Ok(Money::from_cents(1)));
        assert_eq!(Money::parse(".75"), Ok(Money::from_cents(75)));
        assert_eq!(Money::parse("12."), Ok(Money::from_dollars(12)));
    }

    #[test]
    fn test_parse_negative_is_kept() {
        assert_eq!(Money::parse("-5"), Ok(Money::from_dollars(-5)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "   ", ".", "abc", "12.345", "1,000", "$5", "1e3"] {
            assert!(Money::parse(input).is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_dollars(2500).to_string(), "$2,500");
        assert_eq!(Money::from_cents(100_050).to_string(), "$1,000.50");
        assert_eq!(Money::ZERO.to_string(), "$0");
        assert_eq!(Money::from_dollars(245_680).to_string(), "$245,680");
        assert_eq!(Money::from_dollars(-40).to_string(), "-$40");
    }

    #[test]
    fn test_currency_and_input_strings() {
        assert_eq!(Money::from_dollars(15_000).to_currency_string(), "$15,000.00");
        assert_eq!(Money::from_dollars(2500).to_input_string(), "2500");
        assert_eq!(Money::from_cents(250_005).to_input_string(), "2500.05");
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_dollars(1), Money::from_cents(50)].into_iter().sum();
        assert_eq!(total, Money::from_cents(150));
    }
}
