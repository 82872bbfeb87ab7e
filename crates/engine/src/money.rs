use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use crate::{Currency, EngineError};

/// Signed monthly amount represented as **integer cents**.
///
/// Every amount in the engine (line items, section totals, the grand total)
/// uses this type to avoid floating-point drift. Arithmetic saturates instead
/// of overflowing.
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing from cell text (accepts `.` or `,` as decimal separator and an
/// optional currency symbol; extra decimals are rounded to the cent):
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
/// assert_eq!("$10,5".parse::<Money>().unwrap().cents(), 1050);
/// assert_eq!("12.345".parse::<Money>().unwrap().cents(), 1235);
/// assert!("abc".parse::<Money>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates a new amount from whole dollars (or euros).
    #[must_use]
    pub const fn from_major(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Formats the amount for display with the currency symbol and thousands
    /// separators, e.g. `-$1,234.50`.
    #[must_use]
    pub fn format(self, currency: Currency) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let major = group_thousands(abs / 100);
        let minor = abs % 100;
        format!("{sign}{}{major}.{minor:02}", currency.symbol())
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

/// Plain `1234.50` rendering, the canonical text shown in an editable cell.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl FromStr for Money {
    type Err = EngineError;

    /// Parses a decimal string into cents, rounding half away from zero.
    ///
    /// Accepts `.` or `,` as decimal separator, a leading-dot fraction
    /// (`.5`), an exponent (`1e3`, `2.5E-1`), an optional leading `+`/`-`
    /// and an optional `$`/`€` symbol after the sign.
    ///
    /// Rejects empty strings, anything that is not a number and values that
    /// do not fit in `i64` cents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount(format!("invalid amount: {s:?}"));
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim_start();
        let rest = rest
            .strip_prefix('$')
            .or_else(|| rest.strip_prefix('€'))
            .unwrap_or(rest)
            .trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let text = rest.replace(',', ".");
        let (mantissa, exponent) = match text.find(['e', 'E']) {
            Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
            None => (text.as_str(), None),
        };

        let (units, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if units.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !units.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let exponent = match exponent {
            Some(text) => parse_exponent(text).ok_or_else(invalid)?,
            None => 0,
        };

        let digits = format!("{units}{fraction}");
        let digits = digits.trim_start_matches('0');
        let shift = exponent
            .saturating_sub(i64::try_from(fraction.len()).unwrap_or(i64::MAX))
            .saturating_add(2);
        let magnitude = scale_to_cents(digits, shift).ok_or_else(overflow)?;

        Ok(Money(if negative { -magnitude } else { magnitude }))
    }
}

/// Parses the exponent of `1e3` style input. Saturates on absurd exponents.
fn parse_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = digits.bytes().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -value } else { value })
}

/// Turns the digit string `digits * 10^shift` into whole cents.
///
/// `digits` carries no leading zeros. When `shift` is negative the dropped
/// digits are rounded half up on the magnitude.
fn scale_to_cents(digits: &str, shift: i64) -> Option<i64> {
    if digits.is_empty() {
        return Some(0);
    }

    if shift >= 0 {
        let factor = 10_i64.checked_pow(u32::try_from(shift).ok()?)?;
        return accumulate(digits)?.checked_mul(factor);
    }

    let dropped = usize::try_from(shift.unsigned_abs()).unwrap_or(usize::MAX);
    if dropped > digits.len() {
        return Some(0);
    }
    let (kept, rest) = digits.split_at(digits.len() - dropped);
    let round_up = rest.as_bytes().first().is_some_and(|&d| d >= b'5');
    let kept = if kept.is_empty() { 0 } else { accumulate(kept)? };
    kept.checked_add(i64::from(round_up))
}

fn accumulate(digits: &str) -> Option<i64> {
    digits.bytes().try_fold(0_i64, |acc, d| {
        acc.checked_mul(10)?.checked_add(i64::from(d - b'0'))
    })
}
