use std::fmt;

use thiserror::Error;

use serde::{Serialize, Serializer};

/// Number of fractional digits kept by `Money`
const SCALE_DIGITS: usize = 4;
const SCALE: i64 = 10_000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point currency amount, stored as ten-thousandths of a unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);

    /// Parses decimal text such as `"100"`, `"12.5"` or `"-3.0001"`.
    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let text = string.trim();

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let mut parts = unsigned.split('.');

        let units = parts.next().unwrap_or_default();
        let fraction = parts.next();

        if parts.next().is_some() {
            return Err(MoneyError::Parse("Too many decimal points", string.to_string()));
        }

        if units.is_empty() && fraction.map_or(true, str::is_empty) {
            return Err(MoneyError::Parse("No digits", string.to_string()));
        }

        if !units.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyError::Parse("Invalid digits", string.to_string()));
        }

        let fraction = fraction.unwrap_or_default();

        if fraction.len() > SCALE_DIGITS {
            return Err(MoneyError::Parse("Too many decimal places", string.to_string()));
        }

        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyError::Parse("Invalid digits", string.to_string()));
        }

        let out_of_range = || MoneyError::Parse("Out of range", string.to_string());

        let units: i64 = if units.is_empty() {
            0
        } else {
            units.parse().map_err(|_| out_of_range())?
        };

        let fraction: i64 = format!("{:0<width$}", fraction, width = SCALE_DIGITS)
            .parse()
            .map_err(|_| out_of_range())?;

        let value = units
            .checked_mul(SCALE)
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(out_of_range)?;

        Ok(Money(if negative { -value } else { value }))
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Self) -> Result<Self, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MoneyError::Overflow("add", self, other))
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(MoneyError::Overflow("sub", self, other))
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE as u64;

        write!(f, "{sign}{}.{:04}", abs / scale, abs % scale)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
