//! Exact decimal transaction amounts.
//!
//! Amounts are parsed from CSV text with `rust_decimal` so that threshold
//! comparisons at the risk boundaries never suffer floating-point error.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a cell does not hold a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a number")]
pub struct InvalidAmount(pub String);

/// A transaction amount as written in the uploaded data.
///
/// The value keeps the scale it was written with, so `1000000` and
/// `1000000.00` compare equal but display as they were read.
///
/// Numbers beyond the decimal range (about 7.9e28) saturate to
/// `Decimal::MAX` or `Decimal::MIN`, which still sorts them past any
/// threshold. The original cell text is kept by the caller.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use fraudshield::Amount;
///
/// let amount = Amount::from_str(" 1500000.50 ").unwrap();
/// assert_eq!(amount.to_string(), "1500000.50");
/// assert!(amount > Amount::from_units(1_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates an amount from a whole number of currency units.
    pub fn from_units(units: i64) -> Self {
        Amount(Decimal::from(units))
    }

    /// Maps a finite float onto the decimal range, saturating at the ends.
    fn saturating_from_f64(value: f64) -> Self {
        match Decimal::from_f64(value) {
            Some(decimal) => Amount(decimal),
            None if value.is_sign_negative() => Amount(Decimal::MIN),
            None => Amount(Decimal::MAX),
        }
    }
}

impl FromStr for Amount {
    type Err = InvalidAmount;

    /// Parses plain (`-12.5`) and scientific (`1e6`, `1.5E+7`) notation.
    ///
    /// Digit separators such as `1_000_000` or `1,000` are rejected.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || InvalidAmount(trimmed.to_string());
        if trimmed.is_empty() || trimmed.contains('_') {
            return Err(invalid());
        }

        if let Ok(decimal) = Decimal::from_str(trimmed) {
            return Ok(Amount(decimal));
        }
        if trimmed.contains(['e', 'E']) {
            if let Ok(decimal) = Decimal::from_scientific(trimmed) {
                return Ok(Amount(decimal));
            }
        }

        // Numeric but outside the decimal range, or an exponent form
        // `from_scientific` does not read.
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Amount::saturating_from_f64(value)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
