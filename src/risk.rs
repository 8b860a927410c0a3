//! Amount-based risk classification.
//!
//! The rule is a fixed threshold function, not a learned model:
//!
//! | amount                        | label  |
//! |-------------------------------|--------|
//! | `> 1,000,000`                 | High   |
//! | `500,000 ..= 1,000,000`       | Medium |
//! | `< 500,000` (negatives too)   | Low    |

use crate::amount::Amount;
use crate::error::{FraudShieldError, Result};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lower bound (inclusive) of the Medium tier.
pub const DEFAULT_MEDIUM_THRESHOLD: i64 = 500_000;

/// Upper bound (inclusive) of the Medium tier; anything above is High.
pub const DEFAULT_HIGH_THRESHOLD: i64 = 1_000_000;

/// Risk category assigned to a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLabel {
    Low,
    Medium,
    High,
}

impl RiskLabel {
    /// Presentation hint for highlighting a label in rendered output.
    pub fn display_hint(&self) -> &'static str {
        match self {
            RiskLabel::Low => "ok",
            RiskLabel::Medium => "review",
            RiskLabel::High => "alert",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low",
            RiskLabel::Medium => "Medium",
            RiskLabel::High => "High",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a label cell holds something other than Low/Medium/High.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown risk label '{0}'")]
pub struct UnknownLabel(pub String);

impl FromStr for RiskLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLabel::Low),
            "medium" => Ok(RiskLabel::Medium),
            "high" => Ok(RiskLabel::High),
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}

/// Classifies amounts against two cutoffs.
///
/// Stateless: the same amount always yields the same label for a given
/// classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskClassifier {
    medium: Amount,
    high: Amount,
}

impl RiskClassifier {
    /// Creates a classifier using the default 500,000 / 1,000,000 cutoffs.
    pub fn new() -> Self {
        RiskClassifier {
            medium: Amount::from_units(DEFAULT_MEDIUM_THRESHOLD),
            high: Amount::from_units(DEFAULT_HIGH_THRESHOLD),
        }
    }

    /// Creates a classifier with custom cutoffs.
    ///
    /// `medium` is the inclusive lower bound of the Medium tier and `high` its
    /// inclusive upper bound. Fails if `medium > high`.
    pub fn with_thresholds(medium: Amount, high: Amount) -> Result<Self> {
        if medium > high {
            return Err(FraudShieldError::InvalidThresholds {
                medium: medium.to_string(),
                high: high.to_string(),
            });
        }
        Ok(RiskClassifier { medium, high })
    }

    /// Assigns a risk label to an amount.
    pub fn classify(&self, amount: Amount) -> RiskLabel {
        if amount > self.high {
            RiskLabel::High
        } else if amount >= self.medium {
            RiskLabel::Medium
        } else {
            RiskLabel::Low
        }
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies an amount with the default cutoffs.
pub fn classify(amount: Amount) -> RiskLabel {
    RiskClassifier::new().classify(amount)
}
