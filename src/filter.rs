//! Filter criteria for narrowing a classified table.

use crate::amount::Amount;
use crate::error::{FraudShieldError, Result};
use crate::risk::RiskLabel;

/// Bounds and toggles used to select rows for display or export.
///
/// Bounds are inclusive; a missing bound leaves that side open. The value is
/// immutable once built, so the same criteria always select the same rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    min_amount: Option<Amount>,
    max_amount: Option<Amount>,
    high_risk_only: bool,
}

impl FilterCriteria {
    /// Builds criteria, rejecting `min_amount > max_amount`.
    pub fn new(
        min_amount: Option<Amount>,
        max_amount: Option<Amount>,
        high_risk_only: bool,
    ) -> Result<Self> {
        if let (Some(min), Some(max)) = (min_amount, max_amount) {
            if min > max {
                return Err(FraudShieldError::InvalidCriteria {
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        Ok(FilterCriteria {
            min_amount,
            max_amount,
            high_risk_only,
        })
    }

    /// Criteria that keep every row.
    pub fn all() -> Self {
        Self::default()
    }

    /// Criteria that keep only High rows, at any amount.
    pub fn high_risk() -> Self {
        FilterCriteria {
            high_risk_only: true,
            ..Self::default()
        }
    }

    pub fn min_amount(&self) -> Option<Amount> {
        self.min_amount
    }

    pub fn max_amount(&self) -> Option<Amount> {
        self.max_amount
    }

    pub fn high_risk_only(&self) -> bool {
        self.high_risk_only
    }

    /// Returns `true` if a row with this amount and label passes the filter.
    pub fn matches(&self, amount: Amount, label: RiskLabel) -> bool {
        if self.min_amount.is_some_and(|min| amount < min) {
            return false;
        }
        if self.max_amount.is_some_and(|max| amount > max) {
            return false;
        }
        !self.high_risk_only || label == RiskLabel::High
    }
}
