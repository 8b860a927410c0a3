//! Aggregate label counts.

use crate::risk::RiskLabel;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Label counts for a classified table.
///
/// # Invariants
///
/// - `high_count + medium_count + low_count == total`
/// - `high_risk_percent` is `high_count / total * 100` rounded half away
///   from zero to two decimal places, or zero for an empty table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SummaryCounts {
    pub total: usize,

    #[serde(rename = "high")]
    pub high_count: usize,

    #[serde(rename = "medium")]
    pub medium_count: usize,

    #[serde(rename = "low")]
    pub low_count: usize,

    #[serde(with = "rust_decimal::serde::str")]
    pub high_risk_percent: Decimal,
}

impl SummaryCounts {
    /// Counts labels in a single pass.
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = RiskLabel>,
    {
        let mut summary = SummaryCounts::default();
        for label in labels {
            summary.total += 1;
            match label {
                RiskLabel::High => summary.high_count += 1,
                RiskLabel::Medium => summary.medium_count += 1,
                RiskLabel::Low => summary.low_count += 1,
            }
        }

        if summary.total > 0 {
            summary.high_risk_percent = (Decimal::from(summary.high_count)
                * Decimal::ONE_HUNDRED
                / Decimal::from(summary.total))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        }

        summary
    }

    /// One-line verdict in the style of an alert banner.
    pub fn verdict(&self) -> String {
        match self.high_count {
            0 => "No suspicious transactions found".to_string(),
            1 => "1 suspicious transaction flagged".to_string(),
            n => format!("{} suspicious transactions flagged", n),
        }
    }
}
