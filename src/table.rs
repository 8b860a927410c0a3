//! Classified transaction tables and their filtered views.

use crate::filter::FilterCriteria;
use crate::risk::RiskLabel;
use crate::summary::SummaryCounts;
use crate::transaction::{Schema, Transaction};

/// A transaction paired with its risk label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedTransaction {
    pub transaction: Transaction,
    pub label: RiskLabel,
}

impl ClassifiedTransaction {
    /// Cells for export: the original cells with the label written into the
    /// schema's label column, or appended when there is none.
    pub fn output_fields(&self, schema: &Schema) -> Vec<String> {
        let mut fields = self.transaction.fields.clone();
        let label = self.label.to_string();
        match schema.label_index() {
            Some(idx) if idx < fields.len() => fields[idx] = label,
            _ => fields.push(label),
        }
        fields
    }
}

/// An ordered, labeled view of one uploaded file.
///
/// Row order always matches the input. Filtering returns a new table and
/// leaves this one untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionTable {
    schema: Schema,
    rows: Vec<ClassifiedTransaction>,

    /// Input rows dropped as malformed while loading.
    skipped: usize,
}

impl TransactionTable {
    pub fn new(schema: Schema, rows: Vec<ClassifiedTransaction>) -> Self {
        TransactionTable {
            schema,
            rows,
            skipped: 0,
        }
    }

    /// Records how many input rows were skipped while building this table.
    pub fn with_skipped(mut self, skipped: usize) -> Self {
        self.skipped = skipped;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[ClassifiedTransaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Labels in row order.
    pub fn labels(&self) -> Vec<RiskLabel> {
        self.rows.iter().map(|r| r.label).collect()
    }

    /// Returns the rows matching `criteria`, in their original order.
    pub fn filter(&self, criteria: &FilterCriteria) -> TransactionTable {
        let rows = self
            .rows
            .iter()
            .filter(|r| criteria.matches(r.transaction.amount, r.label))
            .cloned()
            .collect();

        TransactionTable {
            schema: self.schema.clone(),
            rows,
            skipped: self.skipped,
        }
    }

    /// Returns only the High rows.
    pub fn flagged(&self) -> TransactionTable {
        self.filter(&FilterCriteria::high_risk())
    }

    pub fn summarize(&self) -> SummaryCounts {
        SummaryCounts::from_labels(self.rows.iter().map(|r| r.label))
    }
}
