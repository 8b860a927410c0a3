//! Loads uploaded CSV data and labels every row.
//!
//! The header is inspected once to locate the amount column; rows are then
//! parsed and classified in input order. How malformed rows are handled is
//! fixed per processor by [`MalformedPolicy`].

use crate::error::{FraudShieldError, Result};
use crate::risk::RiskClassifier;
use crate::table::{ClassifiedTransaction, TransactionTable};
use crate::transaction::{Schema, Transaction};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info, warn};
use std::io::Read;

/// What to do with a row whose amount cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Skip the row, log it and count it in [`TransactionTable::skipped`].
    #[default]
    Lenient,

    /// Fail the whole file on the first malformed row.
    Strict,
}

/// Applies a [`RiskClassifier`] across uploaded transactions.
#[derive(Debug, Clone, Default)]
pub struct TableProcessor {
    classifier: RiskClassifier,
    policy: MalformedPolicy,
}

impl TableProcessor {
    /// Creates a lenient processor with the default classifier.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classifier(mut self, classifier: RiskClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_policy(mut self, policy: MalformedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Labels already-parsed rows.
    ///
    /// The output has one row per input row, in the same order.
    pub fn process(&self, schema: Schema, rows: Vec<Transaction>) -> TransactionTable {
        let rows = rows
            .into_iter()
            .map(|transaction| {
                let label = self.classifier.classify(transaction.amount);
                debug!("Classified amount {} as {}", transaction.amount, label);
                ClassifiedTransaction { transaction, label }
            })
            .collect();

        TransactionTable::new(schema, rows)
    }

    /// Reads a CSV with a header row and labels every data row.
    ///
    /// Fails with `MissingColumn` before reading any row if the header has no
    /// amount column. A header-only file yields an empty table.
    pub fn process_csv<R: Read>(&self, reader: R) -> Result<TransactionTable> {
        let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let schema = Schema::from_headers(&headers)?;
        debug!(
            "Detected amount column '{}' at index {}",
            schema.headers()[schema.amount_index()],
            schema.amount_index()
        );

        let mut rows = Vec::new();
        let mut skipped = 0;

        for (row_idx, result) in csv_reader.records().enumerate() {
            // Quoted fields may span lines, so prefer the reader's own position.
            let position = match &result {
                Ok(record) => record.position(),
                Err(e) => e.position(),
            };
            let row_num = position
                .map(|p| p.line() as usize)
                .unwrap_or(row_idx + 2);

            match self.parse_row(&schema, result, row_num) {
                Ok(tx) => rows.push(tx),
                Err(e) if self.policy == MalformedPolicy::Lenient => {
                    warn!("Row {}: {}, skipping", row_num, e);
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        info!("Loaded {} transactions, skipped {}", rows.len(), skipped);
        Ok(self.process(schema, rows).with_skipped(skipped))
    }

    fn parse_row(
        &self,
        schema: &Schema,
        result: std::result::Result<StringRecord, csv::Error>,
        row: usize,
    ) -> Result<Transaction> {
        let record = result.map_err(|e| FraudShieldError::MalformedRecord {
            row,
            reason: e.to_string(),
        })?;
        Transaction::from_record(schema, &record, row)
    }
}
