//! Header normalization and per-row transaction parsing.
//!
//! Uploaded files are free-form: only an amount column is required, and its
//! header may be spelled `amount`, `Amount`, `AMOUNT`, etc. [`Schema`] maps
//! those aliases to canonical positions once per file so that rows can be
//! read without repeated header lookups.

use crate::amount::Amount;
use crate::error::{FraudShieldError, Result};
use csv::StringRecord;
use std::str::FromStr;

/// Canonical name of the required amount column.
pub const AMOUNT_COLUMN: &str = "amount";

/// Name of the label column appended on export.
pub const LABEL_COLUMN: &str = "risk_label";

const TRANSACTION_ID_ALIASES: [&str; 3] = ["transactionid", "txid", "id"];

/// Lowercases a header and drops whitespace, underscores and a leading BOM.
fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Column layout of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Header cells exactly as they appeared in the input.
    headers: Vec<String>,

    /// Position of the amount column.
    amount_idx: usize,

    /// Position of the transaction id column, if any.
    transaction_id_idx: Option<usize>,

    /// Position of an existing risk label column (re-imported exports).
    label_idx: Option<usize>,
}

impl Schema {
    /// Builds a schema from a header row.
    ///
    /// Fails with `MissingColumn` if no header normalizes to `amount`. The
    /// first matching header wins for every alias group.
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

        let amount_idx = normalized
            .iter()
            .position(|h| h == AMOUNT_COLUMN)
            .ok_or_else(|| FraudShieldError::MissingColumn {
                column: AMOUNT_COLUMN.to_string(),
            })?;

        let transaction_id_idx = TRANSACTION_ID_ALIASES
            .iter()
            .find_map(|alias| normalized.iter().position(|h| h == alias));

        let label_idx = normalized.iter().position(|h| h == "risklabel");

        Ok(Schema {
            headers: headers.iter().map(str::to_string).collect(),
            amount_idx,
            transaction_id_idx,
            label_idx,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of columns in the input.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn amount_index(&self) -> usize {
        self.amount_idx
    }

    pub fn transaction_id_index(&self) -> Option<usize> {
        self.transaction_id_idx
    }

    pub fn label_index(&self) -> Option<usize> {
        self.label_idx
    }

    /// Header row for exported data: the input headers, plus the label column
    /// unless the input already had one.
    pub fn output_headers(&self) -> Vec<String> {
        let mut headers = self.headers.clone();
        if self.label_idx.is_none() {
            headers.push(LABEL_COLUMN.to_string());
        }
        headers
    }
}

/// A single uploaded transaction.
///
/// `fields` holds every cell verbatim; `amount` and `transaction_id` are
/// typed views of the columns the schema located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// All cells of the row, untouched.
    pub fields: Vec<String>,

    /// Parsed amount.
    pub amount: Amount,

    /// Transaction identifier, when the file has one and the cell is non-empty.
    pub transaction_id: Option<String>,
}

impl Transaction {
    /// Parses a CSV record against a schema.
    ///
    /// `row` is the 1-based line number used in error messages. Fails with
    /// `MalformedRecord` if the record has the wrong number of fields or its
    /// amount is missing or not numeric.
    pub fn from_record(schema: &Schema, record: &StringRecord, row: usize) -> Result<Self> {
        if record.len() != schema.column_count() {
            return Err(FraudShieldError::MalformedRecord {
                row,
                reason: format!(
                    "expected {} fields, found {}",
                    schema.column_count(),
                    record.len()
                ),
            });
        }

        let raw_amount = &record[schema.amount_index()];
        if raw_amount.trim().is_empty() {
            return Err(FraudShieldError::MalformedRecord {
                row,
                reason: "amount is missing".to_string(),
            });
        }
        let amount =
            Amount::from_str(raw_amount).map_err(|_| FraudShieldError::MalformedRecord {
                row,
                reason: format!("amount '{}' is not numeric", raw_amount),
            })?;

        let transaction_id = schema
            .transaction_id_index()
            .map(|idx| record[idx].trim())
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        Ok(Transaction {
            fields: record.iter().map(str::to_string).collect(),
            amount,
            transaction_id,
        })
    }
}
