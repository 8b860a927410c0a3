//! Error types for FraudShield.

use thiserror::Error;

/// Result type alias for FraudShield operations
pub type Result<T> = std::result::Result<T, FraudShieldError>;

/// Errors that can occur while loading, classifying or exporting transactions.
#[derive(Error, Debug)]
pub enum FraudShieldError {
    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Required column absent from the header row
    #[error("Missing required column '{column}' in uploaded data")]
    MissingColumn { column: String },

    /// Row whose amount is not numeric, or whose shape does not match the header
    #[error("Malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    /// Filter bounds out of order
    #[error("Invalid filter: minimum amount {min} exceeds maximum amount {max}")]
    InvalidCriteria { min: String, max: String },

    /// Classifier cutoffs out of order
    #[error("Invalid thresholds: medium threshold {medium} exceeds high threshold {high}")]
    InvalidThresholds { medium: String, high: String },
}
