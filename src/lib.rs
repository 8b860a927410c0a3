//! # FraudShield
//!
//! Labels uploaded CSV transactions with a fixed amount-based risk rule,
//! then filters, summarizes and re-exports them.
//!
//! ## Design Principles
//!
//! - **Exact amounts**: Uses `rust_decimal`, so threshold boundaries are exact
//! - **Pure classification**: A label depends on the amount alone
//! - **Order preserving**: Rows keep their input order through every step
//! - **Non-destructive filtering**: Filters return new tables
//!
//! ## Example
//!
//! ```
//! use fraudshield::{formatter, FilterCriteria, RiskLabel, TableProcessor};
//! use std::io::Cursor;
//!
//! let csv = "transactionId,amount\nT1,500000\nT2,1000001\nT3,100\n";
//! let table = TableProcessor::new().process_csv(Cursor::new(csv)).unwrap();
//! assert_eq!(table.labels(), vec![RiskLabel::Medium, RiskLabel::High, RiskLabel::Low]);
//!
//! let flagged = table.filter(&FilterCriteria::high_risk());
//! let bytes = formatter::to_downloadable(&flagged).unwrap();
//! assert_eq!(bytes, b"transactionId,amount,risk_label\nT2,1000001,High\n");
//! ```

pub mod amount;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod processor;
pub mod risk;
pub mod summary;
pub mod table;
pub mod transaction;

pub use amount::Amount;
pub use error::{FraudShieldError, Result};
pub use filter::FilterCriteria;
pub use processor::{MalformedPolicy, TableProcessor};
pub use risk::{classify, RiskClassifier, RiskLabel};
pub use summary::SummaryCounts;
pub use table::{ClassifiedTransaction, TransactionTable};
pub use transaction::{Schema, Transaction};
