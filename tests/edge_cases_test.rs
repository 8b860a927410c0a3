//! Edge case tests for classification, filtering and export.

use fraudshield::{
    classify, formatter, Amount, FilterCriteria, FraudShieldError, MalformedPolicy, RiskLabel,
    TableProcessor, TransactionTable,
};
use std::io::Cursor;
use std::str::FromStr;

fn load(csv: &str) -> TransactionTable {
    TableProcessor::new().process_csv(Cursor::new(csv)).unwrap()
}

fn amt(s: &str) -> Amount {
    Amount::from_str(s).unwrap()
}

fn exported(table: &TransactionTable) -> String {
    String::from_utf8(formatter::to_downloadable(table).unwrap()).unwrap()
}

// ==================== CLASSIFICATION ====================

#[test]
fn test_classification_tiers_across_range() {
    let cases = [
        ("-1000000", RiskLabel::Low),
        ("0", RiskLabel::Low),
        ("0.01", RiskLabel::Low),
        ("499999", RiskLabel::Low),
        ("499999.9999", RiskLabel::Low),
        ("500000", RiskLabel::Medium),
        ("500000.0001", RiskLabel::Medium),
        ("999999.99", RiskLabel::Medium),
        ("1000000", RiskLabel::Medium),
        ("1000000.0001", RiskLabel::High),
        ("1000001", RiskLabel::High),
        ("79228162514264337593543950335", RiskLabel::High),
    ];

    for (raw, expected) in cases {
        assert_eq!(classify(amt(raw)), expected, "amount {}", raw);
    }
}

// ==================== SCENARIOS ====================

#[test]
fn test_scenario_mixed_tiers() {
    let table = load("amount\n500000\n1000001\n100\n");

    assert_eq!(
        table.labels(),
        vec![RiskLabel::Medium, RiskLabel::High, RiskLabel::Low]
    );

    let summary = table.summarize();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.high_count, 1);
    assert_eq!(summary.medium_count, 1);
    assert_eq!(summary.low_count, 1);
    assert_eq!(summary.high_risk_percent.to_string(), "33.33");
}

#[test]
fn test_scenario_header_only() {
    let table = load("amount\n");
    let summary = table.summarize();

    assert_eq!(summary.total, 0);
    assert_eq!(summary.high_count, 0);
    assert_eq!(summary.medium_count, 0);
    assert_eq!(summary.low_count, 0);
    assert!(summary.high_risk_percent.is_zero());
}

#[test]
fn test_scenario_missing_amount_column() {
    let result = TableProcessor::new().process_csv(Cursor::new("transactionId,value\nT1,5\n"));
    assert!(matches!(result, Err(FraudShieldError::MissingColumn { .. })));
}

#[test]
fn test_scenario_filter_high_risk_window() {
    let table = load("amount\n500000\n1000001\n100\n");
    let criteria = FilterCriteria::new(
        Some(Amount::from_units(600_000)),
        Some(Amount::from_units(2_000_000)),
        true,
    )
    .unwrap();

    let filtered = table.filter(&criteria);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.rows()[0].transaction.amount, amt("1000001"));
}

// ==================== HEADERS ====================

#[test]
fn test_amount_header_variants() {
    for header in ["amount", "Amount", "AMOUNT", " amount "] {
        let table = load(&format!("id,{}\nT1,2000000\n", header));
        assert_eq!(table.labels(), vec![RiskLabel::High], "header {:?}", header);
    }
}

#[test]
fn test_header_preserved_in_export() {
    let table = load("TransactionID,Amount,Note\nX,10,hi\n");
    assert_eq!(exported(&table), "TransactionID,Amount,Note,risk_label\nX,10,hi,Low\n");
}

#[test]
fn test_transaction_id_extracted() {
    let table = load("transaction_id,amount\nabc-1,10\n,20\n");
    assert_eq!(
        table.rows()[0].transaction.transaction_id.as_deref(),
        Some("abc-1")
    );
    assert!(table.rows()[1].transaction.transaction_id.is_none());
}

// ==================== MALFORMED INPUT ====================

#[test]
fn test_lenient_and_strict_are_consistent() {
    let csv = "id,amount\nA,1\nB,not-a-number\nC,3\n";

    let lenient = TableProcessor::new()
        .with_policy(MalformedPolicy::Lenient)
        .process_csv(Cursor::new(csv))
        .unwrap();
    assert_eq!(lenient.len(), 2);
    assert_eq!(lenient.skipped(), 1);

    let strict = TableProcessor::new()
        .with_policy(MalformedPolicy::Strict)
        .process_csv(Cursor::new(csv));
    assert!(matches!(
        strict,
        Err(FraudShieldError::MalformedRecord { row: 3, .. })
    ));
}

#[test]
fn test_extra_field_row_is_malformed() {
    let table = load("id,amount\nA,1,unexpected\nB,2\n");
    assert_eq!(table.len(), 1);
    assert_eq!(table.skipped(), 1);
}

#[test]
fn test_invalid_utf8_row_is_skipped() {
    let mut bytes = b"id,amount\nA,1\n".to_vec();
    bytes.extend_from_slice(b"\xff\xfe,2\n");
    bytes.extend_from_slice(b"C,3\n");

    let table = TableProcessor::new()
        .process_csv(Cursor::new(bytes))
        .unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.skipped(), 1);
}

#[test]
fn test_blank_lines_ignored() {
    let table = load("amount\n\n100\n\n2000000\n");
    assert_eq!(table.labels(), vec![RiskLabel::Low, RiskLabel::High]);
    assert_eq!(table.skipped(), 0);
}

#[test]
fn test_scientific_amounts() {
    let table = load("amount\n1e6\n1.5e6\n");
    assert_eq!(table.labels(), vec![RiskLabel::Medium, RiskLabel::High]);
}

// ==================== PROPERTIES ====================

#[test]
fn test_summary_counts_sum_to_total() {
    let table = load("amount\n1\n600000\n1000000\n1000001\n-5\n5000000\n");
    let summary = table.summarize();

    assert_eq!(
        summary.high_count + summary.medium_count + summary.low_count,
        summary.total
    );
    assert_eq!(summary.total, table.len());
}

#[test]
fn test_filter_idempotent_across_criteria() {
    let table = load("amount\n1\n600000\n1000000\n1000001\n-5\n5000000\n");
    let all_criteria = [
        FilterCriteria::all(),
        FilterCriteria::high_risk(),
        FilterCriteria::new(Some(Amount::ZERO), Some(Amount::from_units(1_000_000)), false)
            .unwrap(),
        FilterCriteria::new(Some(Amount::from_units(2_000_000)), None, true).unwrap(),
    ];

    for criteria in all_criteria {
        let once = table.filter(&criteria);
        assert_eq!(once.filter(&criteria), once);
    }
}

#[test]
fn test_filter_all_keeps_table() {
    let table = load("amount\n3\n2\n1\n");
    assert_eq!(table.filter(&FilterCriteria::all()), table);
}

#[test]
fn test_export_round_trip_labels() {
    let table = load("id,amount,memo\nA,499999.99,x\nB,500000,\"y, z\"\nC,1000000,\nD,1000000.01,w\n");
    let reloaded = load(&exported(&table));

    let label_idx = reloaded.schema().label_index().unwrap();
    for (original, row) in table.rows().iter().zip(reloaded.rows()) {
        let written = RiskLabel::from_str(&row.transaction.fields[label_idx]).unwrap();
        assert_eq!(written, original.label);
        assert_eq!(row.label, original.label);
    }
}

#[test]
fn test_filtered_export_keeps_order() {
    let table = load("id,amount\nA,2000000\nB,1\nC,3000000\nD,1500000\n");
    let flagged = table.flagged();

    assert_eq!(
        exported(&flagged),
        "id,amount,risk_label\nA,2000000,High\nC,3000000,High\nD,1500000,High\n"
    );
}
