//! Output of classified tables: CSV export, terminal rendering and the
//! summary report.

use crate::error::Result;
use crate::risk::RiskLabel;
use crate::summary::SummaryCounts;
use crate::table::TransactionTable;
use comfy_table::{Cell, Color, Table};
use std::io::Write;

/// Writes the table as CSV: header first, every original column, then the
/// risk label, rows in input order.
pub fn write_csv<W: Write>(table: &TransactionTable, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(table.schema().output_headers())?;
    for row in table.rows() {
        csv_writer.write_record(row.output_fields(table.schema()))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Returns the exported CSV as UTF-8 bytes.
pub fn to_downloadable(table: &TransactionTable) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    Ok(buf)
}

fn label_color(label: RiskLabel) -> Color {
    match label.display_hint() {
        "alert" => Color::Red,
        "review" => Color::Yellow,
        _ => Color::Green,
    }
}

/// Renders the table for a terminal, showing at most `limit` rows.
pub fn render_table(table: &TransactionTable, limit: Option<usize>) -> Table {
    let schema = table.schema();
    let label_idx = schema.label_index().unwrap_or(schema.column_count());

    let mut rendered = Table::new();
    rendered.set_header(schema.output_headers());

    let shown = limit.unwrap_or(table.len());
    for row in table.rows().iter().take(shown) {
        let cells: Vec<Cell> = row
            .output_fields(schema)
            .into_iter()
            .enumerate()
            .map(|(idx, field)| {
                if idx == label_idx {
                    Cell::new(field).fg(label_color(row.label))
                } else {
                    Cell::new(field)
                }
            })
            .collect();
        rendered.add_row(cells);
    }

    rendered
}

/// Writes the summary as a two-line CSV report.
pub fn write_summary<W: Write>(summary: &SummaryCounts, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.serialize(summary)?;
    csv_writer.flush()?;
    Ok(())
}
