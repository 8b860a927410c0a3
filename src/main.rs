//! FraudShield CLI
//!
//! Reads a transaction CSV, labels every row by amount, applies the filter
//! flags and writes the result.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv --high-risk-only > flagged.csv
//! cargo run -- transactions.csv --format summary
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use clap::{Parser, ValueEnum};
use fraudshield::{
    formatter, Amount, FilterCriteria, MalformedPolicy, Result, RiskClassifier, TableProcessor,
};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Labeled rows as CSV
    Csv,
    /// Labeled rows as a terminal table
    Table,
    /// Label counts as CSV
    Summary,
}

#[derive(Parser)]
#[command(name = "fraudshield", version, about = "Flag risky transactions in a CSV file")]
struct Cli {
    /// Transaction CSV with a header row and an amount column
    input: PathBuf,

    /// Keep rows with amount >= this value
    #[arg(long = "min-amount")]
    min_amount: Option<Amount>,

    /// Keep rows with amount <= this value
    #[arg(long = "max-amount")]
    max_amount: Option<Amount>,

    /// Keep only High risk rows
    #[arg(long = "high-risk-only")]
    high_risk_only: bool,

    /// Fail on the first row with a non-numeric amount instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Lowest amount labeled Medium
    #[arg(long = "medium-threshold", default_value = "500000")]
    medium_threshold: Amount,

    /// Highest amount labeled Medium; anything above is High
    #[arg(long = "high-threshold", default_value = "1000000")]
    high_threshold: Amount,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Maximum rows shown in table output
    #[arg(long)]
    limit: Option<usize>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let classifier = RiskClassifier::with_thresholds(cli.medium_threshold, cli.high_threshold)?;
    let criteria = FilterCriteria::new(cli.min_amount, cli.max_amount, cli.high_risk_only)?;
    let policy = if cli.strict {
        MalformedPolicy::Strict
    } else {
        MalformedPolicy::Lenient
    };

    let file = File::open(&cli.input)?;
    let table = TableProcessor::new()
        .with_classifier(classifier)
        .with_policy(policy)
        .process_csv(BufReader::new(file))?;
    let view = table.filter(&criteria);

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        OutputFormat::Csv => formatter::write_csv(&view, &mut out)?,
        OutputFormat::Table => writeln!(out, "{}", formatter::render_table(&view, cli.limit))?,
        OutputFormat::Summary => formatter::write_summary(&view.summarize(), &mut out)?,
    }
    out.flush()?;

    if table.skipped() > 0 {
        eprintln!("Skipped {} malformed row(s)", table.skipped());
    }
    eprintln!("{}", table.summarize().verdict());

    Ok(())
}
