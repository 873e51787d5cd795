use checkout::error::{CheckoutError, Result};
use checkout::payment::PaymentBuilder;
use checkout::rates::RateTable;
use checkout::reader::{CheckoutReader, RecordType};
use checkout::service::ShoppingService;
use clap::Parser;
use miette::IntoDiagnostic;
use rust_decimal::prelude::ToPrimitive;
use std::fs;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input checkout session CSV file
    input: PathBuf,

    /// Rate table JSON file (optional). If omitted, uses the built-in
    /// reference table.
    #[arg(long)]
    rates: Option<PathBuf>,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let rates = match cli.rates {
        Some(path) => {
            let json = fs::read_to_string(path).into_diagnostic()?;
            RateTable::from_json(&json).into_diagnostic()?
        }
        None => RateTable::reference(),
    };

    let file = File::open(cli.input).into_diagnostic()?;
    let change = run_session(CheckoutReader::new(file), rates).into_diagnostic()?;

    println!("change due: {}", change);
    Ok(())
}

fn run_session<R: std::io::Read>(
    reader: CheckoutReader<R>,
    rates: RateTable,
) -> Result<rust_decimal::Decimal> {
    let mut service = ShoppingService::with_rates(rates);
    let mut builder = PaymentBuilder::new();

    for record in reader.records() {
        let record = record?;
        match record.r#type {
            RecordType::Item => service.scan_item(record.amount()?)?,
            RecordType::Pay => {
                let tendered = record.amount()?;
                let amount = tendered
                    .is_integer()
                    .then(|| tendered.to_i64())
                    .flatten()
                    .ok_or_else(|| {
                        CheckoutError::MalformedRecord(format!(
                            "payment amount must be an integer, got {tendered}"
                        ))
                    })?;
                builder.with_amount(amount);
                if let Some(currency) = record.currency {
                    builder.with_currency(currency);
                }
            }
        }
    }

    service.pay(&builder.build())?;
    service.change_due()
}
