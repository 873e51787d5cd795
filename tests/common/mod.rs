use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a checkout session CSV: one `item` row per price, then a single
/// `pay` row with an optional currency.
pub fn write_session(
    path: &Path,
    prices: &[i64],
    amount: i64,
    currency: Option<&str>,
) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["type", "amount", "currency"])?;
    for price in prices {
        wtr.write_record(["item", &price.to_string(), ""])?;
    }
    wtr.write_record(["pay", &amount.to_string(), currency.unwrap_or("")])?;

    wtr.flush()?;
    Ok(())
}
