use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Item,
    Pay,
}

/// One line of a checkout session: a scanned item with its price, or a
/// payment with an optional currency.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CheckoutRecord {
    pub r#type: RecordType,
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
}

impl CheckoutRecord {
    /// The record's amount, which both record types require.
    pub fn amount(&self) -> Result<Decimal> {
        self.amount.ok_or_else(|| {
            CheckoutError::MalformedRecord(format!("{:?} record missing amount", self.r#type))
        })
    }
}

/// Reads checkout session records from a CSV source.
///
/// Wraps `csv::Reader` and yields `Result<CheckoutRecord>` lazily, so a
/// session streams without being loaded whole.
pub struct CheckoutReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CheckoutReader<R> {
    /// Creates a reader from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn records(self) -> impl Iterator<Item = Result<CheckoutRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CheckoutError::from))
    }
}
