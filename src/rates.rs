use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maps a currency identifier (case-sensitive) to a positive multiplier
/// applied when converting an amount into the calculator's base unit.
///
/// An absent currency, or one not present in the table, resolves to 1.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// An empty table: every currency converts at multiplier 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// The toy table from the shopping domain: "Dollars" converts at 2,
    /// everything else at 1.
    pub fn reference() -> Self {
        Self::new().with_rate("Dollars", Decimal::TWO)
    }

    pub fn with_rate(mut self, currency: impl Into<String>, rate: Decimal) -> Self {
        self.rates.insert(currency.into(), rate);
        self
    }

    pub fn multiplier(&self, currency: Option<&str>) -> Decimal {
        currency
            .and_then(|c| self.rates.get(c))
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    /// Loads a table from a JSON object of `{"currency": multiplier}`
    /// entries, rejecting non-positive multipliers.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<()> {
        for (currency, rate) in &self.rates {
            if *rate <= Decimal::ZERO {
                return Err(CheckoutError::InvalidRate {
                    currency: currency.clone(),
                    rate: *rate,
                });
            }
        }
        Ok(())
    }
}
