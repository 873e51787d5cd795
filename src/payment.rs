use serde::{Deserialize, Serialize};

/// An immutable payment: an amount plus the currency it was tendered in.
///
/// Amounts are not validated; negative payments are representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    amount: i64,
    currency: Option<String>,
}

impl PaymentRequest {
    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }
}

/// Accumulates payment details across step-wise configuration, then
/// snapshots them into a [`PaymentRequest`].
///
/// `build` can be called any number of times; each call produces an
/// independent snapshot of the builder's state at that moment.
#[derive(Debug, Default, Clone)]
pub struct PaymentBuilder {
    amount: i64,
    currency: Option<String>,
}

impl PaymentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_amount(&mut self, amount: i64) -> &mut Self {
        self.amount = amount;
        self
    }

    pub fn with_currency(&mut self, currency: impl Into<String>) -> &mut Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn build(&self) -> PaymentRequest {
        PaymentRequest {
            amount: self.amount,
            currency: self.currency.clone(),
        }
    }
}
