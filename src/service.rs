use crate::calculator::{Operator, RpnCalculator, Token};
use crate::error::Result;
use crate::payment::PaymentRequest;
use crate::rates::RateTable;
use rust_decimal::Decimal;

/// Currency-aware facade over the calculator, modeling one checkout.
///
/// Grocery prices accumulate into a running total; a payment is converted
/// into the base unit via the rate table and subtracted. The negated
/// final value is the change due.
pub struct ShoppingService {
    calc: RpnCalculator,
    rates: RateTable,
}

impl Default for ShoppingService {
    fn default() -> Self {
        Self::new()
    }
}

impl ShoppingService {
    /// A service with an empty rate table (every multiplier is 1).
    pub fn new() -> Self {
        Self::with_rates(RateTable::new())
    }

    pub fn with_rates(rates: RateTable) -> Self {
        Self {
            calc: RpnCalculator::new(),
            rates,
        }
    }

    /// Raw pass-through to the calculator, for prices and operators that
    /// need no currency handling.
    pub fn push(&mut self, token: Token) -> Result<()> {
        self.calc.push(token)
    }

    /// Converts `amount` via the rate table (absent currency converts at
    /// 1) and pushes the resulting operand.
    pub fn push_amount(&mut self, amount: i64, currency: Option<&str>) -> Result<()> {
        let converted = Decimal::from(amount) * self.rates.multiplier(currency);
        self.calc.push(Token::Operand(converted))
    }

    /// Adds one grocery price to the running total.
    pub fn scan_item(&mut self, price: Decimal) -> Result<()> {
        // Seed the total so the first item's "+" has both operands.
        if self.calc.is_empty() {
            self.calc.push(Token::Operand(Decimal::ZERO))?;
        }
        self.calc.push(Token::Operand(price))?;
        self.calc.push(Token::Operator(Operator::Add))
    }

    /// Applies a payment against the running total.
    pub fn pay(&mut self, payment: &PaymentRequest) -> Result<()> {
        self.push_amount(payment.amount(), payment.currency())?;
        self.calc.push(Token::Operator(Operator::Sub))
    }

    pub fn value(&self) -> Result<Decimal> {
        self.calc.value()
    }

    /// Change due after payment: the negated stack value.
    pub fn change_due(&self) -> Result<Decimal> {
        Ok(-self.value()?)
    }
}
