use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// The closed set of arithmetic operators the calculator understands.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl FromStr for Operator {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            other => Err(CheckoutError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        f.write_str(symbol)
    }
}

/// A single input to the calculator, decided at the call boundary so that
/// invalid symbols never reach the evaluation stack.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    Operand(Decimal),
    Operator(Operator),
}

impl From<Decimal> for Token {
    fn from(value: Decimal) -> Self {
        Self::Operand(value)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

/// A reverse-Polish-notation evaluator over decimal values.
///
/// Operands are pushed as-is; an operator pops its two operands (right
/// first, then left), applies `left OP right` and pushes the result.
/// A failed operator application leaves the stack exactly as it was.
#[derive(Debug, Default)]
pub struct RpnCalculator {
    stack: Vec<Decimal>,
}

impl RpnCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) -> Result<()> {
        match token {
            Token::Operand(value) => {
                self.stack.push(value);
                Ok(())
            }
            Token::Operator(op) => self.apply(op),
        }
    }

    /// The current top-of-stack value, without popping it.
    pub fn value(&self) -> Result<Decimal> {
        self.stack.last().copied().ok_or(CheckoutError::EmptyStack)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn apply(&mut self, op: Operator) -> Result<()> {
        let available = self.stack.len();
        if available < 2 {
            return Err(CheckoutError::InsufficientOperands {
                required: 2,
                available,
            });
        }

        // Validate before popping so the stack survives a failure intact.
        if op == Operator::Div && self.stack[available - 1].is_zero() {
            return Err(CheckoutError::DivisionByZero);
        }

        let right = self.stack.pop().ok_or(CheckoutError::EmptyStack)?;
        let left = self.stack.pop().ok_or(CheckoutError::EmptyStack)?;
        let result = match op {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
        };
        self.stack.push(result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn operand(value: Decimal) -> Token {
        Token::Operand(value)
    }

    #[test]
    fn test_value_on_fresh_calculator_fails() {
        let calc = RpnCalculator::new();
        assert!(matches!(calc.value(), Err(CheckoutError::EmptyStack)));
    }

    #[test]
    fn test_push_operand_sets_value() {
        let mut calc = RpnCalculator::new();
        calc.push(operand(dec!(4))).unwrap();
        assert_eq!(calc.value().unwrap(), dec!(4));
        // value() must not pop
        assert_eq!(calc.value().unwrap(), dec!(4));
        assert_eq!(calc.depth(), 1);
    }

    #[test]
    fn test_addition_chain_sums_operands() {
        let mut calc = RpnCalculator::new();
        for price in [dec!(9), dec!(7), dec!(5), dec!(3)] {
            calc.push(operand(price)).unwrap();
        }
        for _ in 0..3 {
            calc.push(Operator::Add.into()).unwrap();
        }
        assert_eq!(calc.value().unwrap(), dec!(24));
        assert_eq!(calc.depth(), 1);
    }

    #[test]
    fn test_subtraction_is_left_minus_right() {
        let mut calc = RpnCalculator::new();
        calc.push(operand(dec!(21))).unwrap();
        calc.push(operand(dec!(25))).unwrap();
        calc.push(Operator::Sub.into()).unwrap();
        assert_eq!(calc.value().unwrap(), dec!(-4));
    }

    #[test]
    fn test_division_is_left_over_right() {
        let mut calc = RpnCalculator::new();
        calc.push(operand(dec!(10))).unwrap();
        calc.push(operand(dec!(4))).unwrap();
        calc.push(Operator::Div.into()).unwrap();
        assert_eq!(calc.value().unwrap(), dec!(2.5));
    }

    #[test]
    fn test_multiplication() {
        let mut calc = RpnCalculator::new();
        calc.push(operand(dec!(6))).unwrap();
        calc.push(operand(dec!(7))).unwrap();
        calc.push(Operator::Mul.into()).unwrap();
        assert_eq!(calc.value().unwrap(), dec!(42));
    }

    #[test]
    fn test_operator_with_one_operand_fails_and_preserves_stack() {
        let mut calc = RpnCalculator::new();
        calc.push(operand(dec!(9))).unwrap();

        let err = calc.push(Operator::Add.into()).unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::InsufficientOperands {
                required: 2,
                available: 1
            }
        ));

        // The calculator is still usable and the operand survived.
        calc.push(operand(dec!(7))).unwrap();
        calc.push(Operator::Add.into()).unwrap();
        assert_eq!(calc.value().unwrap(), dec!(16));
    }

    #[test]
    fn test_operator_on_empty_stack_fails() {
        let mut calc = RpnCalculator::new();
        let err = calc.push(Operator::Sub.into()).unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::InsufficientOperands {
                required: 2,
                available: 0
            }
        ));
    }

    #[test]
    fn test_division_by_zero_fails_and_preserves_stack() {
        let mut calc = RpnCalculator::new();
        calc.push(operand(dec!(10))).unwrap();
        calc.push(operand(dec!(0))).unwrap();

        let err = calc.push(Operator::Div.into()).unwrap_err();
        assert!(matches!(err, CheckoutError::DivisionByZero));
        assert_eq!(calc.depth(), 2);
        assert_eq!(calc.value().unwrap(), dec!(0));
    }

    #[test]
    fn test_operator_parsing() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("-".parse::<Operator>().unwrap(), Operator::Sub);
        assert_eq!("*".parse::<Operator>().unwrap(), Operator::Mul);
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Div);

        let err = "%".parse::<Operator>().unwrap_err();
        assert!(matches!(err, CheckoutError::UnknownOperator(s) if s == "%"));
    }

    #[test]
    fn test_negative_operands_are_allowed() {
        let mut calc = RpnCalculator::new();
        calc.push(operand(dec!(-5))).unwrap();
        calc.push(operand(dec!(3))).unwrap();
        calc.push(Operator::Add.into()).unwrap();
        assert_eq!(calc.value().unwrap(), dec!(-2));
    }
}
