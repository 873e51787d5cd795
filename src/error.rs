use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CheckoutError>;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("stack is empty")]
    EmptyStack,
    #[error("operator needs {required} operands, stack holds {available}")]
    InsufficientOperands { required: usize, available: usize },
    #[error("unknown operator: {0:?}")]
    UnknownOperator(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("rate for {currency:?} must be positive, got {rate}")]
    InvalidRate { currency: String, rate: Decimal },
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
