pub mod calculator;
pub mod error;
pub mod payment;
pub mod rates;
pub mod reader;
pub mod service;
