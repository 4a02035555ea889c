use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::Money;

#[derive(Debug, Error)]
pub enum EmiError {
    #[error("Invalid loan amount: {principal}. Must be greater than 0 and at most {max}")]
    InvalidAmount { principal: Money, max: Money },

    #[error("Invalid interest rate: {rate_pct}%. Must be between 0 and 100")]
    InvalidRate { rate_pct: Decimal },

    #[error("Invalid tenure: {months} months. Must be between 1 and {max}")]
    InvalidTenure { months: u32, max: u32 },

    #[error("Invalid prepayment: {amount}. Cannot be negative")]
    InvalidPrepayment { amount: Money },

    #[error("Calculation failure: {reason}")]
    CalculationError { reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for EmiError {
    fn from(e: serde_json::Error) -> Self {
        EmiError::SerializationError(e.to_string())
    }
}
