use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::form::ValidationReport;
use crate::types::Field;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("loan term must be at least one year")]
    ZeroTerm,

    #[error("negative interest rate: {rate}")]
    NegativeRate {
        rate: Rate,
    },

    #[error("loan amount must be positive: {amount}")]
    NonPositiveAmount {
        amount: Money,
    },

    #[error("loan term too long to quote: {term_years} years exceeds {max} years")]
    TermTooLong {
        term_years: u32,
        max: u32,
    },

    #[error("zero interest rate not quotable under the configured policy")]
    ZeroRateRejected,

    #[error("calculation overflow: {message}")]
    CalculationError {
        message: String,
    },

    #[error("form failed validation")]
    InvalidForm {
        report: ValidationReport,
    },
}

impl QuoteError {
    /// form field this error should be displayed against
    pub fn field(&self) -> Option<Field> {
        match self {
            QuoteError::ZeroTerm => Some(Field::Term),
            QuoteError::TermTooLong { .. } => Some(Field::Term),
            QuoteError::NegativeRate { .. } => Some(Field::Rate),
            QuoteError::NonPositiveAmount { .. } => Some(Field::Amount),
            QuoteError::ZeroRateRejected => Some(Field::Rate),
            // overflow needs an astronomical rate (amounts are capped by
            // Decimal's 28 digits at parse time)
            QuoteError::CalculationError { .. } => Some(Field::Rate),
            QuoteError::InvalidForm { report } => report.errors.keys().next().copied(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
