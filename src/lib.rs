pub mod config;
pub mod decimal;
pub mod errors;
pub mod form;
pub mod quote;
pub mod state;
pub mod types;

// re-export key types
pub use config::QuoteConfig;
pub use decimal::{Money, Rate};
pub use errors::{QuoteError, Result};
pub use form::{LoanForm, LoanTerms, ValidationReport};
pub use quote::MortgageCalculator;
pub use state::{CalculatorState, ResultsPanel};
pub use types::{Field, Quote, QuoteId, RepaymentType, ZeroRatePolicy};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
