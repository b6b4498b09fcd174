use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::decimal::Money;

/// unique identifier for a quote
pub type QuoteId = Uuid;

/// repayment structure of the mortgage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepaymentType {
    /// each installment pays interest and principal, balance reaches zero at term end
    #[serde(rename = "repayment")]
    Repayment,
    /// installments cover accrued interest only, principal due in full at term end
    #[serde(rename = "interest")]
    InterestOnly,
}

impl RepaymentType {
    /// parse the value carried by the form's radio group
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "repayment" => Some(RepaymentType::Repayment),
            "interest" => Some(RepaymentType::InterestOnly),
            _ => None,
        }
    }

    /// value the form's radio group submits for this variant
    pub fn form_value(&self) -> &'static str {
        match self {
            RepaymentType::Repayment => "repayment",
            RepaymentType::InterestOnly => "interest",
        }
    }
}

/// form fields, used as keys in the per-field error mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Amount,
    Term,
    Rate,
    Type,
}

impl Field {
    /// name attribute of the corresponding form input
    pub fn form_name(&self) -> &'static str {
        match self {
            Field::Amount => "amount",
            Field::Term => "term",
            Field::Rate => "rate",
            Field::Type => "type",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.form_name())
    }
}

/// how a zero interest rate is handled under the repayment formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZeroRatePolicy {
    /// divide the principal evenly across the installments
    StraightLine,
    /// refuse to quote
    Reject,
}

/// priced repayment quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub quote_id: QuoteId,
    pub generated_at: DateTime<Utc>,
    pub repayment_type: RepaymentType,
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub currency_symbol: String,
}

impl Quote {
    /// monthly payment with exactly two fraction digits, e.g. "1198.50"
    pub fn monthly_display(&self) -> String {
        self.monthly_payment.to_display_string()
    }

    /// total repayment with exactly two fraction digits
    pub fn total_display(&self) -> String {
        self.total_payment.to_display_string()
    }

    /// currency-prefixed monthly payment, e.g. "£1198.50"
    pub fn monthly_display_currency(&self) -> String {
        format!("{}{}", self.currency_symbol, self.monthly_display())
    }

    /// currency-prefixed total repayment
    pub fn total_display_currency(&self) -> String {
        format!("{}{}", self.currency_symbol, self.total_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repayment_type_parse() {
        assert_eq!(RepaymentType::parse("repayment"), Some(RepaymentType::Repayment));
        assert_eq!(RepaymentType::parse("interest"), Some(RepaymentType::InterestOnly));
        assert_eq!(RepaymentType::parse(" interest "), Some(RepaymentType::InterestOnly));
        assert_eq!(RepaymentType::parse("balloon"), None);
        assert_eq!(RepaymentType::parse(""), None);
    }

    #[test]
    fn test_repayment_type_round_trips_form_value() {
        for t in [RepaymentType::Repayment, RepaymentType::InterestOnly] {
            assert_eq!(RepaymentType::parse(t.form_value()), Some(t));
        }
    }

    #[test]
    fn test_field_serializes_to_form_name() {
        for field in [Field::Amount, Field::Term, Field::Rate, Field::Type] {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.form_name()));
        }
    }
}
