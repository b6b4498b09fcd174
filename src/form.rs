use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::types::{Field, RepaymentType};

/// message for a missing required field
pub const MSG_REQUIRED: &str = "This field is required";
/// message for a present but unparsable numeric field
pub const MSG_NOT_A_NUMBER: &str = "Must be a number";
/// message for a term that is not a whole number of years
pub const MSG_WHOLE_YEARS: &str = "Must be a whole number of years";
/// message for an unrecognized repayment type value
pub const MSG_UNKNOWN_TYPE: &str = "Must be repayment or interest only";

/// raw form record as submitted by the rendering layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanForm {
    pub amount: String,
    pub term: String,
    pub rate: String,
    /// radio group value, absent until the user picks an option
    #[serde(rename = "type")]
    pub repayment_type: Option<String>,
}

impl LoanForm {
    pub fn new(
        amount: impl Into<String>,
        term: impl Into<String>,
        rate: impl Into<String>,
        repayment_type: Option<&str>,
    ) -> Self {
        Self {
            amount: amount.into(),
            term: term.into(),
            rate: rate.into(),
            repayment_type: repayment_type.map(str::to_string),
        }
    }

    /// check the form without producing terms; empty report means valid
    pub fn validate(&self) -> ValidationReport {
        match self.parse() {
            Ok(_) => ValidationReport::default(),
            Err(report) => report,
        }
    }

    /// validate and convert to typed loan terms
    ///
    /// This is the only way to obtain a `LoanTerms`, so anything holding one
    /// is known to have passed validation.
    pub fn parse(&self) -> Result<LoanTerms, ValidationReport> {
        let mut report = ValidationReport::default();

        let amount = match self.amount.trim() {
            "" => {
                report.add(Field::Amount, MSG_REQUIRED);
                None
            }
            raw => match Decimal::from_str(raw) {
                Ok(d) => Some(Money::from_decimal(d)),
                Err(_) => {
                    report.add(Field::Amount, MSG_NOT_A_NUMBER);
                    None
                }
            },
        };

        let term_years = match self.term.trim() {
            "" => {
                report.add(Field::Term, MSG_REQUIRED);
                None
            }
            raw => match raw.parse::<u32>() {
                Ok(years) => Some(years),
                Err(_) => {
                    report.add(Field::Term, MSG_WHOLE_YEARS);
                    None
                }
            },
        };

        let annual_rate = match self.rate.trim() {
            "" => {
                report.add(Field::Rate, MSG_REQUIRED);
                None
            }
            raw => match Decimal::from_str(raw) {
                Ok(d) => Some(Rate::from_percent_decimal(d)),
                Err(_) => {
                    report.add(Field::Rate, MSG_NOT_A_NUMBER);
                    None
                }
            },
        };

        let repayment_type = match self.repayment_type.as_deref().map(str::trim) {
            None | Some("") => {
                report.add(Field::Type, MSG_REQUIRED);
                None
            }
            Some(raw) => match RepaymentType::parse(raw) {
                Some(t) => Some(t),
                None => {
                    report.add(Field::Type, MSG_UNKNOWN_TYPE);
                    None
                }
            },
        };

        match (amount, term_years, annual_rate, repayment_type) {
            (Some(amount), Some(term_years), Some(annual_rate), Some(repayment_type))
                if report.is_valid() =>
            {
                Ok(LoanTerms {
                    amount,
                    term_years,
                    annual_rate,
                    repayment_type,
                })
            }
            _ => Err(report),
        }
    }
}

/// per-field validation errors for one submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: BTreeMap<Field, String>,
}

impl ValidationReport {
    /// true iff no errors were recorded
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// message recorded against a field, if any
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// record an error against a field
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

/// validated numeric loan terms, ready for pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub amount: Money,
    pub term_years: u32,
    /// annual rate as a fraction; the form's percent value is divided by 100 at parse time
    pub annual_rate: Rate,
    pub repayment_type: RepaymentType,
}

impl LoanTerms {
    /// total number of monthly installments
    ///
    /// Saturates rather than overflowing; the calculator rejects terms this
    /// long before pricing them.
    pub fn installments(&self) -> u32 {
        self.term_years.saturating_mul(12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn filled_form() -> LoanForm {
        LoanForm::new("200000", "25", "5.25", Some("repayment"))
    }

    #[test]
    fn test_valid_form_parses() {
        let terms = filled_form().parse().unwrap();
        assert_eq!(terms.amount, Money::from_major(200_000));
        assert_eq!(terms.term_years, 25);
        assert_eq!(terms.annual_rate.as_decimal(), dec!(0.0525));
        assert_eq!(terms.repayment_type, RepaymentType::Repayment);
        assert_eq!(terms.installments(), 300);

        assert!(filled_form().validate().is_valid());
    }

    #[test]
    fn test_installments_saturate_instead_of_overflowing() {
        let terms = LoanTerms {
            amount: Money::from_major(1),
            term_years: u32::MAX,
            annual_rate: Rate::ZERO,
            repayment_type: RepaymentType::Repayment,
        };
        assert_eq!(terms.installments(), u32::MAX);
    }

    #[test]
    fn test_each_missing_field_reported_alone() {
        let cases = [
            (LoanForm::new("", "25", "5.25", Some("repayment")), Field::Amount),
            (LoanForm::new("200000", "", "5.25", Some("repayment")), Field::Term),
            (LoanForm::new("200000", "25", "", Some("repayment")), Field::Rate),
            (LoanForm::new("200000", "25", "5.25", None), Field::Type),
        ];

        for (form, field) in cases {
            let report = form.validate();
            assert!(!report.is_valid());
            assert_eq!(report.errors.len(), 1, "exactly one error for {field}");
            assert_eq!(report.error(field), Some(MSG_REQUIRED));
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let report = LoanForm::new("   ", "25", "5.25", Some("repayment")).validate();
        assert_eq!(report.error(Field::Amount), Some(MSG_REQUIRED));

        let report = LoanForm::new("200000", "25", "5.25", Some("")).validate();
        assert_eq!(report.error(Field::Type), Some(MSG_REQUIRED));
    }

    #[test]
    fn test_format_errors_distinct_from_missing() {
        let report = LoanForm::new("abc", "25", "5.25", Some("repayment")).validate();
        assert_eq!(report.error(Field::Amount), Some(MSG_NOT_A_NUMBER));

        let report = LoanForm::new("200000", "25.5", "5.25", Some("repayment")).validate();
        assert_eq!(report.error(Field::Term), Some(MSG_WHOLE_YEARS));

        let report = LoanForm::new("200000", "25", "lots", Some("repayment")).validate();
        assert_eq!(report.error(Field::Rate), Some(MSG_NOT_A_NUMBER));

        let report = LoanForm::new("200000", "25", "5.25", Some("balloon")).validate();
        assert_eq!(report.error(Field::Type), Some(MSG_UNKNOWN_TYPE));
    }

    #[test]
    fn test_empty_form_reports_all_four_fields() {
        let report = LoanForm::default().validate();
        assert_eq!(report.errors.len(), 4);
        for field in [Field::Amount, Field::Term, Field::Rate, Field::Type] {
            assert_eq!(report.error(field), Some(MSG_REQUIRED));
        }
    }

    #[test]
    fn test_report_serializes_keyed_by_form_name() {
        let report = LoanForm::default().validate();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["errors"]["amount"], MSG_REQUIRED);
        assert_eq!(json["errors"]["type"], MSG_REQUIRED);
    }
}
