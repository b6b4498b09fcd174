use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::QuoteConfig;
use crate::decimal::Money;
use crate::errors::{QuoteError, Result};
use crate::form::{LoanForm, LoanTerms};
use crate::types::{Quote, RepaymentType, ZeroRatePolicy};

/// longest term the calculator will price
pub const MAX_TERM_YEARS: u32 = 100;

/// prices validated loan terms into a repayment quote
#[derive(Debug, Clone, Default)]
pub struct MortgageCalculator {
    config: QuoteConfig,
}

impl MortgageCalculator {
    pub fn new(config: QuoteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// price validated terms
    ///
    /// Repayment mortgages use the standard amortization formula
    /// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1); interest-only mortgages
    /// pay P * r each month with the principal due as a balloon at term end.
    pub fn quote(&self, terms: &LoanTerms, time_provider: &SafeTimeProvider) -> Result<Quote> {
        if !terms.amount.is_positive() {
            return Err(QuoteError::NonPositiveAmount {
                amount: terms.amount,
            });
        }
        if terms.term_years == 0 {
            return Err(QuoteError::ZeroTerm);
        }
        if terms.term_years > MAX_TERM_YEARS {
            return Err(QuoteError::TermTooLong {
                term_years: terms.term_years,
                max: MAX_TERM_YEARS,
            });
        }
        if terms.annual_rate.is_negative() {
            return Err(QuoteError::NegativeRate {
                rate: terms.annual_rate,
            });
        }

        let months = terms.installments();
        let n = Decimal::from(months);
        let monthly_rate = terms.annual_rate.monthly_rate().as_decimal();
        let principal = terms.amount.as_decimal();

        // totals are derived from the unrounded installment, matching the
        // reference behavior of formatting only at the output boundary
        let (installment, total) = match terms.repayment_type {
            RepaymentType::Repayment => {
                if monthly_rate.is_zero() {
                    match self.config.zero_rate_policy {
                        ZeroRatePolicy::StraightLine => (principal / n, principal),
                        ZeroRatePolicy::Reject => return Err(QuoteError::ZeroRateRejected),
                    }
                } else {
                    let factor = compound_factor(monthly_rate, months)
                        .ok_or_else(|| overflow("compound factor out of range"))?;
                    let emi = principal
                        .checked_mul(monthly_rate)
                        .and_then(|numerator| numerator.checked_mul(factor))
                        .map(|numerator| numerator / (factor - Decimal::ONE))
                        .ok_or_else(|| overflow("installment out of range"))?;
                    let total = emi
                        .checked_mul(n)
                        .ok_or_else(|| overflow("total repayment out of range"))?;
                    (emi, total)
                }
            }
            RepaymentType::InterestOnly => {
                let emi = principal
                    .checked_mul(monthly_rate)
                    .ok_or_else(|| overflow("installment out of range"))?;
                let total = emi
                    .checked_mul(n)
                    .and_then(|interest| interest.checked_add(principal))
                    .ok_or_else(|| overflow("total repayment out of range"))?;
                (emi, total)
            }
        };

        Ok(Quote {
            quote_id: Uuid::new_v4(),
            generated_at: time_provider.now(),
            repayment_type: terms.repayment_type,
            monthly_payment: Money::from_decimal(installment),
            total_payment: Money::from_decimal(total),
            currency_symbol: self.config.currency_symbol.clone(),
        })
    }

    /// validate a raw form and price it in one call
    pub fn quote_form(&self, form: &LoanForm, time_provider: &SafeTimeProvider) -> Result<Quote> {
        let terms = form
            .parse()
            .map_err(|report| QuoteError::InvalidForm { report })?;
        self.quote(&terms, time_provider)
    }
}

/// (1 + r)^n by exact decimal iteration, None if it leaves Decimal's range
fn compound_factor(monthly_rate: Decimal, periods: u32) -> Option<Decimal> {
    let base = Decimal::ONE + monthly_rate;
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor = factor.checked_mul(base)?;
    }
    Some(factor)
}

fn overflow(message: &str) -> QuoteError {
    QuoteError::CalculationError {
        message: message.to_string(),
    }
}
