use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::form::{LoanForm, ValidationReport};
use crate::quote::MortgageCalculator;
use crate::types::Quote;

/// application state owned by the rendering layer
///
/// Holds the raw form, the error map from the last submission attempt and
/// the last successful quote. Every operation returns a fresh state, so a
/// host can keep a history of renders or diff consecutive states.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub form: LoanForm,
    pub errors: ValidationReport,
    pub result: Option<Quote>,
}

/// what the results side of the page should show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsPanel<'a> {
    /// placeholder shown before the first successful submission
    Empty,
    Results(&'a Quote),
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// replace the form fields, keeping errors and result untouched
    pub fn with_form(&self, form: LoanForm) -> Self {
        Self {
            form,
            errors: self.errors.clone(),
            result: self.result.clone(),
        }
    }

    /// run the submit cycle: validate, then price on success
    ///
    /// On a validation or pricing failure the error map is replaced and the
    /// previous quote is retained, matching a page that keeps the last
    /// result on screen while showing inline errors.
    pub fn submit(
        &self,
        calculator: &MortgageCalculator,
        time_provider: &SafeTimeProvider,
    ) -> Self {
        match self.form.parse() {
            Ok(terms) => match calculator.quote(&terms, time_provider) {
                Ok(quote) => Self {
                    form: self.form.clone(),
                    errors: ValidationReport::default(),
                    result: Some(quote),
                },
                Err(err) => {
                    let mut errors = ValidationReport::default();
                    if let Some(field) = err.field() {
                        errors.add(field, err.to_string());
                    }
                    Self {
                        form: self.form.clone(),
                        errors,
                        result: self.result.clone(),
                    }
                }
            },
            Err(errors) => Self {
                form: self.form.clone(),
                errors,
                result: self.result.clone(),
            },
        }
    }

    /// the "Clear All" reset: empty form, no errors, no result
    pub fn clear(&self) -> Self {
        Self::default()
    }

    /// conditional display for the results side of the page
    pub fn panel(&self) -> ResultsPanel<'_> {
        match &self.result {
            Some(quote) => ResultsPanel::Results(quote),
            None => ResultsPanel::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::MSG_REQUIRED;
    use crate::types::Field;
    use chrono::TimeZone;
    use chrono::Utc;
    use hourglass_rs::TimeSource;

    fn pinned_clock() -> SafeTimeProvider {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        SafeTimeProvider::new(TimeSource::Test(start))
    }

    fn valid_form() -> LoanForm {
        LoanForm::new("200000", "25", "5.25", Some("interest"))
    }

    #[test]
    fn test_fresh_state_shows_empty_panel() {
        let state = CalculatorState::new();
        assert_eq!(state.panel(), ResultsPanel::Empty);
        assert!(state.errors.is_valid());
    }

    #[test]
    fn test_submit_valid_form_produces_results_panel() {
        let calculator = MortgageCalculator::default();
        let time = pinned_clock();

        let state = CalculatorState::new().with_form(valid_form());
        let submitted = state.submit(&calculator, &time);

        assert!(submitted.errors.is_valid());
        match submitted.panel() {
            ResultsPanel::Results(quote) => {
                assert_eq!(quote.monthly_display_currency(), "£875.00");
                assert_eq!(quote.total_display_currency(), "£462500.00");
            }
            ResultsPanel::Empty => panic!("expected results panel"),
        }
    }

    #[test]
    fn test_invalid_submit_keeps_previous_quote() {
        let calculator = MortgageCalculator::default();
        let time = pinned_clock();

        let good = CalculatorState::new()
            .with_form(valid_form())
            .submit(&calculator, &time);
        assert!(good.result.is_some());

        // user blanks the amount and resubmits
        let edited = good.with_form(LoanForm::new("", "25", "5.25", Some("interest")));
        let resubmitted = edited.submit(&calculator, &time);

        assert_eq!(resubmitted.errors.error(Field::Amount), Some(MSG_REQUIRED));
        assert_eq!(resubmitted.result, good.result);
    }

    #[test]
    fn test_pricing_error_lands_on_its_field() {
        let calculator = MortgageCalculator::default();
        let time = pinned_clock();

        let state = CalculatorState::new()
            .with_form(LoanForm::new("200000", "0", "5.25", Some("repayment")));
        let submitted = state.submit(&calculator, &time);

        assert!(submitted.errors.error(Field::Term).is_some());
        assert_eq!(submitted.panel(), ResultsPanel::Empty);
    }

    #[test]
    fn test_clear_resets_everything() {
        let calculator = MortgageCalculator::default();
        let time = pinned_clock();

        let submitted = CalculatorState::new()
            .with_form(valid_form())
            .submit(&calculator, &time);
        let cleared = submitted.clear();

        assert_eq!(cleared, CalculatorState::default());
        assert_eq!(cleared.panel(), ResultsPanel::Empty);
    }

    #[test]
    fn test_state_json_round_trip() {
        let calculator = MortgageCalculator::default();
        let time = pinned_clock();

        let state = CalculatorState::new()
            .with_form(valid_form())
            .submit(&calculator, &time);

        let json = serde_json::to_string(&state).unwrap();
        let restored: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
