/// form submission cycle - inline errors, correction, then a quote
use mortgage_quote_rs::{
    CalculatorState, LoanForm, MortgageCalculator, ResultsPanel, SafeTimeProvider, TimeSource,
};

fn main() {
    let calculator = MortgageCalculator::default();
    let time = SafeTimeProvider::new(TimeSource::System);

    // first attempt: the user forgot the rate and never picked a type
    let state = CalculatorState::new().with_form(LoanForm::new(
        "200000",
        "25",
        "",
        None,
    ));
    let state = state.submit(&calculator, &time);

    println!("first submission:");
    for (field, message) in &state.errors.errors {
        println!("  {field}: {message}");
    }

    // corrected resubmission
    let state = state.with_form(LoanForm::new("200000", "25", "5.25", Some("interest")));
    let state = state.submit(&calculator, &time);

    println!("second submission:");
    match state.panel() {
        ResultsPanel::Results(quote) => {
            println!("  monthly: {}", quote.monthly_display_currency());
            println!("  total:   {}", quote.total_display_currency());
        }
        ResultsPanel::Empty => println!("  results shown here"),
    }
}
