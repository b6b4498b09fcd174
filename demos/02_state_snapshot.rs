/// state snapshot - serialize the whole calculator state and restore it
use mortgage_quote_rs::{
    CalculatorState, LoanForm, MortgageCalculator, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let calculator = MortgageCalculator::default();
    let time = SafeTimeProvider::new(TimeSource::System);

    let state = CalculatorState::new()
        .with_form(LoanForm::new("350000", "30", "4.8", Some("repayment")))
        .submit(&calculator, &time);

    // snapshot the state as the host application would persist it
    let json = serde_json::to_string_pretty(&state)?;
    println!("{json}");

    // restore and keep working from where the user left off
    let restored: CalculatorState = serde_json::from_str(&json)?;
    assert_eq!(restored, state);

    let cleared = restored.clear();
    assert!(cleared.result.is_none());

    Ok(())
}
