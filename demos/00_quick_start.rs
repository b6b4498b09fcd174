/// quick start - validate a submitted form and price a repayment mortgage
use mortgage_quote_rs::{LoanForm, MortgageCalculator, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // raw field values as the browser form would submit them
    let form = LoanForm::new("200000", "25", "5.25", Some("repayment"));

    let calculator = MortgageCalculator::default();
    let time = SafeTimeProvider::new(TimeSource::System);

    let quote = calculator.quote_form(&form, &time)?;

    println!("Your monthly repayments: {}", quote.monthly_display_currency());
    println!("Total you'll repay over the term: {}", quote.total_display_currency());

    Ok(())
}
