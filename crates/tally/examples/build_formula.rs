//! Example: build a formula interactively and evaluate it live

use tally::prelude::*;
use tally::CatalogSuggestions;

fn main() -> Result<()> {
    let mut session = FormulaSession::with_demo_catalog();
    let suggestions = CatalogSuggestions::demo();

    // The user types "rev" and picks the first suggestion
    let candidates = suggestions.lookup("rev");
    println!(
        "Suggestions for 'rev': {:?}",
        candidates.iter().map(|v| v.name.as_str()).collect::<Vec<_>>()
    );
    session.insert(Token::reference(candidates[0].id.clone()));

    // Then "-", then picks Cost, building: Revenue - Cost
    session.insert(Token::literal("-"));
    let candidates = suggestions.lookup("cost");
    session.insert(Token::reference(candidates[0].id.clone()));

    println!("Formula: {}", session.display_text());
    print_result(&session);

    // Editing a variable value recalculates immediately
    session.set_variable_value("2", 35.0);
    println!("After setting Cost = 35:");
    print_result(&session);

    // Backspace removes one whole token
    session.delete_before_cursor();
    session.delete_before_cursor();
    println!("After two backspaces: {:?}", session.display_text());
    print_result(&session);

    Ok(())
}

fn print_result(session: &FormulaSession) {
    match session.evaluate() {
        Ok(EvalOutcome::Value(n)) => println!("Result: {}", n),
        Ok(EvalOutcome::Undefined) => println!("Result: (empty)"),
        Err(e) => println!("Result: N/A ({})", e),
    }
}
