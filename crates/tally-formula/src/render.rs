//! Token sequence rendering
//!
//! Concatenates a formula's tokens into a single expression string,
//! substituting each reference with its variable's current value.

use crate::error::{EvalError, EvalResult};
use tally_core::{Formula, Token, VariableTable};

/// Render a formula to expression text
///
/// Literals contribute their text verbatim. References contribute the
/// current value of their variable in decimal form, no rounding; a
/// reference whose id does not resolve fails with
/// [`EvalError::BrokenReference`] before any arithmetic is attempted.
pub fn render(formula: &Formula, variables: &VariableTable) -> EvalResult<String> {
    let mut text = String::new();

    for token in formula.tokens() {
        match token {
            Token::Literal(fragment) => text.push_str(fragment),
            Token::Reference(id) => {
                let variable = variables
                    .get(id)
                    .ok_or_else(|| EvalError::BrokenReference(id.clone()))?;
                text.push_str(&variable.value.to_string());
            }
        }
    }

    Ok(text)
}
