//! Editing session
//!
//! One [`FormulaSession`] owns the formula, its cursor, and the variable
//! table for a single editing session. Sessions are independent values
//! with no shared state, so an application can run several at once and
//! tests need no reset hooks.

use crate::suggest::demo_catalog;
use tally_core::{Formula, Result, Token, Variable, VariableTable};
use tally_formula::{evaluate, EvalOutcome, EvalResult};

/// A single formula-editing session
///
/// The complete surface the editing UI needs: token insertion and deletion
/// at the cursor, cursor movement, variable value edits, and evaluation.
/// Editing operations never fail; out-of-range cursor requests clamp.
#[derive(Debug, Clone)]
pub struct FormulaSession {
    formula: Formula,
    variables: VariableTable,
}

impl FormulaSession {
    /// Start a session over an externally supplied variable catalog
    ///
    /// The catalog is fixed for the session's lifetime; only values change.
    pub fn new<I: IntoIterator<Item = Variable>>(catalog: I) -> Result<Self> {
        Ok(Self {
            formula: Formula::new(),
            variables: VariableTable::new(catalog)?,
        })
    }

    /// Start a session seeded with the built-in demo catalog
    pub fn with_demo_catalog() -> Self {
        Self::new(demo_catalog()).unwrap()
    }

    /// Insert a token at the cursor
    pub fn insert(&mut self, token: Token) {
        log::debug!("insert {:?} at {}", token, self.formula.cursor());
        self.formula.insert(token);
    }

    /// Delete the token before the cursor; no-op at position 0
    pub fn delete_before_cursor(&mut self) -> Option<Token> {
        self.formula.delete_before_cursor()
    }

    /// Move the cursor, clamped to the valid range
    pub fn move_cursor(&mut self, to: usize) {
        self.formula.move_cursor(to);
    }

    /// Move the cursor one token to the left
    pub fn cursor_left(&mut self) {
        self.formula.cursor_left();
    }

    /// Move the cursor one token to the right
    pub fn cursor_right(&mut self) {
        self.formula.cursor_right();
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.formula.cursor()
    }

    /// Set a variable's value; a no-op for ids outside the catalog
    pub fn set_variable_value(&mut self, id: &str, value: f64) {
        if self.variables.get(id).is_none() {
            log::warn!("set_variable_value: unknown id {:?}", id);
        }
        self.variables.set_value(id, value);
    }

    /// Evaluate the formula against the current variable values
    pub fn evaluate(&self) -> EvalResult<EvalOutcome> {
        evaluate(&self.formula, &self.variables)
    }

    /// The formula model
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// The variable table
    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Human-readable text of the committed formula
    ///
    /// Literals appear verbatim; references appear as the variable's display
    /// name, or as the raw id when the reference is broken. For display
    /// only - evaluation renders values, not names.
    pub fn display_text(&self) -> String {
        let mut text = String::new();
        for token in self.formula.tokens() {
            match token {
                Token::Literal(fragment) => text.push_str(fragment),
                Token::Reference(id) => match self.variables.get(id) {
                    Some(variable) => text.push_str(&variable.name),
                    None => text.push_str(id),
                },
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_session() -> FormulaSession {
        FormulaSession::new(vec![
            Variable::new("1", "Revenue", 100.0),
            Variable::new("2", "Cost", 50.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = sample_session();
        let mut b = sample_session();

        a.insert(Token::literal("1"));
        b.set_variable_value("1", 999.0);

        assert_eq!(a.formula().len(), 1);
        assert_eq!(b.formula().len(), 0);
        assert_eq!(a.variables().get("1").unwrap().value, 100.0);
        assert_eq!(b.variables().get("1").unwrap().value, 999.0);
    }

    #[test]
    fn test_evaluate_through_session() {
        let mut session = sample_session();
        session.insert(Token::reference("1"));
        session.insert(Token::literal("-"));
        session.insert(Token::reference("2"));

        assert_eq!(session.evaluate(), Ok(EvalOutcome::Value(50.0)));

        session.set_variable_value("2", 30.0);
        assert_eq!(session.evaluate(), Ok(EvalOutcome::Value(70.0)));
    }

    #[test]
    fn test_set_variable_value_unknown_id() {
        let mut session = sample_session();
        session.set_variable_value("99", 1.0);
        assert_eq!(session.variables().len(), 2);
        assert!(session.variables().get("99").is_none());
    }

    #[test]
    fn test_display_text() {
        let mut session = sample_session();
        session.insert(Token::literal("("));
        session.insert(Token::reference("1"));
        session.insert(Token::literal("-"));
        session.insert(Token::reference("2"));
        session.insert(Token::literal(")"));

        assert_eq!(session.display_text(), "(Revenue-Cost)");
    }

    #[test]
    fn test_display_text_broken_reference_shows_id() {
        let mut session = sample_session();
        session.insert(Token::reference("99"));
        assert_eq!(session.display_text(), "99");
    }

    #[test]
    fn test_demo_catalog_session() {
        let session = FormulaSession::with_demo_catalog();
        assert_eq!(session.variables().len(), 10);
        assert_eq!(session.variables().get("1").unwrap().name, "Revenue");
    }
}
