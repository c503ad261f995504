//! Raw input classification
//!
//! Decides whether a typed fragment commits immediately as a literal token
//! or stays pending as free text feeding the suggestion lookup. The
//! embedding UI calls this per input event and routes the result to
//! [`FormulaSession::insert`](crate::FormulaSession::insert) or to its
//! suggestion dropdown.

/// What a raw input fragment should become
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A single operator or parenthesis character; commit as a literal
    Operator,
    /// An unsigned digit run; commit as a literal
    Number,
    /// Free text; feed the suggestion lookup
    FreeText,
}

/// Check if a character is one of the committed operator characters
pub fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '^' | '%')
}

/// Classify a raw input fragment
///
/// A single operator character commits as an operator literal, an all-digit
/// run commits as a number literal, and anything else (including the empty
/// string) is free text destined to become a reference via suggestion
/// selection.
pub fn classify_input(text: &str) -> InputKind {
    let mut chars = text.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if is_operator_char(c) {
            return InputKind::Operator;
        }
    }

    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        return InputKind::Number;
    }

    InputKind::FreeText
}
