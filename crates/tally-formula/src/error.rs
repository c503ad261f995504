//! Evaluation failure taxonomy

use thiserror::Error;

/// Result type for rendering, parsing, and evaluation
pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// Why a formula could not be reduced to a number
///
/// All failure kinds are plain data; the evaluator maps every internal
/// parse or compute fault to one of these and never lets a panic escape.
/// The editing surface renders them (e.g. as "N/A") without crashing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A reference token's id no longer resolves in the variable table
    #[error("Unknown variable: {0}")]
    BrokenReference(String),

    /// The rendered expression is not a well-formed arithmetic expression
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// An arithmetic division or modulo by zero occurred
    #[error("Division by zero")]
    DivisionByZero,

    /// The computed value is not a finite real number
    #[error("Numeric overflow")]
    NumericOverflow,
}
