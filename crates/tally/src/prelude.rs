//! Prelude module - common imports for tally users
//!
//! ```rust
//! use tally::prelude::*;
//! ```

pub use crate::{
    // Input classification
    classify_input,

    // Evaluation types
    EvalError,
    EvalOutcome,
    EvalResult,

    // Error types
    Error,

    // Core types
    Formula,
    // Main types
    FormulaSession,

    InputKind,
    Result,

    // Suggestion types
    SuggestionSource,
    Token,
    Variable,
    VariableTable,
};
