//! # tally
//!
//! A Rust library for building arithmetic formulas interactively.
//!
//! Tally models the core of a formula-input widget: an ordered sequence of
//! tokens (operators, digit runs, and references to named variables) edited
//! at a cursor, with live evaluation against the current variable values.
//! Rendering, keyboard routing, and styling stay in the embedding UI; tally
//! owns the model, the variable catalog, and the evaluator.
//!
//! ## Example
//!
//! ```rust
//! use tally::prelude::*;
//!
//! let mut session = FormulaSession::new(vec![
//!     Variable::new("1", "Revenue", 100.0),
//!     Variable::new("2", "Cost", 50.0),
//! ]).unwrap();
//!
//! session.insert(Token::reference("1"));
//! session.insert(Token::literal("-"));
//! session.insert(Token::reference("2"));
//!
//! assert_eq!(session.evaluate(), Ok(EvalOutcome::Value(50.0)));
//!
//! session.set_variable_value("2", 30.0);
//! assert_eq!(session.evaluate(), Ok(EvalOutcome::Value(70.0)));
//! ```

pub mod input;
pub mod prelude;
pub mod session;
pub mod suggest;

// Re-export session types
pub use session::FormulaSession;

// Re-export suggestion types
pub use suggest::{demo_catalog, CatalogSuggestions, SuggestionSource};

// Re-export input classification
pub use input::{classify_input, is_operator_char, InputKind};

// Re-export core types
pub use tally_core::{Error, Formula, Result, Token, Variable, VariableTable};

// Re-export evaluation types
pub use tally_formula::{evaluate, EvalError, EvalOutcome, EvalResult};
