//! # tally-formula
//!
//! Expression rendering, parsing, and evaluation for tally.
//!
//! This crate provides:
//! - Rendering (token sequence → expression text, with variable
//!   substitution)
//! - Expression parsing (text → AST) over the arithmetic grammar
//!   `+ - * / ^ % ( )` and numeric literals
//! - Evaluation (AST → number) with a closed failure taxonomy
//!
//! Evaluation is a pure function over the formula and the variable table:
//! every input maps to a value, the distinct empty-formula outcome, or one
//! of the [`EvalError`] kinds. Nothing panics past this boundary, so the
//! evaluator is safe to invoke on every keystroke.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::{Formula, Token, Variable, VariableTable};
//! use tally_formula::{evaluate, EvalOutcome};
//!
//! let variables = VariableTable::new(vec![
//!     Variable::new("1", "Revenue", 100.0),
//!     Variable::new("2", "Cost", 50.0),
//! ]).unwrap();
//!
//! let mut formula = Formula::new();
//! formula.insert(Token::reference("1"));
//! formula.insert(Token::literal("-"));
//! formula.insert(Token::reference("2"));
//!
//! assert_eq!(evaluate(&formula, &variables), Ok(EvalOutcome::Value(50.0)));
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod render;

pub use ast::{BinaryOperator, Expr, UnaryOperator};
pub use error::{EvalError, EvalResult};
pub use evaluator::{evaluate, EvalOutcome};
pub use parser::parse_expression;
pub use render::render;
