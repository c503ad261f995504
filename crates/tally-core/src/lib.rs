//! # tally-core
//!
//! Core data structures for the tally formula library.
//!
//! This crate provides the fundamental types used throughout tally:
//! - [`Variable`] and [`VariableTable`] - The named quantities available for
//!   substitution, and the catalog that owns them
//! - [`Token`] - An atomic formula element (literal fragment or variable
//!   reference)
//! - [`Formula`] - The ordered token sequence under cursor-addressed editing
//!
//! ## Example
//!
//! ```rust
//! use tally_core::{Formula, Token, Variable, VariableTable};
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
//! assert_eq!(formula.len(), 3);
//! assert_eq!(formula.cursor(), 3);
//! ```

pub mod error;
pub mod formula;
pub mod token;
pub mod variable;

// Re-exports for convenience
pub use error::{Error, Result};
pub use formula::Formula;
pub use token::Token;
pub use variable::{Variable, VariableTable};
