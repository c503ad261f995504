//! Error types for tally-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tally-core
#[derive(Debug, Error)]
pub enum Error {
    /// Duplicate variable id in a catalog seed
    #[error("Duplicate variable id: {0}")]
    DuplicateVariableId(String),

    /// Variable value is NaN or infinite
    #[error("Non-finite value for variable: {0}")]
    NonFiniteValue(String),
}
