//! Formula token types

/// An atomic element of a formula
///
/// Either a committed literal fragment (an operator character, a
/// parenthesis, or an unsigned digit run) or a reference to a
/// [`Variable`](crate::Variable) by id. A reference is a weak lookup key,
/// not an owner: an id that no longer resolves at evaluation time is a
/// broken-reference failure, never a silent zero.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// Literal text fragment, immutable once created
    Literal(String),
    /// Reference to a variable by id
    Reference(String),
}

impl Token {
    /// Create a literal token
    pub fn literal<S: Into<String>>(text: S) -> Self {
        Token::Literal(text.into())
    }

    /// Create a reference token
    pub fn reference<S: Into<String>>(id: S) -> Self {
        Token::Reference(id.into())
    }

    /// Check if this token is a variable reference
    pub fn is_reference(&self) -> bool {
        matches!(self, Token::Reference(_))
    }
}
