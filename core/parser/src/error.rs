//! Lexing and parsing errors.

use redast_ast::Position;
use thiserror::Error;

/// A lexing failure, always wrapped into a [`ParseError::Lex`] before it
/// reaches a caller.
#[derive(Debug, Clone, Error)]
#[error("{message} at line {}, column {}", position.line, position.column)]
pub struct LexError {
    /// A human-readable description of the problem.
    pub message: String,
    /// Where in the source the problem was detected.
    pub position: Position,
}

impl LexError {
    /// Creates a new [`LexError`].
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

/// Raised when the stitched template input fails to parse, or a hole
/// lands somewhere the grammar does not allow a hole placeholder.
///
/// Carries the underlying lexer/parser message; caller's hole
/// positions are not exposed, since by the time this fires the hole has
/// already become an opaque placeholder identifier.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// A lexing error.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The parser expected one of a set of tokens and found something
    /// else.
    #[error(
        "expected {}, got '{found}' at line {}, column {}",
        expected.join(" or "),
        position.line,
        position.column
    )]
    Expected {
        /// The human-readable names of the tokens that would have been
        /// accepted.
        expected: Vec<String>,
        /// The text of the token actually found.
        found: String,
        /// Where the mismatch was detected.
        position: Position,
    },

    /// A general syntax error with no more specific variant.
    #[error("{message} at line {}, column {}", position.line, position.column)]
    Unexpected {
        /// A human-readable description of the problem.
        message: String,
        /// Where in the source the problem was detected.
        position: Position,
    },

    /// Input ended before a construct the parser had committed to was
    /// closed off (an unterminated block, argument list, ...).
    #[error("unexpected end of input, {context}")]
    AbruptEnd {
        /// What the parser was in the middle of parsing.
        context: &'static str,
    },
}

impl ParseError {
    pub(crate) fn expected(
        expected: impl IntoIterator<Item = impl Into<String>>,
        found: impl Into<String>,
        position: Position,
    ) -> Self {
        Self::Expected {
            expected: expected.into_iter().map(Into::into).collect(),
            found: found.into(),
            position,
        }
    }

    pub(crate) fn unexpected(message: impl Into<String>, position: Position) -> Self {
        Self::Unexpected {
            message: message.into(),
            position,
        }
    }
}
