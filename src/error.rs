use std::str::Utf8Error;

use thiserror::Error;

/// A malformed-input diagnostic produced while parsing.
///
/// There is a single error kind at the value-model level: every parse
/// failure is terminal for that call. Most variants carry the byte offset
/// (from the start of the input) of the offending byte.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected character (0x{byte:02X}) at index {index}")]
    UnexpectedCharacter { byte: u8, index: usize },

    /// The input ended before the closing quote of a string literal.
    #[error("unclosed string")]
    UnclosedString,

    #[error("expected digit at index {index}")]
    ExpectedDigit { index: usize },

    #[error("expected digit after . at index {index}")]
    ExpectedFractionDigit { index: usize },

    /// An `e`/`E` at the very end of the input.
    #[error("expected exponent at index {index}")]
    ExpectedExponent { index: usize },

    #[error("expected ']' or ',' at index {index}")]
    ExpectedArraySeparator { index: usize },

    #[error("expected '}}' or ',' at index {index}")]
    ExpectedObjectSeparator { index: usize },

    /// An object key that does not open with `"`.
    #[error("expected '\"' at index {index}")]
    ExpectedQuote { index: usize },

    #[error("expected ':' at index {index}")]
    ExpectedColon { index: usize },

    /// A literal that matched on its first letter but diverged afterwards,
    /// e.g. `nul` or `trve`. The index points at the literal's first byte.
    #[error("expected '{literal}' at index {index}")]
    ExpectedLiteral {
        literal: &'static str,
        index: usize,
    },

    /// Raised by [`parse_slice`](crate::parse_slice) before parsing begins.
    #[error("invalid UTF-8 in input: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

impl ParseError {
    /// Byte offset of the failure, when the diagnostic carries one.
    pub fn index(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedCharacter { index, .. }
            | ParseError::ExpectedDigit { index }
            | ParseError::ExpectedFractionDigit { index }
            | ParseError::ExpectedExponent { index }
            | ParseError::ExpectedArraySeparator { index }
            | ParseError::ExpectedObjectSeparator { index }
            | ParseError::ExpectedQuote { index }
            | ParseError::ExpectedColon { index }
            | ParseError::ExpectedLiteral { index, .. } => Some(*index),
            ParseError::UnclosedString | ParseError::InvalidUtf8(_) => None,
        }
    }
}
