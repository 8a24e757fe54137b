//! Errors from reading polynomials from text

use thiserror::Error;

/// Result type alias using [ParseError]
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur when parsing a polynomial
///
/// Positions are byte offsets into the pattern after all whitespace
/// has been removed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing to parse
    #[error("empty polynomial pattern")]
    Empty,

    /// A coefficient is not a valid decimal number
    #[error("invalid numeric token at {start}:{end}: '{token}'")]
    MalformedNumber {
        start: usize,
        end: usize,
        token: String,
    },

    /// `^` without following digits
    #[error("no integer after '^' at {pos}")]
    MissingExponent { pos: usize },

    /// The exponent does not fit into a `u32`
    #[error("exponent out of range at {start}:{end}: '{token}'")]
    ExponentOverflow {
        start: usize,
        end: usize,
        token: String,
    },

    /// A character that cannot continue the current term
    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedChar { pos: usize, ch: char },
}
