//! Error types for encoded-list parsing.
//!
//! These never escape [`crate::parse_encoded_list`]; they are exposed for
//! callers that want to know *why* a list was rejected.

use thiserror::Error;

/// Result type for encoded-list parsing.
pub type ListParseResult<T> = Result<T, ListParseError>;

/// Errors that can occur while parsing an encoded list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListParseError {
    /// A character outside the list syntax was found.
    #[error("unexpected character {ch:?} at offset {pos}")]
    UnexpectedChar {
        /// Offending character.
        ch: char,
        /// Byte offset in the input.
        pos: usize,
    },

    /// A quoted string was never closed.
    #[error("unterminated string starting at offset {pos}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        pos: usize,
    },

    /// A token appeared where it is not allowed.
    #[error("unexpected {found} at offset {pos}")]
    UnexpectedToken {
        /// Description of the token.
        found: String,
        /// Byte offset in the input.
        pos: usize,
    },

    /// Brackets nested deeper than one sub-list.
    #[error("sub-lists cannot be nested (offset {pos})")]
    NestedList {
        /// Byte offset of the inner bracket.
        pos: usize,
    },

    /// Input ended in the middle of an element or sub-list.
    #[error("unexpected end of input")]
    UnexpectedEnd,
}
