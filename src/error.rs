//! Error types for RSON parsing.
//!
//! Every failure carries three pieces of information:
//!
//! - an [`ErrorKind`] classifying the failure,
//! - a [`Position`] (byte offset, line, column) pointing into the source,
//! - a static message key suitable for lookup by a localisation layer.
//!
//! Errors are fatal to the `parse` call that produced them; the parser never
//! retries internally and never returns a partial tree.
//!
//! ## Examples
//!
//! ```rust
//! use rson::{parse_str, ErrorKind};
//!
//! let err = parse_str("[1, 2").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
//! assert_eq!(err.position().line, 1);
//! ```

use std::fmt;
use thiserror::Error;

/// A location in the source text.
///
/// `byte` is the offset into the input byte slice; `line` and `column` are
/// 1-based and counted in code points. Errors raised while assembling values
/// outside of a parse (for example by [`crate::Value::canonical`]) carry the
/// default position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub byte: usize,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Classification of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input is not valid UTF-8, or a byte-order mark appears after byte 0.
    Encoding,
    /// No grammar production accepts the current code point.
    UnexpectedByte,
    /// End of input inside a literal or container.
    UnexpectedEof,
    /// Unknown or ill-formed escape sequence.
    BadEscape,
    /// Invalid digit for the chosen radix, misplaced `_`, empty mantissa,
    /// mis-formed exponent, or an integer outside the native range.
    BadNumber,
    /// Literal control character inside a single-quoted string.
    BadControlChar,
    /// Duplicate record key, set element, or dict key.
    DuplicateKey,
    /// Mixed-type, non-comparable, or non-string keys where the grammar
    /// requires otherwise.
    DictKeyType,
    /// Built-in tag applied to a value of the wrong shape.
    TagShape,
    /// Tag applied to an already-tagged value.
    TagNest,
    /// Non-whitespace content after the root value.
    TrailingGarbage,
    /// Nesting exceeded the configured maximum depth.
    DepthLimit,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Encoding => "encoding error",
            ErrorKind::UnexpectedByte => "unexpected character",
            ErrorKind::UnexpectedEof => "unexpected end of input",
            ErrorKind::BadEscape => "bad escape",
            ErrorKind::BadNumber => "bad number",
            ErrorKind::BadControlChar => "bad control character",
            ErrorKind::DuplicateKey => "duplicate key",
            ErrorKind::DictKeyType => "bad dict key",
            ErrorKind::TagShape => "tag applied to wrong shape",
            ErrorKind::TagNest => "tag applied to tagged value",
            ErrorKind::TrailingGarbage => "trailing content after value",
            ErrorKind::DepthLimit => "nesting too deep",
        };
        f.write_str(name)
    }
}

/// A parse error: kind, source position, and a static message key.
///
/// The message key is deliberately unformatted (`kebab-case`, no
/// interpolation) so higher layers can map it to localised text. The
/// [`fmt::Display`] impl combines all three parts for direct reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {position}: {message}")]
pub struct Error {
    kind: ErrorKind,
    position: Position,
    message: &'static str,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, position: Position, message: &'static str) -> Self {
        Error {
            kind,
            position,
            message,
        }
    }

    /// The error classification.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Where in the source the error was raised.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The static message key, e.g. `"unterminated-string"`.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Re-anchors the error at `position`. Used when a value constructor
    /// raised the error without source context.
    pub(crate) fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub(crate) fn encoding(position: Position, message: &'static str) -> Self {
        Error::new(ErrorKind::Encoding, position, message)
    }

    pub(crate) fn unexpected_byte(position: Position, message: &'static str) -> Self {
        Error::new(ErrorKind::UnexpectedByte, position, message)
    }

    pub(crate) fn unexpected_eof(position: Position, message: &'static str) -> Self {
        Error::new(ErrorKind::UnexpectedEof, position, message)
    }

    pub(crate) fn bad_escape(position: Position, message: &'static str) -> Self {
        Error::new(ErrorKind::BadEscape, position, message)
    }

    pub(crate) fn bad_number(position: Position, message: &'static str) -> Self {
        Error::new(ErrorKind::BadNumber, position, message)
    }

    pub(crate) fn bad_control_char(position: Position, message: &'static str) -> Self {
        Error::new(ErrorKind::BadControlChar, position, message)
    }

    pub(crate) fn duplicate_key(position: Position, message: &'static str) -> Self {
        Error::new(ErrorKind::DuplicateKey, position, message)
    }

    pub(crate) fn dict_key_type(position: Position, message: &'static str) -> Self {
        Error::new(ErrorKind::DictKeyType, position, message)
    }

    pub(crate) fn tag_shape(position: Position, message: &'static str) -> Self {
        Error::new(ErrorKind::TagShape, position, message)
    }

    pub(crate) fn tag_nest(position: Position, message: &'static str) -> Self {
        Error::new(ErrorKind::TagNest, position, message)
    }

    pub(crate) fn trailing_garbage(position: Position, message: &'static str) -> Self {
        Error::new(ErrorKind::TrailingGarbage, position, message)
    }

    pub(crate) fn depth_limit(position: Position, message: &'static str) -> Self {
        Error::new(ErrorKind::DepthLimit, position, message)
    }
}

/// Alias for `std::result::Result<T, rson::Error>`.
pub type Result<T> = std::result::Result<T, Error>;
