//! # rson
//!
//! A strict parser and value model for RSON (Restructured Object Notation),
//! a superset of JSON designed to be read by JavaScript, never written by it.
//!
//! ## What is RSON?
//!
//! RSON keeps JSON's shape and adds the things hand-edited data wants:
//! `#` comments, trailing commas, binary/octal/hex numbers with `_`
//! separators, hex floats, single- and triple-quoted strings, byte strings,
//! sets, ordered tables, and user-extensible `@tag` decorators. See
//! [`syntax`] for the full notation reference.
//!
//! ## Key features
//!
//! - **Strict**: one document per input, no bare words, no partial trees on
//!   error, every failure positioned by byte, line, and column
//! - **Dynamic values**: documents parse into [`Value`], with the equality
//!   and hashing rules record keys, sets, and dicts need
//! - **Tag validation**: built-in tags (`@set`, `@datetime`, `@float`, …)
//!   are checked and applied during the parse; unknown tags survive as
//!   [`Value::Tagged`]
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick start
//!
//! ```rust
//! use rson::{parse_str, Value};
//!
//! let value = parse_str(r#"
//!     ## deployment manifest
//!     {
//!         "name": "api",
//!         "replicas": 0x10,
//!         "flags": @set ["beta", "canary"],
//!         "deadline": @datetime "2026-08-01T12:00:00Z",
//!     }
//! "#).unwrap();
//!
//! let record = value.as_record().unwrap();
//! assert_eq!(record.get("replicas"), Some(&Value::Int(16)));
//! ```
//!
//! ## Parsing bytes
//!
//! Input arrives as UTF-8 bytes; anything else fails up front:
//!
//! ```rust
//! use rson::{parse, ErrorKind};
//!
//! assert_eq!(parse(b"[1, 2, 3]").unwrap().as_list().unwrap().len(), 3);
//! assert_eq!(parse(&[0xFF, 0xFE]).unwrap_err().kind(), ErrorKind::Encoding);
//! ```
//!
//! ## Building values
//!
//! ```rust
//! use rson::rson;
//!
//! let built = rson!({"xs": [1, 2, 3], "ok": true});
//! let parsed = rson::parse_str(r#"{"xs": [1, 2, 3], "ok": true}"#).unwrap();
//! assert_eq!(built, parsed);
//! ```
//!
//! ## The decorated-JSON projection
//!
//! [`Value`] implements `serde::Serialize` as a one-way projection onto
//! JSON: decorated variants become single-key objects
//! (`{"set": […]}`, `{"record": [[k, v], …]}`, `{"base64": "…"}`). This is
//! the surface downstream JSON back-ends consume; this crate never parses
//! it back, and it never emits RSON text at all.
//!
//! ## Concurrency
//!
//! Parsing is synchronous and CPU-bound over an in-memory slice. Parsed
//! trees are immutable, so they share freely across threads; concurrent
//! parses just need their own input slices.

pub mod cursor;
pub mod error;
pub mod macros;
pub mod map;
mod number;
pub mod options;
pub mod parser;
mod string;
pub mod syntax;
mod tag;
pub mod value;

pub use cursor::Cursor;
pub use error::{Error, ErrorKind, Position, Result};
pub use map::RsonMap;
pub use options::{ParseOptions, UnknownTags};
pub use parser::Parser;
pub use value::Value;

/// Parses one RSON document from a UTF-8 byte slice.
///
/// The document is optional BOM, whitespace, exactly one value, whitespace,
/// end of input.
///
/// # Examples
///
/// ```rust
/// use rson::{parse, Value};
///
/// assert_eq!(parse(b"true").unwrap(), Value::Bool(true));
/// ```
///
/// # Errors
///
/// `Encoding` for non-UTF-8 input, `UnexpectedEof` for an empty document,
/// `TrailingGarbage` for content after the root value, and every other
/// [`ErrorKind`] for malformed content.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(bytes: &[u8]) -> Result<Value> {
    parse_with_options(bytes, ParseOptions::default())
}

/// Parses one RSON document from a UTF-8 byte slice with explicit options.
///
/// # Errors
///
/// As [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(bytes: &[u8], options: ParseOptions) -> Result<Value> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        Error::encoding(position_of_byte(bytes, e.valid_up_to()), "invalid-utf8")
    })?;
    parse_str_with_options(text, options)
}

/// Parses one RSON document from a string slice.
///
/// # Examples
///
/// ```rust
/// use rson::{parse_str, Value};
///
/// let value = parse_str("[1, 2, 3,]  # trailing comma is fine").unwrap();
/// assert_eq!(value.as_list().unwrap().len(), 3);
/// ```
///
/// # Errors
///
/// As [`parse`], minus `Encoding` for invalid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(text: &str) -> Result<Value> {
    parse_str_with_options(text, ParseOptions::default())
}

/// Parses one RSON document from a string slice with explicit options.
///
/// # Errors
///
/// As [`parse_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Result<Value> {
    Parser::with_options(text, options).parse_document()
}

/// Line/column for a byte offset, for errors raised before a cursor exists.
fn position_of_byte(bytes: &[u8], byte: usize) -> Position {
    let mut line = 1;
    let mut column = 1;
    for &b in &bytes[..byte] {
        if b == b'\n' {
            line += 1;
            column = 1;
        } else if (b & 0xC0) != 0x80 {
            // Count code points, not continuation bytes.
            column += 1;
        }
    }
    Position { byte, line, column }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_parse_str_agree() {
        let text = "{\"a\": [1, 2.5], \"b\": null}";
        assert_eq!(parse(text.as_bytes()).unwrap(), parse_str(text).unwrap());
    }

    #[test]
    fn invalid_utf8_is_an_encoding_error() {
        let err = parse(&[b'[', 0xC3, 0x28, b']']).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
        assert_eq!(err.position().byte, 1);
    }

    #[test]
    fn utf8_error_positions_count_lines() {
        let err = parse(b"[1,\n\xFF]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
        assert_eq!(err.position().line, 2);
        assert_eq!(err.position().column, 1);
    }

    #[test]
    fn options_thread_through() {
        let strict = ParseOptions::new().with_unknown_tags(UnknownTags::Error);
        assert!(parse_str("@mystery 1").is_ok());
        assert!(parse_str_with_options("@mystery 1", strict).is_err());
    }

    #[test]
    fn parsed_trees_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Value>();
        assert_send_sync::<Error>();
    }
}
