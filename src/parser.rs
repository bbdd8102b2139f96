//! Recursive-descent parser over the source cursor.
//!
//! [`Parser`] dispatches on the first non-whitespace code point at each
//! value position:
//!
//! - `{` opens a record (string first element) or a set (anything else),
//! - `[` opens a table (`value : value` first entry) or a list,
//! - `(` groups a single value, or concatenates adjacent string literals,
//! - `@` applies a tag, strings and numbers open literals, and the only
//!   bare identifiers are `true`, `false`, and `null`.
//!
//! The shape decisions are made by a single peek past the opener, never by
//! rescanning, so parsing stays linear in the input. The parser's entire
//! state is the cursor plus a nesting-depth counter.
//!
//! Most callers want [`crate::parse`] or [`crate::parse_str`]; `Parser` is
//! public for embedders that need to pull one value out of a larger
//! document.
//!
//! ## Examples
//!
//! ```rust
//! use rson::{Parser, Value};
//!
//! let mut parser = Parser::new("[1, 2, 3] trailing");
//! let value = parser.parse_value().unwrap();
//! assert_eq!(value, Value::List(vec![1.into(), 2.into(), 3.into()]));
//! // the cursor now sits on " trailing"
//! ```

use crate::cursor::{is_identifier_start, Cursor};
use crate::error::{Error, Result};
use crate::map::RsonMap;
use crate::options::ParseOptions;
use crate::string::{at_string_start, parse_string, StringLit};
use crate::value::Value;
use crate::{number, tag};

/// The RSON parser. Wraps a [`Cursor`] and the parse configuration.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParseOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `input` with default options.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Parser::with_options(input, ParseOptions::default())
    }

    /// Creates a parser over `input` with explicit options.
    #[must_use]
    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(input),
            options,
            depth: 0,
        }
    }

    /// Consumes exactly one document: optional BOM, whitespace, one value,
    /// whitespace, end of input.
    ///
    /// # Errors
    ///
    /// `UnexpectedEof` for an empty document, `TrailingGarbage` when
    /// non-whitespace follows the root value, plus every error
    /// [`Parser::parse_value`] can raise.
    pub fn parse_document(&mut self) -> Result<Value> {
        if self.cursor.position().byte == 0 {
            self.cursor.eat('\u{FEFF}');
        }
        self.skip_ws()?;
        if self.cursor.is_eof() {
            return Err(Error::unexpected_eof(
                self.cursor.position(),
                "empty-document",
            ));
        }
        let value = self.parse_value()?;
        self.skip_ws()?;
        if !self.cursor.is_eof() {
            return Err(Error::trailing_garbage(
                self.cursor.position(),
                "content-after-value",
            ));
        }
        Ok(value)
    }

    /// Parses a single value, leaving the cursor after it.
    ///
    /// # Errors
    ///
    /// Any of the error kinds in [`crate::ErrorKind`] except
    /// `TrailingGarbage`.
    pub fn parse_value(&mut self) -> Result<Value> {
        if self.depth >= self.options.max_depth {
            return Err(Error::depth_limit(self.cursor.position(), "nesting-depth"));
        }
        self.depth += 1;
        let value = self.parse_value_inner();
        self.depth -= 1;
        value
    }

    /// Skips whitespace and comments. A byte-order mark is only whitespace
    /// at byte 0, which `parse_document` consumes before getting here.
    fn skip_ws(&mut self) -> Result<()> {
        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some('\u{FEFF}') {
            return Err(Error::encoding(self.cursor.position(), "bom-after-start"));
        }
        Ok(())
    }

    fn parse_value_inner(&mut self) -> Result<Value> {
        self.skip_ws()?;
        let at = self.cursor.position();
        let Some(c) = self.cursor.peek() else {
            return Err(Error::unexpected_eof(at, "expected-value"));
        };
        match c {
            '{' => self.parse_braces(),
            '[' => self.parse_brackets(),
            '(' => self.parse_group(),
            '@' => self.parse_tagged(),
            _ if at_string_start(&self.cursor) => {
                let lit = parse_string(&mut self.cursor)?;
                Ok(match lit {
                    StringLit::Unicode(s) => Value::String(s),
                    StringLit::Bytes(b) => Value::Bytes(b),
                })
            }
            '+' | '-' | '0'..='9' => number::parse_number(&mut self.cursor),
            _ if is_identifier_start(c) => {
                // No bare words: only the three keyword literals.
                let ident = self.cursor.scan_identifier().unwrap_or_default();
                match ident {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    "null" => Ok(Value::Null),
                    _ => Err(Error::unexpected_byte(at, "bare-word")),
                }
            }
            _ => Err(Error::unexpected_byte(at, "expected-value")),
        }
    }

    /// `{…}`: an empty record, a record of `"key": value` pairs, or a set.
    /// A string first element commits to the record branch, which is what
    /// rejects `{"a"}` without backtracking.
    fn parse_braces(&mut self) -> Result<Value> {
        self.cursor.bump();
        self.skip_ws()?;
        if self.cursor.eat('}') {
            return Ok(Value::Record(RsonMap::new()));
        }

        let first_at = self.cursor.position();
        let first = self.parse_value()?;
        self.skip_ws()?;

        match first {
            Value::String(key) => {
                if !self.cursor.eat(':') {
                    return Err(Error::unexpected_byte(
                        self.cursor.position(),
                        "expected-colon",
                    ));
                }
                let mut map = RsonMap::new();
                let value = self.parse_value()?;
                map.insert(key, value);
                loop {
                    if self.close_or_separator('}')? {
                        return Ok(Value::Record(map));
                    }
                    let entry_at = self.cursor.position();
                    let key = match self.parse_value()? {
                        Value::String(key) => key,
                        _ => {
                            return Err(Error::dict_key_type(entry_at, "record-key-not-string"))
                        }
                    };
                    self.skip_ws()?;
                    if !self.cursor.eat(':') {
                        return Err(Error::unexpected_byte(
                            self.cursor.position(),
                            "expected-colon",
                        ));
                    }
                    let value = self.parse_value()?;
                    if map.insert(key, value).is_some() {
                        return Err(Error::duplicate_key(entry_at, "duplicate-record-key"));
                    }
                }
            }
            first => {
                if self.cursor.peek() == Some(':') {
                    return Err(Error::dict_key_type(first_at, "record-key-not-string"));
                }
                let mut items = vec![first];
                loop {
                    if self.close_or_separator('}')? {
                        return Ok(Value::Set(items));
                    }
                    let item_at = self.cursor.position();
                    let item = self.parse_value()?;
                    if items.iter().any(|existing| *existing == item) {
                        return Err(Error::duplicate_key(item_at, "duplicate-set-element"));
                    }
                    items.push(item);
                }
            }
        }
    }

    /// `[…]`: a list of values, or a table of `key : value` entries when a
    /// colon follows the first element.
    fn parse_brackets(&mut self) -> Result<Value> {
        self.cursor.bump();
        self.skip_ws()?;
        if self.cursor.eat(']') {
            return Ok(Value::List(Vec::new()));
        }

        let first = self.parse_value()?;
        self.skip_ws()?;

        if self.cursor.eat(':') {
            let value = self.parse_value()?;
            let mut pairs = vec![(first, value)];
            loop {
                if self.close_or_separator(']')? {
                    return Ok(Value::Table(pairs));
                }
                let key = self.parse_value()?;
                self.skip_ws()?;
                if !self.cursor.eat(':') {
                    return Err(Error::unexpected_byte(
                        self.cursor.position(),
                        "expected-colon",
                    ));
                }
                let value = self.parse_value()?;
                pairs.push((key, value));
            }
        }

        let mut items = vec![first];
        loop {
            if self.close_or_separator(']')? {
                return Ok(Value::List(items));
            }
            items.push(self.parse_value()?);
            self.skip_ws()?;
            if self.cursor.peek() == Some(':') {
                return Err(Error::unexpected_byte(
                    self.cursor.position(),
                    "colon-in-list",
                ));
            }
        }
    }

    /// After an element: expects `,` or the closer. Returns `true` when the
    /// container just closed (including via trailing comma) and `false`
    /// when another element follows.
    fn close_or_separator(&mut self, closer: char) -> Result<bool> {
        self.skip_ws()?;
        if self.cursor.eat(closer) {
            return Ok(true);
        }
        let at = self.cursor.position();
        if !self.cursor.eat(',') {
            return if self.cursor.is_eof() {
                Err(Error::unexpected_eof(at, "unclosed-container"))
            } else {
                Err(Error::unexpected_byte(at, "expected-comma-or-close"))
            };
        }
        self.skip_ws()?;
        if self.cursor.eat(closer) {
            return Ok(true);
        }
        if self.cursor.is_eof() {
            return Err(Error::unexpected_eof(
                self.cursor.position(),
                "unclosed-container",
            ));
        }
        Ok(false)
    }

    /// `(…)`: adjacent-string concatenation when the body is string
    /// literals, plain grouping otherwise.
    fn parse_group(&mut self) -> Result<Value> {
        self.cursor.bump();
        self.skip_ws()?;

        if at_string_start(&self.cursor) {
            let mut literals = vec![(self.cursor.position(), parse_string(&mut self.cursor)?)];
            loop {
                self.skip_ws()?;
                if at_string_start(&self.cursor) {
                    literals.push((self.cursor.position(), parse_string(&mut self.cursor)?));
                } else {
                    break;
                }
            }
            if !self.cursor.eat(')') {
                let at = self.cursor.position();
                return if self.cursor.is_eof() {
                    Err(Error::unexpected_eof(at, "unclosed-group"))
                } else {
                    Err(Error::unexpected_byte(at, "expected-close-paren"))
                };
            }

            let bytes_kind = literals[0].1.is_bytes();
            if let Some((at, _)) = literals
                .iter()
                .find(|(_, lit)| lit.is_bytes() != bytes_kind)
            {
                return Err(Error::unexpected_byte(*at, "mixed-concat"));
            }
            if bytes_kind {
                let mut joined = Vec::new();
                for (_, lit) in literals {
                    if let StringLit::Bytes(b) = lit {
                        joined.extend_from_slice(&b);
                    }
                }
                return Ok(Value::Bytes(joined));
            }
            let mut joined = String::new();
            for (_, lit) in literals {
                if let StringLit::Unicode(s) = lit {
                    joined.push_str(&s);
                }
            }
            return Ok(Value::String(joined));
        }

        if self.cursor.peek() == Some(')') {
            return Err(Error::unexpected_byte(self.cursor.position(), "empty-group"));
        }
        let value = self.parse_value()?;
        self.skip_ws()?;
        if !self.cursor.eat(')') {
            let at = self.cursor.position();
            return if self.cursor.is_eof() {
                Err(Error::unexpected_eof(at, "unclosed-group"))
            } else {
                Err(Error::unexpected_byte(at, "expected-close-paren"))
            };
        }
        Ok(value)
    }

    /// `@name value`: the whitespace between name and value is mandatory,
    /// and the value may not itself be tagged.
    fn parse_tagged(&mut self) -> Result<Value> {
        let at = self.cursor.position();
        self.cursor.bump();
        let name = tag::parse_tag_name(&mut self.cursor)?;

        match self.cursor.peek() {
            Some(' ') | Some('\t') | Some('\r') | Some('\n') | Some('#') => {}
            Some(_) => {
                return Err(Error::unexpected_byte(
                    self.cursor.position(),
                    "expected-space-after-tag",
                ))
            }
            None => {
                return Err(Error::unexpected_eof(
                    self.cursor.position(),
                    "expected-tag-value",
                ))
            }
        }
        self.skip_ws()?;

        if self.cursor.peek() == Some('@') {
            return Err(Error::tag_nest(self.cursor.position(), "tag-on-tagged-value"));
        }
        let value = self.parse_value()?;
        tag::apply(&name, value, at, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn parse(text: &str) -> Result<Value> {
        Parser::new(text).parse_document()
    }

    #[test]
    fn record_and_set_disambiguation() {
        assert!(matches!(parse("{}").unwrap(), Value::Record(_)));
        assert!(matches!(parse("{\"a\": 1}").unwrap(), Value::Record(_)));
        assert!(matches!(parse("{1, 2, 3}").unwrap(), Value::Set(_)));
    }

    #[test]
    fn string_after_brace_commits_to_record() {
        let err = parse("{\"a\"}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedByte);
        let err = parse("{\"a\", \"b\"}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedByte);
    }

    #[test]
    fn non_string_record_keys_are_reported() {
        let err = parse("{1: 2}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DictKeyType);
        let err = parse("{\"a\": 1, 2: 3}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DictKeyType);
    }

    #[test]
    fn list_and_table_disambiguation() {
        assert!(matches!(parse("[1, 2]").unwrap(), Value::List(_)));
        let table = parse("[1: \"a\", 1: \"b\"]").unwrap();
        match table {
            Value::Table(pairs) => {
                assert_eq!(pairs.len(), 2);
                assert_eq!(pairs[0].0, Value::Int(1));
            }
            other => panic!("expected table, got {other:?}"),
        }
        let err = parse("[1, 2: 3]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedByte);
        let err = parse("[1: 2, 3]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedByte);
    }

    #[test]
    fn trailing_commas_everywhere_but_first() {
        assert_eq!(parse("[1,]").unwrap(), parse("[1]").unwrap());
        assert_eq!(parse("{\"a\": 1,}").unwrap(), parse("{\"a\": 1}").unwrap());
        assert_eq!(parse("{1, 2,}").unwrap(), parse("{1, 2}").unwrap());
        assert_eq!(parse("[1: 2,]").unwrap(), parse("[1: 2]").unwrap());
        let err = parse("[,]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedByte);
    }

    #[test]
    fn grouping_and_concatenation() {
        assert_eq!(parse("( 1 )").unwrap(), Value::Int(1));
        assert_eq!(parse("(\"one\")").unwrap(), Value::String("one".into()));
        assert_eq!(
            parse("(  \"aaa\"  \"bbb\"  )").unwrap(),
            Value::String("aaabbb".into())
        );
        assert_eq!(
            parse("(b\"a\" b\"b\" b\"c\")").unwrap(),
            Value::Bytes(b"abc".to_vec())
        );
        let err = parse("(\"a\" b\"b\")").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedByte);
        assert_eq!(err.message(), "mixed-concat");
        let err = parse("()").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedByte);
    }

    #[test]
    fn keywords_but_no_bare_words() {
        assert_eq!(parse("true").unwrap(), Value::Bool(true));
        assert_eq!(parse("null").unwrap(), Value::Null);
        let err = parse("nil").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedByte);
        let err = parse("_1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedByte);
    }

    #[test]
    fn comments_are_invisible() {
        let value = parse("# header\n[1, # one\n 2] # done").unwrap();
        assert_eq!(value, Value::List(vec![1.into(), 2.into()]));
    }

    #[test]
    fn duplicate_keys_fail() {
        let err = parse("{\"a\": 1, \"a\": 2}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
        let err = parse("{1, 1}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
        // Cross-variant numeric equality applies to set membership.
        let err = parse("{1, 1.0}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    }

    #[test]
    fn depth_limit_guards_recursion() {
        let options = ParseOptions::new().with_max_depth(16);
        let deep = "[".repeat(64) + &"]".repeat(64);
        let err = Parser::with_options(&deep, options)
            .parse_document()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DepthLimit);

        let shallow = "[[[[1]]]]";
        assert!(Parser::with_options(shallow, options)
            .parse_document()
            .is_ok());
    }

    #[test]
    fn document_rejects_trailing_content() {
        let err = parse("1 2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TrailingGarbage);
        let err = parse("[] x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TrailingGarbage);
        assert!(parse("[] # just a comment").is_ok());
    }

    #[test]
    fn empty_document_is_eof() {
        assert_eq!(parse("").unwrap_err().kind(), ErrorKind::UnexpectedEof);
        assert_eq!(parse("  \n# c\n").unwrap_err().kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn bom_rules() {
        assert_eq!(parse("\u{FEFF}1").unwrap(), Value::Int(1));
        let err = parse("[\u{FEFF}1]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
        // Also at separator positions, not just value positions.
        let err = parse("[1\u{FEFF}]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
    }

    #[test]
    fn unclosed_containers_are_eof() {
        for text in ["[1, 2", "{\"a\": 1", "{1", "(1", "[1: 2"] {
            let err = parse(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnexpectedEof, "{text}");
        }
    }
}
