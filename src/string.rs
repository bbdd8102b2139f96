//! String literals.
//!
//! Two kinds: unicode (`u`/`U` prefix, the default) and byte strings
//! (`b`/`B`). Either kind opens with one of four delimiters: `"`, `'`,
//! `"""`, `'''`. Triple delimiters may span lines and accept bare tab,
//! carriage return, and newline; single delimiters reject every bare
//! control character. Byte strings are ASCII on the surface; `\xNN` is the
//! only way to put a high octet in one, and `\u`/`\U` are refused outright.

use crate::cursor::Cursor;
use crate::error::{Error, Position, Result};

/// A scanned string literal, before it becomes a value. The grouping hack
/// needs the kind to survive until concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StringLit {
    Unicode(String),
    Bytes(Vec<u8>),
}

impl StringLit {
    pub(crate) fn is_bytes(&self) -> bool {
        matches!(self, StringLit::Bytes(_))
    }

    fn push_char(&mut self, c: char, at: Position) -> Result<()> {
        match self {
            StringLit::Unicode(text) => {
                text.push(c);
                Ok(())
            }
            StringLit::Bytes(bytes) => {
                if c.is_ascii() {
                    bytes.push(c as u8);
                    Ok(())
                } else {
                    Err(Error::unexpected_byte(at, "byte-string-non-ascii"))
                }
            }
        }
    }

    fn push_octet(&mut self, octet: u8) {
        match self {
            // In a unicode string \xNN denotes U+00NN.
            StringLit::Unicode(text) => text.push(char::from(octet)),
            StringLit::Bytes(bytes) => bytes.push(octet),
        }
    }
}

/// True when the cursor sits on a string literal: a quote, or a kind prefix
/// directly followed by a quote.
pub(crate) fn at_string_start(cursor: &Cursor<'_>) -> bool {
    match cursor.peek() {
        Some('"') | Some('\'') => true,
        Some('b') | Some('B') | Some('u') | Some('U') => {
            matches!(cursor.peek_second(), Some('"') | Some('\''))
        }
        _ => false,
    }
}

/// Parses one string literal at the cursor.
pub(crate) fn parse_string(cursor: &mut Cursor<'_>) -> Result<StringLit> {
    let bytes_kind = match cursor.peek() {
        Some('b') | Some('B') if matches!(cursor.peek_second(), Some('"') | Some('\'')) => {
            cursor.bump();
            true
        }
        Some('u') | Some('U') if matches!(cursor.peek_second(), Some('"') | Some('\'')) => {
            cursor.bump();
            false
        }
        _ => false,
    };

    let quote = match cursor.peek() {
        Some(q @ ('"' | '\'')) => q,
        _ => {
            return Err(Error::unexpected_byte(
                cursor.position(),
                "expected-string",
            ))
        }
    };
    let triple = starts_with_run(cursor, quote);
    cursor.bump();
    if triple {
        cursor.bump();
        cursor.bump();
    }

    let mut lit = if bytes_kind {
        StringLit::Bytes(Vec::new())
    } else {
        StringLit::Unicode(String::new())
    };

    loop {
        if triple {
            if starts_with_run(cursor, quote) {
                cursor.bump();
                cursor.bump();
                cursor.bump();
                break;
            }
        } else if cursor.peek() == Some(quote) {
            cursor.bump();
            break;
        }

        let at = cursor.position();
        let Some(c) = cursor.bump() else {
            return Err(Error::unexpected_eof(at, "unterminated-string"));
        };

        if c == '\\' {
            let escape_at = cursor.position();
            let Some(esc) = cursor.bump() else {
                return Err(Error::unexpected_eof(escape_at, "unterminated-escape"));
            };
            match esc {
                '\\' => lit.push_char('\\', escape_at)?,
                '/' => lit.push_char('/', escape_at)?,
                '"' => lit.push_char('"', escape_at)?,
                '\'' => lit.push_char('\'', escape_at)?,
                'b' => lit.push_char('\u{0008}', escape_at)?,
                'n' => lit.push_char('\n', escape_at)?,
                'f' => lit.push_char('\u{000C}', escape_at)?,
                'r' => lit.push_char('\r', escape_at)?,
                't' => lit.push_char('\t', escape_at)?,
                // Line continuation: the backslash swallows one newline.
                '\n' => {}
                '\r' => {
                    cursor.eat('\n');
                }
                'x' => {
                    let code = read_hex(cursor, 2)?;
                    lit.push_octet(code as u8);
                }
                'u' => {
                    if bytes_kind {
                        return Err(Error::bad_escape(escape_at, "unicode-escape-in-bytes"));
                    }
                    let code = read_hex(cursor, 4)?;
                    if (0xD800..=0xDFFF).contains(&code) {
                        return Err(Error::bad_escape(escape_at, "surrogate-escape"));
                    }
                    // Any other BMP code point is a valid scalar.
                    lit.push_char(char::from_u32(code).unwrap_or('\u{FFFD}'), escape_at)?;
                }
                'U' => {
                    if bytes_kind {
                        return Err(Error::bad_escape(escape_at, "unicode-escape-in-bytes"));
                    }
                    let code = read_hex(cursor, 8)?;
                    match char::from_u32(code) {
                        Some(scalar) => lit.push_char(scalar, escape_at)?,
                        None => return Err(Error::bad_escape(escape_at, "not-a-scalar-value")),
                    }
                }
                _ => return Err(Error::bad_escape(escape_at, "unknown-escape")),
            }
        } else if c < '\u{0020}' {
            let permitted = triple && matches!(c, '\t' | '\n' | '\r');
            if !permitted {
                return Err(Error::bad_control_char(at, "control-char-in-string"));
            }
            lit.push_char(c, at)?;
        } else {
            lit.push_char(c, at)?;
        }
    }

    Ok(lit)
}

fn starts_with_run(cursor: &Cursor<'_>, quote: char) -> bool {
    let rest = cursor.rest().as_bytes();
    rest.len() >= 3 && rest[..3] == [quote as u8; 3]
}

fn read_hex(cursor: &mut Cursor<'_>, count: u32) -> Result<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        let at = cursor.position();
        let Some(c) = cursor.bump() else {
            return Err(Error::unexpected_eof(at, "unterminated-escape"));
        };
        let Some(digit) = c.to_digit(16) else {
            return Err(Error::bad_escape(at, "short-hex-escape"));
        };
        value = value * 16 + digit;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn unicode(text: &str) -> Result<String> {
        let mut cursor = Cursor::new(text);
        match parse_string(&mut cursor)? {
            StringLit::Unicode(s) => {
                assert!(cursor.is_eof(), "unconsumed input in {text:?}");
                Ok(s)
            }
            StringLit::Bytes(_) => panic!("expected unicode string"),
        }
    }

    fn bytes(text: &str) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(text);
        match parse_string(&mut cursor)? {
            StringLit::Bytes(b) => Ok(b),
            StringLit::Unicode(_) => panic!("expected byte string"),
        }
    }

    #[test]
    fn plain_strings() {
        assert_eq!(unicode("\"hello\"").unwrap(), "hello");
        assert_eq!(unicode("'hello'").unwrap(), "hello");
        assert_eq!(unicode("u\"hi\"").unwrap(), "hi");
        assert_eq!(unicode("U'hi'").unwrap(), "hi");
        assert_eq!(unicode("\"\"").unwrap(), "");
        assert_eq!(unicode("\"déjà vu ✓\"").unwrap(), "déjà vu ✓");
    }

    #[test]
    fn escape_alphabet() {
        assert_eq!(
            unicode(r#""\\ \/ \" \' \b \n \f \r \t""#).unwrap(),
            "\\ / \" ' \u{8} \n \u{c} \r \t"
        );
        assert_eq!(unicode(r#""\x322\U00000032""#).unwrap(), "222");
        assert_eq!(unicode(r#""\xff""#).unwrap(), "\u{ff}");
    }

    #[test]
    fn mixed_quotes() {
        assert_eq!(unicode(r#"'test \" \''"#).unwrap(), "test \" '");
        assert_eq!(unicode(r#""it's""#).unwrap(), "it's");
    }

    #[test]
    fn line_continuation() {
        assert_eq!(unicode("\"a\\\nb\"").unwrap(), "ab");
        assert_eq!(unicode("\"a\\\r\nb\"").unwrap(), "ab");
        assert_eq!(unicode("\"a\\\rb\"").unwrap(), "ab");
    }

    #[test]
    fn triple_quoted_spans_lines() {
        assert_eq!(unicode("\"\"\"a\nb\tc\"\"\"").unwrap(), "a\nb\tc");
        assert_eq!(unicode("'''say \"hi\"'''").unwrap(), "say \"hi\"");
        assert_eq!(
            unicode("\"\"\"quote \" inside\"\"\"").unwrap(),
            "quote \" inside"
        );
    }

    #[test]
    fn bare_newline_only_in_triple() {
        let err = unicode("\"a\nb\"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadControlChar);
        let err = unicode("'a\u{0001}b'").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadControlChar);
        let err = unicode("\"\"\"a\u{0000}\"\"\"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadControlChar);
    }

    #[test]
    fn byte_strings() {
        assert_eq!(bytes("b\"abc\"").unwrap(), b"abc");
        assert_eq!(bytes("B'\\x00\\xff'").unwrap(), vec![0x00, 0xff]);
        assert_eq!(bytes("b\"\\n\\t\"").unwrap(), b"\n\t");
    }

    #[test]
    fn byte_strings_refuse_unicode() {
        let err = bytes(r#"b"\u0041""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadEscape);
        let err = bytes(r#"b"\U00000041""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadEscape);
        let err = bytes("b\"é\"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedByte);
    }

    #[test]
    fn surrogates_are_rejected_even_paired() {
        let err = unicode(r#""\uD800\uDD01""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadEscape);
        let err = unicode(r#""\uDFFF""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadEscape);
        let err = unicode(r#""\U0000D800""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadEscape);
    }

    #[test]
    fn bad_escapes() {
        assert_eq!(unicode(r#""\q""#).unwrap_err().kind(), ErrorKind::BadEscape);
        assert_eq!(
            unicode(r#""\x4g""#).unwrap_err().kind(),
            ErrorKind::BadEscape
        );
        assert_eq!(
            unicode(r#""\u00""#).unwrap_err().kind(),
            ErrorKind::BadEscape
        );
        assert_eq!(
            unicode(r#""\UFFFFFFFF""#).unwrap_err().kind(),
            ErrorKind::BadEscape
        );
    }

    #[test]
    fn unterminated_strings() {
        assert_eq!(
            unicode("\"abc").unwrap_err().kind(),
            ErrorKind::UnexpectedEof
        );
        assert_eq!(
            unicode("\"\"\"abc\"\"").unwrap_err().kind(),
            ErrorKind::UnexpectedEof
        );
        assert_eq!(
            unicode("\"abc\\").unwrap_err().kind(),
            ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn string_start_detection() {
        assert!(at_string_start(&Cursor::new("\"x\"")));
        assert!(at_string_start(&Cursor::new("'x'")));
        assert!(at_string_start(&Cursor::new("b\"x\"")));
        assert!(at_string_start(&Cursor::new("u'x'")));
        assert!(!at_string_start(&Cursor::new("bare")));
        assert!(!at_string_start(&Cursor::new("u64")));
    }
}
