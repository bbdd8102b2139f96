//! Source cursor over a UTF-8 document.
//!
//! [`Cursor`] is the single piece of mutable state the parser threads through
//! its combinators. It decodes code points on demand, tracks the byte offset
//! plus 1-based line and column for diagnostics, and supports O(1)
//! checkpoint/restore for the few places the grammar backtracks.
//!
//! The lexical primitives live here too: whitespace and `#`-comment skipping
//! and the ASCII identifier scanner.

use crate::error::Position;

/// A saved cursor state. Restoring is a plain field copy.
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint {
    byte: usize,
    line: usize,
    column: usize,
}

/// Code-point cursor with position tracking.
#[derive(Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    byte: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Cursor {
            input,
            byte: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current position for diagnostics.
    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            byte: self.byte,
            line: self.line,
            column: self.column,
        }
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.byte >= self.input.len()
    }

    /// The unconsumed remainder of the input.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.input[self.byte..]
    }

    /// Next code point without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Code point after the next one, without consuming anything.
    #[must_use]
    pub fn peek_second(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Consumes and returns the next code point.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.byte += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consumes the next code point if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            byte: self.byte,
            line: self.line,
            column: self.column,
        }
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.byte = checkpoint.byte;
        self.line = checkpoint.line;
        self.column = checkpoint.column;
    }

    /// Skips whitespace and comments.
    ///
    /// Whitespace is exactly space, `\t`, `\r`, `\n`. A `#` starts a comment
    /// that runs up to and including the next line break (or end of input);
    /// comments count as whitespace. No other code point is whitespace, so
    /// vertical tab, form feed, NBSP and friends all stop the skip.
    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\r' | '\n' => {
                    self.bump();
                }
                '#' => {
                    self.bump();
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                        if c == '\r' {
                            self.eat('\n');
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }

    /// Scans an identifier (`[A-Za-z_][A-Za-z0-9_]*`) and returns its text,
    /// or `None` without consuming anything if the next code point cannot
    /// start one.
    pub fn scan_identifier(&mut self) -> Option<&'a str> {
        let start = self.byte;
        match self.peek() {
            Some(c) if is_identifier_start(c) => {
                self.bump();
            }
            _ => return None,
        }
        while let Some(c) = self.peek() {
            if is_identifier_continue(c) {
                self.bump();
            } else {
                break;
            }
        }
        Some(&self.input[start..self.byte])
    }
}

/// Identifier-start class. Unicode letters are an open question in the
/// grammar drafts, so the cursor fails closed and accepts ASCII only.
#[must_use]
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Identifier-continue class.
#[must_use]
pub fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
