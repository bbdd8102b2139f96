//! Number literals.
//!
//! Numbers open with an optional sign, then pick a radix by prefix: `0b`
//! binary, `0o` or `0c` octal, `0x` hex, none decimal. Digits may be broken
//! up with `_`, but every underscore must sit between two digits of the
//! radix, which rules out leading, trailing, and `.`/exponent-adjacent
//! underscores in one stroke. Decimal literals take `.frac` and an `e`
//! exponent; hex literals take `.frac` only together with a mandatory `p`
//! binary exponent (decimal digits). A literal is captured lexically first
//! and converted once at the end, so digit-set violations and `_`-stripping
//! stay separate from range checks.
//!
//! `NaN` and the infinities are not literals; they only enter through
//! `@float "…"`, which shares [`parse_float_literal`] with this module.

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::value::Value;

/// Parses a number literal at the cursor. The caller has already seen a
/// sign or digit.
pub(crate) fn parse_number(cursor: &mut Cursor<'_>) -> Result<Value> {
    let negative = if cursor.eat('-') {
        true
    } else {
        cursor.eat('+');
        false
    };

    let radix = scan_radix_prefix(cursor);
    let mut digits = String::new();
    scan_digits(cursor, radix, &mut digits)?;

    let value = match radix {
        10 => finish_decimal(cursor, digits, negative)?,
        16 => finish_hex(cursor, digits, negative)?,
        _ => integer_value(&digits, radix, negative, cursor)?,
    };

    // A number token must not run into letters, digits, or stray points:
    // `0b0123`, `1.2.3`, `10foo` all die here.
    if let Some(c) = cursor.peek() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            return Err(Error::bad_number(cursor.position(), "invalid-digit"));
        }
    }

    Ok(value)
}

fn scan_radix_prefix(cursor: &mut Cursor<'_>) -> u32 {
    if cursor.peek() == Some('0') {
        let radix = match cursor.peek_second() {
            Some('b') => 2,
            Some('o') | Some('c') => 8,
            Some('x') => 16,
            _ => return 10,
        };
        cursor.bump();
        cursor.bump();
        radix
    } else {
        10
    }
}

/// Scans a digit run of the given radix into `out`, stripping underscores.
/// Every `_` must be flanked by digits; the run must be non-empty.
fn scan_digits(cursor: &mut Cursor<'_>, radix: u32, out: &mut String) -> Result<()> {
    loop {
        match cursor.peek() {
            Some(c) if c.is_digit(radix) => {
                out.push(c);
                cursor.bump();
            }
            Some('_') => {
                let flanked = !out.is_empty()
                    && out.ends_with(|c: char| c.is_digit(radix))
                    && cursor.peek_second().is_some_and(|c| c.is_digit(radix));
                if !flanked {
                    return Err(Error::bad_number(cursor.position(), "misplaced-underscore"));
                }
                cursor.bump();
            }
            _ => break,
        }
    }
    if out.is_empty() {
        return Err(Error::bad_number(cursor.position(), "missing-digits"));
    }
    Ok(())
}

fn integer_value(
    digits: &str,
    radix: u32,
    negative: bool,
    cursor: &Cursor<'_>,
) -> Result<Value> {
    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    i64::from_str_radix(&signed, radix)
        .map(Value::Int)
        .map_err(|_| Error::bad_number(cursor.position(), "int-overflow"))
}

fn finish_decimal(cursor: &mut Cursor<'_>, int_digits: String, negative: bool) -> Result<Value> {
    let mut is_float = false;
    let mut text = int_digits.clone();

    if cursor.peek() == Some('.') && cursor.peek_second().is_some_and(|c| c.is_ascii_digit()) {
        cursor.bump();
        is_float = true;
        text.push('.');
        scan_digits(cursor, 10, &mut text)?;
    } else if cursor.peek() == Some('.') {
        return Err(Error::bad_number(cursor.position(), "missing-fraction"));
    }

    if matches!(cursor.peek(), Some('e') | Some('E')) {
        cursor.bump();
        is_float = true;
        text.push('e');
        if cursor.eat('-') {
            text.push('-');
        } else {
            cursor.eat('+');
        }
        let mut exp_digits = String::new();
        scan_digits(cursor, 10, &mut exp_digits)?;
        text.push_str(&exp_digits);
    }

    if !is_float {
        return integer_value(&int_digits, 10, negative, cursor);
    }

    let signed = if negative { format!("-{text}") } else { text };
    signed
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| Error::bad_number(cursor.position(), "malformed-float"))
}

fn finish_hex(cursor: &mut Cursor<'_>, int_digits: String, negative: bool) -> Result<Value> {
    let mut frac_digits = String::new();
    let has_fraction =
        cursor.peek() == Some('.') && cursor.peek_second().is_some_and(|c| c.is_ascii_hexdigit());
    if has_fraction {
        cursor.bump();
        scan_digits(cursor, 16, &mut frac_digits)?;
    }

    if matches!(cursor.peek(), Some('p') | Some('P')) {
        cursor.bump();
        let exp_negative = if cursor.eat('-') {
            true
        } else {
            cursor.eat('+');
            false
        };
        let mut exp_digits = String::new();
        scan_digits(cursor, 10, &mut exp_digits)?;
        let exp: i32 = exp_digits
            .parse::<i32>()
            .map(|e| if exp_negative { -e } else { e })
            .map_err(|_| Error::bad_number(cursor.position(), "exponent-overflow"))?;
        return Ok(Value::Float(hex_float_value(
            &int_digits,
            &frac_digits,
            exp,
            negative,
        )));
    }

    if has_fraction {
        // A hex fraction is only a float with its binary exponent.
        return Err(Error::bad_number(cursor.position(), "missing-binary-exponent"));
    }
    integer_value(&int_digits, 16, negative, cursor)
}

/// Assembles a hex-float from its parts: `0x<int>.<frac>p<exp>`.
fn hex_float_value(int_digits: &str, frac_digits: &str, exp: i32, negative: bool) -> f64 {
    let mut value = 0.0f64;
    for c in int_digits.chars() {
        value = value * 16.0 + f64::from(c.to_digit(16).unwrap_or(0));
    }
    let mut scale = 1.0 / 16.0;
    for c in frac_digits.chars() {
        value += f64::from(c.to_digit(16).unwrap_or(0)) * scale;
        scale /= 16.0;
    }
    let magnitude = value * 2f64.powi(exp);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Parses the string payload of `@float`: a C99 hex-float (`0x1.8p3`), or
/// `NaN` / `Infinity` with optional sign, case-insensitive. Underscores are
/// not permitted here. Returns `None` when the text matches neither form.
pub(crate) fn parse_float_literal(text: &str) -> Option<f64> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if body.eq_ignore_ascii_case("nan") {
        return Some(f64::NAN);
    }
    if body.eq_ignore_ascii_case("infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let rest = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))?;

    let mut chars = rest.char_indices().peekable();
    let mut int_digits = String::new();
    let mut frac_digits = String::new();

    while let Some((_, c)) = chars.peek().copied() {
        if c.is_ascii_hexdigit() {
            int_digits.push(c);
            chars.next();
        } else {
            break;
        }
    }
    if let Some((_, '.')) = chars.peek().copied() {
        chars.next();
        while let Some((_, c)) = chars.peek().copied() {
            if c.is_ascii_hexdigit() {
                frac_digits.push(c);
                chars.next();
            } else {
                break;
            }
        }
    }
    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    match chars.next() {
        Some((_, 'p')) | Some((_, 'P')) => {}
        _ => return None,
    }
    let exp_text: String = chars.map(|(_, c)| c).collect();
    let (exp_negative, exp_body) = match exp_text.as_bytes().first() {
        Some(b'-') => (true, &exp_text[1..]),
        Some(b'+') => (false, &exp_text[1..]),
        _ => (false, exp_text.as_str()),
    };
    if exp_body.is_empty() || !exp_body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let exp: i32 = exp_body.parse().ok()?;
    let exp = if exp_negative { -exp } else { exp };

    Some(hex_float_value(&int_digits, &frac_digits, exp, negative))
}
