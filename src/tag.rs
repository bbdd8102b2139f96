//! Tag decoration: `@name value`.
//!
//! A tag name is one or more identifiers joined by single interior dots.
//! Built-in names either check a shape and hand the value back (pass-through)
//! or produce a value of a different variant (transform). The remaining
//! reserved names are never applicable and always fail; everything else is a
//! user tag, preserved as [`Value::Tagged`] or rejected per
//! [`ParseOptions::unknown_tags`].

use crate::cursor::Cursor;
use crate::error::{Error, Position, Result};
use crate::number::parse_float_literal;
use crate::options::{ParseOptions, UnknownTags};
use crate::value::Value;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};

/// Reserved type names with no applicable shape at all. `@table 1`,
/// `@integer 2` and friends fail no matter the value.
const NEVER_APPLICABLE: &[&str] = &["unknown", "integer", "double", "date", "time", "table"];

/// Scans a tag name after the `@`: `ident ("." ident)*`. Leading, trailing,
/// and doubled dots all fail because each dot must be followed by another
/// identifier.
pub(crate) fn parse_tag_name(cursor: &mut Cursor<'_>) -> Result<String> {
    let mut name = String::new();
    loop {
        match cursor.scan_identifier() {
            Some(ident) => name.push_str(ident),
            None => {
                return Err(Error::unexpected_byte(
                    cursor.position(),
                    "expected-tag-name",
                ))
            }
        }
        if cursor.eat('.') {
            name.push('.');
        } else {
            break;
        }
    }
    Ok(name)
}

/// Applies tag semantics to an already-parsed value.
pub(crate) fn apply(
    name: &str,
    value: Value,
    at: Position,
    options: &ParseOptions,
) -> Result<Value> {
    match name {
        "object" => Ok(value),
        "bool" => pass_through(value, at, |v| v.is_bool()),
        "int" => pass_through(value, at, |v| v.is_int()),
        "string" => pass_through(value, at, |v| v.is_string()),
        "list" => pass_through(value, at, |v| v.is_list()),
        "record" => pass_through(value, at, |v| v.is_record()),
        "float" => match value {
            Value::Int(_) | Value::Float(_) => Ok(value),
            Value::String(text) => parse_float_literal(&text)
                .map(Value::Float)
                .ok_or_else(|| Error::tag_shape(at, "bad-float-literal")),
            _ => Err(Error::tag_shape(at, "wrong-shape")),
        },
        "duration" => match value {
            Value::Int(seconds) => Ok(Value::Duration(seconds as f64)),
            Value::Float(seconds) => Ok(Value::Duration(seconds)),
            _ => Err(Error::tag_shape(at, "wrong-shape")),
        },
        "datetime" => match value {
            Value::String(text) => DateTime::parse_from_rfc3339(&text)
                .map(|dt| Value::DateTime(dt.with_timezone(&Utc)))
                .map_err(|_| Error::tag_shape(at, "bad-datetime")),
            _ => Err(Error::tag_shape(at, "wrong-shape")),
        },
        "base64" => match value {
            Value::String(text) => BASE64
                .decode(text.as_bytes())
                .map(Value::Bytes)
                .map_err(|_| Error::tag_shape(at, "bad-base64")),
            _ => Err(Error::tag_shape(at, "wrong-shape")),
        },
        "bytestring" => match value {
            Value::String(text) => {
                let mut bytes = Vec::with_capacity(text.len());
                for c in text.chars() {
                    let code = u32::from(c);
                    if code > 0xFF {
                        return Err(Error::tag_shape(at, "bytestring-range"));
                    }
                    bytes.push(code as u8);
                }
                Ok(Value::Bytes(bytes))
            }
            _ => Err(Error::tag_shape(at, "wrong-shape")),
        },
        "set" => match value {
            Value::List(items) => Value::set_of(items).map_err(|e| e.at(at)),
            _ => Err(Error::tag_shape(at, "wrong-shape")),
        },
        "complex" => match value {
            Value::List(items) if items.len() == 2 => {
                let mut parts = items.iter().filter_map(Value::as_f64);
                match (parts.next(), parts.next()) {
                    (Some(re), Some(im)) => Ok(Value::Complex { re, im }),
                    _ => Err(Error::tag_shape(at, "complex-parts-not-numeric")),
                }
            }
            _ => Err(Error::tag_shape(at, "wrong-shape")),
        },
        "dict" => match value {
            Value::Record(map) => {
                let pairs = map
                    .into_iter()
                    .map(|(k, v)| (Value::String(k), v))
                    .collect();
                Value::dict_of(pairs).map_err(|e| e.at(at))
            }
            _ => Err(Error::tag_shape(at, "wrong-shape")),
        },
        _ if NEVER_APPLICABLE.contains(&name) => Err(Error::tag_shape(at, "reserved-tag")),
        _ => match options.unknown_tags {
            UnknownTags::Keep => Value::tagged(name, value).map_err(|e| e.at(at)),
            UnknownTags::Error => Err(Error::tag_shape(at, "unknown-tag")),
        },
    }
}

fn pass_through(value: Value, at: Position, accepts: impl Fn(&Value) -> bool) -> Result<Value> {
    if accepts(&value) {
        Ok(value)
    } else {
        Err(Error::tag_shape(at, "wrong-shape"))
    }
}
