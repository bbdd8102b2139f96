//! Dynamic value representation for parsed RSON documents.
//!
//! This module provides the [`Value`] enum covering every RSON shape, the
//! equality relation used for record-key collision and set/dict membership,
//! the dict-key hash, and the constructors that enforce per-variant
//! invariants so an ill-formed value is unrepresentable after construction.
//!
//! ## Core types
//!
//! - [`Value`]: any RSON value (null, bool, int, float, string, bytes, list,
//!   record, set, dict, table, complex, datetime, duration, tagged)
//! - [`RsonMap`]: the insertion-ordered record payload (see [`crate::map`])
//!
//! ## Equality
//!
//! Equality is structural with three deliberate wrinkles:
//!
//! - numbers compare across variants: `Value::Int(1) == Value::Float(1.0)`;
//! - a dict equals a record with the same key/value shape, order ignored;
//! - every NaN is unequal to everything, itself included, and poisons any
//!   container holding one. `Eq` is therefore not implemented.
//!
//! ```rust
//! use rson::Value;
//!
//! assert_eq!(Value::Int(1), Value::Float(1.0));
//! assert_eq!(Value::Float(0.0), Value::Float(-0.0));
//! assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
//! ```
//!
//! ## Lifecycle
//!
//! Values are built bottom-up during parsing and immutable afterwards. The
//! tree owns its children exclusively; there is no sharing and no cycles, so
//! parsed trees move freely across threads.

use crate::error::{Error, Position, Result};
use crate::map::RsonMap;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::discriminant;

/// A dynamically-typed RSON value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    /// Insertion-ordered association with unique string keys (a JSON object).
    Record(RsonMap),
    /// Unordered collection of unique values. Only expressible as `{…}` with
    /// a non-string first element or via `@set […]`.
    Set(Vec<Value>),
    /// Unordered association with unique, comparable, same-variant keys,
    /// stored sorted ascending. Only expressible via `@dict {…}`.
    Dict(Vec<(Value, Value)>),
    /// Insertion-ordered key/value sequence that may repeat keys.
    Table(Vec<(Value, Value)>),
    Complex {
        re: f64,
        im: f64,
    },
    DateTime(DateTime<Utc>),
    /// A span of time in seconds.
    Duration(f64),
    /// A non-reserved user tag left unresolved after validation.
    Tagged(String, Box<Value>),
}

fn int_float_eq(i: i64, f: f64) -> bool {
    // Exact both ways: the float is integral, inside i64 range, and converts
    // back to the same integer. 2^63 itself rounds out of range.
    f.fract() == 0.0 && f >= -9_223_372_036_854_775_808.0 && f < 9_223_372_036_854_775_808.0 && f as i64 == i
}

fn exact_int(f: f64) -> Option<i64> {
    if f.fract() == 0.0 && f >= -9_223_372_036_854_775_808.0 && f < 9_223_372_036_854_775_808.0 {
        Some(f as i64)
    } else {
        None
    }
}

fn set_eq(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().all(|x| b.iter().any(|y| x == y))
}

fn pairs_unordered_eq(a: &[(Value, Value)], b: &[(Value, Value)]) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(k, v)| b.iter().any(|(k2, v2)| k == k2 && v == v2))
}

fn dict_record_eq(dict: &[(Value, Value)], record: &RsonMap) -> bool {
    dict.len() == record.len()
        && dict.iter().all(|(k, v)| match k {
            Value::String(s) => record.get(s).is_some_and(|w| v == w),
            _ => false,
        })
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            // IEEE semantics give -0.0 == +0.0 and NaN != NaN for free.
            (Float(a), Float(b)) => a == b,
            (Int(a), Float(b)) | (Float(b), Int(a)) => int_float_eq(*a, *b),
            (String(a), String(b)) => a == b,
            (Bytes(a), Bytes(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Record(a), Record(b)) => a == b,
            (Set(a), Set(b)) => set_eq(a, b),
            (Dict(a), Dict(b)) => pairs_unordered_eq(a, b),
            (Dict(d), Record(r)) | (Record(r), Dict(d)) => dict_record_eq(d, r),
            (Table(a), Table(b)) => a == b,
            (Complex { re: a, im: b }, Complex { re: c, im: d }) => a == c && b == d,
            (DateTime(a), DateTime(b)) => a == b,
            (Duration(a), Duration(b)) => a == b,
            (Tagged(n, v), Tagged(m, w)) => n == m && v == w,
            _ => false,
        }
    }
}

fn hash_one(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn hash_string_key<H: Hasher>(key: &str, state: &mut H) {
    // Same prefix a `Value::String` writes, so record keys and dict keys
    // land on the same hash.
    state.write_u8(4);
    key.hash(state);
}

fn hash_pair(key_hash: impl FnOnce(&mut DefaultHasher), value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    key_hash(&mut hasher);
    value.hash(&mut hasher);
    hasher.finish()
}

/// Hash consistent with the equality relation: an integral float hashes like
/// the matching int, `-0.0` like `0`, and unordered containers hash
/// order-independently. NaN hashes arbitrarily; nothing equals it anyway.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use Value::*;
        match self {
            Null => state.write_u8(0),
            Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            }
            Int(i) => {
                state.write_u8(2);
                i.hash(state);
            }
            Float(f) => {
                if let Some(i) = exact_int(*f) {
                    state.write_u8(2);
                    i.hash(state);
                } else {
                    state.write_u8(3);
                    f.to_bits().hash(state);
                }
            }
            String(s) => hash_string_key(s, state),
            Bytes(b) => {
                state.write_u8(5);
                b.hash(state);
            }
            List(items) => {
                state.write_u8(6);
                state.write_usize(items.len());
                for item in items {
                    item.hash(state);
                }
            }
            // Records and dicts share a prefix so `Dict == Record` pairs
            // hash together; both accumulate order-independently.
            Record(map) => {
                state.write_u8(7);
                state.write_usize(map.len());
                let mut acc = 0u64;
                for (k, v) in map.iter() {
                    acc = acc.wrapping_add(hash_pair(|h| hash_string_key(k, h), v));
                }
                state.write_u64(acc);
            }
            Dict(pairs) => {
                state.write_u8(7);
                state.write_usize(pairs.len());
                let mut acc = 0u64;
                for (k, v) in pairs {
                    acc = acc.wrapping_add(hash_pair(|h| k.hash(h), v));
                }
                state.write_u64(acc);
            }
            Set(items) => {
                state.write_u8(8);
                state.write_usize(items.len());
                let mut acc = 0u64;
                for item in items {
                    acc = acc.wrapping_add(hash_one(item));
                }
                state.write_u64(acc);
            }
            Table(pairs) => {
                state.write_u8(9);
                state.write_usize(pairs.len());
                for (k, v) in pairs {
                    k.hash(state);
                    v.hash(state);
                }
            }
            Complex { re, im } => {
                state.write_u8(10);
                re.to_bits().hash(state);
                im.to_bits().hash(state);
            }
            DateTime(dt) => {
                state.write_u8(11);
                dt.hash(state);
            }
            Duration(secs) => {
                state.write_u8(12);
                secs.to_bits().hash(state);
            }
            Tagged(name, value) => {
                state.write_u8(13);
                name.hash(state);
                value.hash(state);
            }
        }
    }
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if the value is a float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` if the value is an integer or a float.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Returns `true` if the value is a unicode string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a byte string.
    #[inline]
    #[must_use]
    pub const fn is_bytes(&self) -> bool {
        matches!(self, Value::Bytes(_))
    }

    /// Returns `true` if the value is a list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns `true` if the value is a record.
    #[inline]
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Returns `true` if the value is a set.
    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Value::Set(_))
    }

    /// Returns `true` if the value is a dict.
    #[inline]
    #[must_use]
    pub const fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }

    /// Returns `true` if the value is a table.
    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Value::Table(_))
    }

    /// Returns `true` if the value carries an unresolved user tag.
    #[inline]
    #[must_use]
    pub const fn is_tagged(&self) -> bool {
        matches!(self, Value::Tagged(..))
    }

    /// If the value is a boolean, returns it.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer, or a float with an exactly-representable
    /// integral value, returns it as `i64`.
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) => exact_int(*f),
            _ => None,
        }
    }

    /// If the value is numeric, returns it as `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a unicode string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a byte string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// If the value is a list, returns a reference to its items.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a record, returns a reference to its map.
    #[inline]
    #[must_use]
    pub fn as_record(&self) -> Option<&RsonMap> {
        match self {
            Value::Record(map) => Some(map),
            _ => None,
        }
    }

    /// If the value is a set, returns a reference to its elements.
    #[inline]
    #[must_use]
    pub fn as_set(&self) -> Option<&[Value]> {
        match self {
            Value::Set(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a dict, returns its pairs in sorted key order.
    #[inline]
    #[must_use]
    pub fn as_dict(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Dict(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// If the value is a table, returns its pairs in source order.
    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Table(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// If the value is a datetime, returns it.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// If the value carries a user tag, returns the tag name and payload.
    #[inline]
    #[must_use]
    pub fn as_tagged(&self) -> Option<(&str, &Value)> {
        match self {
            Value::Tagged(name, value) => Some((name, value)),
            _ => None,
        }
    }

    /// Builds a tagged value, rejecting a tag on an already-tagged payload.
    ///
    /// # Errors
    ///
    /// `TagNest` when `value` is itself tagged.
    pub fn tagged(name: impl Into<std::string::String>, value: Value) -> Result<Value> {
        if value.is_tagged() {
            return Err(Error::tag_nest(Position::default(), "tag-on-tagged-value"));
        }
        Ok(Value::Tagged(name.into(), Box::new(value)))
    }

    /// Builds a set, rejecting duplicate elements under the value equality
    /// relation.
    ///
    /// # Errors
    ///
    /// `DuplicateKey` on the first repeated element.
    pub fn set_of(items: Vec<Value>) -> Result<Value> {
        let mut unique: Vec<Value> = Vec::with_capacity(items.len());
        for item in items {
            if unique.iter().any(|existing| *existing == item) {
                return Err(Error::duplicate_key(
                    Position::default(),
                    "duplicate-set-element",
                ));
            }
            unique.push(item);
        }
        Ok(Value::Set(unique))
    }

    /// Builds a dict from key/value pairs. Keys must be unique, comparable,
    /// and share one concrete variant; the pairs are stored sorted by key so
    /// re-emission is stable.
    ///
    /// # Errors
    ///
    /// `DictKeyType` for a non-comparable key (including NaN) or a mixed-type
    /// key set, `DuplicateKey` for a repeated key.
    pub fn dict_of(pairs: Vec<(Value, Value)>) -> Result<Value> {
        let mut checked: Vec<(Value, Value)> = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            if !key.is_dict_key() {
                return Err(Error::dict_key_type(
                    Position::default(),
                    "key-not-comparable",
                ));
            }
            if let Some((first, _)) = checked.first() {
                if discriminant(first) != discriminant(&key) {
                    return Err(Error::dict_key_type(
                        Position::default(),
                        "mixed-key-types",
                    ));
                }
            }
            if checked.iter().any(|(existing, _)| *existing == key) {
                return Err(Error::duplicate_key(
                    Position::default(),
                    "duplicate-dict-key",
                ));
            }
            checked.push((key, value));
        }
        // Keys passed the comparability check, so the order is total.
        checked.sort_by(|(a, _), (b, _)| {
            Value::compare_keys(a, b).unwrap_or(Ordering::Equal)
        });
        Ok(Value::Dict(checked))
    }

    fn is_dict_key(&self) -> bool {
        match self {
            Value::Bool(_)
            | Value::Int(_)
            | Value::String(_)
            | Value::Bytes(_)
            | Value::DateTime(_) => true,
            Value::Float(f) => !f.is_nan(),
            _ => false,
        }
    }

    /// Total order over comparable keys of the same concrete variant, with
    /// numeric cross-variant comparison thrown in. Returns `None` for pairs
    /// the dict model cannot order (mixed variants, NaN, containers).
    #[must_use]
    pub fn compare_keys(a: &Value, b: &Value) -> Option<Ordering> {
        use Value::*;
        match (a, b) {
            (Bool(x), Bool(y)) => Some(x.cmp(y)),
            (Int(x), Int(y)) => Some(x.cmp(y)),
            (Float(x), Float(y)) => x.partial_cmp(y),
            (Int(x), Float(y)) => (*x as f64).partial_cmp(y),
            (Float(x), Int(y)) => x.partial_cmp(&(*y as f64)),
            (String(x), String(y)) => Some(x.cmp(y)),
            (Bytes(x), Bytes(y)) => Some(x.cmp(y)),
            (DateTime(x), DateTime(y)) => Some(x.cmp(y)),
            _ => None,
        }
    }

    /// Reapplies built-in tag semantics to every tagged node in the tree,
    /// bottom-up, using the default parse options.
    ///
    /// Parsed trees already arrive canonical; this is for trees assembled
    /// programmatically (for example via [`crate::rson!`]) that carry
    /// `Tagged` nodes whose names have built-in meaning. Errors raised here
    /// carry the default position.
    ///
    /// # Errors
    ///
    /// The same tag-validation errors the parser raises: `TagShape`,
    /// `TagNest`, `DuplicateKey`, `DictKeyType`.
    pub fn canonical(self) -> Result<Value> {
        match self {
            Value::List(items) => Ok(Value::List(
                items
                    .into_iter()
                    .map(Value::canonical)
                    .collect::<Result<_>>()?,
            )),
            Value::Record(map) => {
                let mut out = RsonMap::with_capacity(map.len());
                for (k, v) in map {
                    out.insert(k, v.canonical()?);
                }
                Ok(Value::Record(out))
            }
            Value::Set(items) => {
                let items = items
                    .into_iter()
                    .map(Value::canonical)
                    .collect::<Result<_>>()?;
                Value::set_of(items)
            }
            Value::Dict(pairs) => {
                let pairs = pairs
                    .into_iter()
                    .map(|(k, v)| Ok((k.canonical()?, v.canonical()?)))
                    .collect::<Result<_>>()?;
                Value::dict_of(pairs)
            }
            Value::Table(pairs) => Ok(Value::Table(
                pairs
                    .into_iter()
                    .map(|(k, v)| Ok((k.canonical()?, v.canonical()?)))
                    .collect::<Result<_>>()?,
            )),
            Value::Tagged(name, value) => {
                let inner = value.canonical()?;
                crate::tag::apply(
                    &name,
                    inner,
                    Position::default(),
                    &crate::options::ParseOptions::default(),
                )
            }
            scalar => Ok(scalar),
        }
    }
}

impl fmt::Display for Value {
    /// Diagnostic rendering, close to source notation. Not an emitter:
    /// strings use Rust escaping and nothing guarantees re-parseability.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Bytes(b) => {
                f.write_str("b\"")?;
                for byte in b {
                    write!(f, "\\x{byte:02x}")?;
                }
                f.write_str("\"")
            }
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Record(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k:?}: {v}")?;
                }
                f.write_str("}")
            }
            Value::Set(items) => {
                f.write_str("@set [")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Dict(pairs) => {
                f.write_str("@dict {")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Value::Table(pairs) => {
                f.write_str("[")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("]")
            }
            Value::Complex { re, im } => write!(f, "@complex [{re:?}, {im:?}]"),
            Value::DateTime(dt) => write!(f, "@datetime \"{}\"", dt.to_rfc3339()),
            Value::Duration(secs) => write!(f, "@duration {secs:?}"),
            Value::Tagged(name, value) => write!(f, "@{name} {value}"),
        }
    }
}

struct RecordPairs<'a>(&'a RsonMap);

impl Serialize for RecordPairs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for (k, v) in self.0.iter() {
            seq.serialize_element(&(k, v))?;
        }
        seq.end()
    }
}

struct ValuePairs<'a>(&'a [(Value, Value)]);

impl Serialize for ValuePairs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for (k, v) in self.0 {
            seq.serialize_element(&(k, v))?;
        }
        seq.end()
    }
}

fn single_entry<S: Serializer, V: Serialize + ?Sized>(
    serializer: S,
    key: &str,
    value: &V,
) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(key, value)?;
    map.end()
}

/// The decorated-JSON projection: scalars map to JSON scalars, lists to
/// arrays, and every decorated variant to a single-key object such as
/// `{"record": [[k, v], …]}` or `{"base64": "…"}`. The projection is not
/// bijective and this crate never parses it back.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Bytes(b) => single_entry(serializer, "base64", &BASE64.encode(b)),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Record(map) => single_entry(serializer, "record", &RecordPairs(map)),
            Value::Set(items) => single_entry(serializer, "set", items),
            Value::Dict(pairs) => single_entry(serializer, "dict", &ValuePairs(pairs)),
            Value::Table(pairs) => single_entry(serializer, "table", &ValuePairs(pairs)),
            Value::Complex { re, im } => single_entry(serializer, "complex", &[*re, *im]),
            Value::DateTime(dt) => single_entry(serializer, "datetime", &dt.to_rfc3339()),
            Value::Duration(secs) => single_entry(serializer, "duration", secs),
            Value::Tagged(name, value) => single_entry(serializer, name, value.as_ref()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<RsonMap> for Value {
    fn from(value: RsonMap) -> Self {
        Value::Record(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::DateTime(value)
    }
}
