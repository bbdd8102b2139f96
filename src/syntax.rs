//! RSON notation reference.
//!
//! This module carries no code; it documents the notation this crate parses.
//!
//! # Overview
//!
//! RSON (Restructured Object Notation) is a superset of JSON intended to be
//! read strictly and never written by JavaScript. Every JSON document is an
//! RSON document; on top of that RSON adds comments, trailing commas, richer
//! number literals, richer strings, three extra container shapes, and tags.
//!
//! # Whitespace and comments
//!
//! Whitespace is exactly space, tab, carriage return, and newline. A `#`
//! starts a comment that runs to the end of the line; comments are
//! whitespace. A U+FEFF byte-order mark is consumed at the very start of the
//! document and is an error anywhere else.
//!
//! ```text
//! # a config fragment
//! {
//!     "retries": 3,   # give up after this many
//!     "backoff": 1.5,
//! }
//! ```
//!
//! # Numbers
//!
//! An optional sign, then one of four radices:
//!
//! | Prefix | Radix | Example |
//! |--------|-------|---------|
//! | `0b` | 2 | `0b1010_0101` |
//! | `0o`, `0c` | 8 | `0o755` |
//! | `0x` | 16 | `0xDEAD_BEEF`, `0x1.8p3` |
//! | none | 10 | `42`, `-0.0`, `6.02e23` |
//!
//! Underscores may separate digits (never lead, trail, or touch a point or
//! exponent marker). Decimal floats use `.` and `e`; hex floats require a
//! `p` binary exponent. `NaN` and the infinities are not literals; spell
//! them `@float "NaN"`, `@float "+Infinity"`, `@float "-Infinity"`.
//!
//! # Strings
//!
//! Unicode strings (optionally prefixed `u`) and byte strings (prefixed
//! `b`), each delimited by `"`, `'`, `"""`, or `'''`. Triple-quoted strings
//! span lines. Escapes: `\\ \/ \" \' \b \n \f \r \t`, `\xNN`, and (unicode
//! only) `\uNNNN` / `\UNNNNNNNN`; a backslash before a newline continues the
//! line. Surrogate escapes are always rejected, paired or not. Byte strings
//! stay ASCII except through `\x`.
//!
//! Inside parentheses, two or more adjacent string literals of the same
//! kind concatenate: `( "aaa" "bbb" )` is `"aaabbb"`. A single parenthesised
//! value is just grouping.
//!
//! # Containers
//!
//! | Shape | Syntax | Notes |
//! |-------|--------|-------|
//! | List | `[1, 2, 3]` | ordered |
//! | Record | `{"a": 1}` | ordered, unique string keys |
//! | Set | `{1, 2, 3}` or `@set [1, 2, 3]` | unordered, unique |
//! | Table | `["a": 1, "a": 2]` | ordered pairs, repeats allowed |
//! | Dict | `@dict {"a": 1}` | unordered, sorted unique keys |
//!
//! `{}` is the empty record; the empty set and dict are only expressible
//! through their tags. Trailing commas are fine everywhere a comma is; a
//! comma before the first element (`[,]`) is not.
//!
//! # Tags
//!
//! `@name value`, with mandatory whitespace between name and value. Tag
//! names are dotted identifiers (`@geo.point`). Tags never stack:
//! `@a @b 1` is an error.
//!
//! Built-in pass-through tags check a shape and return the value unchanged:
//! `@object` (anything), `@bool`, `@int`, `@float` (int or float),
//! `@string`, `@list`, `@record`. Built-in transform tags produce a new
//! variant:
//!
//! | Tag | Input | Output |
//! |-----|-------|--------|
//! | `@float "…"` | C99 hex-float, `NaN`, `±Infinity` | float |
//! | `@duration n` | int or float seconds | duration |
//! | `@datetime "…"` | RFC 3339 timestamp | datetime (UTC) |
//! | `@base64 "…"` | base64 text | bytes |
//! | `@bytestring "…"` | text ≤ U+00FF per char | bytes |
//! | `@set […]` | list, no duplicates | set |
//! | `@complex [re, im]` | two numbers | complex |
//! | `@dict {…}` | record | dict |
//!
//! The names `unknown`, `integer`, `double`, `date`, `time`, and `table`
//! are reserved and never applicable. Any other name is a user tag: kept as
//! a tagged value by default, or rejected under
//! [`UnknownTags::Error`](crate::UnknownTags::Error).
//!
//! # Keywords
//!
//! `true`, `false`, `null`. No other bare word is a value.
