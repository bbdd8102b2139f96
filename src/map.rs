//! Ordered map type for RSON records.
//!
//! [`RsonMap`] wraps [`IndexMap`] so records keep their insertion order. The
//! grammar retains the order keys appeared in the source, while record
//! equality deliberately ignores it. `IndexMap`'s equality already compares
//! by key lookup, which is exactly the relation the value model needs.
//!
//! ## Examples
//!
//! ```rust
//! use rson::{RsonMap, Value};
//!
//! let mut map = RsonMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["name", "age"]);
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to RSON values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RsonMap(IndexMap<String, crate::Value>);

impl RsonMap {
    /// Creates an empty `RsonMap`.
    #[must_use]
    pub fn new() -> Self {
        RsonMap(IndexMap::new())
    }

    /// Creates an empty `RsonMap` with the given capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        RsonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for the key if
    /// one existed. The parser treats a `Some` return as a duplicate key.
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::Value>> for RsonMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        RsonMap(map.into_iter().collect())
    }
}

impl From<RsonMap> for HashMap<String, crate::Value> {
    fn from(map: RsonMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for RsonMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RsonMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for RsonMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        RsonMap(IndexMap::from_iter(iter))
    }
}
