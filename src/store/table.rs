//! Store implementation
//!
//! BTreeMap-based key table. Owns every name and value; performs no I/O.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::error::{BsmError, Result};

use super::Value;

static NULL: Value = Value::Null;

/// An in-memory set of named, typed values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    entries: BTreeMap<String, Value>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    // =========================================================================
    // Setters
    // =========================================================================

    pub fn set_int(&mut self, name: impl Into<String>, value: i32) {
        self.insert(name.into(), Value::Int(value));
    }

    pub fn set_float(&mut self, name: impl Into<String>, value: f32) {
        self.insert(name.into(), Value::Float(value));
    }

    pub fn set_string(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.insert(name.into(), Value::String(value.into()));
    }

    pub fn set_raw(&mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.insert(name.into(), Value::Raw(value.into()));
    }

    fn insert(&mut self, name: String, value: Value) {
        debug_assert!(!value.is_null());
        self.entries.insert(name, value);
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the value stored under `name`, or `Value::Null` if absent
    pub fn get(&self, name: &str) -> &Value {
        self.entries.get(name).unwrap_or(&NULL)
    }

    /// Get the value stored under `name`, failing with `KeyNotFound` if absent
    pub fn try_get(&self, name: &str) -> Result<&Value> {
        self.entries
            .get(name)
            .ok_or_else(|| BsmError::KeyNotFound(name.to_string()))
    }

    /// Int payload, or 0 when missing or of another kind
    pub fn get_int(&self, name: &str) -> i32 {
        self.get(name).as_int().unwrap_or(0)
    }

    /// Float payload, or 0.0 when missing or of another kind
    pub fn get_float(&self, name: &str) -> f32 {
        self.get(name).as_float().unwrap_or(0.0)
    }

    /// String payload, or "" when missing or of another kind
    pub fn get_string(&self, name: &str) -> &str {
        self.get(name).as_str().unwrap_or("")
    }

    /// Raw payload, or an empty slice when missing or of another kind
    pub fn get_raw(&self, name: &str) -> &[u8] {
        self.get(name).as_raw().unwrap_or(&[])
    }

    pub fn exists(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove `name` if present; no-op otherwise
    pub fn delete(&mut self, name: &str) {
        self.entries.remove(name);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in lexical name order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Sum of String and Raw payload sizes, i.e. the encoded data region size
    pub fn data_size(&self) -> usize {
        self.entries.values().map(Value::data_len).sum()
    }

    /// Copy every entry of `other` into this store, overwriting on conflict
    pub fn extend(&mut self, other: Store) {
        self.entries.extend(other.entries);
    }
}

impl FromIterator<(String, Value)> for Store {
    /// `Null` values are dropped, since they cannot be stored
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().filter(|(_, v)| !v.is_null()).collect(),
        }
    }
}

impl IntoIterator for Store {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over Store entries in lexical name order
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
