// ABOUTME: SQL value model, ordered field maps, and pure clause builders
// ABOUTME: Produces column lists, placeholder lists, SET and WHERE fragments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DNX Fitness

//! Building blocks for parameterized statements.
//!
//! The clause builders are pure functions from an ordered field map to SQL
//! text; bound values are always taken from the same map in iteration order,
//! so placeholder position and value position cannot drift apart. Table and
//! column names are interpolated as-is and must come from trusted code, never
//! from request input.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A typed SQL parameter value.
///
/// The variant carries the bind type, replacing any runtime type-tag step:
/// binding dispatches on the variant directly.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// 64-bit integer
    Integer(i64),
    /// Double-precision float
    Float(f64),
    /// UTF-8 text
    Text(String),
    /// Raw bytes
    Blob(Vec<u8>),
    /// SQL NULL
    Null,
}

impl SqlValue {
    /// Integer access, widening is not attempted
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Float access
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Text access
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Whether this is SQL NULL
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Blob(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl Serialize for SqlValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer(v) => serializer.serialize_i64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Text(v) => serializer.serialize_str(v),
            Self::Blob(v) => serializer.serialize_bytes(v),
            Self::Null => serializer.serialize_none(),
        }
    }
}

/// An ordered column-to-value mapping.
///
/// Insertion order is binding order. Used both for insert/update payloads and
/// where-clauses, and as the decoded form of a result row. Column keys must
/// be non-empty; one value per column per call (re-inserting a key replaces
/// its value in place).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    entries: Vec<(String, SqlValue)>,
}

impl FieldMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a column value, preserving the column's original
    /// position on replacement
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<SqlValue>) {
        let column = column.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(c, _)| *c == column) {
            slot.1 = value;
        } else {
            self.entries.push((column, value));
        }
    }

    /// Look up a column's value
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    /// Number of columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no columns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column names in insertion order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    /// Values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &SqlValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterate columns and values in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<SqlValue>, const N: usize> From<[(K, V); N]> for FieldMap {
    fn from(pairs: [(K, V); N]) -> Self {
        let mut map = Self::new();
        for (column, value) in pairs {
            map.insert(column, value);
        }
        map
    }
}

impl<K: Into<String>, V: Into<SqlValue>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (column, value) in iter {
            map.insert(column, value);
        }
        map
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, SqlValue);
    type IntoIter = std::vec::IntoIter<(String, SqlValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (column, value) in &self.entries {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Comma-joined column names: `user, email, mobile`
#[must_use]
pub fn column_list(fields: &FieldMap) -> String {
    fields.columns().collect::<Vec<_>>().join(", ")
}

/// Comma-joined placeholders for `n` values: `?, ?, ?`
#[must_use]
pub fn placeholder_list(n: usize) -> String {
    vec!["?"; n].join(", ")
}

/// UPDATE assignment fragment: `user = ?, email = ?`
#[must_use]
pub fn set_clause(fields: &FieldMap) -> String {
    fields
        .columns()
        .map(|c| format!("{c} = ?"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Equality filter fragment: `user = ? AND email = ?`
#[must_use]
pub fn where_clause(fields: &FieldMap) -> String {
    fields
        .columns()
        .map(|c| format!("{c} = ?"))
        .collect::<Vec<_>>()
        .join(" AND ")
}
