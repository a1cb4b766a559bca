//! Field sets: structured key-value context attached to a logger
//!
//! A [`Fields`] value is never mutated once a logger holds it. Deriving a
//! child logger builds a new set with [`merge`], so parents and siblings never
//! observe each other's additions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => f.write_str("null"),
        }
    }
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON encoding
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::UInt(u) => serde_json::Value::Number((*u).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::UInt(u)
    }
}

impl From<u32> for FieldValue {
    fn from(u: u32) -> Self {
        FieldValue::UInt(u64::from(u))
    }
}

impl From<usize> for FieldValue {
    fn from(u: usize) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Mapping from unique string keys to field values.
///
/// Keys are kept sorted so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields {
    entries: BTreeMap<String, FieldValue>,
}

impl Fields {
    /// Create an empty field set
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add a field (builder style)
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Add a field while building a set
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// New set holding `self` overridden by `overlay`
    #[must_use]
    pub fn merged(&self, overlay: &Fields) -> Fields {
        merge(self, overlay)
    }

    /// Render as space-joined `key=value` pairs
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.entries.len() * 16);
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(&value.to_string());
        }
        out
    }

    /// Flatten into a key/value sequence for key-value backends
    pub fn to_keyvals(&self) -> Vec<(String, FieldValue)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Merge two field sets; `overlay` wins on key conflicts. Neither input changes.
pub fn merge(base: &Fields, overlay: &Fields) -> Fields {
    if overlay.is_empty() {
        return base.clone();
    }
    if base.is_empty() {
        return overlay.clone();
    }

    let mut entries = base.entries.clone();
    for (key, value) in &overlay.entries {
        entries.insert(key.clone(), value.clone());
    }
    Fields { entries }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
