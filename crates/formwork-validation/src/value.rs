//! Field values and the value-set they live in

use crate::schema::{FieldDescriptor, FieldKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Typed value of a single form field.
///
/// The variant is chosen by value coercion according to the field kind, so a
/// checkbox holds `Bool`, a numeric input holds `Number` (or an empty `Text`
/// when the entry did not parse) and every other kind holds `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl FieldValue {
    /// Shorthand for a text value
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Whether this value is missing for the purposes of a `required` rule.
    ///
    /// Blank text, NaN and `false` all count as missing.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(n) => n.is_nan(),
            FieldValue::Bool(b) => !b,
        }
    }

    /// Presence test used by custom validators before they look at a value.
    ///
    /// Unlike [`is_blank`](Self::is_blank) this does not trim, so `"  "` is
    /// present while `0` is not.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Empty => false,
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Bool(b) => *b,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value, excluding NaN
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if !n.is_nan() => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Empty => Ok(()),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

static EMPTY: FieldValue = FieldValue::Empty;

/// Mapping from field key to its current value.
///
/// A key that has never been set reads as [`FieldValue::Empty`]. Updates go
/// through [`with_value`](Self::with_value), which produces a new set and
/// leaves the original untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueSet {
    values: HashMap<String, FieldValue>,
}

impl ValueSet {
    /// Create an empty value-set
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under `key`, or `Empty` when absent
    pub fn get(&self, key: &str) -> &FieldValue {
        self.values.get(key).unwrap_or(&EMPTY)
    }

    /// Whether `key` has ever been assigned
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Value for a descriptor, falling back to the default for its kind
    pub fn value_or_default(&self, descriptor: &FieldDescriptor) -> FieldValue {
        match self.values.get(descriptor.key()) {
            Some(value) => value.clone(),
            None => descriptor.kind().default_value(),
        }
    }

    /// New value-set equal to this one with `key` replaced
    pub fn with_value(&self, key: impl Into<String>, value: FieldValue) -> Self {
        let mut values = self.values.clone();
        values.insert(key.into(), value);
        Self { values }
    }

    /// Builder-style insert, used when assembling a value-set up front
    pub fn set(mut self, key: impl Into<String>, value: impl ToFieldValue) -> Self {
        self.values.insert(key.into(), value.to_field_value());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys that have been assigned, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.values).unwrap_or(serde_json::Value::Null)
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for ValueSet {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl FieldKind {
    /// Value an unset field of this kind is rendered with
    pub fn default_value(&self) -> FieldValue {
        match self {
            FieldKind::Checkbox => FieldValue::Bool(false),
            _ => FieldValue::Text(String::new()),
        }
    }
}

/// Trait for types that can be converted to a field value
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }
}

impl ToFieldValue for &str {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.to_string())
    }
}

impl ToFieldValue for i32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Number(f64::from(*self))
    }
}

impl ToFieldValue for i64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Number(*self as f64)
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Number(*self)
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }
}

impl ToFieldValue for FieldValue {
    fn to_field_value(&self) -> FieldValue {
        self.clone()
    }
}

impl<T> ToFieldValue for Option<T>
where
    T: ToFieldValue,
{
    fn to_field_value(&self) -> FieldValue {
        match self {
            Some(value) => value.to_field_value(),
            None => FieldValue::Empty,
        }
    }
}
