//! Validation error types and handling

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Individual validation failure for a specific field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationError {
    /// The field key that failed validation
    pub field: String,
    /// Human-readable error message, shown next to the field
    pub message: String,
    /// Rule that produced the failure, for programmatic handling
    pub code: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: "validation_failed".to_string(),
        }
    }

    /// Create a validation error with a specific code
    pub fn with_code(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }

    /// Set the error code
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of one revalidation pass: every schema field, in schema order,
/// mapped to its error or to `None` when valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorSet {
    entries: Vec<(String, Option<ValidationError>)>,
}

impl ErrorSet {
    /// Create an empty error-set, as held by a form that was never validated
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result for one field, replacing any earlier entry
    pub fn insert(&mut self, field: impl Into<String>, error: Option<ValidationError>) {
        let field = field.into();
        match self.entries.iter_mut().find(|(key, _)| *key == field) {
            Some(entry) => entry.1 = error,
            None => self.entries.push((field, error)),
        }
    }

    /// Error recorded for `field`, if any
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.entries
            .iter()
            .find(|(key, _)| key == field)
            .and_then(|(_, error)| error.as_ref())
    }

    /// Message for `field`; the empty string means valid
    pub fn message(&self, field: &str) -> &str {
        self.get(field).map_or("", |error| error.message.as_str())
    }

    /// Check if a specific field has an error
    pub fn has_field_error(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Whether any field carries a message
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|(_, error)| error.is_some())
    }

    /// Number of fields with a message
    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|(_, error)| error.is_some()).count()
    }

    /// Number of fields recorded, valid or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Failing fields in schema order
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.entries.iter().filter_map(|(_, error)| error.as_ref())
    }

    /// Every recorded field with its message (`""` when valid)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, error)| {
            (
                key.as_str(),
                error.as_ref().map_or("", |e| e.message.as_str()),
            )
        })
    }

    /// Convert to a flat `{ key: message }` object for presentation layers
    pub fn to_json(&self) -> serde_json::Value {
        let fields: serde_json::Map<String, serde_json::Value> = self
            .iter()
            .map(|(key, message)| (key.to_string(), serde_json::Value::from(message)))
            .collect();
        serde_json::Value::Object(fields)
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_errors() {
            write!(f, "No validation errors")
        } else {
            write!(f, "Validation failed for {} field(s):", self.error_count())?;
            for error in self.errors() {
                write!(f, "\n  {}: {}", error.field, error.message)?;
            }
            Ok(())
        }
    }
}

/// Problems with a schema definition, caught when the schema is built
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("field key must not be empty (label: {label})")]
    EmptyKey { label: String },

    #[error("duplicate field key: {key}")]
    DuplicateKey { key: String },

    #[error("select field '{key}' has no options")]
    MissingOptions { key: String },

    #[error("field '{key}' is not a select and cannot carry options")]
    UnexpectedOptions { key: String },

    #[error("rule '{rule}' does not apply to field '{key}'")]
    RuleNotApplicable { key: String, rule: &'static str },

    #[error("field '{key}' has an empty range for rule '{rule}'")]
    InvalidRange { key: String, rule: &'static str },

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
