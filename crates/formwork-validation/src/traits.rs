//! Core validation trait shared by the built-in rules

use crate::error::ValidationError;
use crate::value::FieldValue;

/// A single built-in check applied to one field value.
///
/// Rules are total: they return `None` for anything they do not apply to,
/// including values of the wrong type, and never fail in any other way.
pub trait ValidationRule: Send + Sync {
    /// Check `value` for the field `field`, displayed as `label`
    fn validate(&self, value: &FieldValue, field: &str, label: &str) -> Option<ValidationError>;

    /// Rule name, also used as the error code
    fn rule_name(&self) -> &'static str;
}
