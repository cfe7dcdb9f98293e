//! Per-field evaluation and the full revalidation pass

use crate::error::{ErrorSet, ValidationError};
use crate::schema::{FieldDescriptor, Schema};
use crate::traits::ValidationRule;
use crate::validators::{LengthValidator, NumericValidator, PatternValidator, RequiredValidator};
use crate::value::{FieldValue, ValueSet};
use tracing::debug;

/// Validate one field value against its descriptor.
///
/// Checks run in a fixed order and the first failure wins: required, then
/// length and pattern on trimmed text, then numeric bounds, then the custom
/// validator. Optional fields with a blank value pass every built-in rule.
pub fn validate_field(
    descriptor: &FieldDescriptor,
    value: &FieldValue,
    values: &ValueSet,
) -> Option<ValidationError> {
    let rules = descriptor.rules();
    let field = descriptor.key();
    let label = descriptor.label();

    if rules.required {
        if let Some(error) = RequiredValidator::new().validate(value, field, label) {
            return Some(error);
        }
    }

    let length = LengthValidator {
        min: rules.min_length,
        max: rules.max_length,
    };
    if let Some(error) = length.validate(value, field, label) {
        return Some(error);
    }

    if let Some(pattern) = &rules.pattern {
        let pattern = PatternValidator::from_regex(pattern.clone());
        if let Some(error) = pattern.validate(value, field, label) {
            return Some(error);
        }
    }

    let numeric = NumericValidator {
        min: rules.min,
        max: rules.max,
    };
    if let Some(error) = numeric.validate(value, field, label) {
        return Some(error);
    }

    descriptor
        .custom_validator()
        .and_then(|custom| custom.validate(values, value, field))
}

/// Message form of [`validate_field`]; the empty string means valid
pub fn field_message(descriptor: &FieldDescriptor, value: &FieldValue, values: &ValueSet) -> String {
    validate_field(descriptor, value, values)
        .map(|error| error.message)
        .unwrap_or_default()
}

/// Run [`validate_field`] for every descriptor, in schema order, against
/// `values` and collect a fresh error-set.
///
/// Every field is evaluated regardless of earlier failures, so fields whose
/// validity depends on another field's value are always refreshed.
pub fn validate_all(schema: &Schema, values: &ValueSet) -> ErrorSet {
    let mut errors = ErrorSet::new();

    for descriptor in schema.iter() {
        let error = validate_field(descriptor, values.get(descriptor.key()), values);
        errors.insert(descriptor.key(), error);
    }

    debug!(
        "Revalidated {} field(s), {} with errors",
        errors.len(),
        errors.error_count()
    );
    errors
}
