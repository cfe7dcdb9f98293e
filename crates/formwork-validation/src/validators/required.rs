//! Required field validator

use crate::error::ValidationError;
use crate::traits::ValidationRule;
use crate::value::FieldValue;

/// Validator that ensures a field is present and not blank
#[derive(Debug, Clone, Default)]
pub struct RequiredValidator {
    /// Custom error message
    pub message: Option<String>,
}

impl RequiredValidator {
    /// Create a new required validator with default message
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Create a required validator with custom message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

impl ValidationRule for RequiredValidator {
    fn validate(&self, value: &FieldValue, field: &str, label: &str) -> Option<ValidationError> {
        if !value.is_blank() {
            return None;
        }

        let message = self
            .message
            .clone()
            .unwrap_or_else(|| format!("{} is required", label));
        Some(ValidationError::with_code(field, message, self.rule_name()))
    }

    fn rule_name(&self) -> &'static str {
        "required"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank_values() {
        let validator = RequiredValidator::new();

        for value in [
            FieldValue::Empty,
            FieldValue::text(""),
            FieldValue::text("   "),
            FieldValue::Number(f64::NAN),
            FieldValue::Bool(false),
        ] {
            let error = validator.validate(&value, "firstName", "First Name").unwrap();
            assert_eq!(error.message, "First Name is required");
            assert_eq!(error.code, "required");
            assert_eq!(error.field, "firstName");
        }
    }

    #[test]
    fn test_required_accepts_present_values() {
        let validator = RequiredValidator::new();

        assert!(validator.validate(&FieldValue::text("John"), "name", "Name").is_none());
        // Zero is a real number, not a missing one
        assert!(validator.validate(&FieldValue::Number(0.0), "count", "Count").is_none());
        assert!(validator.validate(&FieldValue::Bool(true), "terms", "Terms").is_none());
    }

    #[test]
    fn test_required_with_custom_message() {
        let validator = RequiredValidator::with_message("This field cannot be empty");
        let error = validator.validate(&FieldValue::Empty, "email", "Email").unwrap();
        assert_eq!(error.message, "This field cannot be empty");
    }
}
