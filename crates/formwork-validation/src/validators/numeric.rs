//! Numeric range validator

use crate::error::ValidationError;
use crate::traits::ValidationRule;
use crate::value::FieldValue;

/// Validator for inclusive numeric bounds.
///
/// Only applies to `Number` values that are not NaN.
#[derive(Debug, Clone, Default)]
pub struct NumericValidator {
    /// Minimum value (inclusive)
    pub min: Option<f64>,
    /// Maximum value (inclusive)
    pub max: Option<f64>,
}

impl NumericValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set value range (min and max)
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

impl ValidationRule for NumericValidator {
    fn validate(&self, value: &FieldValue, field: &str, _label: &str) -> Option<ValidationError> {
        let number = value.as_number()?;

        if let Some(min) = self.min {
            if number < min {
                return Some(ValidationError::with_code(
                    field,
                    format!("Must be at least {}", min),
                    "min",
                ));
            }
        }

        if let Some(max) = self.max {
            if number > max {
                return Some(ValidationError::with_code(
                    field,
                    format!("Must be at most {}", max),
                    "max",
                ));
            }
        }

        None
    }

    fn rule_name(&self) -> &'static str {
        "numeric"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_messages_render_whole_numbers() {
        let validator = NumericValidator::new().range(18.0, 100.0);

        let error = validator.validate(&FieldValue::Number(17.0), "age", "Age").unwrap();
        assert_eq!(error.message, "Must be at least 18");
        assert_eq!(error.code, "min");

        let error = validator.validate(&FieldValue::Number(101.0), "age", "Age").unwrap();
        assert_eq!(error.message, "Must be at most 100");
        assert_eq!(error.code, "max");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let validator = NumericValidator::new().range(0.0, 1_000_000.0);
        assert!(validator.validate(&FieldValue::Number(0.0), "salary", "Salary").is_none());
        assert!(validator.validate(&FieldValue::Number(1_000_000.0), "salary", "Salary").is_none());

        let error = validator.validate(&FieldValue::Number(1_000_001.0), "salary", "Salary").unwrap();
        assert_eq!(error.message, "Must be at most 1000000");
    }

    #[test]
    fn test_non_numbers_are_skipped() {
        let validator = NumericValidator::new().min(10.0);
        assert!(validator.validate(&FieldValue::Number(f64::NAN), "n", "N").is_none());
        assert!(validator.validate(&FieldValue::text("5"), "n", "N").is_none());
        assert!(validator.validate(&FieldValue::Empty, "n", "N").is_none());
    }
}
