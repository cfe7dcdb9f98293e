//! Length validator for text values

use super::trimmed_text;
use crate::error::ValidationError;
use crate::traits::ValidationRule;
use crate::value::FieldValue;

/// Validator for minimum and maximum length of trimmed text.
///
/// Lengths are counted in characters. The minimum is checked before the
/// maximum and only the first violation is reported.
#[derive(Debug, Clone, Default)]
pub struct LengthValidator {
    /// Minimum length (inclusive)
    pub min: Option<usize>,
    /// Maximum length (inclusive)
    pub max: Option<usize>,
}

impl LengthValidator {
    /// Create a new length validator with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Set minimum length constraint
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Set maximum length constraint
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Set length range (min and max)
    pub fn range(mut self, min: usize, max: usize) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

impl ValidationRule for LengthValidator {
    fn validate(&self, value: &FieldValue, field: &str, _label: &str) -> Option<ValidationError> {
        let length = trimmed_text(value)?.chars().count();

        if let Some(min) = self.min {
            if length < min {
                return Some(ValidationError::with_code(
                    field,
                    format!("Must be at least {} characters", min),
                    "min_length",
                ));
            }
        }

        if let Some(max) = self.max {
            if length > max {
                return Some(ValidationError::with_code(
                    field,
                    format!("Must be at most {} characters", max),
                    "max_length",
                ));
            }
        }

        None
    }

    fn rule_name(&self) -> &'static str {
        "length"
    }
}
