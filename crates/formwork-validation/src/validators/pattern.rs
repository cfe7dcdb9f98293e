//! Pattern validator using regular expressions

use super::trimmed_text;
use crate::error::ValidationError;
use crate::traits::ValidationRule;
use crate::value::FieldValue;
use regex::Regex;

/// Validator for a format pattern, tested against the trimmed text.
///
/// The pattern is searched, not implicitly anchored; descriptors anchor
/// their own patterns with `^...$`.
#[derive(Debug, Clone)]
pub struct PatternValidator {
    pattern: Regex,
}

impl PatternValidator {
    /// Create a new pattern validator
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::from_regex(Regex::new(pattern)?))
    }

    /// Create a validator from an existing Regex
    pub fn from_regex(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// Get the pattern string
    pub fn pattern_string(&self) -> &str {
        self.pattern.as_str()
    }
}

impl ValidationRule for PatternValidator {
    fn validate(&self, value: &FieldValue, field: &str, label: &str) -> Option<ValidationError> {
        let text = trimmed_text(value)?;

        if self.pattern.is_match(text) {
            None
        } else {
            Some(ValidationError::with_code(
                field,
                format!("Invalid format for {}", label),
                self.rule_name(),
            ))
        }
    }

    fn rule_name(&self) -> &'static str {
        "pattern"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_mismatch_uses_label() {
        let validator = PatternValidator::new(r"^[0-9]{5}$").unwrap();

        let error = validator.validate(&FieldValue::text("1234"), "zip", "ZIP Code").unwrap();
        assert_eq!(error.message, "Invalid format for ZIP Code");
        assert_eq!(error.code, "pattern");

        assert!(validator.validate(&FieldValue::text("12345"), "zip", "ZIP Code").is_none());
    }

    #[test]
    fn test_pattern_tested_on_trimmed_text() {
        let validator = PatternValidator::new(r"^[a-zA-Z0-9_]+$").unwrap();
        assert!(validator.validate(&FieldValue::text("  user_1  "), "username", "Username").is_none());
    }

    #[test]
    fn test_unanchored_pattern_searches() {
        let validator = PatternValidator::new(r"\d").unwrap();
        assert!(validator.validate(&FieldValue::text("abc1"), "f", "F").is_none());
        assert!(validator.validate(&FieldValue::text("abc"), "f", "F").is_some());
    }

    #[test]
    fn test_pattern_skips_blank_values() {
        let validator = PatternValidator::new(r"^\d+$").unwrap();
        assert!(validator.validate(&FieldValue::text("  "), "f", "F").is_none());
        assert!(validator.validate(&FieldValue::Empty, "f", "F").is_none());
        assert!(validator.validate(&FieldValue::Bool(true), "f", "F").is_none());
    }
}
