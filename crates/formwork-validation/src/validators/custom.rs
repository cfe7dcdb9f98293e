//! Custom validation closures with access to the whole value-set

use crate::clock::{age_in_years, Clock};
use crate::error::ValidationError;
use crate::value::{FieldValue, ValueSet};
use chrono::NaiveDate;
use std::sync::Arc;

/// Signature of a custom check: `(all_values, this_value) -> message`
pub type CustomValidationFn = Arc<dyn Fn(&ValueSet, &FieldValue) -> Option<String> + Send + Sync>;

/// Custom validator that runs a user-defined function after the built-in rules.
///
/// The function sees every field's current value, which is how cross-field
/// checks such as password confirmation are expressed. It runs for blank
/// values too, so it must guard against them itself.
#[derive(Clone)]
pub struct CustomValidator {
    /// Name/identifier for this custom validator, used as the error code
    pub name: String,
    validator: CustomValidationFn,
}

impl CustomValidator {
    /// Create a new custom validator
    pub fn new<F>(name: impl Into<String>, validator: F) -> Self
    where
        F: Fn(&ValueSet, &FieldValue) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            validator: Arc::new(validator),
        }
    }

    /// Get the validator name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the check; an empty message counts as success
    pub fn validate(&self, values: &ValueSet, value: &FieldValue, field: &str) -> Option<ValidationError> {
        (self.validator)(values, value)
            .filter(|message| !message.is_empty())
            .map(|message| ValidationError::with_code(field, message, self.name.clone()))
    }
}

impl std::fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomValidator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Helper constructors for the custom checks the default forms use
impl CustomValidator {
    /// Fails when both this value and the value under `password_key` are
    /// present and differ.
    pub fn confirms_password(password_key: impl Into<String>) -> Self {
        let password_key = password_key.into();
        Self::new("password_mismatch", move |values, value| {
            let password = values.get(&password_key);
            if value.is_truthy() && password.is_truthy() && value != password {
                Some("Passwords do not match".to_string())
            } else {
                None
            }
        })
    }

    /// Fails when the `YYYY-MM-DD` date in this field is unparseable or lies
    /// less than `years` whole years before the clock's current date.
    pub fn minimum_age(years: u32, clock: Arc<dyn Clock>) -> Self {
        Self::new("minimum_age", move |_values, value| {
            if !value.is_truthy() {
                return None;
            }

            let birth = match value.as_text().map(parse_date) {
                Some(Some(date)) => date,
                _ => return Some("Invalid date".to_string()),
            };

            if i64::from(age_in_years(birth, clock.today())) < i64::from(years) {
                Some(format!("Must be at least {} years old", years))
            } else {
                None
            }
        })
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}
