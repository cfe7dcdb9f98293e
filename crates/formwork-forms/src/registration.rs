//! The default sign-up form

use crate::config::FormConfig;
use crate::error::FormResult;
use crate::form::DynamicForm;
use formwork_validation::{
    Clock, CustomValidator, FieldDescriptor, InputType, Schema, SchemaError, SystemClock,
};
use std::sync::Arc;

const TEN_DIGITS: &str = r"^[0-9]{10}$";
const FIVE_DIGITS: &str = r"^[0-9]{5}$";

/// Registration form: personal details, address, account credentials and an
/// emergency contact.
///
/// The password field is keyed by `config.password_key` and
/// `confirmPassword` must match it. `dob` must lie at least
/// `config.minimum_age` years before the clock's date. Digit patterns only
/// accept ASCII digits.
pub fn registration_schema(config: &FormConfig, clock: Arc<dyn Clock>) -> Result<Schema, SchemaError> {
    let password_key = config.get_password_key();
    Schema::new(vec![
        FieldDescriptor::input("firstName", "First Name", InputType::Text)
            .required()
            .min_length(2),
        FieldDescriptor::input("lastName", "Last Name", InputType::Text)
            .required()
            .min_length(2),
        FieldDescriptor::input("email", "Email", InputType::Email)
            .required()
            .pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?,
        FieldDescriptor::input("phone", "Phone Number", InputType::Phone)
            .required()
            .pattern(TEN_DIGITS)?,
        FieldDescriptor::input("age", "Age", InputType::Number)
            .required()
            .min(18.0)
            .max(100.0),
        FieldDescriptor::input("address", "Address", InputType::Text)
            .required()
            .min_length(10),
        FieldDescriptor::input("city", "City", InputType::Text)
            .required()
            .min_length(2),
        FieldDescriptor::select(
            "state",
            "State",
            ["California", "New York", "Texas", "Florida", "Illinois"],
        )
        .required(),
        FieldDescriptor::input("zip", "ZIP Code", InputType::Text)
            .required()
            .pattern(FIVE_DIGITS)?,
        FieldDescriptor::input("country", "Country", InputType::Text)
            .required()
            .min_length(2),
        FieldDescriptor::input("username", "Username", InputType::Text)
            .required()
            .min_length(3)
            .max_length(20)
            .pattern(r"^[a-zA-Z0-9_]+$")?,
        FieldDescriptor::input(password_key.as_str(), "Password", InputType::Password)
            .required()
            .min_length(8),
        FieldDescriptor::input("confirmPassword", "Confirm Password", InputType::Password)
            .required()
            .min_length(8)
            .custom(CustomValidator::confirms_password(password_key.as_str())),
        FieldDescriptor::input("dob", "Date of Birth", InputType::Date)
            .required()
            .custom(CustomValidator::minimum_age(*config.get_minimum_age(), clock)),
        FieldDescriptor::select("gender", "Gender", ["Male", "Female", "Other"]).required(),
        FieldDescriptor::checkbox("subscribe", "Subscribe to Newsletter"),
        FieldDescriptor::textarea("comments", "Comments").max_length(500),
        FieldDescriptor::input("emergencyContact", "Emergency Contact Phone", InputType::Phone)
            .required()
            .pattern(TEN_DIGITS)?,
        FieldDescriptor::input("relation", "Relation to Emergency Contact", InputType::Text)
            .required()
            .min_length(2),
        FieldDescriptor::input("salary", "Expected Salary", InputType::Number)
            .min(0.0)
            .max(1_000_000.0),
    ])
}

impl DynamicForm {
    /// The default registration form, dated by the system clock
    pub fn registration(config: FormConfig) -> FormResult<Self> {
        let schema = registration_schema(&config, Arc::new(SystemClock))?;
        Ok(Self::with_config(schema, config))
    }
}
