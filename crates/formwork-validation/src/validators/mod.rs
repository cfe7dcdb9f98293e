//! Built-in validators for the rules a field descriptor can declare

pub mod custom;
pub mod length;
pub mod numeric;
pub mod pattern;
pub mod required;

pub use custom::{CustomValidator, CustomValidationFn};
pub use length::LengthValidator;
pub use numeric::NumericValidator;
pub use pattern::PatternValidator;
pub use required::RequiredValidator;

/// Trimmed text of a value, when it is non-blank text.
///
/// String rules only ever look at this trimmed form.
pub(crate) fn trimmed_text(value: &crate::value::FieldValue) -> Option<&str> {
    value.as_text().map(str::trim).filter(|text| !text.is_empty())
}
