//! # formwork-validation
//!
//! Schema-driven validation for dynamic forms. A form is described by an
//! ordered list of [`FieldDescriptor`]s; [`validate_all`] evaluates every
//! field against the current [`ValueSet`] and returns a fresh [`ErrorSet`].
//! Custom validators see all field values, so cross-field checks stay correct
//! as long as the whole set is revalidated after each change.

pub mod clock;
pub mod engine;
pub mod error;
pub mod schema;
pub mod traits;
pub mod validators;
pub mod value;

// Re-exports for easy access
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{field_message, validate_all, validate_field};
pub use error::{ErrorSet, SchemaError, ValidationError};
pub use schema::{FieldDescriptor, FieldKind, FieldRules, InputType, Schema};
pub use traits::ValidationRule;
pub use value::{FieldValue, ToFieldValue, ValueSet};

// Built-in validators
pub use validators::{
    custom::CustomValidator,
    length::LengthValidator,
    numeric::NumericValidator,
    pattern::PatternValidator,
    required::RequiredValidator,
};
