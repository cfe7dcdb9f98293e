//! # formwork-forms
//!
//! Interactive side of formwork: turns raw UI events into typed values,
//! keeps the value-set and error-set of a [`DynamicForm`] and gates
//! submission on a clean validation pass.
//!
//! ```rust
//! use formwork_forms::{DynamicForm, SubmitOutcome};
//! use formwork_validation::{FieldDescriptor, InputType, Schema};
//!
//! let schema = Schema::new(vec![
//!     FieldDescriptor::input("city", "City", InputType::Text).required().min_length(2),
//! ])
//! .unwrap();
//!
//! let mut form = DynamicForm::new(schema);
//! assert_eq!(form.submit(), SubmitOutcome::Rejected { error_count: 1 });
//! assert_eq!(form.errors().message("city"), "City is required");
//!
//! form.change("city", "Austin").unwrap();
//! assert!(form.submit().is_submitted());
//! ```

pub mod coerce;
pub mod config;
pub mod error;
pub mod form;
pub mod registration;
pub mod submit;
pub mod view;

pub use coerce::{coerce, parse_number, RawInput};
pub use config::{FormConfig, FormConfigBuilder};
pub use error::{FormError, FormResult};
pub use form::{DynamicForm, FormId, FormSnapshot, FormState, SubmitOutcome};
pub use registration::registration_schema;
pub use submit::{FormSubmitter, LogSubmitter};
pub use view::{field_views, FieldView};
