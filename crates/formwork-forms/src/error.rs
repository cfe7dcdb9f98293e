//! Errors raised by form construction and adapter misuse

use formwork_validation::SchemaError;
use thiserror::Error;

pub type FormResult<T> = Result<T, FormError>;

/// Form-level errors.
///
/// Validation failures are not errors; they live in the form's error-set.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("unknown field: {key}")]
    UnknownField { key: String },

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
