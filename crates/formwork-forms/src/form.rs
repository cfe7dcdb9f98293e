//! Dynamic form state: value-set, error-set and the change/submit paths

use crate::coerce::{coerce, RawInput};
use crate::config::FormConfig;
use crate::error::{FormError, FormResult};
use crate::submit::{FormSubmitter, LogSubmitter};
use crate::view::{field_views, FieldView};
use formwork_validation::{validate_all, ErrorSet, FieldValue, Schema, ToFieldValue, ValueSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, debug_span, warn, Span};
use uuid::Uuid;

/// Identifier of one form instance, carried in its log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormId(Uuid);

impl FormId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the last validation pass left any message behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    Clean,
    Error,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the submitter received the value-set
    Submitted,
    /// At least one field failed; nothing was submitted
    Rejected { error_count: usize },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

/// Value-set and error-set as they stood after one event
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub values: Arc<ValueSet>,
    pub errors: Arc<ErrorSet>,
}

/// A form driven by a static schema.
///
/// Both the value-set and the error-set start empty. Every change replaces
/// the value-set and then recomputes the whole error-set against it, so
/// fields that depend on another field are refreshed too. Both sets are
/// swapped wholesale; snapshots handed out earlier never change.
pub struct DynamicForm {
    id: FormId,
    schema: Arc<Schema>,
    config: FormConfig,
    values: Arc<ValueSet>,
    errors: Arc<ErrorSet>,
    submitter: Box<dyn FormSubmitter>,
}

impl DynamicForm {
    /// Create a form with the default configuration
    pub fn new(schema: impl Into<Arc<Schema>>) -> Self {
        Self::with_config(schema, FormConfig::default())
    }

    /// Create a form whose default submitter follows `config`
    pub fn with_config(schema: impl Into<Arc<Schema>>, config: FormConfig) -> Self {
        let submitter = LogSubmitter::new(*config.get_redact_submitted_values());
        Self {
            id: FormId::new(),
            schema: schema.into(),
            config,
            values: Arc::new(ValueSet::new()),
            errors: Arc::new(ErrorSet::new()),
            submitter: Box::new(submitter),
        }
    }

    /// Replace the submitter that receives clean submissions
    pub fn with_submitter(mut self, submitter: impl FormSubmitter + 'static) -> Self {
        self.submitter = Box::new(submitter);
        self
    }

    pub fn id(&self) -> FormId {
        self.id
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current value-set
    pub fn values(&self) -> Arc<ValueSet> {
        Arc::clone(&self.values)
    }

    /// Current error-set
    pub fn errors(&self) -> Arc<ErrorSet> {
        Arc::clone(&self.errors)
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: self.values(),
            errors: self.errors(),
        }
    }

    /// Span entered by the change and submit paths, tagged with the form id
    pub fn span(&self) -> Span {
        debug_span!("form", id = %self.id)
    }

    pub fn state(&self) -> FormState {
        if self.errors.has_errors() {
            FormState::Error
        } else {
            FormState::Clean
        }
    }

    /// Apply a raw UI change to one field and revalidate the whole form
    pub fn change(&mut self, key: &str, raw: impl Into<RawInput>) -> FormResult<FormSnapshot> {
        let _span = self.span().entered();
        let value = match self.schema.get(key) {
            Some(descriptor) => coerce(descriptor, raw.into()),
            None => return Err(self.unknown_field(key)),
        };
        Ok(self.apply(key, value))
    }

    /// Like [`change`](Self::change) for an already typed value
    pub fn set_value(&mut self, key: &str, value: impl ToFieldValue) -> FormResult<FormSnapshot> {
        let _span = self.span().entered();
        if self.schema.get(key).is_none() {
            return Err(self.unknown_field(key));
        }
        Ok(self.apply(key, value.to_field_value()))
    }

    /// Validate every field and hand the values to the submitter when none
    /// failed. The error-set is replaced either way.
    pub fn submit(&mut self) -> SubmitOutcome {
        let _span = self.span().entered();
        let errors = validate_all(&self.schema, &self.values);
        let error_count = errors.error_count();
        self.errors = Arc::new(errors);

        if error_count > 0 {
            debug!("Form {} rejected submit with {} error(s)", self.id, error_count);
            return SubmitOutcome::Rejected { error_count };
        }

        debug!("Form {} passed validation, submitting", self.id);
        self.submitter.on_submit(&self.values);
        SubmitOutcome::Submitted
    }

    /// Render model of every field, in schema order
    pub fn field_views(&self) -> Vec<FieldView> {
        field_views(&self.schema, &self.values, &self.errors)
    }

    fn apply(&mut self, key: &str, value: FieldValue) -> FormSnapshot {
        let values = self.values.with_value(key, value);
        let errors = validate_all(&self.schema, &values);
        debug!("Form {} field '{}' changed", self.id, key);

        self.values = Arc::new(values);
        self.errors = Arc::new(errors);
        self.snapshot()
    }

    fn unknown_field(&self, key: &str) -> FormError {
        warn!("Form {} received a change for unknown field '{}'", self.id, key);
        FormError::UnknownField { key: key.to_string() }
    }
}

impl fmt::Debug for DynamicForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicForm")
            .field("id", &self.id)
            .field("fields", &self.schema.len())
            .field("config", &self.config)
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_validation::{CustomValidator, FieldDescriptor, FieldValue, InputType};
    use std::sync::Mutex;

    fn schema() -> Schema {
        Schema::new(vec![
            FieldDescriptor::input("name", "Name", InputType::Text)
                .required()
                .min_length(2),
            FieldDescriptor::input("age", "Age", InputType::Number)
                .required()
                .min(18.0),
            FieldDescriptor::checkbox("terms", "Accept Terms").required(),
            FieldDescriptor::input("password", "Password", InputType::Password).required(),
            FieldDescriptor::input("confirm", "Confirm", InputType::Password)
                .required()
                .custom(CustomValidator::confirms_password("password")),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_form_is_clean_and_empty() {
        let form = DynamicForm::new(schema());
        assert!(form.values().is_empty());
        assert!(form.errors().is_empty());
        assert_eq!(form.state(), FormState::Clean);
    }

    #[test]
    fn test_change_revalidates_every_field() {
        let mut form = DynamicForm::new(schema());
        let snapshot = form.change("name", "Al").unwrap();

        assert_eq!(snapshot.values.get("name"), &FieldValue::text("Al"));
        assert_eq!(snapshot.errors.len(), 5);
        assert_eq!(snapshot.errors.message("name"), "");
        assert_eq!(snapshot.errors.message("age"), "Age is required");
        assert_eq!(snapshot.errors.message("terms"), "Accept Terms is required");
        assert_eq!(form.state(), FormState::Error);
    }

    #[test]
    fn test_change_coerces_by_kind() {
        let mut form = DynamicForm::new(schema());

        form.change("age", "12e").unwrap();
        assert_eq!(form.values().get("age"), &FieldValue::text(""));
        assert_eq!(form.errors().message("age"), "Age is required");

        form.change("age", "17").unwrap();
        assert_eq!(form.errors().message("age"), "Must be at least 18");

        form.change("terms", true).unwrap();
        assert_eq!(form.values().get("terms"), &FieldValue::Bool(true));
        assert_eq!(form.errors().message("terms"), "");
    }

    #[test]
    fn test_unknown_field_leaves_state_untouched() {
        let mut form = DynamicForm::new(schema());
        form.change("name", "Ada").unwrap();
        let before = form.snapshot();

        let result = form.change("nickname", "A");
        assert!(matches!(result, Err(FormError::UnknownField { key }) if key == "nickname"));
        assert!(form.set_value("nickname", "A").is_err());
        assert_eq!(form.snapshot(), before);
    }

    #[test]
    fn test_snapshots_are_not_mutated() {
        let mut form = DynamicForm::new(schema());
        let first = form.change("name", "Ada").unwrap();
        form.change("name", "Grace").unwrap();

        assert_eq!(first.values.get("name"), &FieldValue::text("Ada"));
        assert_eq!(form.values().get("name"), &FieldValue::text("Grace"));
    }

    #[test]
    fn test_submit_gating() {
        let submitted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&submitted);
        let mut form = DynamicForm::new(schema())
            .with_submitter(move |values: &ValueSet| sink.lock().unwrap().push(values.clone()));

        let outcome = form.submit();
        assert_eq!(outcome, SubmitOutcome::Rejected { error_count: 5 });
        assert!(submitted.lock().unwrap().is_empty());

        form.change("name", "Ada").unwrap();
        form.set_value("age", 36).unwrap();
        form.change("terms", true).unwrap();
        form.change("password", "hunter22").unwrap();
        form.change("confirm", "hunter22").unwrap();

        let outcome = form.submit();
        assert!(outcome.is_submitted());
        assert_eq!(form.state(), FormState::Clean);
        assert!(!form.errors().has_errors());

        let submitted = submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(&submitted[0], form.values().as_ref());
    }

    #[test]
    fn test_span_carries_form_id() {
        tracing::subscriber::with_default(tracing_subscriber::registry(), || {
            let form = DynamicForm::new(schema());
            let span = form.span();
            let metadata = span.metadata().unwrap();

            assert_eq!(metadata.name(), "form");
            assert!(metadata.fields().field("id").is_some());
        });
    }

    #[test]
    fn test_form_ids_are_unique() {
        assert_ne!(DynamicForm::new(schema()).id(), DynamicForm::new(schema()).id());
    }
}
