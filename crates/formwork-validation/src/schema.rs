//! Field descriptors and the ordered schema that drives a form

use crate::error::SchemaError;
use crate::validators::CustomValidator;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pattern applied to email inputs that do not declare one of their own
pub const IMPLICIT_EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Kind of control a field is rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[serde(rename = "input")]
    TextInput,
    Select,
    Checkbox,
    #[serde(rename = "textarea")]
    MultilineText,
}

impl FieldKind {
    /// Kinds whose value is free-form text
    pub fn is_string_kind(&self) -> bool {
        matches!(self, FieldKind::TextInput | FieldKind::Select | FieldKind::MultilineText)
    }
}

/// Refinement of a text input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Email,
    #[serde(rename = "tel")]
    Phone,
    Number,
    Password,
    Date,
}

/// Built-in constraints for one field
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// One schema entry: identity, kind and rules of a form field
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    key: String,
    label: String,
    kind: FieldKind,
    input_type: InputType,
    rules: FieldRules,
    custom: Option<CustomValidator>,
    options: Vec<String>,
}

impl FieldDescriptor {
    fn with_kind(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            input_type: InputType::Text,
            rules: FieldRules::default(),
            custom: None,
            options: Vec::new(),
        }
    }

    /// Single-line input of the given type
    pub fn input(key: impl Into<String>, label: impl Into<String>, input_type: InputType) -> Self {
        let mut descriptor = Self::with_kind(key, label, FieldKind::TextInput);
        descriptor.input_type = input_type;
        descriptor
    }

    /// Single choice from a fixed, ordered option list
    pub fn select<I, S>(key: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut descriptor = Self::with_kind(key, label, FieldKind::Select);
        descriptor.options = options.into_iter().map(Into::into).collect();
        descriptor
    }

    pub fn checkbox(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_kind(key, label, FieldKind::Checkbox)
    }

    /// Multi-line text area
    pub fn textarea(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_kind(key, label, FieldKind::MultilineText)
    }

    pub fn required(mut self) -> Self {
        self.rules.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.rules.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.rules.max_length = Some(max);
        self
    }

    /// Compile and attach a format pattern
    pub fn pattern(self, pattern: &str) -> Result<Self, SchemaError> {
        Ok(self.pattern_regex(Regex::new(pattern)?))
    }

    pub fn pattern_regex(mut self, pattern: Regex) -> Self {
        self.rules.pattern = Some(pattern);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.rules.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.rules.max = Some(max);
        self
    }

    /// Attach a custom validator, evaluated after the built-in rules
    pub fn custom(mut self, validator: CustomValidator) -> Self {
        self.custom = Some(validator);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }

    pub fn custom_validator(&self) -> Option<&CustomValidator> {
        self.custom.as_ref()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Whether values of this field are coerced to numbers
    pub fn is_numeric(&self) -> bool {
        self.kind == FieldKind::TextInput && self.input_type == InputType::Number
    }

    fn check(&self) -> Result<(), SchemaError> {
        if self.key.is_empty() {
            return Err(SchemaError::EmptyKey {
                label: self.label.clone(),
            });
        }

        match self.kind {
            FieldKind::Select if self.options.is_empty() => {
                return Err(SchemaError::MissingOptions { key: self.key.clone() });
            }
            FieldKind::Select => {}
            _ if !self.options.is_empty() => {
                return Err(SchemaError::UnexpectedOptions { key: self.key.clone() });
            }
            _ => {}
        }

        let string_rules = self.kind.is_string_kind() && !self.is_numeric();
        let not_applicable = |rule| SchemaError::RuleNotApplicable {
            key: self.key.clone(),
            rule,
        };
        if !string_rules {
            if self.rules.min_length.is_some() {
                return Err(not_applicable("min_length"));
            }
            if self.rules.max_length.is_some() {
                return Err(not_applicable("max_length"));
            }
            if self.rules.pattern.is_some() {
                return Err(not_applicable("pattern"));
            }
        }
        if !self.is_numeric() {
            if self.rules.min.is_some() {
                return Err(not_applicable("min"));
            }
            if self.rules.max.is_some() {
                return Err(not_applicable("max"));
            }
        }

        if let (Some(min), Some(max)) = (self.rules.min_length, self.rules.max_length) {
            if min > max {
                return Err(SchemaError::InvalidRange {
                    key: self.key.clone(),
                    rule: "length",
                });
            }
        }
        if let (Some(min), Some(max)) = (self.rules.min, self.rules.max) {
            if min > max {
                return Err(SchemaError::InvalidRange {
                    key: self.key.clone(),
                    rule: "range",
                });
            }
        }

        Ok(())
    }
}

/// Ordered list of field descriptors with unique keys.
///
/// List order is render order and the order every revalidation pass visits
/// fields in.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
    index: HashMap<String, usize>,
}

impl Schema {
    /// Check every descriptor and build the schema.
    ///
    /// Email inputs without a pattern receive [`IMPLICIT_EMAIL_PATTERN`].
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, SchemaError> {
        let mut index = HashMap::with_capacity(fields.len());
        let mut checked = Vec::with_capacity(fields.len());

        for (position, mut descriptor) in fields.into_iter().enumerate() {
            descriptor.check()?;
            if index.insert(descriptor.key.clone(), position).is_some() {
                return Err(SchemaError::DuplicateKey { key: descriptor.key });
            }
            if descriptor.kind == FieldKind::TextInput
                && descriptor.input_type == InputType::Email
                && descriptor.rules.pattern.is_none()
            {
                descriptor.rules.pattern = Some(Regex::new(IMPLICIT_EMAIL_PATTERN)?);
            }
            checked.push(descriptor);
        }

        Ok(Self {
            fields: checked,
            index,
        })
    }

    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.index.get(key).map(|&position| &self.fields[position])
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldDescriptor::key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
