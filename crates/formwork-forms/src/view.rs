//! Render model handed to presentation adapters

use formwork_validation::{ErrorSet, FieldKind, FieldValue, InputType, Schema, ValueSet};
use serde::Serialize;

/// Everything a presentation layer needs to draw one field.
///
/// No markup is produced here; adapters map `kind` and `input_type` onto
/// their own controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    /// Only set for text inputs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    /// Current value, or the default for the kind when unset
    pub value: FieldValue,
    /// Current message, empty when valid
    pub error: String,
    pub invalid: bool,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Text of the empty first choice of a select
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Build the view of every schema field, in schema order
pub fn field_views(schema: &Schema, values: &ValueSet, errors: &ErrorSet) -> Vec<FieldView> {
    schema
        .iter()
        .map(|descriptor| {
            let rules = descriptor.rules();
            let error = errors.message(descriptor.key()).to_string();
            let placeholder = (descriptor.kind() == FieldKind::Select)
                .then(|| format!("Select {}...", descriptor.label().to_lowercase()));
            let input_type =
                (descriptor.kind() == FieldKind::TextInput).then(|| descriptor.input_type());

            FieldView {
                key: descriptor.key().to_string(),
                label: descriptor.label().to_string(),
                kind: descriptor.kind(),
                input_type,
                value: values.value_or_default(descriptor),
                invalid: !error.is_empty(),
                error,
                required: rules.required,
                options: descriptor.options().to_vec(),
                placeholder,
                min: rules.min,
                max: rules.max,
                pattern: rules.pattern.as_ref().map(|p| p.as_str().to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_validation::{validate_all, FieldDescriptor};

    fn schema() -> Schema {
        Schema::new(vec![
            FieldDescriptor::select("state", "State", ["California", "Texas"]).required(),
            FieldDescriptor::checkbox("subscribe", "Subscribe to Newsletter"),
            FieldDescriptor::input("salary", "Expected Salary", InputType::Number)
                .min(0.0)
                .max(1_000_000.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_views_default_unset_values() {
        let schema = schema();
        let views = field_views(&schema, &ValueSet::new(), &ErrorSet::new());

        assert_eq!(views.len(), 3);
        assert_eq!(views[0].value, FieldValue::text(""));
        assert_eq!(views[1].value, FieldValue::Bool(false));
        assert!(views.iter().all(|view| !view.invalid && view.error.is_empty()));
    }

    #[test]
    fn test_select_view() {
        let schema = schema();
        let views = field_views(&schema, &ValueSet::new(), &ErrorSet::new());

        let state = &views[0];
        assert_eq!(state.placeholder.as_deref(), Some("Select state..."));
        assert_eq!(state.options, vec!["California", "Texas"]);
        assert!(state.required);
        assert_eq!(state.input_type, None);
    }

    #[test]
    fn test_views_reflect_errors() {
        let schema = schema();
        let values = ValueSet::new().set("salary", -1);
        let errors = validate_all(&schema, &values);
        let views = field_views(&schema, &values, &errors);

        assert_eq!(views[0].error, "State is required");
        assert!(views[0].invalid);
        assert_eq!(views[2].error, "Must be at least 0");
        assert_eq!(views[2].input_type, Some(InputType::Number));
        assert_eq!(views[2].min, Some(0.0));
        assert_eq!(views[2].max, Some(1_000_000.0));
    }

    #[test]
    fn test_view_json() {
        let schema = schema();
        let views = field_views(&schema, &ValueSet::new(), &ErrorSet::new());
        let json = serde_json::to_value(&views).unwrap();

        assert_eq!(json[0]["kind"], "select");
        assert_eq!(json[2]["input_type"], "number");
        assert!(json[1].get("options").is_none());
    }
}
