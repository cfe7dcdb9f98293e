//! Conversion of raw UI input into typed field values

use formwork_validation::{FieldDescriptor, FieldKind, FieldValue};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Floating-point grammar accepted by a browser number input: optional
/// minus, integer and/or fraction digits, optional exponent.
const NUMBER_GRAMMAR: &str = r"^-?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$";

fn number_grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| Regex::new(NUMBER_GRAMMAR).expect("number grammar is a valid pattern"))
}

/// Parse the text of a numeric input, or `None` when a browser would report
/// an empty value. A leading `+`, a trailing `.` and surrounding whitespace
/// are all rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    if !number_grammar().is_match(text) {
        return None;
    }
    text.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Payload of a UI change event, before it is typed by field kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    /// Checked state of a checkbox control
    Checked(bool),
    /// Text content of any other control
    Text(String),
}

impl RawInput {
    pub fn text(value: impl Into<String>) -> Self {
        RawInput::Text(value.into())
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::Text(value)
    }
}

impl From<bool> for RawInput {
    fn from(checked: bool) -> Self {
        RawInput::Checked(checked)
    }
}

/// Type a raw input according to the field it belongs to.
///
/// Checkboxes become `Bool`. Numeric inputs become a finite `Number`, or
/// empty text when the entry does not parse under [`parse_number`], so that
/// a `required` rule sees it as missing rather than as zero. Everything else is kept as the raw,
/// untrimmed text. Never fails.
pub fn coerce(descriptor: &FieldDescriptor, raw: RawInput) -> FieldValue {
    if descriptor.kind() == FieldKind::Checkbox {
        let checked = match raw {
            RawInput::Checked(checked) => checked,
            RawInput::Text(text) => matches!(text.as_str(), "true" | "on"),
        };
        return FieldValue::Bool(checked);
    }

    let text = match raw {
        RawInput::Text(text) => text,
        RawInput::Checked(checked) => checked.to_string(),
    };

    if descriptor.is_numeric() {
        return match parse_number(&text) {
            Some(number) => FieldValue::Number(number),
            None => FieldValue::Text(String::new()),
        };
    }

    FieldValue::Text(text)
}
