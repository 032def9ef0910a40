//! Input elements collected by an `ActionCard`.
//!
//! Every input kind carries the common `id`, `is_required`, `title` and
//! `value` fields followed by its own fields. Each kind owns a complete field
//! table built once; tables are never shared or extended after creation.

use once_cell::sync::Lazy;

use crate::element::{CardElement, ElementKind};
use crate::error::CardError;
use crate::field::{FieldSpec, Schema, ValueKind};
use crate::value::{FieldInput, FieldValue};

/// Values accepted by the `style` field of a multiple-choice input.
pub const CHOICE_STYLES: &[&str] = &["normal", "expanded"];

fn input_fields(own: Vec<FieldSpec>) -> Vec<FieldSpec> {
    let mut fields = vec![
        FieldSpec::one("id", ValueKind::Str),
        FieldSpec::one("is_required", ValueKind::Bool),
        FieldSpec::one("title", ValueKind::Str),
        FieldSpec::one("value", ValueKind::Str),
    ];
    fields.extend(own);
    fields
}

pub(crate) static TEXT_INPUT_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(input_fields(vec![
        FieldSpec::one("is_multiline", ValueKind::Bool),
        FieldSpec::one("max_length", ValueKind::Int),
    ]))
});

pub(crate) static DATE_INPUT_SCHEMA: Lazy<Schema> =
    Lazy::new(|| Schema::new(input_fields(vec![FieldSpec::one("include_time", ValueKind::Bool)])));

pub(crate) static MULTIPLE_CHOICE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(input_fields(vec![
        FieldSpec::many("choices", ValueKind::Choice),
        FieldSpec::one("is_multi_select", ValueKind::Bool),
        FieldSpec::one("style", ValueKind::Str).allowed(CHOICE_STYLES),
    ]))
});

pub(crate) static CHOICE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::one("display", ValueKind::Str),
        FieldSpec::one("value", ValueKind::Str),
    ])
});

/// Setters for the fields every input kind shares.
macro_rules! common_input_setters {
    ($name:ident => $kind:ident) => {
        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            pub fn new() -> Self {
                Self(CardElement::new(ElementKind::$kind))
            }

            pub fn set_id(&mut self, id: impl Into<String>) {
                self.0.store("id", FieldValue::Str(id.into()));
            }

            pub fn set_is_required(&mut self, is_required: bool) {
                self.0.store("is_required", FieldValue::Bool(is_required));
            }

            pub fn set_title(&mut self, title: impl Into<String>) {
                self.0.store("title", FieldValue::Str(title.into()));
            }

            pub fn set_value(&mut self, value: impl Into<String>) {
                self.0.store("value", FieldValue::Str(value.into()));
            }
        }
    };
}

element_kind!(
    /// A free-text input.
    TextInput => TextInput
);
common_input_setters!(TextInput => TextInput);

impl TextInput {
    pub fn set_is_multiline(&mut self, is_multiline: bool) {
        self.0.store("is_multiline", FieldValue::Bool(is_multiline));
    }

    pub fn set_max_length(&mut self, max_length: i64) {
        self.0.store("max_length", FieldValue::Int(max_length));
    }
}

element_kind!(
    /// A date (and optionally time) picker.
    DateInput => DateInput
);
common_input_setters!(DateInput => DateInput);

impl DateInput {
    pub fn set_include_time(&mut self, include_time: bool) {
        self.0.store("include_time", FieldValue::Bool(include_time));
    }
}

element_kind!(
    /// One option of a multiple-choice input.
    Choice => Choice
);

impl Choice {
    pub fn new(display: impl Into<String>, value: impl Into<String>) -> Self {
        let mut element = CardElement::new(ElementKind::Choice);
        element.store("display", FieldValue::Str(display.into()));
        element.store("value", FieldValue::Str(value.into()));
        Self(element)
    }
}

element_kind!(
    /// A list of choices rendered as a drop-down or as expanded options.
    MultipleChoiceInput => MultipleChoiceInput
);
common_input_setters!(MultipleChoiceInput => MultipleChoiceInput);

impl MultipleChoiceInput {
    /// Replaces the choices with a `display => value` mapping or a list of [`Choice`]s.
    pub fn set_choices(&mut self, choices: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.set("choices", choices)
    }

    pub fn add_choices(&mut self, choices: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.append("choices", choices)
    }

    pub fn set_is_multi_select(&mut self, is_multi_select: bool) {
        self.0.store("is_multi_select", FieldValue::Bool(is_multi_select));
    }

    /// Fails unless `style` is one of [`CHOICE_STYLES`].
    pub fn set_style(&mut self, style: &str) -> Result<(), CardError> {
        self.0.set("style", style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_schemas_do_not_leak_fields() {
        let mut text = TextInput::new();
        assert!(text.set("include_time", true).is_err());
        let mut date = DateInput::new();
        assert!(date.set("max_length", 10_i64).is_err());
        assert!(date.set("choices", [("a", "1")]).is_err());
        assert!(CardElement::new(ElementKind::TextInput).schema().field("style").is_none());
    }

    #[test]
    fn common_fields_come_first() {
        let names: Vec<&str> = MULTIPLE_CHOICE_SCHEMA
            .fields()
            .iter()
            .map(|spec| spec.name)
            .collect();
        assert_eq!(
            names,
            vec!["id", "is_required", "title", "value", "choices", "is_multi_select", "style"]
        );
    }

    #[test]
    fn style_must_be_known() {
        let mut input = MultipleChoiceInput::new();
        input.set_style("expanded").expect("style");
        let err = input.set_style("compact").unwrap_err();
        assert!(matches!(err, CardError::InvalidValue { .. }));
        assert_eq!(
            input.get("style").ok().and_then(FieldValue::as_str),
            Some("expanded")
        );
    }
}
