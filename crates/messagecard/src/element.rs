//! The validated, schema-driven element shared by every card kind.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

use serde_json::{Map, Value};

use crate::error::CardError;
use crate::field::{FieldSpec, Schema};
use crate::kinds::{actions, card, inputs, section};
use crate::render;
use crate::value::{FieldInput, FieldValue, coerce};

/// Payload context marker carried by the root card.
pub const SCHEMA_CONTEXT: &str = "https://schema.org/extensions";

/// The closed set of element kinds a card can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    MessageCard,
    Section,
    Image,
    Fact,
    OpenUri,
    UriTarget,
    HttpPost,
    Header,
    ActionCard,
    TextInput,
    DateInput,
    MultipleChoiceInput,
    Choice,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::MessageCard => "MessageCard",
            ElementKind::Section => "Section",
            ElementKind::Image => "Image",
            ElementKind::Fact => "Fact",
            ElementKind::OpenUri => "OpenUriAction",
            ElementKind::UriTarget => "UriTarget",
            ElementKind::HttpPost => "HttpPostAction",
            ElementKind::Header => "Header",
            ElementKind::ActionCard => "ActionCard",
            ElementKind::TextInput => "TextInput",
            ElementKind::DateInput => "DateInput",
            ElementKind::MultipleChoiceInput => "MultipleChoiceInput",
            ElementKind::Choice => "Choice",
        }
    }

    /// Value of the `@type` entry, absent for plain data kinds.
    pub fn discriminator(self) -> Option<&'static str> {
        match self {
            ElementKind::MessageCard => Some("MessageCard"),
            ElementKind::OpenUri => Some("OpenUri"),
            ElementKind::HttpPost => Some("HttpPOST"),
            ElementKind::ActionCard => Some("ActionCard"),
            ElementKind::TextInput => Some("TextInput"),
            ElementKind::DateInput => Some("DateInput"),
            ElementKind::MultipleChoiceInput => Some("MultipleChoiceInput"),
            ElementKind::Section
            | ElementKind::Image
            | ElementKind::Fact
            | ElementKind::UriTarget
            | ElementKind::Header
            | ElementKind::Choice => None,
        }
    }

    /// Value of the `@context` entry, root card only.
    pub fn context(self) -> Option<&'static str> {
        match self {
            ElementKind::MessageCard => Some(SCHEMA_CONTEXT),
            _ => None,
        }
    }

    pub fn schema(self) -> &'static Schema {
        match self {
            ElementKind::MessageCard => &card::MESSAGE_CARD_SCHEMA,
            ElementKind::Section => &section::SECTION_SCHEMA,
            ElementKind::Image => &section::IMAGE_SCHEMA,
            ElementKind::Fact => &section::FACT_SCHEMA,
            ElementKind::OpenUri => &actions::OPEN_URI_SCHEMA,
            ElementKind::UriTarget => &actions::URI_TARGET_SCHEMA,
            ElementKind::HttpPost => &actions::HTTP_POST_SCHEMA,
            ElementKind::Header => &actions::HEADER_SCHEMA,
            ElementKind::ActionCard => &actions::ACTION_CARD_SCHEMA,
            ElementKind::TextInput => &inputs::TEXT_INPUT_SCHEMA,
            ElementKind::DateInput => &inputs::DATE_INPUT_SCHEMA,
            ElementKind::MultipleChoiceInput => &inputs::MULTIPLE_CHOICE_SCHEMA,
            ElementKind::Choice => &inputs::CHOICE_SCHEMA,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An element instance: its kind plus the fields that have been set.
///
/// Unset fields are absent, which is distinct from a field set to an empty
/// string or an empty list. Equality compares the kind and every set field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardElement {
    kind: ElementKind,
    values: BTreeMap<&'static str, FieldValue>,
}

impl CardElement {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            values: BTreeMap::new(),
        }
    }

    /// Builds an element and sets each named field in turn.
    pub fn with_fields<'a>(
        kind: ElementKind,
        fields: impl IntoIterator<Item = (&'a str, FieldInput)>,
    ) -> Result<Self, CardError> {
        let mut element = Self::new(kind);
        for (name, value) in fields {
            element.set(name, value)?;
        }
        Ok(element)
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn schema(&self) -> &'static Schema {
        self.kind.schema()
    }

    /// Validates `value` against the field contract and stores it, replacing any previous value.
    pub fn set(&mut self, name: &str, value: impl Into<FieldInput>) -> Result<(), CardError> {
        let spec = self.spec(name)?;
        let value = coerce(spec, value.into())?;
        if let Some(values) = value.as_list() {
            check_unique(spec, values)?;
        }
        self.values.insert(spec.name, value);
        Ok(())
    }

    /// Appends to a sequence field, starting a new sequence when it is unset.
    pub fn append(&mut self, name: &str, value: impl Into<FieldInput>) -> Result<(), CardError> {
        let spec = self.spec(name)?;
        if !spec.sequence {
            return Err(CardError::invalid_value(spec.name, "field does not hold a sequence"));
        }
        let FieldValue::List(added) = coerce(spec, value.into())? else {
            return Err(CardError::invalid_value(spec.name, "field does not hold a sequence"));
        };
        let existing = self
            .values
            .get(spec.name)
            .and_then(FieldValue::as_list)
            .unwrap_or_default();
        check_unique(spec, existing.iter().chain(&added))?;
        match self.values.get_mut(spec.name) {
            Some(FieldValue::List(existing)) => existing.extend(added),
            _ => {
                self.values.insert(spec.name, FieldValue::List(added));
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&FieldValue, CardError> {
        let spec = self.spec(name)?;
        self.values
            .get(spec.name)
            .ok_or_else(|| CardError::not_set(spec.name))
    }

    /// Edit access to a nested element field; its own fields stay validated.
    pub fn element_mut(&mut self, name: &str) -> Result<ElementMut<'_>, CardError> {
        let spec = self.spec(name)?;
        let value = self
            .values
            .get_mut(spec.name)
            .ok_or_else(|| CardError::not_set(spec.name))?;
        let actual = value.type_name();
        value
            .as_element_mut()
            .map(ElementMut)
            .ok_or_else(|| CardError::type_mismatch(spec.name, "element", actual))
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Nested elements held by a sequence field, empty when unset.
    pub fn elements<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a CardElement> + use<'a> {
        self.values
            .get(name)
            .and_then(FieldValue::as_list)
            .unwrap_or_default()
            .iter()
            .filter_map(FieldValue::as_element)
    }

    /// Stores a value that is well-typed by construction.
    pub(crate) fn store(&mut self, name: &'static str, value: FieldValue) {
        debug_assert!(self.schema().field(name).is_some(), "{name} not in schema");
        self.values.insert(name, value);
    }

    /// Appends a value that is well-typed by construction to a sequence field.
    pub(crate) fn store_append(&mut self, name: &'static str, value: FieldValue) {
        debug_assert!(self.schema().field(name).is_some(), "{name} not in schema");
        match self.values.get_mut(name) {
            Some(FieldValue::List(existing)) => existing.push(value),
            _ => {
                self.values.insert(name, FieldValue::List(vec![value]));
            }
        }
    }

    fn spec(&self, name: &str) -> Result<&'static FieldSpec, CardError> {
        self.kind
            .schema()
            .field(name)
            .ok_or_else(|| CardError::UnknownField {
                kind: self.kind.name(),
                field: name.to_string(),
            })
    }

    /// Ordered payload: reserved entries first, then set fields in schema order.
    pub fn render(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        if let Some(tag) = self.kind.discriminator() {
            payload.insert("@type".to_string(), Value::from(tag));
        }
        if let Some(context) = self.kind.context() {
            payload.insert("@context".to_string(), Value::from(context));
        }
        for spec in self.schema().fields() {
            if let Some(value) = self.values.get(spec.name) {
                payload.insert(spec.key.clone(), render_value(value));
            }
        }
        payload
    }

    pub fn payload(&self) -> Value {
        Value::Object(self.render())
    }

    /// Compact text form with a space after every `:` and `,`.
    pub fn to_json(&self) -> String {
        render::to_text(&self.payload(), None)
    }

    /// Multi-line text form indented by `indent` spaces per level.
    pub fn to_json_pretty(&self, indent: usize) -> String {
        render::to_text(&self.payload(), Some(indent))
    }
}

/// Rejects a sequence whose members repeat the field's `unique_by` sub-field.
fn check_unique<'a>(
    spec: &FieldSpec,
    values: impl IntoIterator<Item = &'a FieldValue>,
) -> Result<(), CardError> {
    let Some(key) = spec.unique_by else {
        return Ok(());
    };
    let mut seen: Vec<&str> = Vec::new();
    for member in values.into_iter().filter_map(FieldValue::as_element) {
        let Some(id) = member.get(key).ok().and_then(FieldValue::as_str) else {
            continue;
        };
        if seen.contains(&id) {
            return Err(CardError::invalid_value(
                spec.name,
                format!("entry already set for {key} `{id}`"),
            ));
        }
        seen.push(id);
    }
    Ok(())
}

/// Edit handle for a nested element.
///
/// Only validated `set`/`append` calls reach the element, so it keeps its
/// kind and every field keeps its contract. The element cannot be swapped
/// for one of another kind:
///
/// ```compile_fail
/// use messagecard::{Fact, Section};
///
/// let mut section = Section::new();
/// section.set_hero_image("http://hero").unwrap();
/// let mut hero = section.element_mut("hero_image").unwrap();
/// *hero = Fact::new("n", "v").into_element();
/// ```
///
/// Typed wrappers hand out shared access only:
///
/// ```compile_fail
/// use messagecard::{CardElement, Fact, MessageCard};
///
/// let mut card = MessageCard::new();
/// let inner: &mut CardElement = &mut card;
/// *inner = Fact::new("n", "v").into_element();
/// ```
#[derive(Debug)]
pub struct ElementMut<'a>(&'a mut CardElement);

impl ElementMut<'_> {
    pub fn set(&mut self, name: &str, value: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.set(name, value)
    }

    pub fn append(&mut self, name: &str, value: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.append(name, value)
    }

    pub fn element_mut(&mut self, name: &str) -> Result<ElementMut<'_>, CardError> {
        self.0.element_mut(name)
    }
}

impl Deref for ElementMut<'_> {
    type Target = CardElement;

    fn deref(&self) -> &CardElement {
        self.0
    }
}

fn render_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Str(text) => Value::from(text.as_str()),
        FieldValue::Bool(flag) => Value::Bool(*flag),
        FieldValue::Int(number) => Value::from(*number),
        FieldValue::Element(element) => element.payload(),
        FieldValue::List(values) => Value::Array(values.iter().map(render_value).collect()),
    }
}

impl fmt::Display for CardElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set: Vec<&str> = self
            .schema()
            .fields()
            .iter()
            .filter(|spec| self.values.contains_key(spec.name))
            .map(|spec| spec.name)
            .collect();
        write!(f, "{}({})", self.kind.name(), set.join(", "))
    }
}
