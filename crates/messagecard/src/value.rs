//! Field values as stored on an element, and the inputs accepted when setting them.

use crate::element::CardElement;
use crate::error::CardError;
use crate::field::{FieldSpec, ValueKind};
use crate::kinds::{Choice, Fact, Header, Image, UriTarget};

/// A value held by a set field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Element(CardElement),
    List(Vec<FieldValue>),
}

impl FieldValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Str(_) => "string",
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) => "integer",
            FieldValue::Element(element) => element.kind().name(),
            FieldValue::List(_) => "list",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&CardElement> {
        match self {
            FieldValue::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut CardElement> {
        match self {
            FieldValue::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(values) => Some(values),
            _ => None,
        }
    }
}

/// Ordered name/value entries, the mapping form several element kinds can be built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairs(Vec<(String, String)>);

impl Pairs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Pairs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Pairs(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Pairs {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for Pairs {
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}

/// A value offered to [`CardElement::set`], before validation and conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Str(String),
    Bool(bool),
    Int(i64),
    Element(CardElement),
    List(Vec<FieldInput>),
    Pairs(Pairs),
}

impl FieldInput {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldInput::Str(_) => "string",
            FieldInput::Bool(_) => "bool",
            FieldInput::Int(_) => "integer",
            FieldInput::Element(element) => element.kind().name(),
            FieldInput::List(_) => "list",
            FieldInput::Pairs(_) => "mapping",
        }
    }
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        FieldInput::Str(value.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        FieldInput::Str(value)
    }
}

impl From<&String> for FieldInput {
    fn from(value: &String) -> Self {
        FieldInput::Str(value.clone())
    }
}

impl From<bool> for FieldInput {
    fn from(value: bool) -> Self {
        FieldInput::Bool(value)
    }
}

impl From<i64> for FieldInput {
    fn from(value: i64) -> Self {
        FieldInput::Int(value)
    }
}

impl From<i32> for FieldInput {
    fn from(value: i32) -> Self {
        FieldInput::Int(i64::from(value))
    }
}

impl From<u32> for FieldInput {
    fn from(value: u32) -> Self {
        FieldInput::Int(i64::from(value))
    }
}

impl From<CardElement> for FieldInput {
    fn from(value: CardElement) -> Self {
        FieldInput::Element(value)
    }
}

impl From<Pairs> for FieldInput {
    fn from(value: Pairs) -> Self {
        FieldInput::Pairs(value)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for FieldInput {
    fn from(entries: [(K, V); N]) -> Self {
        FieldInput::Pairs(Pairs::from(entries))
    }
}

impl<T: Into<FieldInput>> From<Vec<T>> for FieldInput {
    fn from(values: Vec<T>) -> Self {
        FieldInput::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<FieldValue> for FieldInput {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Str(v) => FieldInput::Str(v),
            FieldValue::Bool(v) => FieldInput::Bool(v),
            FieldValue::Int(v) => FieldInput::Int(v),
            FieldValue::Element(v) => FieldInput::Element(v),
            FieldValue::List(v) => FieldInput::List(v.into_iter().map(Into::into).collect()),
        }
    }
}

/// Validates `input` against `spec`, applying at most one conversion.
pub(crate) fn coerce(spec: &FieldSpec, input: FieldInput) -> Result<FieldValue, CardError> {
    if let FieldInput::List(members) = input {
        if !spec.sequence {
            return Err(CardError::type_mismatch(spec.name, spec.kind.name(), "list"));
        }
        let values = members
            .into_iter()
            .map(|member| {
                let actual = member.type_name();
                let value = exact(spec.kind, member).ok_or_else(|| {
                    CardError::type_mismatch(spec.name, spec.kind.name(), actual)
                })?;
                check_allowed(spec, &value)?;
                Ok(value)
            })
            .collect::<Result<Vec<_>, CardError>>()?;
        return Ok(FieldValue::List(values));
    }

    let actual = input.type_name();
    let value = match exact_or_convert(spec.kind, input) {
        Some(Converted::One(value)) => value,
        Some(Converted::Many(values)) if spec.sequence => FieldValue::List(values),
        Some(Converted::Many(mut values)) if values.len() == 1 => values.remove(0),
        Some(Converted::Many(values)) => {
            return Err(CardError::type_mismatch(
                spec.name,
                spec.kind.name(),
                format!("mapping of {} entries", values.len()),
            ));
        }
        None => return Err(CardError::type_mismatch(spec.name, spec.kind.name(), actual)),
    };

    match value {
        FieldValue::List(values) => {
            for value in &values {
                check_allowed(spec, value)?;
            }
            Ok(FieldValue::List(values))
        }
        value => {
            check_allowed(spec, &value)?;
            if spec.sequence {
                Ok(FieldValue::List(vec![value]))
            } else {
                Ok(value)
            }
        }
    }
}

enum Converted {
    One(FieldValue),
    Many(Vec<FieldValue>),
}

fn exact(kind: ValueKind, input: FieldInput) -> Option<FieldValue> {
    match (kind, input) {
        (ValueKind::Str, FieldInput::Str(value)) => Some(FieldValue::Str(value)),
        (ValueKind::Bool, FieldInput::Bool(value)) => Some(FieldValue::Bool(value)),
        (ValueKind::Int, FieldInput::Int(value)) => Some(FieldValue::Int(value)),
        (kind, FieldInput::Element(element)) if kind.accepts_element(element.kind()) => {
            Some(FieldValue::Element(element))
        }
        _ => None,
    }
}

fn exact_or_convert(kind: ValueKind, input: FieldInput) -> Option<Converted> {
    match input {
        FieldInput::Str(url) => match kind {
            ValueKind::Str => Some(Converted::One(FieldValue::Str(url))),
            ValueKind::Image => Some(Converted::One(Image::new(url).into())),
            ValueKind::UriTarget => Some(Converted::One(UriTarget::with_default_os(url).into())),
            _ => None,
        },
        FieldInput::Pairs(pairs) => {
            let elements: Vec<FieldValue> = match kind {
                ValueKind::Image if pairs.len() == 1 => pairs
                    .iter()
                    .map(|(title, url)| Image::new(url).with_title(title).into())
                    .collect(),
                ValueKind::Fact => pairs.iter().map(|(k, v)| Fact::new(k, v).into()).collect(),
                ValueKind::Header => pairs.iter().map(|(k, v)| Header::new(k, v).into()).collect(),
                ValueKind::UriTarget => {
                    pairs.iter().map(|(k, v)| UriTarget::new(k, v).into()).collect()
                }
                ValueKind::Choice => pairs.iter().map(|(k, v)| Choice::new(k, v).into()).collect(),
                _ => return None,
            };
            Some(Converted::Many(elements))
        }
        other => exact(kind, other).map(Converted::One),
    }
}

fn check_allowed(spec: &FieldSpec, value: &FieldValue) -> Result<(), CardError> {
    let Some(allowed) = spec.allowed else {
        return Ok(());
    };
    let member = match value {
        FieldValue::Str(text) => allowed.contains(&text.as_str()),
        _ => false,
    };
    if member {
        Ok(())
    } else {
        Err(CardError::invalid_value(
            spec.name,
            format!("expected one of {}", allowed.join(", ")),
        ))
    }
}
