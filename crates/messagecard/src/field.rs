//! Declarative field descriptors shared by every element kind.

use crate::element::ElementKind;

/// Type contract of a single field (or of each member of a sequence field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    Bool,
    Int,
    Image,
    Fact,
    Header,
    UriTarget,
    Choice,
    Section,
    /// Any action that may appear in a card or section action list.
    Action,
    /// Actions that may be nested inside an action card.
    SimpleAction,
    Input,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Str => "string",
            ValueKind::Bool => "bool",
            ValueKind::Int => "integer",
            ValueKind::Image => "Image",
            ValueKind::Fact => "Fact",
            ValueKind::Header => "Header",
            ValueKind::UriTarget => "UriTarget",
            ValueKind::Choice => "Choice",
            ValueKind::Section => "Section",
            ValueKind::Action => "Action",
            ValueKind::SimpleAction => "OpenUri or HttpPOST action",
            ValueKind::Input => "Input",
        }
    }

    /// Whether a nested element of `kind` satisfies this contract.
    pub fn accepts_element(self, kind: ElementKind) -> bool {
        use ElementKind as K;
        match self {
            ValueKind::Image => kind == K::Image,
            ValueKind::Fact => kind == K::Fact,
            ValueKind::Header => kind == K::Header,
            ValueKind::UriTarget => kind == K::UriTarget,
            ValueKind::Choice => kind == K::Choice,
            ValueKind::Section => kind == K::Section,
            ValueKind::Action => matches!(kind, K::OpenUri | K::HttpPost | K::ActionCard),
            ValueKind::SimpleAction => matches!(kind, K::OpenUri | K::HttpPost),
            ValueKind::Input => {
                matches!(kind, K::TextInput | K::DateInput | K::MultipleChoiceInput)
            }
            ValueKind::Str | ValueKind::Bool | ValueKind::Int => false,
        }
    }
}

/// Contract for one named field of an element kind.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Payload key, derived once from `name`.
    pub key: String,
    pub kind: ValueKind,
    pub sequence: bool,
    pub allowed: Option<&'static [&'static str]>,
    /// Sub-field whose value must differ between members of a sequence.
    pub unique_by: Option<&'static str>,
}

impl FieldSpec {
    pub fn one(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            key: wire_key(name),
            kind,
            sequence: false,
            allowed: None,
            unique_by: None,
        }
    }

    pub fn many(name: &'static str, kind: ValueKind) -> Self {
        Self {
            sequence: true,
            ..Self::one(name, kind)
        }
    }

    pub fn allowed(mut self, values: &'static [&'static str]) -> Self {
        self.allowed = Some(values);
        self
    }

    pub fn unique_by(mut self, key: &'static str) -> Self {
        self.unique_by = Some(key);
        self
    }
}

/// Ordered field table of one element kind. Order is the payload order.
#[derive(Debug)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

/// Turns a `snake_case` field name into its `camelCase` payload key.
pub fn wire_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for (index, word) in name.split('_').enumerate() {
        if index == 0 {
            key.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            key.extend(first.to_uppercase());
            key.extend(chars.flat_map(char::to_lowercase));
        }
    }
    key
}
