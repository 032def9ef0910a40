use once_cell::sync::Lazy;

use crate::element::{CardElement, ElementKind};
use crate::error::CardError;
use crate::field::{FieldSpec, Schema, ValueKind};
use crate::value::{FieldInput, FieldValue};

/// Platform identifier used when an `OpenUri` target is given as a bare URL.
pub const DEFAULT_OS: &str = "default";

pub(crate) static OPEN_URI_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::one("name", ValueKind::Str),
        FieldSpec::many("targets", ValueKind::UriTarget).unique_by("os"),
    ])
});

pub(crate) static URI_TARGET_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::one("os", ValueKind::Str),
        FieldSpec::one("uri", ValueKind::Str),
    ])
});

pub(crate) static HTTP_POST_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::one("name", ValueKind::Str),
        FieldSpec::one("target", ValueKind::Str),
        FieldSpec::many("headers", ValueKind::Header),
        FieldSpec::one("body", ValueKind::Str),
        FieldSpec::one("body_content_type", ValueKind::Str),
    ])
});

pub(crate) static HEADER_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::one("name", ValueKind::Str),
        FieldSpec::one("value", ValueKind::Str),
    ])
});

pub(crate) static ACTION_CARD_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::one("name", ValueKind::Str),
        FieldSpec::many("inputs", ValueKind::Input),
        FieldSpec::many("actions", ValueKind::SimpleAction),
    ])
});

element_kind!(
    /// One platform-specific URI of an `OpenUri` action.
    UriTarget => UriTarget
);

impl UriTarget {
    pub fn new(os: impl Into<String>, uri: impl Into<String>) -> Self {
        let mut element = CardElement::new(ElementKind::UriTarget);
        element.store("os", FieldValue::Str(os.into()));
        element.store("uri", FieldValue::Str(uri.into()));
        Self(element)
    }

    pub fn with_default_os(uri: impl Into<String>) -> Self {
        Self::new(DEFAULT_OS, uri)
    }
}

element_kind!(
    /// An `OpenUri` action: a button opening one URI per platform.
    OpenUriAction => OpenUri
);

impl OpenUriAction {
    /// `targets` is a bare URL (platform `default`), an `os => uri` mapping,
    /// or a list of [`UriTarget`]s. Each platform may appear once.
    pub fn new(name: impl Into<String>, targets: impl Into<FieldInput>) -> Result<Self, CardError> {
        let mut element = CardElement::new(ElementKind::OpenUri);
        element.store("name", FieldValue::Str(name.into()));
        element.set("targets", targets)?;
        Ok(Self(element))
    }

    /// Adds a URI for a platform that has no target yet.
    pub fn add_target(
        &mut self,
        os: impl Into<String>,
        uri: impl Into<String>,
    ) -> Result<(), CardError> {
        self.0.append("targets", UriTarget::new(os, uri))
    }

    /// Platform identifiers of the current targets, in order.
    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.0
            .elements("targets")
            .filter_map(|target| target.get("os").ok().and_then(FieldValue::as_str))
    }
}

element_kind!(
    /// A request header sent by an `HttpPOST` action.
    Header => Header
);

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut element = CardElement::new(ElementKind::Header);
        element.store("name", FieldValue::Str(name.into()));
        element.store("value", FieldValue::Str(value.into()));
        Self(element)
    }
}

element_kind!(
    /// An `HttpPOST` action: a button posting a body to a target URL.
    HttpPostAction => HttpPost
);

impl HttpPostAction {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        let mut element = CardElement::new(ElementKind::HttpPost);
        element.store("name", FieldValue::Str(name.into()));
        element.store("target", FieldValue::Str(target.into()));
        Self(element)
    }

    /// Replaces the headers with a `name => value` mapping or a list of [`Header`]s.
    pub fn set_headers(&mut self, headers: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.set("headers", headers)
    }

    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.store_append("headers", Header::new(name, value).into());
    }

    /// Appends a `name => value` mapping or a list of [`Header`]s to the existing headers.
    pub fn add_headers(&mut self, headers: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.append("headers", headers)
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.0.store("body", FieldValue::Str(body.into()));
    }

    pub fn set_body_content_type(&mut self, body_content_type: impl Into<String>) {
        self.0
            .store("body_content_type", FieldValue::Str(body_content_type.into()));
    }
}

element_kind!(
    /// An `ActionCard` action: a sub-card of inputs with its own actions.
    ActionCard => ActionCard
);

impl ActionCard {
    pub fn new(name: impl Into<String>) -> Self {
        let mut element = CardElement::new(ElementKind::ActionCard);
        element.store("name", FieldValue::Str(name.into()));
        Self(element)
    }

    pub fn set_inputs(&mut self, inputs: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.set("inputs", inputs)
    }

    pub fn add_input(&mut self, input: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.append("inputs", input)
    }

    /// Replaces the nested actions; only `OpenUri` and `HttpPOST` are accepted.
    pub fn set_actions(&mut self, actions: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.set("actions", actions)
    }

    pub fn add_action(&mut self, action: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.append("actions", action)
    }
}
