use once_cell::sync::Lazy;

use crate::element::{CardElement, ElementKind};
use crate::error::CardError;
use crate::field::{FieldSpec, Schema, ValueKind};
use crate::value::{FieldInput, FieldValue};

pub(crate) static SECTION_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::one("title", ValueKind::Str),
        FieldSpec::one("start_group", ValueKind::Bool),
        FieldSpec::one("activity_image", ValueKind::Str),
        FieldSpec::one("activity_title", ValueKind::Str),
        FieldSpec::one("activity_subtitle", ValueKind::Str),
        FieldSpec::one("activity_text", ValueKind::Str),
        FieldSpec::one("hero_image", ValueKind::Image),
        FieldSpec::one("text", ValueKind::Str),
        FieldSpec::many("facts", ValueKind::Fact),
        FieldSpec::many("potential_action", ValueKind::Action),
        FieldSpec::many("images", ValueKind::Image),
        FieldSpec::one("markdown", ValueKind::Bool),
    ])
});

pub(crate) static IMAGE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::one("image", ValueKind::Str),
        FieldSpec::one("title", ValueKind::Str),
    ])
});

pub(crate) static FACT_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::one("name", ValueKind::Str),
        FieldSpec::one("value", ValueKind::Str),
    ])
});

element_kind!(
    /// An image reference with an optional title.
    Image => Image
);

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        let mut element = CardElement::new(ElementKind::Image);
        element.store("image", FieldValue::Str(url.into()));
        Self(element)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.0.store("title", FieldValue::Str(title.into()));
    }
}

element_kind!(
    /// A name/value pair shown in a section's fact table.
    Fact => Fact
);

impl Fact {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut element = CardElement::new(ElementKind::Fact);
        element.store("name", FieldValue::Str(name.into()));
        element.store("value", FieldValue::Str(value.into()));
        Self(element)
    }
}

element_kind!(
    /// A card section: activity header, text, facts, images and actions.
    Section => Section
);

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

impl Section {
    pub fn new() -> Self {
        Self(CardElement::new(ElementKind::Section))
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.0.store("title", FieldValue::Str(title.into()));
    }

    /// Marks the section as the start of a logical group.
    pub fn start_group(&mut self) {
        self.0.store("start_group", FieldValue::Bool(true));
    }

    pub fn set_activity_image(&mut self, image_url: impl Into<String>) {
        self.0.store("activity_image", FieldValue::Str(image_url.into()));
    }

    pub fn set_activity_title(&mut self, title: impl Into<String>) {
        self.0.store("activity_title", FieldValue::Str(title.into()));
    }

    pub fn set_activity_subtitle(&mut self, subtitle: impl Into<String>) {
        self.0.store("activity_subtitle", FieldValue::Str(subtitle.into()));
    }

    pub fn set_activity_text(&mut self, text: impl Into<String>) {
        self.0.store("activity_text", FieldValue::Str(text.into()));
    }

    /// Sets whichever activity parts are given, leaving the others untouched.
    pub fn set_activity(
        &mut self,
        title: Option<&str>,
        subtitle: Option<&str>,
        image_url: Option<&str>,
    ) {
        if let Some(title) = title {
            self.set_activity_title(title);
        }
        if let Some(subtitle) = subtitle {
            self.set_activity_subtitle(subtitle);
        }
        if let Some(image_url) = image_url {
            self.set_activity_image(image_url);
        }
    }

    /// Accepts an [`Image`], a bare URL, or a single `title => url` mapping.
    pub fn set_hero_image(&mut self, image: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.set("hero_image", image)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.0.store("text", FieldValue::Str(text.into()));
    }

    pub fn set_markdown(&mut self, markdown: bool) {
        self.0.store("markdown", FieldValue::Bool(markdown));
    }

    /// Replaces the facts with a `name => value` mapping or a list of [`Fact`]s.
    pub fn set_facts(&mut self, facts: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.set("facts", facts)
    }

    pub fn add_fact(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.store_append("facts", Fact::new(name, value).into());
    }

    /// Appends a `name => value` mapping or a list of [`Fact`]s to the existing facts.
    pub fn add_facts(&mut self, facts: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.append("facts", facts)
    }

    /// Appends an action; anything other than an action kind is a type error.
    pub fn add_potential_action(&mut self, action: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.append("potential_action", action)
    }

    pub fn add_image(&mut self, image: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.append("images", image)
    }
}
