use once_cell::sync::Lazy;

use crate::element::{CardElement, ElementKind};
use crate::error::CardError;
use crate::field::{FieldSpec, Schema, ValueKind};
use crate::value::{FieldInput, FieldValue};

/// Summary a new card starts with; connectors require one of summary or text.
pub const DEFAULT_SUMMARY: &str = "Summary";

pub(crate) static MESSAGE_CARD_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::one("summary", ValueKind::Str),
        FieldSpec::one("title", ValueKind::Str),
        FieldSpec::one("text", ValueKind::Str),
        FieldSpec::one("theme_color", ValueKind::Str),
        FieldSpec::many("sections", ValueKind::Section),
        FieldSpec::many("potential_action", ValueKind::Action),
    ])
});

element_kind!(
    @wrapper
    /// The root connector card posted to a webhook.
    ///
    /// Renders with `@type: MessageCard` and the schema.org extensions
    /// context ahead of its own fields.
    MessageCard => MessageCard
);

impl Default for MessageCard {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageCard {
    pub fn new() -> Self {
        let mut element = CardElement::new(ElementKind::MessageCard);
        element.store("summary", FieldValue::Str(DEFAULT_SUMMARY.to_string()));
        Self(element)
    }

    /// Starts from [`MessageCard::new`] and sets each named field in turn.
    pub fn from_fields<'a>(
        fields: impl IntoIterator<Item = (&'a str, FieldInput)>,
    ) -> Result<Self, CardError> {
        let mut card = Self::new();
        for (name, value) in fields {
            card.0.set(name, value)?;
        }
        Ok(card)
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.0.store("summary", FieldValue::Str(summary.into()));
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.0.store("title", FieldValue::Str(title.into()));
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.0.store("text", FieldValue::Str(text.into()));
    }

    /// Accent colour as a hex string, e.g. `0072C6`.
    pub fn set_theme_color(&mut self, theme_color: impl Into<String>) {
        self.0.store("theme_color", FieldValue::Str(theme_color.into()));
    }

    /// Replaces the sections with one [`Section`](super::Section) or a list of them.
    pub fn set_sections(&mut self, sections: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.set("sections", sections)
    }

    pub fn add_section(&mut self, section: super::Section) {
        self.0.store_append("sections", section.into());
    }

    pub fn set_potential_actions(
        &mut self,
        actions: impl Into<FieldInput>,
    ) -> Result<(), CardError> {
        self.0.set("potential_action", actions)
    }

    pub fn add_potential_action(&mut self, action: impl Into<FieldInput>) -> Result<(), CardError> {
        self.0.append("potential_action", action)
    }
}
