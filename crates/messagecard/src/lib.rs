//! Typed builders for legacy Office 365 connector MessageCards.
//!
//! Every card element (card, section, action, input, fact, image, ...) is a
//! [`CardElement`] of a fixed [`ElementKind`]. A kind declares an ordered field
//! table; setting a field validates the value against it, and rendering walks
//! the table in order to produce the payload posted to a webhook:
//!
//! ```
//! use messagecard::{MessageCard, OpenUriAction, Section};
//!
//! let mut section = Section::new();
//! section.add_fact("Posted by:", "Bill Gates");
//!
//! let mut card = MessageCard::new();
//! card.set_title("Tweet Posted");
//! card.add_section(section);
//! card.add_potential_action(OpenUriAction::new("View", "https://twitter.com")?)?;
//!
//! assert!(card.to_json().starts_with(r#"{"@type": "MessageCard""#));
//! # Ok::<(), messagecard::CardError>(())
//! ```

pub mod element;
pub mod error;
pub mod field;
pub mod formatting;
pub mod kinds;
pub mod render;
pub mod value;

pub use element::{CardElement, ElementKind, ElementMut, SCHEMA_CONTEXT};
pub use error::CardError;
pub use field::{FieldSpec, Schema, ValueKind, wire_key};
pub use kinds::actions::DEFAULT_OS;
pub use kinds::card::DEFAULT_SUMMARY;
pub use kinds::inputs::CHOICE_STYLES;
pub use kinds::{
    ActionCard, Choice, DateInput, Fact, Header, HttpPostAction, Image, MessageCard,
    MultipleChoiceInput, OpenUriAction, Section, TextInput, UriTarget,
};
pub use render::to_text;
pub use value::{FieldInput, FieldValue, Pairs};
