//! Concrete element kinds: a schema each, plus typed convenience wrappers.

/// Declares a typed wrapper around [`CardElement`](crate::CardElement) for one kind.
macro_rules! element_kind {
    (@wrapper $(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(crate::element::CardElement);

        impl $name {
            pub fn as_element(&self) -> &crate::element::CardElement {
                &self.0
            }

            pub fn into_element(self) -> crate::element::CardElement {
                self.0
            }

            /// See [`CardElement::set`](crate::CardElement::set).
            pub fn set(
                &mut self,
                name: &str,
                value: impl Into<crate::value::FieldInput>,
            ) -> Result<(), crate::error::CardError> {
                self.0.set(name, value)
            }

            /// See [`CardElement::append`](crate::CardElement::append).
            pub fn append(
                &mut self,
                name: &str,
                value: impl Into<crate::value::FieldInput>,
            ) -> Result<(), crate::error::CardError> {
                self.0.append(name, value)
            }

            pub fn element_mut(
                &mut self,
                name: &str,
            ) -> Result<crate::element::ElementMut<'_>, crate::error::CardError> {
                self.0.element_mut(name)
            }
        }

        impl std::ops::Deref for $name {
            type Target = crate::element::CardElement;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$name> for crate::element::CardElement {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl From<$name> for crate::value::FieldInput {
            fn from(value: $name) -> Self {
                crate::value::FieldInput::Element(value.0)
            }
        }

        impl From<$name> for crate::value::FieldValue {
            fn from(value: $name) -> Self {
                crate::value::FieldValue::Element(value.0)
            }
        }

        impl TryFrom<crate::element::CardElement> for $name {
            type Error = crate::error::CardError;

            fn try_from(element: crate::element::CardElement) -> Result<Self, Self::Error> {
                if element.kind() == crate::element::ElementKind::$kind {
                    Ok(Self(element))
                } else {
                    Err(crate::error::CardError::type_mismatch(
                        "element",
                        crate::element::ElementKind::$kind.name(),
                        element.kind().name(),
                    ))
                }
            }
        }
    };
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        element_kind!(@wrapper $(#[$meta])* $name => $kind);

        impl $name {
            /// Builds the element and sets each named field in turn.
            pub fn from_fields<'a>(
                fields: impl IntoIterator<Item = (&'a str, crate::value::FieldInput)>,
            ) -> Result<Self, crate::error::CardError> {
                crate::element::CardElement::with_fields(
                    crate::element::ElementKind::$kind,
                    fields,
                )
                .map(Self)
            }
        }
    };
}

pub mod actions;
pub mod card;
pub mod inputs;
pub mod section;

pub use actions::{ActionCard, Header, HttpPostAction, OpenUriAction, UriTarget};
pub use card::MessageCard;
pub use inputs::{Choice, DateInput, MultipleChoiceInput, TextInput};
pub use section::{Fact, Image, Section};
