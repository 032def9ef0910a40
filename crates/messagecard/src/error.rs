use thiserror::Error;

/// Contract violations raised while building or reading a card element.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("unknown field `{field}` for {kind}")]
    UnknownField { kind: &'static str, field: String },
    #[error("field `{field}` expects {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("field `{field}` is not set")]
    NotSet { field: String },
}

impl CardError {
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        CardError::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CardError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn not_set(field: impl Into<String>) -> Self {
        CardError::NotSet {
            field: field.into(),
        }
    }
}
