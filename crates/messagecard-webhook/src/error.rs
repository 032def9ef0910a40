use thiserror::Error;

/// Failure to deliver a rendered card.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid webhook configuration: {0}")]
    Config(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("webhook rejected card with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl DeliveryError {
    pub fn config(message: impl Into<String>) -> Self {
        DeliveryError::Config(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        DeliveryError::Transport(message.into())
    }

    /// Status code of a rejected delivery.
    pub fn status(&self) -> Option<u16> {
        match self {
            DeliveryError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
