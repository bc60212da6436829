use thiserror::Error;

use crate::models::OutcomeKind;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Bad Request")]
    BadContentType,

    #[error("{0}")]
    ParseFailure(String),

    #[error("{0}")]
    ValidationFailure(String),

    #[error(transparent)]
    IoFailure(#[from] std::io::Error),
}

impl WebhookError {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            WebhookError::MethodNotAllowed => OutcomeKind::MethodNotAllowed,
            WebhookError::BadContentType => OutcomeKind::BadContentType,
            WebhookError::ParseFailure(_) => OutcomeKind::ParseFailure,
            WebhookError::ValidationFailure(_) => OutcomeKind::ValidationFailure,
            WebhookError::IoFailure(_) => OutcomeKind::IoFailure,
        }
    }
}
