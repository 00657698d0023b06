// errors.rs
use astra::Response;
use serde::Serialize;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, bad input) or the in-memory store.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid inquiry data")]
    Validation(Vec<FieldError>),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound(_) => 404,
            ServerError::BadRequest(_) | ServerError::Validation(_) => 400,
            ServerError::Store(_) | ServerError::Internal(_) => 500,
        }
    }

    /// Message that is safe to show to a client.
    /// Store faults never leak their detail.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::Store(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }
}

/// One failed field of a submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub code: &'static str,
    pub path: Vec<&'static str>,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            path: vec![field],
            message: message.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        self.path.first().copied().unwrap_or_default()
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
