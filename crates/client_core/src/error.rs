use std::fmt;

use shared::error::{ApiError, ApiException};
use thiserror::Error;

/// Store operation a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    List,
    Create,
    Update,
    Delete,
}

impl StoreOp {
    pub fn label(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The single failure kind of the book store: the remote call did not
/// complete successfully, whatever the cause (network, status, body).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{op} request failed: {message}")]
pub struct TransportError {
    pub op: StoreOp,
    pub message: String,
}

impl TransportError {
    pub fn new(op: StoreOp, message: impl Into<String>) -> Self {
        Self {
            op,
            message: message.into(),
        }
    }

    pub(crate) fn from_reqwest(op: StoreOp, err: reqwest::Error) -> Self {
        Self::new(op, err.to_string())
    }

    /// Builds the error for a non-success response, preferring the server's
    /// `ApiError` body when it sent one.
    pub(crate) fn from_status(op: StoreOp, status: reqwest::StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ApiError>(body) {
            Ok(api_error) => Self::new(
                op,
                format!("server returned {status}: {}", ApiException::from(api_error)),
            ),
            Err(_) => Self::new(op, format!("server returned {status}")),
        }
    }
}
