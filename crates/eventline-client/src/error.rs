//! Client error types.

use std::fmt;

use eventline_core::ValidationError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug)]
pub enum ClientError {
    /// Configuration error.
    Config(String),
    /// IO error.
    Io(std::io::Error),
    /// Event store could not be read or written.
    Store(String),
    /// JSON encoding or decoding failed.
    Json(serde_json::Error),
    /// Parsed event was rejected.
    Validation(ValidationError),
    /// Input was missing or unusable.
    Input(String),
    /// No event with the given id.
    NotFound(String),
    /// Action failed (open, copy, etc).
    Action(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Store(msg) => write!(f, "event store error: {}", msg),
            Self::Json(err) => write!(f, "JSON error: {}", err),
            Self::Validation(err) => write!(f, "{}", err),
            Self::Input(msg) => write!(f, "{}", msg),
            Self::NotFound(id) => write!(f, "no event with id {}", id),
            Self::Action(msg) => write!(f, "action failed: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
