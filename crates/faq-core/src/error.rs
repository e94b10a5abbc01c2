//! Error types for the faq crates.
//!
//! Repository failures are split into transport and protocol errors, input
//! problems are reported as [`InvalidInputError`], and a draft rejected before
//! any repository call is a [`ValidationError`].

use std::fmt;
use thiserror::Error;

use crate::types::RecordId;

/// The unified error type for faq operations.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Transport errors (I/O, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The list service answered with an error status.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (invalid id, list name, URL, page).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// A draft was rejected before it reached the repository.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Returns true if the error came from a repository call.
    pub fn is_repository_error(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Protocol(_))
    }

    /// Returns true if the service reported that the item does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Protocol(e) if e.is_not_found())
    }
}

/// Transport-level errors.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// Local storage error.
    #[error("I/O error: {message}")]
    Io { message: String },

    /// The response or stored document could not be decoded.
    #[error("decode error: {message}")]
    Decode { message: String },
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::Io {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// An error status returned by the list service.
#[derive(Debug, Clone)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Service error code (if present).
    pub error: Option<String>,
    /// Error message from the service.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }

    /// The error every backend returns for an id that is not in the list.
    pub fn item_not_found(id: RecordId) -> Self {
        Self::new(
            404,
            Some("ItemNotFound".to_string()),
            Some(format!("Item {} does not exist", id)),
        )
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

/// Input validation errors.
#[derive(Debug, Clone, Error)]
pub enum InvalidInputError {
    /// Invalid record id.
    #[error("invalid record id '{value}': {reason}")]
    RecordId { value: String, reason: String },

    /// Invalid list name.
    #[error("invalid list name '{value}': {reason}")]
    ListName { value: String, reason: String },

    /// Invalid list URL.
    #[error("invalid list URL '{value}': {reason}")]
    ListUrl { value: String, reason: String },

    /// Invalid field name.
    #[error("unknown field '{value}' (expected title, body or letter)")]
    Field { value: String },

    /// Page numbers start at 1.
    #[error("invalid page {value}: pages start at 1")]
    Page { value: usize },

    /// Page sizes must be positive.
    #[error("invalid page size {value}: must be at least 1")]
    PageSize { value: usize },

    /// The record is not in the loaded list.
    #[error("record {id} is not in the loaded list")]
    UnknownRecord { id: RecordId },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

/// Draft validation errors, raised before any repository call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The title field is empty.
    #[error("Title is required")]
    TitleRequired,
}
