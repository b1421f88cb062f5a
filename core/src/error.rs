//! Error types for the todo loader.
//!
//! # Design
//! Every variant renders as a short human-readable message because the
//! loader shows it verbatim after `Error loading todos: `. Transport
//! failures keep the message of the underlying error untouched.

use thiserror::Error;

/// Errors produced while fetching or parsing todos.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("{0}")]
    Transport(String),

    /// The server returned 404 where a specific status was required.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than the one required.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body is not valid JSON or does not match the todo shape.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The body is valid JSON but not a list of todos.
    #[error("expected a list of todos, got {0}")]
    UnexpectedPayload(&'static str),
}
