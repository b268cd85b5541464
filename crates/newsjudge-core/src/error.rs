//! Error taxonomy for the completion service boundary.
//!
//! Every variant means the same thing to the orchestrator: the service did not
//! yield usable text and the fallback classifier takes over. The variants exist
//! so logs can say *why*.

use std::time::Duration;

use thiserror::Error;

/// Reasons a completion request produced no text.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// The HTTP client itself could not be constructed
    #[error("HTTP client setup failed: {0}")]
    Client(String),

    /// No response within the configured deadline
    #[error("completion request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection refused, DNS failure, reset, etc.
    #[error("transport error: {0}")]
    Transport(String),

    /// Service answered with a non-success status
    #[error("completion service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Service answered 2xx but the body was not the expected JSON
    #[error("malformed completion body: {0}")]
    MalformedBody(String),
}

/// Result type for completion operations.
pub type CompletionResult<T> = std::result::Result<T, CompletionError>;
