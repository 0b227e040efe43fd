//! Structured errors for session actions.
//!
//! ERROR HANDLING
//! ==============
//! Callers (the UI layer) display the `Display` form of these errors
//! directly, so `Server` carries the server-supplied message verbatim.
//! Nothing here retries; a failed action is reported once and the caller
//! decides what to do next.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure modes of the session actions.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Network or connection failure, including calling a network action
    /// from a non-browser build.
    #[error("transport error: {0}")]
    Transport(String),

    /// Malformed persisted token or malformed response body.
    #[error("decode error: {0}")]
    Decode(String),

    /// The server rejected the request. The payload is the server's own
    /// `message` when the response carried one, otherwise a generic
    /// status-derived message.
    #[error("{0}")]
    Server(String),
}
