//! Failure kinds for remote store operations.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the synchronization layer's
//! callers distinguish "the row no longer exists" from "the server
//! misbehaved." Every other non-success status lands in `Http` with the raw
//! status code and body. `Connection` covers failures below HTTP: DNS,
//! refused connections, aborted streams.

use std::fmt;

/// Any way a remote store operation can fail.
#[derive(Debug)]
pub enum TransportError {
    /// The server returned 404 for the addressed row.
    NotFound,

    /// The server answered with an unexpected status other than 404.
    Http { status: u16, body: String },

    /// The request never completed a round trip.
    Connection(String),

    /// The request payload could not be encoded as JSON.
    Serialize(String),

    /// The response body could not be decoded into the expected shape.
    Deserialize(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::NotFound => write!(f, "row not found"),
            TransportError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            TransportError::Connection(msg) => write!(f, "connection failed: {msg}"),
            TransportError::Serialize(msg) => write!(f, "request encoding failed: {msg}"),
            TransportError::Deserialize(msg) => write!(f, "response decoding failed: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}
