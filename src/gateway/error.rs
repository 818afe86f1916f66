use std::fmt;

use serde::Deserialize;

/// A failed call against the remote API, already normalised.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The server answered with a non-success status.
    Server { status: u16, message: Option<String> },
    /// No response at all (connection refused, DNS, timeout...).
    Transport(String),
    /// A response arrived but its body was not the expected shape.
    Decode(String),
    /// The request was refused before sending, e.g. an id that is not a
    /// usable path segment.
    Request(String),
}

impl GatewayError {
    /// The `message` field of the server's error body, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Server { message: Some(m), .. } if !m.trim().is_empty() => Some(m.as_str()),
            _ => None,
        }
    }

    /// Server-supplied message or the given fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Server { status, message: Some(m) } => write!(f, "Server error {status}: {m}"),
            GatewayError::Server { status, message: None } => write!(f, "Server error {status}"),
            GatewayError::Transport(e) => write!(f, "Transport error: {e}"),
            GatewayError::Decode(e) => write!(f, "Decode error: {e}"),
            GatewayError::Request(e) => write!(f, "Invalid request: {e}"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Error body shape the API uses: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
