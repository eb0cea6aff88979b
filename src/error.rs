//! Error types for a chat session.
//!
//! Every failure a `Session` can report is one of these variants so
//! callers can branch on the kind of failure instead of inspecting
//! message strings.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    /// The credential could not be resolved when building a session
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request never got a response: connection failure or timeout
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status
    #[error("{}", http_status_message(.status, .body))]
    HttpStatus { status: u16, body: Option<String> },

    /// The response body did not contain a reply
    #[error("Parse error: {0}")]
    Parse(String),
}

fn http_status_message(status: &u16, body: &Option<String>) -> String {
    match body {
        Some(body) => format!("HTTP {} from chat completion endpoint: {}", status, body),
        None => format!("HTTP {} from chat completion endpoint (no error body)", status),
    }
}

impl ChatError {
    /// True when the underlying request exceeded the connect or read
    /// timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            ChatError::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }
}

pub type Result<T, E = ChatError> = std::result::Result<T, E>;
