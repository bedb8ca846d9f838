//! Error types for the chat session core

use thiserror::Error;

/// Main error type for the chat session core
#[derive(Error, Debug)]
pub enum ChatError {
    /// Connection error when reaching the agent backend
    #[error("Connection error: {0}")]
    Connection(String),

    /// Backend answered with a non-success HTTP status
    #[error("Backend returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, truncated for display
        body: String,
    },

    /// Backend body could not be interpreted as reply text
    #[error("Malformed backend response: {message}")]
    MalformedResponse {
        /// Error message
        message: String,
        /// Raw body that failed to parse
        data: Option<serde_json::Value>,
    },

    /// JSON decode error when parsing a backend body
    #[error("JSON decode error: {0}")]
    JsonDecode(#[from] serde_json::Error),

    /// Request exceeded its deadline
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for chat session operations
pub type Result<T> = std::result::Result<T, ChatError>;

impl ChatError {
    /// Create a connection error
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a non-success status error, truncating the body for display
    #[must_use]
    pub fn status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            body: body.chars().take(200).collect(),
        }
    }

    /// Create a malformed response error
    pub fn malformed(msg: impl Into<String>, data: Option<serde_json::Value>) -> Self {
        Self::MalformedResponse {
            message: msg.into(),
            data,
        }
    }

    /// Create a timeout error
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }
}
