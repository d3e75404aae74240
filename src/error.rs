//! Error types for the `ticker-feed` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, FeedError>`.
//!
//! [`FeedError`] covers:
//! - **Connection errors** — TCP, TLS or WebSocket handshake failures
//! - **Transport errors** — I/O or protocol failures on an open connection
//! - **JSON errors** — Serialization of the subscribe request
//! - **URL errors** — Malformed endpoint in the configuration
//! - **Invalid arguments** — Client-side configuration validation
//!
//! A close initiated by the remote end is not an error; it is reported as a
//! [`FeedEvent::Closed`](crate::ws::event::FeedEvent::Closed) event.

use tokio_tungstenite::tungstenite;

/// All possible errors produced by the ticker feed client.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The endpoint was unreachable or the handshake failed.
    #[error("connection failed: {0}")]
    Connection(Box<tungstenite::Error>),

    /// The open connection failed while sending or receiving.
    #[error("transport error: {0}")]
    Transport(Box<tungstenite::Error>),

    /// Failed to serialize a JSON request.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured endpoint is not a valid URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl FeedError {
    pub(crate) fn connection(e: tungstenite::Error) -> Self {
        Self::Connection(Box::new(e))
    }

    pub(crate) fn transport(e: tungstenite::Error) -> Self {
        Self::Transport(Box::new(e))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FeedError>;
