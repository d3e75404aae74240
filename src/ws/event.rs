//! Feed lifecycle events and the handlers that consume them.
//!
//! Every observable thing the [`StreamClient`](crate::ws::client::StreamClient)
//! does is reported as a [`FeedEvent`]. The `Display` impl of each event is
//! the exact console line, so a handler that only wants to print can do
//! `println!("{event}")`.

use std::fmt;

use crate::error::FeedError;

// ---------------------------------------------------------------------------
// Connection state
// ---------------------------------------------------------------------------

/// Lifecycle state of a feed connection.
///
/// `Disconnected → Connecting → Open → Closed`. A failed connect moves
/// straight from `Connecting` to `Closed`. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionState {
    /// No connection attempt has been made yet.
    Disconnected,
    /// TCP/TLS/WebSocket handshake in progress.
    Connecting,
    /// Handshake complete; the subscribe request is sent next.
    Open,
    /// The connection is gone and will not be reopened.
    Closed,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Disconnected => "DISCONNECTED",
            Self::Connecting => "CONNECTING",
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Close status
// ---------------------------------------------------------------------------

/// Status code and reason of a closed connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseStatus {
    /// Close code from the close frame, or 1006 if none was received.
    pub code: u16,
    /// Reason text from the close frame (possibly empty).
    pub reason: String,
}

impl CloseStatus {
    /// Create a close status from a code and reason.
    pub fn new(code: u16, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CloseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reason.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} {}", self.code, self.reason)
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// A single feed event, in the order it happened.
///
/// Events borrow from the client's buffers and only live for the duration of
/// one [`FeedHandler::handle`] call.
#[derive(Debug, Clone, Copy)]
pub enum FeedEvent<'a> {
    /// The subscribe request (JSON text), dispatched right before it is sent.
    Subscribing(&'a str),
    /// An inbound payload, verbatim.
    Received(&'a str),
    /// A connection or transport failure.
    Error(&'a FeedError),
    /// The connection closed. Always the last event of an opened connection.
    Closed(&'a CloseStatus),
}

impl fmt::Display for FeedEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subscribing(json) => write!(f, "Subscribing: {json}"),
            Self::Received(payload) => write!(f, "Received: {payload}"),
            Self::Error(e) => write!(f, "Error: {e}"),
            Self::Closed(status) => write!(f, "Connection closed: {status}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Receives every [`FeedEvent`] produced by a client.
pub trait FeedHandler {
    /// Handle one event. Must not fail; anything it cannot handle is dropped.
    fn handle(&mut self, event: &FeedEvent<'_>);
}

impl<F> FeedHandler for F
where
    F: FnMut(&FeedEvent<'_>),
{
    fn handle(&mut self, event: &FeedEvent<'_>) {
        self(event)
    }
}

/// Prints events to the console: errors to stderr, everything else to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleHandler;

impl FeedHandler for ConsoleHandler {
    fn handle(&mut self, event: &FeedEvent<'_>) {
        match event {
            FeedEvent::Error(_) => eprintln!("{event}"),
            _ => println!("{event}"),
        }
    }
}
