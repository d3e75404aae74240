//! Request types for the Coinbase Exchange WebSocket feed.
//!
//! - [`subscription`] — The subscribe request sent when a connection opens
//!
//! Inbound messages are never deserialized. They are forwarded verbatim.

pub mod subscription;

pub use subscription::SubscribeRequest;
