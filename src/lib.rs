//! # ticker-feed
//!
//! A minimal client for the [Coinbase Exchange WebSocket feed](https://docs.cdp.coinbase.com/exchange/docs/websocket-overview).
//! It subscribes to the `ticker` channel for `BTC-USD` and `ETH-USD` and
//! hands every event to a handler, verbatim.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ticker_feed::StreamClient;
//! use ticker_feed::ws::event::ConsoleHandler;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut client = StreamClient::default();
//!     // Prints "Subscribing: ...", "Received: ...", "Connection closed: ..."
//!     let _ = client.run_forever(&mut ConsoleHandler).await;
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod ws;

/// Re-export the main client type at crate root for convenience.
pub use ws::client::StreamClient;
/// Re-export the error type and Result alias.
pub use error::{FeedError, Result};
