//! WebSocket client for the Coinbase Exchange market-data feed.
//!
//! ## [`client`] — Stream Client
//!
//! Connects to `wss://ws-feed.exchange.coinbase.com`, sends one subscribe
//! request as soon as the connection opens, and reports everything that
//! happens afterwards as a [`FeedEvent`](event::FeedEvent).
//!
//! ## [`event`] — Events and handlers
//!
//! [`FeedEvent`](event::FeedEvent) has one variant per console log category
//! (`Subscribing`, `Received`, `Error`, `Connection closed`). Handlers
//! implement [`FeedHandler`](event::FeedHandler); any `FnMut(&FeedEvent)`
//! closure already does.
//!
//! ## Lifecycle
//!
//! `Disconnected → Connecting → Open → Closed`. There is no reconnection:
//! `Closed` is terminal for a client.

pub mod client;
pub mod event;
