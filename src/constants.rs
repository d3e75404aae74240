//! Constants for the Coinbase Exchange WebSocket feed.
//!
//! These are the defaults used by [`FeedConfig`](crate::config::FeedConfig),
//! exported for callers that want to build their own configuration.

// ---------------------------------------------------------------------------
// WebSocket URLs
// ---------------------------------------------------------------------------

/// Public market-data WebSocket endpoint of Coinbase Exchange.
pub const WS_FEED_URL: &str = "wss://ws-feed.exchange.coinbase.com";

// ---------------------------------------------------------------------------
// Subscription defaults
// ---------------------------------------------------------------------------

/// Message type tag of a subscribe request.
pub const SUBSCRIBE_TYPE: &str = "subscribe";

/// Products subscribed to by default.
pub const DEFAULT_PRODUCT_IDS: [&str; 2] = ["BTC-USD", "ETH-USD"];

/// Channels subscribed to by default.
pub const DEFAULT_CHANNELS: [&str; 1] = ["ticker"];

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// `tracing` target used for raw frame tracing.
///
/// Enable with `RUST_LOG=ticker_feed::frame=trace`.
pub const FRAME_TRACE_TARGET: &str = "ticker_feed::frame";

/// Close code reported when the connection ends without a close frame
/// (RFC 6455 "abnormal closure").
pub const ABNORMAL_CLOSE_CODE: u16 = 1006;

/// Close code reported for a close frame that carried no status
/// (RFC 6455 "no status received").
pub const NO_STATUS_CLOSE_CODE: u16 = 1005;
