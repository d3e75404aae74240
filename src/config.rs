//! Configuration for the [`StreamClient`].
//!
//! The defaults reproduce the stock behaviour: connect to
//! [`WS_FEED_URL`](crate::constants::WS_FEED_URL) and subscribe to the
//! `ticker` channel for `BTC-USD` and `ETH-USD`.

use url::Url;

use crate::constants::{DEFAULT_CHANNELS, DEFAULT_PRODUCT_IDS, WS_FEED_URL};
use crate::error::{FeedError, Result};
use crate::types::SubscribeRequest;
use crate::ws::client::StreamClient;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for a [`StreamClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// WebSocket endpoint (`ws://` or `wss://`).
    pub url: String,
    /// Products sent in the subscribe request.
    pub product_ids: Vec<String>,
    /// Channels sent in the subscribe request.
    pub channels: Vec<String>,
    /// Emit every raw frame as a `TRACE` event on
    /// [`FRAME_TRACE_TARGET`](crate::constants::FRAME_TRACE_TARGET).
    pub frame_trace: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: WS_FEED_URL.to_owned(),
            product_ids: DEFAULT_PRODUCT_IDS.iter().map(|s| (*s).to_owned()).collect(),
            channels: DEFAULT_CHANNELS.iter().map(|s| (*s).to_owned()).collect(),
            frame_trace: false,
        }
    }
}

impl FeedConfig {
    /// Check the endpoint and subscription lists.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.url)?;
        if !matches!(url.scheme(), "ws" | "wss") {
            return Err(FeedError::InvalidArgument(format!(
                "unsupported URL scheme `{}` (expected ws or wss)",
                url.scheme()
            )));
        }

        if self.product_ids.is_empty() {
            return Err(FeedError::InvalidArgument(
                "at least one product id is required".into(),
            ));
        }
        if self.channels.is_empty() {
            return Err(FeedError::InvalidArgument(
                "at least one channel is required".into(),
            ));
        }
        if self.product_ids.iter().any(|p| p.trim().is_empty()) {
            return Err(FeedError::InvalidArgument("blank product id".into()));
        }
        if self.channels.iter().any(|c| c.trim().is_empty()) {
            return Err(FeedError::InvalidArgument("blank channel name".into()));
        }

        Ok(())
    }

    /// The subscribe request this configuration sends on open.
    pub fn subscribe_request(&self) -> SubscribeRequest {
        SubscribeRequest::new(self.product_ids.iter().cloned(), self.channels.iter().cloned())
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for constructing a [`StreamClient`] with custom configuration.
///
/// # Example
///
/// ```
/// use ticker_feed::config::StreamClientBuilder;
///
/// let client = StreamClientBuilder::new()
///     .product_ids(["BTC-USD"])
///     .frame_trace(true)
///     .build()
///     .unwrap();
/// assert_eq!(client.config().product_ids, vec!["BTC-USD"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StreamClientBuilder {
    config: FeedConfig,
}

impl StreamClientBuilder {
    /// Start from [`FeedConfig::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the WebSocket endpoint. Default: [`WS_FEED_URL`].
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Set the products to subscribe to. Default: `BTC-USD`, `ETH-USD`.
    pub fn product_ids<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.config.product_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Set the channels to subscribe to. Default: `ticker`.
    pub fn channels<I>(mut self, channels: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.config.channels = channels.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable raw frame tracing. Default: false.
    pub fn frame_trace(mut self, enable: bool) -> Self {
        self.config.frame_trace = enable;
        self
    }

    /// Validate the configuration and build the [`StreamClient`].
    pub fn build(self) -> Result<StreamClient> {
        self.config.validate()?;
        Ok(StreamClient::new(self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_coinbase_ticker() {
        let config = FeedConfig::default();
        assert_eq!(config.url, "wss://ws-feed.exchange.coinbase.com");
        assert_eq!(config.subscribe_request(), SubscribeRequest::default());
        assert!(!config.frame_trace);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_websocket_scheme() {
        let err = StreamClientBuilder::new()
            .url("https://ws-feed.exchange.coinbase.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, FeedError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_malformed_url() {
        let err = StreamClientBuilder::new().url("not a url").build().unwrap_err();
        assert!(matches!(err, FeedError::Url(_)));
    }

    #[test]
    fn rejects_empty_or_blank_subscriptions() {
        let no_products = StreamClientBuilder::new()
            .product_ids(Vec::<String>::new())
            .build();
        assert!(matches!(no_products, Err(FeedError::InvalidArgument(_))));

        let blank_channel = StreamClientBuilder::new().channels(["ticker", " "]).build();
        assert!(matches!(blank_channel, Err(FeedError::InvalidArgument(_))));
    }
}
