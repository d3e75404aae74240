//! Subscribe request sent once when a feed connection opens.

use serde::Serialize;

use crate::constants::{DEFAULT_CHANNELS, DEFAULT_PRODUCT_IDS, SUBSCRIBE_TYPE};
use crate::error::Result;

/// JSON subscribe request for the Coinbase Exchange feed.
///
/// Serializes as
/// `{"type":"subscribe","product_ids":[...],"channels":[...]}`, with the
/// fields in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscribeRequest {
    /// Always `"subscribe"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Products to subscribe to (e.g. `"BTC-USD"`).
    pub product_ids: Vec<String>,
    /// Channels to subscribe to (e.g. `"ticker"`).
    pub channels: Vec<String>,
}

impl SubscribeRequest {
    /// Create a subscribe request for the given products and channels.
    pub fn new<P, C>(product_ids: P, channels: C) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            kind: SUBSCRIBE_TYPE.to_owned(),
            product_ids: product_ids.into_iter().map(Into::into).collect(),
            channels: channels.into_iter().map(Into::into).collect(),
        }
    }

    /// Serialize to the JSON text sent over the wire.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// `BTC-USD` and `ETH-USD` on the `ticker` channel.
impl Default for SubscribeRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PRODUCT_IDS, DEFAULT_CHANNELS)
    }
}
