//! Single-connection ticker feed client.
//!
//! Connects to the configured endpoint, sends one subscribe request as soon as
//! the connection opens, and forwards every inbound payload and lifecycle
//! event to a [`FeedHandler`]. Nothing is parsed and nothing is retried.
//!
//! # Example
//!
//! ```no_run
//! use ticker_feed::ws::client::StreamClient;
//! use ticker_feed::ws::event::ConsoleHandler;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut client = StreamClient::default();
//! let _ = client.run_forever(&mut ConsoleHandler).await;
//! # }
//! ```

use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use crate::config::{FeedConfig, StreamClientBuilder};
use crate::constants::{ABNORMAL_CLOSE_CODE, FRAME_TRACE_TARGET, NO_STATUS_CLOSE_CODE};
use crate::error::{FeedError, Result};
use crate::ws::event::{CloseStatus, ConnectionState, FeedEvent, FeedHandler};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

// ---------------------------------------------------------------------------
// StreamClient
// ---------------------------------------------------------------------------

/// Owns the lifecycle of one feed connection.
///
/// A client is single-use: once [`run_forever`](Self::run_forever) returns,
/// the client is [`ConnectionState::Closed`] and cannot be run again.
#[derive(Debug)]
pub struct StreamClient {
    config: FeedConfig,
    state: ConnectionState,
}

impl Default for StreamClient {
    fn default() -> Self {
        Self::new(FeedConfig::default())
    }
}

impl StreamClient {
    /// Create a client from an already-validated configuration.
    ///
    /// Prefer [`StreamClientBuilder`] which validates before building.
    pub fn new(config: FeedConfig) -> Self {
        Self {
            config,
            state: ConnectionState::Disconnected,
        }
    }

    /// Start a [`StreamClientBuilder`] from the default configuration.
    pub fn builder() -> StreamClientBuilder {
        StreamClientBuilder::new()
    }

    /// Get the configuration.
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Current connection state.
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Connect, subscribe, and dispatch events until the connection closes.
    ///
    /// Events are delivered to `handler` in this order:
    ///
    /// 1. `Subscribing` once the connection is open, before the request is sent
    /// 2. `Received` for each inbound text or binary payload
    /// 3. `Error` for each transport failure
    /// 4. `Closed` exactly once, when the connection is gone
    ///
    /// If the connect itself fails, a single `Error` event is dispatched and
    /// the same error is returned; no `Closed` event follows. Callers should
    /// not log the returned error again.
    pub async fn run_forever<H>(&mut self, handler: &mut H) -> Result<CloseStatus>
    where
        H: FeedHandler + ?Sized,
    {
        if self.state != ConnectionState::Disconnected {
            return Err(FeedError::InvalidArgument(format!(
                "client already used (state {})",
                self.state
            )));
        }

        let ws = match self.connect().await {
            Ok(ws) => ws,
            Err(e) => {
                tracing::debug!(url = %self.config.url, error = %e, "Feed connection failed");
                handler.handle(&FeedEvent::Error(&e));
                return Err(e);
            }
        };

        let (mut write, mut read) = ws.split();

        if let Err(e) = self.subscribe(&mut write, handler).await {
            tracing::debug!(error = %e, "Failed to send subscribe request");
            handler.handle(&FeedEvent::Error(&e));
        }

        let mut close: Option<CloseStatus> = None;

        while let Some(next) = read.next().await {
            match next {
                Ok(msg) => {
                    if self.config.frame_trace {
                        trace_frame("recv", &msg);
                    }
                    match msg {
                        Message::Text(text) => {
                            handler.handle(&FeedEvent::Received(text.as_str()));
                        }
                        Message::Binary(data) => {
                            let text = String::from_utf8_lossy(&data);
                            handler.handle(&FeedEvent::Received(&text));
                        }
                        Message::Close(frame) => {
                            let status = match frame {
                                Some(f) => CloseStatus::new(u16::from(f.code), f.reason.as_str()),
                                None => CloseStatus::new(NO_STATUS_CLOSE_CODE, ""),
                            };
                            tracing::info!(code = status.code, reason = %status.reason, "Feed WebSocket closed by server");
                            close = Some(status);
                        }
                        // Ping/pong handled automatically by tungstenite
                        Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => {}
                    }
                }
                Err(e) => {
                    // tokio-tungstenite ends the stream after any error, so
                    // the loop terminates on the next poll.
                    let e = FeedError::transport(e);
                    tracing::warn!(error = %e, "Feed WebSocket error");
                    handler.handle(&FeedEvent::Error(&e));
                }
            }
        }

        self.transition(ConnectionState::Closed);

        let status = close.unwrap_or_else(|| CloseStatus::new(ABNORMAL_CLOSE_CODE, ""));
        tracing::info!(code = status.code, "Feed connection closed");
        handler.handle(&FeedEvent::Closed(&status));

        Ok(status)
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    /// Open the WebSocket. Moves to `Open` on success, `Closed` on failure.
    async fn connect(&mut self) -> Result<WsStream> {
        self.transition(ConnectionState::Connecting);

        match connect_async(self.config.url.as_str()).await {
            Ok((ws, resp)) => {
                tracing::info!(
                    url = %self.config.url,
                    status = %resp.status(),
                    "Connected to feed WebSocket"
                );
                self.transition(ConnectionState::Open);
                Ok(ws)
            }
            Err(e) => {
                self.transition(ConnectionState::Closed);
                Err(FeedError::connection(e))
            }
        }
    }

    /// Build, announce, and send the subscribe request.
    async fn subscribe<H>(
        &self,
        write: &mut SplitSink<WsStream, Message>,
        handler: &mut H,
    ) -> Result<()>
    where
        H: FeedHandler + ?Sized,
    {
        let request = self.config.subscribe_request();
        let json = request.to_json()?;
        handler.handle(&FeedEvent::Subscribing(&json));

        let msg = Message::Text(json.into());
        if self.config.frame_trace {
            trace_frame("send", &msg);
        }
        write.send(msg).await.map_err(FeedError::transport)?;

        tracing::debug!(
            products = ?request.product_ids,
            channels = ?request.channels,
            "Subscribed to feed"
        );
        Ok(())
    }

    fn transition(&mut self, next: ConnectionState) {
        tracing::debug!(from = %self.state, to = %next, "Connection state change");
        self.state = next;
    }
}

/// Emit one raw frame on the frame-trace target.
fn trace_frame(direction: &'static str, msg: &Message) {
    let kind = match msg {
        Message::Text(_) => "text",
        Message::Binary(_) => "binary",
        Message::Ping(_) => "ping",
        Message::Pong(_) => "pong",
        Message::Close(_) => "close",
        Message::Frame(_) => "frame",
    };

    match msg {
        Message::Text(text) => tracing::trace!(
            target: FRAME_TRACE_TARGET,
            direction,
            kind,
            len = msg.len(),
            "{}",
            text.as_str()
        ),
        _ => tracing::trace!(target: FRAME_TRACE_TARGET, direction, kind, len = msg.len()),
    }
}
