//! Binary that connects to the Coinbase Exchange feed, subscribes to the
//! `ticker` channel for BTC-USD and ETH-USD, and prints every event until the
//! connection closes.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin ticker_feed --features cli
//!
//! # with raw frame tracing
//! RUST_LOG=info,ticker_feed::frame=trace cargo run --bin ticker_feed --features cli
//! ```

use std::process::ExitCode;

use ticker_feed::StreamClient;
use ticker_feed::constants::FRAME_TRACE_TARGET;
use ticker_feed::ws::event::ConsoleHandler;
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let frame_trace = tracing::enabled!(target: FRAME_TRACE_TARGET, Level::TRACE);

    let mut client = match StreamClient::builder().frame_trace(frame_trace).build() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Errors were already printed by the handler.
    match client.run_forever(&mut ConsoleHandler).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
