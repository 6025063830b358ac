//! formguide agent — conversational racing entity lookups.
//!
//! Reads one message per stdin line (standing in for the hosting
//! runtime's message intake), routes it through the action dispatcher,
//! and prints each reply to stdout.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use fg_agent::actions::ActionContext;
use fg_agent::config::AgentConfig;
use fg_agent::dispatcher::Dispatcher;
use fg_protocol::{IncomingMessage, Reply, ReplySink};
use fg_racing_api::{Pacer, RacingApiClient, StubSeriesSource};

/// Prints replies to stdout.
struct StdoutSink;

#[async_trait]
impl ReplySink for StdoutSink {
    async fn deliver(&self, reply: Reply) {
        println!("{}", reply.text);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "fg-agent starting");

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "formguide.toml".to_string());
    let config = AgentConfig::load(&config_path)?;
    tracing::info!(
        base_url = %config.racing_api.base_url,
        region = %config.racing_api.region,
        "config loaded"
    );

    let pacer = Arc::new(Pacer::from_millis(config.racing_api.pacing_ms));
    let client = Arc::new(RacingApiClient::new(config.racing_api)?);
    let ctx = ActionContext {
        client,
        series: Arc::new(StubSeriesSource::new()),
        pacer,
    };
    let dispatcher = Dispatcher::new(ctx);
    tracing::info!(action_count = dispatcher.len(), "dispatcher ready");

    let sink = StdoutSink;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let message = IncomingMessage::new(text);
        if !dispatcher.dispatch(&message, &sink).await {
            println!("Sorry, I don't know how to help with that.");
        }
    }

    Ok(())
}
