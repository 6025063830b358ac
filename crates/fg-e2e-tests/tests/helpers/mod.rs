//! Shared test harness for E2E integration tests.
//!
//! Wires the full action dispatcher to a real `RacingApiClient` pointed
//! at a wiremock server, so every test exercises the same code path the
//! binary runs: validate → extract → resolve → fetch → render → deliver.

use std::sync::Arc;

use wiremock::MockServer;

use fg_agent::actions::ActionContext;
use fg_agent::dispatcher::Dispatcher;
use fg_protocol::{CollectingSink, IncomingMessage};
use fg_racing_api::{Pacer, RacingApiClient, RacingApiConfig, StubSeriesSource};

pub struct TestHarness {
    /// Fake remote racing-data API.
    pub server: MockServer,
    /// Dispatcher over the full registered action table.
    pub dispatcher: Dispatcher,
    /// Recording reply sink.
    pub sink: CollectingSink,
    /// Shared series stub, for call assertions.
    pub series: Arc<StubSeriesSource>,
}

impl TestHarness {
    /// Harness with pacing disabled so bulk tests stay fast.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let client = RacingApiClient::new(RacingApiConfig {
            base_url: server.uri(),
            username: "user".into(),
            password: "pass".into(),
            timeout_secs: 2,
            pacing_ms: 0,
            ..RacingApiConfig::default()
        })
        .expect("client builds");

        let series = Arc::new(StubSeriesSource::new());
        let ctx = ActionContext {
            client: Arc::new(client),
            series: series.clone(),
            pacer: Arc::new(Pacer::from_millis(0)),
        };

        Self {
            server,
            dispatcher: Dispatcher::new(ctx),
            sink: CollectingSink::new(),
            series,
        }
    }

    /// Dispatch one message; returns whether any action handled it.
    pub async fn send(&self, text: &str) -> bool {
        self.dispatcher
            .dispatch(&IncomingMessage::new(text), &self.sink)
            .await
    }

    /// Dispatch and return the reply text, panicking if unhandled.
    pub async fn send_expecting_reply(&self, text: &str) -> String {
        assert!(self.send(text).await, "no action matched: {text}");
        self.sink.last_text().expect("reply delivered")
    }
}
