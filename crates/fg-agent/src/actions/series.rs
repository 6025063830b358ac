//! Race-series operations, answered by the stubbed collaborator.
//!
//! The remote API has no series endpoints yet; these actions exist so the
//! conversational surface is complete, and their replies are always
//! flagged placeholder data by `StubSeriesSource`.

use async_trait::async_trait;

use fg_protocol::{IncomingMessage, Reply};

use crate::actions::{Action, ActionContext};
use crate::extract::extract_name;

fn series_name(text: &str) -> Option<String> {
    extract_name(text, "series")
}

const ASK_FOR_SERIES: &str = "Which series? Try \"standings for the series SERIES NAME\".";

pub struct SeriesStandingsAction;

#[async_trait]
impl Action for SeriesStandingsAction {
    fn name(&self) -> &str {
        "series_standings"
    }

    fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        lower.contains("series") && (lower.contains("standings") || lower.contains("leaderboard"))
    }

    async fn execute(&self, message: &IncomingMessage, ctx: &ActionContext) -> Reply {
        let Some(series) = series_name(&message.text) else {
            return Reply::text(ASK_FOR_SERIES);
        };
        Reply::text(ctx.series.standings(&series).await.text)
    }
}

pub struct SeriesNextRaceAction;

#[async_trait]
impl Action for SeriesNextRaceAction {
    fn name(&self) -> &str {
        "series_next_race"
    }

    fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        lower.contains("series") && lower.contains("next")
    }

    async fn execute(&self, message: &IncomingMessage, ctx: &ActionContext) -> Reply {
        let Some(series) = series_name(&message.text) else {
            return Reply::text(ASK_FOR_SERIES);
        };
        Reply::text(ctx.series.next_race(&series).await.text)
    }
}

pub struct SeriesResultsAction;

#[async_trait]
impl Action for SeriesResultsAction {
    fn name(&self) -> &str {
        "series_results"
    }

    fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        lower.contains("series") && lower.contains("results")
    }

    async fn execute(&self, message: &IncomingMessage, ctx: &ActionContext) -> Reply {
        let Some(series) = series_name(&message.text) else {
            return Reply::text(ASK_FOR_SERIES);
        };
        Reply::text(ctx.series.series_results(&series).await.text)
    }
}

/// Series actions in registration order.
pub fn all_series_actions() -> Vec<Box<dyn Action>> {
    vec![
        Box::new(SeriesStandingsAction),
        Box::new(SeriesNextRaceAction),
        Box::new(SeriesResultsAction),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use fg_racing_api::{Pacer, RacingApiClient, RacingApiConfig, StubSeriesSource};

    fn context_with_stub() -> (ActionContext, Arc<StubSeriesSource>) {
        let stub = Arc::new(StubSeriesSource::new());
        let client = RacingApiClient::new(RacingApiConfig::default()).unwrap();
        let ctx = ActionContext {
            client: Arc::new(client),
            series: stub.clone(),
            pacer: Arc::new(Pacer::from_millis(0)),
        };
        (ctx, stub)
    }

    #[tokio::test]
    async fn standings_go_through_the_stub() {
        let (ctx, stub) = context_with_stub();
        let message = IncomingMessage::new("standings for the series Triple Crown");
        assert!(SeriesStandingsAction.matches(&message.text));

        let reply = SeriesStandingsAction.execute(&message, &ctx).await;
        assert!(reply.text.contains("Triple Crown"));
        assert_eq!(stub.calls(), vec!["standings:Triple Crown"]);
    }

    #[tokio::test]
    async fn missing_series_name_asks_for_one() {
        let (ctx, stub) = context_with_stub();
        let message = IncomingMessage::new("show me the next race in the series");

        let reply = SeriesNextRaceAction.execute(&message, &ctx).await;
        assert!(reply.text.contains("Which series?"));
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn series_results_reply_is_placeholder_text() {
        let (ctx, _stub) = context_with_stub();
        let message = IncomingMessage::new("results for the series Derby Trail");
        assert!(SeriesResultsAction.matches(&message.text));

        let reply = SeriesResultsAction.execute(&message, &ctx).await;
        assert!(reply.text.contains("aren't available yet"));
    }
}
