//! Meet operations: date-scoped listings, entries, results.
//!
//! These are the bulk-range operations: each remote call first waits on
//! the shared pacer so a burst of meet queries can't hammer the API.

use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;
use std::sync::LazyLock;

use fg_protocol::{IncomingMessage, Reply};

use crate::actions::{Action, ActionContext};
use crate::render;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());

/// Pull up to two ISO dates out of the text; missing dates default to
/// today (a single date means that one day).
fn extract_date_range(text: &str) -> (String, String) {
    let mut dates = DATE_RE.find_iter(text).map(|m| m.as_str().to_string());
    let today = Utc::now().date_naive().to_string();
    let start = dates.next().unwrap_or(today);
    let end = dates.next().unwrap_or_else(|| start.clone());
    (start, end)
}

/// First token following the literal word "meet", taken as a meet id.
fn extract_meet_id(text: &str) -> Option<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let pos = tokens.iter().position(|t| t.eq_ignore_ascii_case("meet"))?;
    tokens
        .get(pos + 1)
        .map(|t| t.trim_matches(['.', ',', '!', '?']).to_string())
        .filter(|t| !t.is_empty())
}

// ── List meets for a date range ─────────────────────────────────

pub struct MeetsListAction;

#[async_trait]
impl Action for MeetsListAction {
    fn name(&self) -> &str {
        "meets_list"
    }

    fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains("meet")
    }

    async fn execute(&self, message: &IncomingMessage, ctx: &ActionContext) -> Reply {
        let (start, end) = extract_date_range(&message.text);
        ctx.pacer.pace().await;
        match ctx.client.meets(&start, &end).await {
            Ok(meets) => Reply::text(render::meets(&start, &end, &meets)),
            Err(e) => {
                tracing::warn!(start, end, error = %e, "meet listing failed");
                Reply::text(format!(
                    "Couldn't list meets between {start} and {end} right now."
                ))
            }
        }
    }
}

// ── Entries for a meet ──────────────────────────────────────────

pub struct MeetEntriesAction;

#[async_trait]
impl Action for MeetEntriesAction {
    fn name(&self) -> &str {
        "meet_entries"
    }

    fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        lower.contains("meet") && lower.contains("entries")
    }

    async fn execute(&self, message: &IncomingMessage, ctx: &ActionContext) -> Reply {
        let Some(meet_id) = extract_meet_id(&message.text) else {
            return Reply::text(
                "Which meet? Try \"entries for meet MEET_ID\".".to_string(),
            );
        };
        ctx.pacer.pace().await;
        match ctx.client.meet_entries(&meet_id).await {
            Ok(entries) => Reply::text(render::meet_entries(&meet_id, &entries)),
            Err(e) => {
                tracing::warn!(meet_id, error = %e, "meet entries fetch failed");
                Reply::text(format!("Couldn't retrieve entries for meet {meet_id}."))
            }
        }
    }
}

// ── Results for a meet ──────────────────────────────────────────

pub struct MeetResultsAction;

#[async_trait]
impl Action for MeetResultsAction {
    fn name(&self) -> &str {
        "meet_results"
    }

    fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        lower.contains("meet") && lower.contains("results")
    }

    async fn execute(&self, message: &IncomingMessage, ctx: &ActionContext) -> Reply {
        let Some(meet_id) = extract_meet_id(&message.text) else {
            return Reply::text(
                "Which meet? Try \"results for meet MEET_ID\".".to_string(),
            );
        };
        ctx.pacer.pace().await;
        match ctx.client.meet_results(&meet_id).await {
            Ok(results) => Reply::text(render::meet_results(&meet_id, &results)),
            Err(e) => {
                tracing::warn!(meet_id, error = %e, "meet results fetch failed");
                Reply::text(format!("Couldn't retrieve results for meet {meet_id}."))
            }
        }
    }
}

/// Meet actions in registration order: the specific operations before the
/// catch-all listing.
pub fn all_meet_actions() -> Vec<Box<dyn Action>> {
    vec![
        Box::new(MeetEntriesAction),
        Box::new(MeetResultsAction),
        Box::new(MeetsListAction),
    ]
}
