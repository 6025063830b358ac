//! Agent actions: validator + handler pairs the dispatcher iterates.
//!
//! Registration order is the disambiguation rule — the first action whose
//! validator accepts a message handles it. Entity lookups come first
//! (damsire before dam and sire, see `EntityKind::ALL`), then meet
//! operations, then the stubbed series operations.

use async_trait::async_trait;
use std::sync::Arc;

use fg_protocol::{IncomingMessage, Reply};
use fg_racing_api::{Pacer, RacingApiClient, SeriesDataSource};

pub mod lookup;
pub mod meets;
pub mod series;

/// Shared collaborators handed to every action invocation.
pub struct ActionContext {
    pub client: Arc<RacingApiClient>,
    pub series: Arc<dyn SeriesDataSource>,
    pub pacer: Arc<Pacer>,
}

/// One conversational operation: a pure text predicate plus a handler.
///
/// `execute` must always produce a reply — failure paths render their own
/// user-facing text and never propagate errors to the dispatcher.
#[async_trait]
pub trait Action: Send + Sync {
    /// Stable action name for logs.
    fn name(&self) -> &str;

    /// Whether this action should handle the message.
    fn matches(&self, text: &str) -> bool;

    /// Handle the message and render a reply.
    async fn execute(&self, message: &IncomingMessage, ctx: &ActionContext) -> Reply;
}

/// The full action table in registration order.
pub fn all_actions() -> Vec<Box<dyn Action>> {
    let mut actions = lookup::all_lookup_actions();
    actions.extend(meets::all_meet_actions());
    actions.extend(series::all_series_actions());
    actions
}
