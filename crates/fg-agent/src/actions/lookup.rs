//! The generic entity-lookup pipeline.
//!
//! One parameterized action covers every (entity kind, sub-resource)
//! pair: keyword-gated validation, name extraction, remote resolve,
//! sub-resource fetch, bounded rendering. The per-kind differences — path
//! segment, analysis subtype, whether details exist remotely — all live
//! on `EntityKind`, so this file is the only copy of the pipeline.

use async_trait::async_trait;

use fg_protocol::{EntityKind, EntityRef, IncomingMessage, Reply, SubResource};

use crate::actions::{Action, ActionContext};
use crate::extract::extract_name;
use crate::intent::{self, SUB_RESOURCE_ORDER};
use crate::render;

/// Lookup action for one (kind, sub-resource) pair.
pub struct EntityLookupAction {
    kind: EntityKind,
    sub: SubResource,
    name: String,
}

impl EntityLookupAction {
    pub fn new(kind: EntityKind, sub: SubResource) -> Self {
        let sub_label = match sub {
            SubResource::Details => "details",
            SubResource::Results => "results",
            SubResource::Analysis => "analysis",
        };
        Self {
            kind,
            sub,
            name: format!("{}_{}", kind.keyword(), sub_label),
        }
    }

    /// Run the sequential pipeline once the validator has accepted.
    async fn run(&self, text: &str, ctx: &ActionContext) -> String {
        let Some(name) = extract_name(text, self.kind.keyword()) else {
            return render::no_name(self.kind);
        };

        let Some(id) = ctx.client.search_id(self.kind, &name).await else {
            return render::not_found(self.kind, &name);
        };
        let entity = EntityRef::new(self.kind, id, name);

        match self.sub {
            SubResource::Details if self.kind.has_remote_details() => {
                match ctx.client.horse_details(&entity.id).await {
                    Ok(details) => render::horse_details(&entity, &details),
                    Err(e) => {
                        tracing::warn!(
                            kind = %self.kind, id = %entity.id, error = %e,
                            "details fetch failed"
                        );
                        render::fetch_failed(&entity, self.sub)
                    }
                }
            }
            // No remote details endpoint for this kind: answer from the
            // resolved name and id alone.
            SubResource::Details => render::synthetic_details(&entity),
            SubResource::Results => match ctx.client.results(self.kind, &entity.id).await {
                Ok(results) if results.is_empty() => render::empty_results(&entity),
                Ok(results) => render::results(&entity, &results),
                Err(e) => {
                    tracing::warn!(
                        kind = %self.kind, id = %entity.id, error = %e,
                        "results fetch failed"
                    );
                    render::fetch_failed(&entity, self.sub)
                }
            },
            SubResource::Analysis => match ctx.client.analysis(self.kind, &entity.id).await {
                Ok(report) if report.buckets().is_empty() => render::empty_analysis(&entity),
                Ok(report) => render::analysis(&entity, &report),
                Err(e) => {
                    tracing::warn!(
                        kind = %self.kind, id = %entity.id, error = %e,
                        "analysis fetch failed"
                    );
                    render::fetch_failed(&entity, self.sub)
                }
            },
        }
    }
}

#[async_trait]
impl Action for EntityLookupAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, text: &str) -> bool {
        intent::lookup_matches(&text.to_lowercase(), self.kind, self.sub)
    }

    async fn execute(&self, message: &IncomingMessage, ctx: &ActionContext) -> Reply {
        Reply::text(self.run(&message.text, ctx).await)
    }
}

/// All 21 lookup actions in registration order.
pub fn all_lookup_actions() -> Vec<Box<dyn Action>> {
    let mut actions: Vec<Box<dyn Action>> = Vec::with_capacity(21);
    for kind in EntityKind::ALL {
        for sub in SUB_RESOURCE_ORDER {
            actions.push(Box::new(EntityLookupAction::new(kind, sub)));
        }
    }
    actions
}
