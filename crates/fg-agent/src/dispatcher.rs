//! Action dispatcher — first matching action handles the message.
//!
//! Iterates the registered actions in order, invokes the first whose
//! validator accepts the text, and delivers the reply through the
//! hosting runtime's sink exactly once. A message no action claims is
//! left to the hosting runtime.

use fg_protocol::{IncomingMessage, Reply, ReplySink};

use crate::actions::{Action, ActionContext, all_actions};

pub struct Dispatcher {
    actions: Vec<Box<dyn Action>>,
    ctx: ActionContext,
}

impl Dispatcher {
    /// Dispatcher with the full registered action table.
    pub fn new(ctx: ActionContext) -> Self {
        Self::with_actions(all_actions(), ctx)
    }

    /// Dispatcher over an explicit action table (tests).
    pub fn with_actions(actions: Vec<Box<dyn Action>>, ctx: ActionContext) -> Self {
        Self { actions, ctx }
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Route one message. Returns whether any action handled it.
    pub async fn dispatch(&self, message: &IncomingMessage, sink: &dyn ReplySink) -> bool {
        for action in &self.actions {
            if action.matches(&message.text) {
                tracing::info!(
                    action = action.name(),
                    message_id = %message.id,
                    "dispatching message"
                );
                let reply = action.execute(message, &self.ctx).await;
                sink.deliver(reply).await;
                return true;
            }
        }
        tracing::debug!(message_id = %message.id, "no action matched");
        false
    }
}
