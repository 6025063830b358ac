//! Message and reply envelopes shared between the dispatcher and the
//! hosting runtime, plus the reply-delivery seam.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use uuid::Uuid;

/// One conversational message handed to the dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Message ID (UUIDv7 for time-sortability).
    pub id: Uuid,
    /// Raw message text.
    pub text: String,
    /// When the message was received.
    pub received_at: DateTime<Utc>,
}

impl IncomingMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
            received_at: Utc::now(),
        }
    }
}

/// A rendered reply delivered back to the hosting runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Delivery callback supplied by the hosting runtime.
///
/// A handler that accepts a message must call this exactly once, on every
/// path including failures.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn deliver(&self, reply: Reply);
}

/// Recording sink for tests: collects every delivered reply.
#[derive(Default)]
pub struct CollectingSink {
    replies: Mutex<Vec<Reply>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of all replies delivered so far.
    pub fn replies(&self) -> Vec<Reply> {
        self.replies.lock().unwrap().clone()
    }

    /// The last delivered reply text, if any.
    pub fn last_text(&self) -> Option<String> {
        self.replies.lock().unwrap().last().map(|r| r.text.clone())
    }
}

#[async_trait]
impl ReplySink for CollectingSink {
    async fn deliver(&self, reply: Reply) {
        self.replies.lock().unwrap().push(reply);
    }
}
