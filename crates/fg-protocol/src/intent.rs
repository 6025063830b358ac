//! Parsed query intents.

use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;

/// Category of data requested about an already-identified entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubResource {
    /// Profile fields (pedigree, sex, colour, ...).
    Details,
    /// Historical race results.
    Results,
    /// Statistical analysis buckets (by distance or class).
    Analysis,
}

/// A parsed request: which entity kind and which sub-resource the message
/// asks for. At most one intent is active per message; the first matching
/// validator wins and no scoring or conflict resolution happens after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryIntent {
    pub kind: EntityKind,
    pub sub_resource: SubResource,
    /// Original message text the intent was parsed from.
    pub raw_text: String,
}

impl QueryIntent {
    pub fn new(kind: EntityKind, sub_resource: SubResource, raw_text: impl Into<String>) -> Self {
        Self {
            kind,
            sub_resource,
            raw_text: raw_text.into(),
        }
    }
}
