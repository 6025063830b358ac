//! Racing entity kinds and references.
//!
//! The seven lookup-able actor categories of the remote racing-data API.
//! Each kind maps to a fixed pluralized collection path segment and an
//! intent keyword; analysis data is bucketed by distance or by class
//! depending on the kind (an axis owned by the remote API, not by us).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven racing-domain actor categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Horse,
    Trainer,
    Jockey,
    Owner,
    Sire,
    Dam,
    Damsire,
}

/// How the remote API buckets analysis data for a given entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSubtype {
    Distances,
    Classes,
}

impl AnalysisSubtype {
    /// Path segment and top-level response field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisSubtype::Distances => "distances",
            AnalysisSubtype::Classes => "classes",
        }
    }
}

impl EntityKind {
    /// All kinds in validator registration order.
    ///
    /// Damsire must precede sire and dam: keyword matching is substring
    /// containment and "damsire" contains both of the shorter keywords.
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Damsire,
        EntityKind::Sire,
        EntityKind::Dam,
        EntityKind::Horse,
        EntityKind::Trainer,
        EntityKind::Jockey,
        EntityKind::Owner,
    ];

    /// Pluralized remote collection path segment (e.g. "horses").
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Horse => "horses",
            EntityKind::Trainer => "trainers",
            EntityKind::Jockey => "jockeys",
            EntityKind::Owner => "owners",
            EntityKind::Sire => "sires",
            EntityKind::Dam => "dams",
            EntityKind::Damsire => "damsires",
        }
    }

    /// Lowercase keyword used for intent matching and name extraction.
    pub fn keyword(&self) -> &'static str {
        match self {
            EntityKind::Horse => "horse",
            EntityKind::Trainer => "trainer",
            EntityKind::Jockey => "jockey",
            EntityKind::Owner => "owner",
            EntityKind::Sire => "sire",
            EntityKind::Dam => "dam",
            EntityKind::Damsire => "damsire",
        }
    }

    /// Analysis bucketing axis for this kind.
    ///
    /// The remote API serves distance buckets for runners and connections,
    /// class buckets for bloodstock. Inherited inconsistency, not policy.
    pub fn analysis_subtype(&self) -> AnalysisSubtype {
        match self {
            EntityKind::Horse
            | EntityKind::Trainer
            | EntityKind::Jockey
            | EntityKind::Owner => AnalysisSubtype::Distances,
            EntityKind::Sire | EntityKind::Dam | EntityKind::Damsire => AnalysisSubtype::Classes,
        }
    }

    /// Whether the remote API has a details endpoint for this kind.
    ///
    /// Only horses do ("pro" with a "standard" fallback). For every other
    /// kind a details request is answered from the resolved name and id.
    pub fn has_remote_details(&self) -> bool {
        matches!(self, EntityKind::Horse)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A resolved entity: opaque remote identifier plus the name it resolved
/// from. Constructed only after a successful resolve; lives for one
/// handler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: String,
    pub name: String,
}

impl EntityRef {
    pub fn new(kind: EntityKind, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collections_are_pluralized_keywords() {
        for kind in EntityKind::ALL {
            assert!(kind.collection().starts_with(kind.keyword()));
            assert!(kind.collection().ends_with('s'));
        }
    }

    #[test]
    fn damsire_registered_before_dam_and_sire() {
        let order: Vec<&str> = EntityKind::ALL.iter().map(|k| k.keyword()).collect();
        let pos = |kw: &str| order.iter().position(|k| *k == kw).unwrap();
        assert!(pos("damsire") < pos("dam"));
        assert!(pos("damsire") < pos("sire"));
    }

    #[test]
    fn analysis_subtypes() {
        assert_eq!(
            EntityKind::Horse.analysis_subtype(),
            AnalysisSubtype::Distances
        );
        assert_eq!(
            EntityKind::Jockey.analysis_subtype(),
            AnalysisSubtype::Distances
        );
        assert_eq!(EntityKind::Sire.analysis_subtype(), AnalysisSubtype::Classes);
        assert_eq!(
            EntityKind::Damsire.analysis_subtype(),
            AnalysisSubtype::Classes
        );
    }

    #[test]
    fn only_horse_has_remote_details() {
        assert!(EntityKind::Horse.has_remote_details());
        for kind in EntityKind::ALL {
            if kind != EntityKind::Horse {
                assert!(!kind.has_remote_details());
            }
        }
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&EntityKind::Damsire).unwrap();
        assert_eq!(json, "\"damsire\"");
        let back: EntityKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EntityKind::Damsire);
    }
}
