//! Intent validation — keyword co-occurrence over lowercase text.
//!
//! Each lookup operation matches when the entity keyword and one of the
//! sub-resource trigger words both appear as substrings. No validator
//! excludes another's keyword set; a message matching several operations
//! is settled purely by registration order (first registered wins).

use fg_protocol::{EntityKind, QueryIntent, SubResource};

/// Trigger words for details requests.
pub const DETAILS_TRIGGERS: &[&str] = &["details", "info", "about", "profile"];

/// Trigger words for results requests.
pub const RESULTS_TRIGGERS: &[&str] = &["results", "form"];

/// Trigger words for analysis requests.
pub const ANALYSIS_TRIGGERS: &[&str] = &["analysis", "stats", "statistics"];

/// Sub-resources in per-kind registration order.
///
/// Results and analysis are registered before details so that phrasings
/// like "results about the horse X" reach the more specific operation.
pub const SUB_RESOURCE_ORDER: [SubResource; 3] = [
    SubResource::Results,
    SubResource::Analysis,
    SubResource::Details,
];

fn triggers(sub: SubResource) -> &'static [&'static str] {
    match sub {
        SubResource::Details => DETAILS_TRIGGERS,
        SubResource::Results => RESULTS_TRIGGERS,
        SubResource::Analysis => ANALYSIS_TRIGGERS,
    }
}

/// Whether `lower` (already lowercased) requests `sub` for `kind`.
pub fn lookup_matches(lower: &str, kind: EntityKind, sub: SubResource) -> bool {
    lower.contains(kind.keyword()) && triggers(sub).iter().any(|t| lower.contains(t))
}

/// Parse the active intent for a message, if any.
///
/// Iterates kinds and sub-resources in registration order and returns the
/// first match — the same disambiguation the dispatcher applies.
pub fn parse_intent(text: &str) -> Option<QueryIntent> {
    let lower = text.to_lowercase();
    for kind in EntityKind::ALL {
        for sub in SUB_RESOURCE_ORDER {
            if lookup_matches(&lower, kind, sub) {
                return Some(QueryIntent::new(kind, sub, text));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_intent() {
        let intent = parse_intent("Give me details about the jockey Frankie Dettori.").unwrap();
        assert_eq!(intent.kind, EntityKind::Jockey);
        assert_eq!(intent.sub_resource, SubResource::Details);
    }

    #[test]
    fn results_intent() {
        let intent = parse_intent("horse Thunderbolt results").unwrap();
        assert_eq!(intent.kind, EntityKind::Horse);
        assert_eq!(intent.sub_resource, SubResource::Results);
    }

    #[test]
    fn analysis_intent() {
        let intent = parse_intent("distance stats for the trainer Aidan O'Brien").unwrap();
        assert_eq!(intent.kind, EntityKind::Trainer);
        assert_eq!(intent.sub_resource, SubResource::Analysis);
    }

    #[test]
    fn no_trigger_word_means_no_intent() {
        assert!(parse_intent("I like the horse Thunderbolt").is_none());
    }

    #[test]
    fn no_entity_keyword_means_no_intent() {
        assert!(parse_intent("show me the results").is_none());
    }

    #[test]
    fn damsire_wins_over_dam_and_sire() {
        // "damsire" contains both shorter keywords; registration order
        // must route this to the damsire operation.
        let intent = parse_intent("damsire Galileo details").unwrap();
        assert_eq!(intent.kind, EntityKind::Damsire);
    }

    #[test]
    fn results_beats_details_when_both_trigger() {
        let intent = parse_intent("info and results for the horse Thunderbolt").unwrap();
        assert_eq!(intent.sub_resource, SubResource::Results);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let intent = parse_intent("HORSE Thunderbolt RESULTS").unwrap();
        assert_eq!(intent.kind, EntityKind::Horse);
    }
}
