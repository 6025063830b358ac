//! Heuristic proper-noun extraction from message text.
//!
//! Not NLP: find the keyword token, take the tokens after it up to the
//! first trigger word, drop filler words. Good enough for "details about
//! the jockey Frankie Dettori" and intentionally nothing more.

use crate::intent;

/// Filler tokens dropped from the extracted name.
const FILLER_WORDS: &[&str] = &["named", "called"];

/// Punctuation trimmed from the ends of tokens and of the extracted name.
const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\''];

/// Sub-resource trigger words end the name: "horse Thunderbolt results"
/// names the horse "Thunderbolt", not "Thunderbolt results".
fn is_trigger_word(lower: &str) -> bool {
    intent::DETAILS_TRIGGERS
        .iter()
        .chain(intent::RESULTS_TRIGGERS)
        .chain(intent::ANALYSIS_TRIGGERS)
        .any(|t| lower == *t)
}

/// Extract a candidate entity name following the first token containing
/// `keyword`.
///
/// Matching is case-insensitive substring containment, not whole-word:
/// "racehorses" matches the keyword "horse". That mirrors the behavior
/// the validators rely on; see DESIGN.md for the open question on
/// whole-word matching.
///
/// Returns `None` when the keyword is absent, is the last token, or
/// nothing remains after dropping filler words.
pub fn extract_name(text: &str, keyword: &str) -> Option<String> {
    let keyword = keyword.to_lowercase();
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let keyword_pos = tokens
        .iter()
        .position(|t| t.to_lowercase().contains(&keyword))?;
    if keyword_pos + 1 >= tokens.len() {
        return None;
    }

    let mut parts: Vec<&str> = Vec::new();
    for token in &tokens[keyword_pos + 1..] {
        let lower = token.trim_matches(EDGE_PUNCTUATION).to_lowercase();
        if is_trigger_word(&lower) {
            break;
        }
        if FILLER_WORDS.contains(&lower.as_str()) {
            continue;
        }
        parts.push(token);
    }

    let name = parts.join(" ");
    let name = name.trim_matches(EDGE_PUNCTUATION).trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}
