//! Fixed-format reply rendering.
//!
//! List renderings are bounded to `MAX_LIST_ITEMS` entries with an
//! explicit "(showing first N of M)" suffix when truncated. Absent
//! optional fields are omitted outright — one policy, applied everywhere,
//! no "N/A" placeholders. Every failure path gets its own distinct
//! message; nothing here ever renders blank text.

use fg_protocol::{EntityKind, EntityRef, SubResource};
use fg_racing_api::types::{AnalysisReport, HorseDetails, Meet, MeetEntry, RaceResult};

/// Upper bound on enumerated list entries in any reply.
pub const MAX_LIST_ITEMS: usize = 5;

/// Truncation suffix, appended iff the source list is longer than what
/// was shown.
fn truncation_note(total: usize) -> Option<String> {
    (total > MAX_LIST_ITEMS).then(|| format!("(showing first {MAX_LIST_ITEMS} of {total})"))
}

// ── Details ─────────────────────────────────────────────────────

/// Render horse profile details fetched from the remote.
pub fn horse_details(entity: &EntityRef, details: &HorseDetails) -> String {
    let mut lines = vec![
        "Horse details:".to_string(),
        format!("Name: {}", details.name.as_deref().unwrap_or(&entity.name)),
        format!("ID: {}", entity.id),
    ];

    let optional = [
        ("Sire", &details.sire),
        ("Dam", &details.dam),
        ("Damsire", &details.damsire),
        ("Sex", &details.sex),
        ("Colour", &details.colour),
        ("DOB", &details.dob),
        ("Breeder", &details.breeder),
    ];
    for (label, value) in optional {
        if let Some(v) = value {
            lines.push(format!("{label}: {v}"));
        }
    }
    lines.join("\n")
}

/// Render details for kinds with no remote details endpoint, purely from
/// the resolved name and id.
pub fn synthetic_details(entity: &EntityRef) -> String {
    format!(
        "{} details:\nName: {}\nID: {}",
        capitalize(entity.kind.keyword()),
        entity.name,
        entity.id
    )
}

// ── Results ─────────────────────────────────────────────────────

/// Render up to five most-recent results as `date | course | "race"`.
pub fn results(entity: &EntityRef, results: &[RaceResult]) -> String {
    let mut lines = vec![format!("Recent results for {}:", entity.name)];
    for r in results.iter().take(MAX_LIST_ITEMS) {
        lines.push(format!("{} | {} | \"{}\"", r.date, r.course, r.race_name));
    }
    if let Some(note) = truncation_note(results.len()) {
        lines.push(note);
    }
    lines.join("\n")
}

// ── Analysis ────────────────────────────────────────────────────

/// Render the analysis report: total line, then up to five buckets with
/// win percentage to one decimal place.
pub fn analysis(entity: &EntityRef, report: &AnalysisReport) -> String {
    let buckets = report.buckets();
    let mut lines = vec![format!(
        "Analysis for {}: {} total runs",
        entity.name,
        report.total()
    )];
    for b in buckets.iter().take(MAX_LIST_ITEMS) {
        lines.push(format!(
            "{}: {} runs, {} wins, {:.1}%",
            b.label(),
            b.runners,
            b.wins,
            b.win_fraction * 100.0
        ));
    }
    if let Some(note) = truncation_note(buckets.len()) {
        lines.push(note);
    }
    lines.join("\n")
}

// ── Meets ───────────────────────────────────────────────────────

/// Render a meet listing for a date range.
pub fn meets(start_date: &str, end_date: &str, meets: &[Meet]) -> String {
    if meets.is_empty() {
        return format!("No meets found between {start_date} and {end_date}.");
    }
    let mut lines = vec![format!("Meets from {start_date} to {end_date}:")];
    for m in meets.iter().take(MAX_LIST_ITEMS) {
        lines.push(format!("{} | {} | {}", m.date, m.course, m.id));
    }
    if let Some(note) = truncation_note(meets.len()) {
        lines.push(note);
    }
    lines.join("\n")
}

/// Render declared entries for a meet.
pub fn meet_entries(meet_id: &str, entries: &[MeetEntry]) -> String {
    if entries.is_empty() {
        return format!("No entries recorded for meet {meet_id}.");
    }
    let mut lines = vec![format!("Entries for meet {meet_id}:")];
    for e in entries.iter().take(MAX_LIST_ITEMS) {
        let mut line = e.horse.clone();
        if let Some(jockey) = &e.jockey {
            line.push_str(&format!(" ({jockey})"));
        }
        if let Some(time) = &e.race_time {
            line.push_str(&format!(" at {time}"));
        }
        lines.push(line);
    }
    if let Some(note) = truncation_note(entries.len()) {
        lines.push(note);
    }
    lines.join("\n")
}

/// Render results for a completed meet.
pub fn meet_results(meet_id: &str, results_list: &[RaceResult]) -> String {
    if results_list.is_empty() {
        return format!("No results recorded for meet {meet_id}.");
    }
    let mut lines = vec![format!("Results for meet {meet_id}:")];
    for r in results_list.iter().take(MAX_LIST_ITEMS) {
        lines.push(format!("{} | {} | \"{}\"", r.date, r.course, r.race_name));
    }
    if let Some(note) = truncation_note(results_list.len()) {
        lines.push(note);
    }
    lines.join("\n")
}

// ── Failure messages ────────────────────────────────────────────
// One distinct message per failure path; transport detail goes to the
// log, never to the user.

/// No entity name could be extracted from the message.
pub fn no_name(kind: EntityKind) -> String {
    format!(
        "I couldn't spot a {kind} name in that. Try something like \"{kind} details for the {kind} NAME\".",
    )
}

/// The resolver found no matching entity.
pub fn not_found(kind: EntityKind, name: &str) -> String {
    format!("No {kind} found matching \"{name}\".")
}

/// The sub-resource fetch failed after a successful resolve.
pub fn fetch_failed(entity: &EntityRef, sub: SubResource) -> String {
    let what = match sub {
        SubResource::Details => "details",
        SubResource::Results => "results",
        SubResource::Analysis => "analysis",
    };
    format!(
        "Couldn't retrieve {what} for {} right now. Please try again later.",
        entity.name
    )
}

/// The fetch succeeded but came back empty.
pub fn empty_results(entity: &EntityRef) -> String {
    format!("No results recorded for {}.", entity.name)
}

/// Analysis fetch succeeded but held no buckets.
pub fn empty_analysis(entity: &EntityRef) -> String {
    format!("No analysis data available for {}.", entity.name)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
