//! Wire types for the remote racing-data API.
//!
//! Only the fields we consume are modeled; serde ignores the rest. All
//! identifiers are opaque strings — no structural validation anywhere.

use serde::{Deserialize, Serialize};

// ── Search ──────────────────────────────────────────────────────

/// `GET /v1/{collection}/search?name=...` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub search_results: Vec<SearchHit>,
}

/// One entry in a search response. First hit wins; there is no
/// disambiguation when several entities share a name.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

// ── Details ─────────────────────────────────────────────────────

/// Horse profile from `/v1/horses/{id}/pro` or the `/standard` fallback.
///
/// Every field is optional: the standard endpoint omits what the pro one
/// enriches, and the renderer drops absent fields rather than printing
/// placeholders.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HorseDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sire: Option<String>,
    #[serde(default)]
    pub dam: Option<String>,
    #[serde(default)]
    pub damsire: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub colour: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub breeder: Option<String>,
}

// ── Results ─────────────────────────────────────────────────────

/// `GET /v1/{collection}/{id}/results` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsResponse {
    #[serde(default)]
    pub results: Vec<RaceResult>,
}

/// One historical race result, most recent first.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RaceResult {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub race_name: String,
    #[serde(default)]
    pub runners: Vec<RunnerLine>,
}

/// A runner line inside a race result (only used when present).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunnerLine {
    #[serde(default)]
    pub horse: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

// ── Analysis ────────────────────────────────────────────────────

/// `GET /v1/{collection}/{id}/analysis/{subtype}` response.
///
/// The bucket array is named after the subtype ("distances" or
/// "classes") and the total field name differs across endpoints
/// ("total_runners" vs "total_runs") — both accidents of the remote API
/// that we absorb here so nothing downstream cares.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisReport {
    #[serde(default, alias = "total_runs")]
    pub total_runners: Option<u64>,
    #[serde(default)]
    pub distances: Vec<AnalysisBucket>,
    #[serde(default)]
    pub classes: Vec<AnalysisBucket>,
}

impl AnalysisReport {
    /// Whichever bucket axis the endpoint returned.
    pub fn buckets(&self) -> &[AnalysisBucket] {
        if !self.distances.is_empty() {
            &self.distances
        } else {
            &self.classes
        }
    }

    /// Total run count, falling back to the bucket sum when the remote
    /// omits the total field.
    pub fn total(&self) -> u64 {
        self.total_runners
            .unwrap_or_else(|| self.buckets().iter().map(|b| b.runners).sum())
    }
}

/// One analysis bucket (a distance band or a race class).
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisBucket {
    /// Distance label, present on distance buckets.
    #[serde(default)]
    pub dist: Option<serde_json::Value>,
    /// Class label, present on class buckets.
    #[serde(default)]
    pub class: Option<serde_json::Value>,
    #[serde(default)]
    pub runners: u64,
    #[serde(default, rename = "1st")]
    pub wins: u64,
    /// Win fraction in 0..1 as served by the remote.
    #[serde(default, rename = "win_%")]
    pub win_fraction: f64,
}

impl AnalysisBucket {
    /// Human-readable bucket label, whichever axis is present.
    pub fn label(&self) -> String {
        self.dist
            .as_ref()
            .or(self.class.as_ref())
            .map(scalar_label)
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Render a JSON scalar as a bare label (strings unquoted).
fn scalar_label(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── Meets ───────────────────────────────────────────────────────

/// `GET /v1/{region}/meets?start_date&end_date` response.
#[derive(Debug, Clone, Deserialize)]
pub struct MeetsResponse {
    #[serde(default)]
    pub meets: Vec<Meet>,
}

/// A race meeting on a given date.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Meet {
    pub id: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub date: String,
}

/// `GET /v1/meets/{id}/entries` response.
#[derive(Debug, Clone, Deserialize)]
pub struct MeetEntriesResponse {
    #[serde(default)]
    pub entries: Vec<MeetEntry>,
}

/// One declared entry at a meet.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MeetEntry {
    #[serde(default)]
    pub horse: String,
    #[serde(default)]
    pub jockey: Option<String>,
    #[serde(default)]
    pub race_time: Option<String>,
}
