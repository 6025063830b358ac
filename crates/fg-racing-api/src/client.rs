//! Racing-data API client.
//!
//! Thin typed wrapper over the remote `/v1` surface: name search,
//! sub-resource fetches (details, results, analysis) and date-scoped
//! meet listings. Every request carries the configured Basic-auth
//! credentials and the configured timeout; there are no retries and no
//! caching.

use std::time::Duration;

use fg_protocol::EntityKind;

use crate::config::RacingApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::types::{
    AnalysisReport, HorseDetails, Meet, MeetEntriesResponse, MeetEntry, MeetsResponse, RaceResult,
    ResultsResponse, SearchResponse,
};

/// Client for the remote racing-data HTTP API.
pub struct RacingApiClient {
    http: reqwest::Client,
    config: RacingApiConfig,
}

impl RacingApiClient {
    pub fn new(config: RacingApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Region this client lists meets for.
    pub fn region(&self) -> &str {
        &self.config.region
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// GET a JSON resource with auth and an optional query string.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        let response = self
            .http
            .get(self.url(path))
            .basic_auth(&self.config.username, Some(&self.config.password))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        Ok(response.json().await?)
    }

    // ── Entity resolution ───────────────────────────────────────

    /// Resolve a free-text name to an opaque identifier.
    ///
    /// First search hit wins. Returns `None` for a transport failure, a
    /// non-success status, and an empty result set alike — callers are
    /// not meant to tell those apart (policy: a failed search reads as
    /// "no match"). Failures are logged for operators only.
    pub async fn search_id(&self, kind: EntityKind, name: &str) -> Option<String> {
        let path = format!("{}/search", kind.collection());
        let response: SearchResponse = match self.get_json(&path, &[("name", name)]).await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(kind = %kind, name, error = %e, "entity search failed");
                return None;
            }
        };
        response.search_results.into_iter().next().map(|hit| hit.id)
    }

    // ── Sub-resource fetchers ───────────────────────────────────

    /// Fetch horse profile details, preferring the enriched "pro"
    /// endpoint and falling back exactly once to "standard" when the pro
    /// endpoint answers with a non-success status.
    ///
    /// Horses are the only kind with a remote details endpoint; handlers
    /// for the other kinds synthesize details from the resolved name.
    pub async fn horse_details(&self, id: &str) -> ApiResult<HorseDetails> {
        match self.get_json(&format!("horses/{id}/pro"), &[]).await {
            Ok(details) => Ok(details),
            Err(ApiError::Status { status, .. }) => {
                tracing::debug!(id, status, "pro details unavailable, trying standard");
                self.get_json(&format!("horses/{id}/standard"), &[]).await
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch historical results for an entity.
    ///
    /// `Ok` with an empty vec means the remote answered and the entity
    /// has no recorded results — distinct from a fetch failure.
    pub async fn results(&self, kind: EntityKind, id: &str) -> ApiResult<Vec<RaceResult>> {
        let path = format!("{}/{id}/results", kind.collection());
        let response: ResultsResponse = self.get_json(&path, &[]).await?;
        Ok(response.results)
    }

    /// Fetch the analysis report for an entity, using the kind's
    /// subtype axis (distances or classes).
    pub async fn analysis(&self, kind: EntityKind, id: &str) -> ApiResult<AnalysisReport> {
        let subtype = kind.analysis_subtype().as_str();
        let path = format!("{}/{id}/analysis/{subtype}", kind.collection());
        self.get_json(&path, &[]).await
    }

    // ── Meets ───────────────────────────────────────────────────

    /// List meets in the configured region for an inclusive date range.
    pub async fn meets(&self, start_date: &str, end_date: &str) -> ApiResult<Vec<Meet>> {
        let path = format!("{}/meets", self.config.region);
        let response: MeetsResponse = self
            .get_json(&path, &[("start_date", start_date), ("end_date", end_date)])
            .await?;
        Ok(response.meets)
    }

    /// List declared entries for a meet.
    pub async fn meet_entries(&self, meet_id: &str) -> ApiResult<Vec<MeetEntry>> {
        let response: MeetEntriesResponse =
            self.get_json(&format!("meets/{meet_id}/entries"), &[]).await?;
        Ok(response.entries)
    }

    /// Fetch results for a completed meet.
    pub async fn meet_results(&self, meet_id: &str) -> ApiResult<Vec<RaceResult>> {
        let response: ResultsResponse =
            self.get_json(&format!("meets/{meet_id}/results"), &[]).await?;
        Ok(response.results)
    }
}
