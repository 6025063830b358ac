//! Race-series data source — an explicitly stubbed collaborator.
//!
//! The remote API has no series endpoints yet. Rather than mixing
//! placeholder answers into the real client's code paths, series queries
//! go through this separate trait so tests (and readers) can always tell
//! a real remote call from canned data. The stub records what was asked
//! of it, in the same spirit as the recording mocks used elsewhere.

use async_trait::async_trait;
use std::sync::Mutex;

/// Answer to a series query, flagged when it is placeholder data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesAnswer {
    pub text: String,
    /// True when this did not come from the remote API.
    pub placeholder: bool,
}

impl SeriesAnswer {
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placeholder: true,
        }
    }
}

/// Source of race-series data (results, standings, next race).
#[async_trait]
pub trait SeriesDataSource: Send + Sync {
    async fn series_results(&self, series: &str) -> SeriesAnswer;
    async fn standings(&self, series: &str) -> SeriesAnswer;
    async fn next_race(&self, series: &str) -> SeriesAnswer;
}

/// Stub implementation returning clearly-labelled placeholder answers.
#[derive(Default)]
pub struct StubSeriesSource {
    /// Queries asked of the stub (for test assertions).
    calls: Mutex<Vec<String>>,
}

impl StubSeriesSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of every query string this stub has answered.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, what: &str, series: &str) {
        self.calls.lock().unwrap().push(format!("{what}:{series}"));
    }
}

#[async_trait]
impl SeriesDataSource for StubSeriesSource {
    async fn series_results(&self, series: &str) -> SeriesAnswer {
        self.record("results", series);
        SeriesAnswer::placeholder(format!(
            "Series results for \"{series}\" aren't available yet — series coverage is still being wired up."
        ))
    }

    async fn standings(&self, series: &str) -> SeriesAnswer {
        self.record("standings", series);
        SeriesAnswer::placeholder(format!(
            "Standings for \"{series}\" aren't available yet — series coverage is still being wired up."
        ))
    }

    async fn next_race(&self, series: &str) -> SeriesAnswer {
        self.record("next_race", series);
        SeriesAnswer::placeholder(format!(
            "The next race in \"{series}\" isn't scheduled in my data yet — series coverage is still being wired up."
        ))
    }
}
