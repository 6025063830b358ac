//! Racing API client error types.

use thiserror::Error;

/// Errors from calls to the remote racing-data API.
///
/// A successful call with zero items is not an error; fetchers return
/// `Ok` with an empty collection so handlers can tell "no results" apart
/// from a failed fetch.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{path} returned HTTP {status}")]
    Status { status: u16, path: String },
}

impl ApiError {
    /// HTTP status code, when the remote answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// Convenience alias for racing API results.
pub type ApiResult<T> = Result<T, ApiError>;
