pub mod client;
pub mod config;
pub mod error;
pub mod pacing;
pub mod series;
pub mod types;

pub use client::RacingApiClient;
pub use config::RacingApiConfig;
pub use error::{ApiError, ApiResult};
pub use pacing::Pacer;
pub use series::{SeriesAnswer, SeriesDataSource, StubSeriesSource};
