//! External API integrations
//!
//! Each collaborator sits behind a trait so services can be exercised with
//! in-process doubles; the concrete clients talk HTTP through `reqwest`.

use async_trait::async_trait;
use shared::{City, CurrentConditions, DailyForecast, GuidelineDocument, HistoricalDisaster, LabelScore};

use crate::error::AppResult;

pub mod huggingface;
pub mod reliefweb;
pub mod weather;

pub use huggingface::{HuggingFaceCaptioner, HuggingFaceClassifier};
pub use reliefweb::ReliefWebClient;
pub use weather::OpenMeteoClient;

/// Current conditions and short-range forecast for a monitored city
#[async_trait]
pub trait WeatherGateway: Send + Sync {
    async fn current(&self, city: &City) -> AppResult<CurrentConditions>;

    /// Up to five days, starting today
    async fn forecast(&self, city: &City) -> AppResult<Vec<DailyForecast>>;
}

/// Recent disasters recorded for a country
#[async_trait]
pub trait HistoricalFeed: Send + Sync {
    async fn list_recent(&self, country: &str, limit: u32) -> AppResult<Vec<HistoricalDisaster>>;
}

/// Published response guidelines for a disaster type
#[async_trait]
pub trait GuidelineFeed: Send + Sync {
    async fn search(
        &self,
        country: &str,
        disaster_type: &str,
        format: &str,
        limit: u32,
    ) -> AppResult<Vec<GuidelineDocument>>;
}

/// Ranks disaster labels for an image
#[async_trait]
pub trait DisasterClassifier: Send + Sync {
    /// An empty list means the model gave no usable answer
    async fn classify(&self, image: &[u8]) -> AppResult<Vec<LabelScore>>;
}

/// Describes an image in a sentence
#[async_trait]
pub trait CaptionGenerator: Send + Sync {
    async fn caption(&self, image: &[u8]) -> AppResult<String>;
}

/// Build a `reqwest` client with the configured request timeout
pub(crate) fn http_client(timeout_secs: u64) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| crate::error::AppError::Configuration(format!("HTTP client: {}", e)))
}
