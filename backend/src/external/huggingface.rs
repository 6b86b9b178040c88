//! Hugging Face inference API clients
//!
//! Both models take the raw image bytes as the request body and a bearer
//! token. Responses that are not the expected list shape are treated as
//! "no answer" rather than errors.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared::inference::CAPTION_PLACEHOLDER;
use shared::LabelScore;

use super::{CaptionGenerator, DisasterClassifier};
use crate::error::{AppError, AppResult};

const CLASSIFIER_SERVICE: &str = "Disaster classifier";
const CAPTION_SERVICE: &str = "Caption generator";

/// Shared request plumbing for inference endpoints
#[derive(Clone)]
struct InferenceEndpoint {
    client: Client,
    url: String,
    api_token: String,
    service: &'static str,
}

impl InferenceEndpoint {
    async fn post_image(&self, image: &[u8]) -> AppResult<serde_json::Value> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_token)
            .body(image.to_vec())
            .send()
            .await
            .map_err(|e| AppError::collaborator(self.service, format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::collaborator(
                self.service,
                format!("API returned {}: {}", status, body),
            ));
        }

        response.json().await.map_err(|e| {
            AppError::collaborator(self.service, format!("Failed to parse response: {}", e))
        })
    }
}

/// Disaster type image classifier
#[derive(Clone)]
pub struct HuggingFaceClassifier {
    endpoint: InferenceEndpoint,
}

impl HuggingFaceClassifier {
    pub fn new(url: impl Into<String>, api_token: impl Into<String>, timeout_secs: u64) -> AppResult<Self> {
        Ok(Self {
            endpoint: InferenceEndpoint {
                client: super::http_client(timeout_secs)?,
                url: url.into(),
                api_token: api_token.into(),
                service: CLASSIFIER_SERVICE,
            },
        })
    }
}

#[async_trait]
impl DisasterClassifier for HuggingFaceClassifier {
    async fn classify(&self, image: &[u8]) -> AppResult<Vec<LabelScore>> {
        let body = self.endpoint.post_image(image).await?;
        Ok(parse_label_scores(body))
    }
}

/// General purpose image captioner
#[derive(Clone)]
pub struct HuggingFaceCaptioner {
    endpoint: InferenceEndpoint,
}

impl HuggingFaceCaptioner {
    pub fn new(url: impl Into<String>, api_token: impl Into<String>, timeout_secs: u64) -> AppResult<Self> {
        Ok(Self {
            endpoint: InferenceEndpoint {
                client: super::http_client(timeout_secs)?,
                url: url.into(),
                api_token: api_token.into(),
                service: CAPTION_SERVICE,
            },
        })
    }
}

#[async_trait]
impl CaptionGenerator for HuggingFaceCaptioner {
    async fn caption(&self, image: &[u8]) -> AppResult<String> {
        let body = self.endpoint.post_image(image).await?;
        Ok(parse_caption(body))
    }
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    #[serde(default)]
    generated_text: String,
}

fn parse_label_scores(body: serde_json::Value) -> Vec<LabelScore> {
    match body {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

fn parse_caption(body: serde_json::Value) -> String {
    let first = match body {
        serde_json::Value::Array(items) => items.into_iter().next(),
        _ => None,
    };

    match first.map(serde_json::from_value::<GeneratedText>) {
        Some(Ok(text)) => text.generated_text,
        _ => CAPTION_PLACEHOLDER.to_string(),
    }
}
