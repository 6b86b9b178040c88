//! ReliefWeb API client
//!
//! Serves two feeds: recent disasters (`/disasters`) and published response
//! guidelines (`/reports`).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared::{GuidelineDocument, HistoricalDisaster};

use super::{GuidelineFeed, HistoricalFeed};
use crate::error::{AppError, AppResult};

const SERVICE: &str = "ReliefWeb";

/// Source name used when a report lists none
const DEFAULT_SOURCE: &str = "ReliefWeb";

/// ReliefWeb API client
#[derive(Clone)]
pub struct ReliefWebClient {
    client: Client,
    base_url: String,
    appname: String,
}

/// ReliefWeb list envelope
#[derive(Debug, Deserialize)]
struct RWList<T> {
    #[serde(default = "Vec::new")]
    data: Vec<RWItem<T>>,
}

#[derive(Debug, Deserialize)]
struct RWItem<T> {
    fields: T,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RWDisasterFields {
    id: Option<i64>,
    name: Option<String>,
    description: Option<String>,
    status: Option<String>,
    date: RWDate,
    #[serde(rename = "type")]
    kind: Vec<RWNamed>,
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RWReportFields {
    title: Option<String>,
    body: Option<String>,
    date: RWDate,
    source: Vec<RWNamed>,
    url: Option<String>,
    file: Vec<RWFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RWDate {
    event: Option<String>,
    created: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RWNamed {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RWFile {
    url: Option<String>,
}

impl ReliefWebClient {
    /// Create a new client against the given API base URL
    pub fn new(base_url: impl Into<String>, appname: impl Into<String>, timeout_secs: u64) -> AppResult<Self> {
        Ok(Self {
            client: super::http_client(timeout_secs)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            appname: appname.into(),
        })
    }

    async fn list<T>(&self, resource: &str, query: &str, limit: u32) -> AppResult<Vec<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/{}", self.base_url, resource);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("appname", self.appname.as_str()),
                ("profile", "list"),
                ("preset", "latest"),
                ("slim", "1"),
                ("query[value]", query),
            ])
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(|e| AppError::collaborator(SERVICE, format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::collaborator(
                SERVICE,
                format!("API returned {}: {}", status, body),
            ));
        }

        let list: RWList<T> = response
            .json()
            .await
            .map_err(|e| AppError::collaborator(SERVICE, format!("Failed to parse response: {}", e)))?;

        Ok(list.data.into_iter().map(|item| item.fields).collect())
    }
}

impl RWDisasterFields {
    fn into_disaster(self, country: &str) -> HistoricalDisaster {
        HistoricalDisaster {
            id: self.id,
            name: self.name,
            description: self.description.unwrap_or_default(),
            status: self.status,
            date: self.date.event,
            kind: self.kind.into_iter().next().and_then(|t| t.name),
            country: country.to_string(),
            url: self.url,
        }
    }
}

impl From<RWReportFields> for GuidelineDocument {
    fn from(fields: RWReportFields) -> Self {
        GuidelineDocument {
            title: fields.title.unwrap_or_default(),
            body: fields.body.unwrap_or_default(),
            date: fields.date.created,
            source: fields
                .source
                .into_iter()
                .next()
                .and_then(|s| s.name)
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            url: fields.url,
            file_url: fields.file.into_iter().next().and_then(|f| f.url),
        }
    }
}

#[async_trait]
impl HistoricalFeed for ReliefWebClient {
    async fn list_recent(&self, country: &str, limit: u32) -> AppResult<Vec<HistoricalDisaster>> {
        let query = format!("primary_country.name:{}", country);
        let fields: Vec<RWDisasterFields> = self.list("disasters", &query, limit).await?;
        Ok(fields.into_iter().map(|f| f.into_disaster(country)).collect())
    }
}

#[async_trait]
impl GuidelineFeed for ReliefWebClient {
    async fn search(
        &self,
        country: &str,
        disaster_type: &str,
        format: &str,
        limit: u32,
    ) -> AppResult<Vec<GuidelineDocument>> {
        let query = format!(
            "primary_country.name:{} AND disaster_type:{} AND format:{}",
            country, disaster_type, format
        );
        let fields: Vec<RWReportFields> = self.list("reports", &query, limit).await?;
        Ok(fields.into_iter().map(GuidelineDocument::from).collect())
    }
}
