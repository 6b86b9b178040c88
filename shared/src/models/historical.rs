//! Historical disaster records

use serde::{Deserialize, Serialize};

/// A past disaster event as reported by the historical feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoricalDisaster {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: String,
    pub status: Option<String>,
    /// Event date as reported by the feed (ISO-8601)
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub country: String,
    pub url: Option<String>,
}
