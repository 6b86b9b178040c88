//! Government response strategy models

use serde::{Deserialize, Serialize};

/// Disaster management phase a guideline belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StrategyPhase {
    Preparedness,
    Response,
    Recovery,
    Mitigation,
}

impl std::fmt::Display for StrategyPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyPhase::Preparedness => write!(f, "Preparedness"),
            StrategyPhase::Response => write!(f, "Response"),
            StrategyPhase::Recovery => write!(f, "Recovery"),
            StrategyPhase::Mitigation => write!(f, "Mitigation"),
        }
    }
}

/// Guideline record shown on the strategies page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrategyRecord {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<StrategyPhase>,
    /// Issuing authority for built-in records, publishing organisation for fetched ones
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub from_api: bool,
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

/// Record kind used for every strategy entry
pub const GUIDELINE_KIND: &str = "guideline";

/// A guideline document returned by the external guideline feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuidelineDocument {
    pub title: String,
    pub body: String,
    pub date: Option<String>,
    pub source: String,
    pub url: Option<String>,
    pub file_url: Option<String>,
}

impl From<GuidelineDocument> for StrategyRecord {
    fn from(doc: GuidelineDocument) -> Self {
        StrategyRecord {
            title: doc.title,
            body: doc.body,
            phase: None,
            source: doc.source,
            kind: GUIDELINE_KIND.to_string(),
            from_api: true,
            date: doc.date,
            url: doc.url,
            file_url: doc.file_url,
        }
    }
}
