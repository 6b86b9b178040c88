//! Image analysis models

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::DisasterType;

/// Disaster verdict produced for an uploaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageVerdict {
    Disaster(DisasterType),
    NoDisaster,
    Unknown,
}

impl ImageVerdict {
    pub fn name(&self) -> &'static str {
        match self {
            ImageVerdict::Disaster(t) => t.name(),
            ImageVerdict::NoDisaster => "No Disaster",
            ImageVerdict::Unknown => "Unknown",
        }
    }

    pub fn parse(input: &str) -> ImageVerdict {
        match input.trim().to_lowercase().as_str() {
            "no disaster" => ImageVerdict::NoDisaster,
            other => DisasterType::parse(other)
                .map(ImageVerdict::Disaster)
                .unwrap_or(ImageVerdict::Unknown),
        }
    }

    pub fn disaster_type(&self) -> Option<DisasterType> {
        match self {
            ImageVerdict::Disaster(t) => Some(*t),
            _ => None,
        }
    }
}

impl std::fmt::Display for ImageVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<DisasterType> for ImageVerdict {
    fn from(t: DisasterType) -> Self {
        ImageVerdict::Disaster(t)
    }
}

impl Serialize for ImageVerdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ImageVerdict {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ImageVerdict::parse(&s))
    }
}

/// How the verdict was reached
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    Classification,
    CaptionInference,
    ClassificationFailed,
}

impl AnalysisMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMethod::Classification => "classification",
            AnalysisMethod::CaptionInference => "caption_inference",
            AnalysisMethod::ClassificationFailed => "classification_failed",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<AnalysisMethod> {
        match s {
            "classification" => Some(AnalysisMethod::Classification),
            "caption_inference" => Some(AnalysisMethod::CaptionInference),
            "classification_failed" => Some(AnalysisMethod::ClassificationFailed),
            _ => None,
        }
    }
}

/// One (label, score) pair from the disaster classifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelScore {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub score: f64,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Outcome of analysing one uploaded image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageAnalysisResult {
    pub disaster_type: ImageVerdict,
    pub description: String,
    pub confidence: f64,
    /// Absent when the analysis itself failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_method: Option<AnalysisMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
