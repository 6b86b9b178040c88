//! Verdict helpers for image analysis: classifier label mapping and
//! keyword inference over generated captions

use crate::catalog::KeywordFamily;
use crate::models::{
    AnalysisMethod, DisasterType, ImageAnalysisResult, ImageVerdict, LabelScore,
};

/// Fixed confidence reported for caption-inferred verdicts
pub const CAPTION_INFERENCE_CONFIDENCE: f64 = 0.4;

/// Classifier confidence below which the caption fallback runs
pub const CLASSIFICATION_CONFIDENCE_THRESHOLD: f64 = 0.5;

pub const CAPTION_PLACEHOLDER: &str = "Could not generate a caption for this image.";
pub const CLASSIFICATION_FAILED_DESCRIPTION: &str = "Could not classify the image.";
pub const ANALYSIS_FAILED_DESCRIPTION: &str =
    "Could not analyze the image. Please try again with a clearer image.";

/// Map a classifier label to a verdict
pub fn verdict_for_label(label: &str) -> ImageVerdict {
    match label.trim().to_lowercase().as_str() {
        "fire" => ImageVerdict::Disaster(DisasterType::ForestFire),
        "flood" => ImageVerdict::Disaster(DisasterType::Flood),
        "earthquake" => ImageVerdict::Disaster(DisasterType::Earthquake),
        "cyclone" => ImageVerdict::Disaster(DisasterType::Cyclone),
        "landslide" => ImageVerdict::Disaster(DisasterType::Landslide),
        "non_disaster" => ImageVerdict::NoDisaster,
        _ => ImageVerdict::Unknown,
    }
}

/// Highest scoring entry; ties keep the first
pub fn top_label(scores: &[LabelScore]) -> Option<&LabelScore> {
    scores.iter().fold(None, |best: Option<&LabelScore>, candidate| match best {
        Some(b) if b.score >= candidate.score => Some(b),
        _ => Some(candidate),
    })
}

/// Build the primary-stage result from a classifier response
pub fn classification_result(scores: &[LabelScore]) -> ImageAnalysisResult {
    match top_label(scores) {
        Some(top) => {
            let verdict = verdict_for_label(&top.label);
            ImageAnalysisResult {
                disaster_type: verdict,
                description: format!(
                    "The image shows signs of a {}.",
                    verdict.name().to_lowercase()
                ),
                confidence: top.score,
                analysis_method: Some(AnalysisMethod::Classification),
                error: None,
            }
        }
        None => ImageAnalysisResult {
            disaster_type: ImageVerdict::Unknown,
            description: CLASSIFICATION_FAILED_DESCRIPTION.to_string(),
            confidence: 0.0,
            analysis_method: Some(AnalysisMethod::ClassificationFailed),
            error: None,
        },
    }
}

/// First keyword family with a substring hit in the lower-cased caption
pub fn infer_from_caption(caption: &str, families: &[KeywordFamily]) -> ImageVerdict {
    let caption = caption.to_lowercase();
    families
        .iter()
        .find(|family| family.keywords.iter().any(|k| caption.contains(k.as_str())))
        .map(|family| ImageVerdict::Disaster(family.disaster_type))
        .unwrap_or(ImageVerdict::Unknown)
}

/// Build the fallback-stage result from a caption
pub fn caption_result(caption: &str, families: &[KeywordFamily]) -> ImageAnalysisResult {
    ImageAnalysisResult {
        disaster_type: infer_from_caption(caption, families),
        description: caption.to_string(),
        confidence: CAPTION_INFERENCE_CONFIDENCE,
        analysis_method: Some(AnalysisMethod::CaptionInference),
        error: None,
    }
}

/// Terminal result when the analysis could not run
pub fn failed_result(error: impl Into<String>) -> ImageAnalysisResult {
    ImageAnalysisResult {
        disaster_type: ImageVerdict::Unknown,
        description: ANALYSIS_FAILED_DESCRIPTION.to_string(),
        confidence: 0.0,
        analysis_method: None,
        error: Some(error.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn families() -> Vec<KeywordFamily> {
        Catalog::builtin().unwrap().caption_keywords().to_vec()
    }

    #[test]
    fn test_label_mapping() {
        assert_eq!(verdict_for_label("fire"), DisasterType::ForestFire.into());
        assert_eq!(verdict_for_label("Flood"), DisasterType::Flood.into());
        assert_eq!(verdict_for_label("non_disaster"), ImageVerdict::NoDisaster);
        assert_eq!(verdict_for_label("volcano"), ImageVerdict::Unknown);
    }

    #[test]
    fn test_top_label_picks_highest_score() {
        let scores = vec![
            LabelScore::new("fire", 0.1),
            LabelScore::new("flood", 0.8),
            LabelScore::new("earthquake", 0.1),
        ];
        assert_eq!(top_label(&scores).unwrap().label, "flood");
        assert!(top_label(&[]).is_none());
    }

    #[test]
    fn test_classification_result_description() {
        let result = classification_result(&[LabelScore::new("fire", 0.91)]);
        assert_eq!(result.disaster_type, DisasterType::ForestFire.into());
        assert_eq!(result.description, "The image shows signs of a forest fire.");
        assert_eq!(result.confidence, 0.91);
        assert_eq!(result.analysis_method, Some(AnalysisMethod::Classification));
    }

    #[test]
    fn test_empty_classification_is_failed() {
        let result = classification_result(&[]);
        assert_eq!(result.disaster_type, ImageVerdict::Unknown);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.analysis_method, Some(AnalysisMethod::ClassificationFailed));
    }

    #[test]
    fn test_caption_inference() {
        let families = families();
        assert_eq!(
            infer_from_caption("the street is submerged after flooding", &families),
            DisasterType::Flood.into()
        );
        assert_eq!(
            infer_from_caption("Thick SMOKE rising over a hill", &families),
            DisasterType::ForestFire.into()
        );
        assert_eq!(
            infer_from_caption("a pile of rubble after the quake", &families),
            DisasterType::Earthquake.into()
        );
        assert_eq!(
            infer_from_caption("a cat sitting on a sofa", &families),
            ImageVerdict::Unknown
        );
    }

    #[test]
    fn test_caption_inference_uses_table_order() {
        // "flood" is checked before "storm"
        assert_eq!(
            infer_from_caption("storm causes flooding in the town", &families()),
            DisasterType::Flood.into()
        );
    }

    #[test]
    fn test_caption_result_has_fixed_confidence() {
        let result = caption_result("a cracked earth field under the sun", &families());
        assert_eq!(result.disaster_type, DisasterType::Drought.into());
        assert_eq!(result.confidence, CAPTION_INFERENCE_CONFIDENCE);
        assert_eq!(result.analysis_method, Some(AnalysisMethod::CaptionInference));
    }

    #[test]
    fn test_failed_result() {
        let result = failed_result("connection refused");
        assert_eq!(result.disaster_type, ImageVerdict::Unknown);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.error.as_deref(), Some("connection refused"));
        assert!(result.analysis_method.is_none());
    }
}
