//! Image analysis: disaster classification with a caption fallback
//!
//! The pipeline is a small state machine. The classifier runs first; when its
//! best score is under [`CLASSIFICATION_CONFIDENCE_THRESHOLD`] the image is
//! captioned and the caption is matched against the keyword table. Any
//! collaborator error ends the run with a failure result instead of an error.

use std::sync::Arc;

use serde::Serialize;
use shared::inference::{
    caption_result, classification_result, failed_result, CLASSIFICATION_CONFIDENCE_THRESHOLD,
};
use shared::{
    sanitize_filename, validate_image_filename, validate_location, validate_upload_size, Catalog,
    ImageAnalysisResult,
};

use crate::error::{AppError, AppResult};
use crate::external::{CaptionGenerator, DisasterClassifier};
use crate::services::analysis_records::{AnalysisRecordStore, ImageAnalysisRecord, NewImageAnalysis};

/// Pipeline position
#[derive(Debug)]
enum Stage {
    Primary,
    Fallback,
    Done(ImageAnalysisResult),
}

/// Result of an upload: the analysis and the stored record
#[derive(Debug, Clone, Serialize)]
pub struct UploadOutcome {
    pub analysis: ImageAnalysisResult,
    pub record: ImageAnalysisRecord,
}

#[derive(Clone)]
pub struct ImageAnalysisService {
    catalog: Arc<Catalog>,
    classifier: Arc<dyn DisasterClassifier>,
    captioner: Arc<dyn CaptionGenerator>,
    store: Arc<dyn AnalysisRecordStore>,
    max_upload_bytes: usize,
}

impl ImageAnalysisService {
    pub fn new(
        catalog: Arc<Catalog>,
        classifier: Arc<dyn DisasterClassifier>,
        captioner: Arc<dyn CaptionGenerator>,
        store: Arc<dyn AnalysisRecordStore>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            catalog,
            classifier,
            captioner,
            store,
            max_upload_bytes,
        }
    }

    async fn step(&self, stage: Stage, image: &[u8]) -> AppResult<Stage> {
        match stage {
            Stage::Primary => {
                let scores = self.classifier.classify(image).await?;
                let result = classification_result(&scores);
                if result.confidence < CLASSIFICATION_CONFIDENCE_THRESHOLD {
                    tracing::debug!(
                        confidence = result.confidence,
                        "Low classifier confidence, falling back to captioning"
                    );
                    Ok(Stage::Fallback)
                } else {
                    Ok(Stage::Done(result))
                }
            }
            Stage::Fallback => {
                let caption = self.captioner.caption(image).await?;
                Ok(Stage::Done(caption_result(
                    &caption,
                    self.catalog.caption_keywords(),
                )))
            }
            done @ Stage::Done(_) => Ok(done),
        }
    }

    /// Analyze an image. Never fails; errors are reported inside the result.
    pub async fn analyze(&self, image: &[u8]) -> ImageAnalysisResult {
        let mut stage = Stage::Primary;
        loop {
            stage = match self.step(stage, image).await {
                Ok(Stage::Done(result)) => return result,
                Ok(next) => next,
                Err(e) => {
                    tracing::error!(error = %e, "Error in image analysis");
                    return failed_result(e.to_string());
                }
            };
        }
    }

    /// Validate an upload, analyze it and store the outcome
    pub async fn analyze_upload(
        &self,
        filename: &str,
        location: Option<String>,
        image: &[u8],
    ) -> AppResult<UploadOutcome> {
        validate_image_filename(filename).map_err(|m| AppError::validation("file", m))?;
        validate_upload_size(image.len(), self.max_upload_bytes)
            .map_err(|m| AppError::validation("file", m))?;

        let location = location
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        if let Some(location) = &location {
            validate_location(location).map_err(|m| AppError::validation("location", m))?;
        }

        let filename = sanitize_filename(filename);
        if filename.is_empty() {
            return Err(AppError::validation("file", "No selected file"));
        }

        let analysis = self.analyze(image).await;
        tracing::info!(
            filename = %filename,
            verdict = %analysis.disaster_type,
            confidence = analysis.confidence,
            "Image analyzed"
        );

        let record = self
            .store
            .insert(NewImageAnalysis {
                filename,
                location,
                result: analysis.clone(),
            })
            .await?;

        Ok(UploadOutcome { analysis, record })
    }

    /// Most recent stored analyses
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<ImageAnalysisRecord>> {
        self.store.recent(limit).await
    }
}
