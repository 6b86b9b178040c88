//! HTTP handlers for image uploads and stored analyses

use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::{ImageAnalysisRecord, UploadOutcome};
use crate::AppState;

/// Default number of records returned by the recent listing
pub const DEFAULT_RECENT_LIMIT: i64 = 5;

#[derive(Debug, Deserialize, Validate)]
pub struct RecentQuery {
    #[validate(range(min = 1, max = 50))]
    pub limit: Option<i64>,
}

/// Analyze an uploaded image (multipart fields `file` and `location`)
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadOutcome>)> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut location: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::ValidationError(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation("file", format!("Could not read file: {}", e)))?;
                file = Some((filename, bytes.to_vec()));
            }
            Some("location") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation("location", format!("Invalid location: {}", e)))?;
                location = Some(text);
            }
            _ => {}
        }
    }

    let (filename, bytes) = file.ok_or_else(|| AppError::validation("file", "No file part"))?;
    let outcome = state
        .images
        .analyze_upload(&filename, location, &bytes)
        .await?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

/// Most recent stored analyses
pub async fn list_recent_analyses(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> AppResult<Json<Vec<ImageAnalysisRecord>>> {
    query.validate()?;
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    Ok(Json(state.images.recent(limit).await?))
}
