//! Persistence of image analysis records

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::ImageAnalysisResult;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::AppResult;

/// A stored image analysis
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct ImageAnalysisRecord {
    pub id: Uuid,
    pub filename: String,
    pub location: Option<String>,
    pub upload_date: DateTime<Utc>,
    /// Description produced by the analysis
    pub analysis_result: String,
    pub disaster_type: String,
    pub confidence_score: f64,
    pub analysis_method: Option<String>,
    pub error: Option<String>,
}

/// Input for storing an analysis
#[derive(Debug, Clone)]
pub struct NewImageAnalysis {
    pub filename: String,
    pub location: Option<String>,
    pub result: ImageAnalysisResult,
}

impl NewImageAnalysis {
    /// Materialize the row as it will be stored
    pub fn into_record(self, id: Uuid, upload_date: DateTime<Utc>) -> ImageAnalysisRecord {
        ImageAnalysisRecord {
            id,
            filename: self.filename,
            location: self.location,
            upload_date,
            analysis_result: self.result.description,
            disaster_type: self.result.disaster_type.name().to_string(),
            confidence_score: self.result.confidence,
            analysis_method: self.result.analysis_method.map(|m| m.as_str().to_string()),
            error: self.result.error,
        }
    }
}

/// Storage for image analysis records
#[async_trait]
pub trait AnalysisRecordStore: Send + Sync {
    async fn insert(&self, analysis: NewImageAnalysis) -> AppResult<ImageAnalysisRecord>;

    /// Most recent records first
    async fn recent(&self, limit: i64) -> AppResult<Vec<ImageAnalysisRecord>>;

    /// Whether the backing store is reachable
    async fn ping(&self) -> bool;
}

/// PostgreSQL-backed record store
#[derive(Clone)]
pub struct PgAnalysisRecordStore {
    db: PgPool,
}

impl PgAnalysisRecordStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AnalysisRecordStore for PgAnalysisRecordStore {
    async fn insert(&self, analysis: NewImageAnalysis) -> AppResult<ImageAnalysisRecord> {
        let record = analysis.into_record(Uuid::new_v4(), Utc::now());

        let stored = sqlx::query_as::<_, ImageAnalysisRecord>(
            r#"
            INSERT INTO image_analyses (
                id, filename, location, upload_date, analysis_result,
                disaster_type, confidence_score, analysis_method, error
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, filename, location, upload_date, analysis_result,
                      disaster_type, confidence_score, analysis_method, error
            "#,
        )
        .bind(record.id)
        .bind(&record.filename)
        .bind(&record.location)
        .bind(record.upload_date)
        .bind(&record.analysis_result)
        .bind(&record.disaster_type)
        .bind(record.confidence_score)
        .bind(&record.analysis_method)
        .bind(&record.error)
        .fetch_one(&self.db)
        .await?;

        tracing::debug!(id = %stored.id, filename = %stored.filename, "Stored image analysis");
        Ok(stored)
    }

    async fn recent(&self, limit: i64) -> AppResult<Vec<ImageAnalysisRecord>> {
        let records = sqlx::query_as::<_, ImageAnalysisRecord>(
            r#"
            SELECT id, filename, location, upload_date, analysis_result,
                   disaster_type, confidence_score, analysis_method, error
            FROM image_analyses
            ORDER BY upload_date DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.db).await.is_ok()
    }
}
