//! Business logic services

pub mod analysis_records;
pub mod dashboard;
pub mod image_analysis;
pub mod prediction;
pub mod strategy;
pub mod weather;

pub use analysis_records::{AnalysisRecordStore, ImageAnalysisRecord, NewImageAnalysis, PgAnalysisRecordStore};
pub use dashboard::DashboardService;
pub use image_analysis::{ImageAnalysisService, UploadOutcome};
pub use prediction::PredictionService;
pub use strategy::StrategyService;
pub use weather::WeatherService;
