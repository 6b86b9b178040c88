//! In-process collaborator doubles shared by the integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use disaster_watch_backend::error::{AppError, AppResult};
use disaster_watch_backend::external::{
    CaptionGenerator, DisasterClassifier, GuidelineFeed, HistoricalFeed, WeatherGateway,
};
use disaster_watch_backend::services::{AnalysisRecordStore, ImageAnalysisRecord, NewImageAnalysis};
use disaster_watch_backend::{AppState, Collaborators, Config};
use rust_decimal::Decimal;
use shared::{
    describe_weather_code, Catalog, City, CurrentConditions, DailyForecast, GuidelineDocument,
    HistoricalDisaster, LabelScore,
};
use uuid::Uuid;

fn unavailable(service: &'static str) -> AppError {
    AppError::collaborator(service, "connection refused")
}

/// Classifier returning fixed scores, or failing when `scores` is `None`
pub struct FixedClassifier {
    scores: Option<Vec<LabelScore>>,
    calls: AtomicUsize,
}

impl FixedClassifier {
    pub fn answering(scores: Vec<LabelScore>) -> Arc<Self> {
        Arc::new(Self { scores: Some(scores), calls: AtomicUsize::new(0) })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { scores: None, calls: AtomicUsize::new(0) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DisasterClassifier for FixedClassifier {
    async fn classify(&self, _image: &[u8]) -> AppResult<Vec<LabelScore>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.scores.clone().ok_or_else(|| unavailable("Disaster classifier"))
    }
}

/// Captioner returning a fixed caption, or failing when `caption` is `None`
pub struct FixedCaptioner {
    caption: Option<String>,
    calls: AtomicUsize,
}

impl FixedCaptioner {
    pub fn answering(caption: &str) -> Arc<Self> {
        Arc::new(Self { caption: Some(caption.to_string()), calls: AtomicUsize::new(0) })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { caption: None, calls: AtomicUsize::new(0) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CaptionGenerator for FixedCaptioner {
    async fn caption(&self, _image: &[u8]) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.caption.clone().ok_or_else(|| unavailable("Caption generator"))
    }
}

/// Guideline feed returning fixed documents, or failing when `None`
pub struct FixedGuidelines(pub Option<Vec<GuidelineDocument>>);

#[async_trait]
impl GuidelineFeed for FixedGuidelines {
    async fn search(
        &self,
        _country: &str,
        _disaster_type: &str,
        _format: &str,
        _limit: u32,
    ) -> AppResult<Vec<GuidelineDocument>> {
        self.0.clone().ok_or_else(|| unavailable("ReliefWeb"))
    }
}

/// Historical feed returning fixed records, or failing when `None`
pub struct FixedHistory(pub Option<Vec<HistoricalDisaster>>);

#[async_trait]
impl HistoricalFeed for FixedHistory {
    async fn list_recent(&self, _country: &str, limit: u32) -> AppResult<Vec<HistoricalDisaster>> {
        self.0
            .clone()
            .map(|mut d| {
                d.truncate(limit as usize);
                d
            })
            .ok_or_else(|| unavailable("ReliefWeb"))
    }
}

/// Weather gateway with canned readings, or failing for every city
pub struct StubWeather {
    pub available: bool,
}

#[async_trait]
impl WeatherGateway for StubWeather {
    async fn current(&self, city: &City) -> AppResult<CurrentConditions> {
        if !self.available {
            return Err(unavailable("Weather service"));
        }
        Ok(CurrentConditions {
            city: city.name.clone(),
            temperature: Some(Decimal::new(301, 1)),
            windspeed: Some(Decimal::new(125, 1)),
            winddirection: Some(Decimal::from(220)),
            weathercode: Some(61),
            humidity: Some(Decimal::from(84)),
            precipitation: Some(Decimal::new(12, 1)),
            time: Some("2024-07-10T12:00".to_string()),
            weather_description: describe_weather_code(Some(61)).to_string(),
        })
    }

    async fn forecast(&self, _city: &City) -> AppResult<Vec<DailyForecast>> {
        if !self.available {
            return Err(unavailable("Weather service"));
        }
        let start = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        Ok((0..5)
            .map(|i| DailyForecast {
                date: start + Duration::days(i),
                weathercode: Some(63),
                temperature_max: Some(Decimal::from(31)),
                temperature_min: Some(Decimal::from(26)),
                precipitation: Some(Decimal::from(20)),
                weather_description: describe_weather_code(Some(63)).to_string(),
            })
            .collect())
    }
}

/// Record store kept in memory
#[derive(Default)]
pub struct InMemoryRecords {
    records: Mutex<Vec<ImageAnalysisRecord>>,
}

impl InMemoryRecords {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl AnalysisRecordStore for InMemoryRecords {
    async fn insert(&self, analysis: NewImageAnalysis) -> AppResult<ImageAnalysisRecord> {
        let mut records = self.records.lock().unwrap();
        // Strictly increasing timestamps keep the ordering deterministic
        let upload_date = Utc::now() + Duration::milliseconds(records.len() as i64);
        let record = analysis.into_record(Uuid::new_v4(), upload_date);
        records.push(record.clone());
        Ok(record)
    }

    async fn recent(&self, limit: i64) -> AppResult<Vec<ImageAnalysisRecord>> {
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
        records.truncate(limit.max(0) as usize);
        Ok(records)
    }

    async fn ping(&self) -> bool {
        true
    }
}

pub fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().unwrap())
}

/// Collaborators that all answer successfully
pub fn healthy_collaborators() -> Collaborators {
    Collaborators {
        weather: Arc::new(StubWeather { available: true }),
        history: Arc::new(FixedHistory(Some(vec![sample_disaster()]))),
        guidelines: Arc::new(FixedGuidelines(Some(Vec::new()))),
        classifier: FixedClassifier::answering(vec![LabelScore::new("flood", 0.8)]),
        captioner: FixedCaptioner::answering("a flooded street"),
        records: Arc::new(InMemoryRecords::default()),
    }
}

/// Application state with a seeded prediction generator
pub fn app_state(collaborators: Collaborators) -> AppState {
    let mut config = Config::load().expect("default configuration");
    config.prediction.seed = Some(42);
    AppState::new(config, catalog(), collaborators)
}

pub fn sample_disaster() -> HistoricalDisaster {
    HistoricalDisaster {
        id: Some(52110),
        name: Some("India: Monsoon Floods - Jul 2024".to_string()),
        description: String::new(),
        status: Some("ongoing".to_string()),
        date: Some("2024-07-01T00:00:00+00:00".to_string()),
        kind: Some("Flood".to_string()),
        country: "India".to_string(),
        url: Some("https://reliefweb.int/node/52110".to_string()),
    }
}

pub fn sample_guideline() -> GuidelineDocument {
    GuidelineDocument {
        title: "Guidelines on Management of Floods".to_string(),
        body: "National guidelines for flood risk reduction.".to_string(),
        date: Some("2023-06-01T00:00:00+00:00".to_string()),
        source: "Govt. India".to_string(),
        url: Some("https://reliefweb.int/report/india/floods".to_string()),
        file_url: Some("https://reliefweb.int/files/floods.pdf".to_string()),
    }
}
