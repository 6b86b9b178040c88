//! India Disaster Watch - Backend
//!
//! Weather, heuristic disaster risk, government guidance and image-based
//! disaster classification for twenty Indian cities, served as a JSON API.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::Catalog;
use sqlx::PgPool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use error::AppResult;
use external::{
    CaptionGenerator, DisasterClassifier, GuidelineFeed, HistoricalFeed, HuggingFaceCaptioner,
    HuggingFaceClassifier, OpenMeteoClient, ReliefWebClient, WeatherGateway,
};
use services::{
    AnalysisRecordStore, DashboardService, ImageAnalysisService, PgAnalysisRecordStore,
    PredictionService, StrategyService, WeatherService,
};

/// External systems the services depend on
#[derive(Clone)]
pub struct Collaborators {
    pub weather: Arc<dyn WeatherGateway>,
    pub history: Arc<dyn HistoricalFeed>,
    pub guidelines: Arc<dyn GuidelineFeed>,
    pub classifier: Arc<dyn DisasterClassifier>,
    pub captioner: Arc<dyn CaptionGenerator>,
    pub records: Arc<dyn AnalysisRecordStore>,
}

impl Collaborators {
    /// HTTP clients and the PostgreSQL store, as configured
    pub fn from_config(config: &Config, db: PgPool) -> AppResult<Self> {
        let reliefweb = Arc::new(ReliefWebClient::new(
            &config.reliefweb.api_endpoint,
            &config.reliefweb.appname,
            config.reliefweb.timeout_secs,
        )?);
        let hf = &config.huggingface;

        Ok(Self {
            weather: Arc::new(OpenMeteoClient::new(
                &config.weather.api_endpoint,
                config.weather.timeout_secs,
            )?),
            history: reliefweb.clone(),
            guidelines: reliefweb,
            classifier: Arc::new(HuggingFaceClassifier::new(
                &hf.classifier_url,
                &hf.api_token,
                hf.timeout_secs,
            )?),
            captioner: Arc::new(HuggingFaceCaptioner::new(
                &hf.caption_url,
                &hf.api_token,
                hf.timeout_secs,
            )?),
            records: Arc::new(PgAnalysisRecordStore::new(db)),
        })
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    pub weather: WeatherService,
    pub predictions: PredictionService,
    pub strategies: StrategyService,
    pub images: ImageAnalysisService,
    pub views: DashboardService,
    pub records: Arc<dyn AnalysisRecordStore>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<Catalog>, collaborators: Collaborators) -> Self {
        let weather = WeatherService::new(catalog.clone(), collaborators.weather);
        let predictions = PredictionService::new(catalog.clone(), config.prediction.seed);
        let strategies = StrategyService::new(collaborators.guidelines);
        let images = ImageAnalysisService::new(
            catalog.clone(),
            collaborators.classifier,
            collaborators.captioner,
            collaborators.records.clone(),
            config.uploads.max_bytes,
        );
        let views = DashboardService::new(
            catalog.clone(),
            weather.clone(),
            predictions.clone(),
            strategies.clone(),
            images.clone(),
            collaborators.history,
            config.uploads.recent_limit,
        );

        Self {
            config: Arc::new(config),
            catalog,
            weather,
            predictions,
            strategies,
            images,
            views,
            records: collaborators.records,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes(state.config.uploads.max_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "India Disaster Watch API v1.0"
}
