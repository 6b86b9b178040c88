//! Route definitions for the Disaster Watch API

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Room for multipart framing and the location field on top of the image
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create API routes
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/cities", get(handlers::list_cities))
        .route("/disaster-types", get(handlers::list_disaster_types))
        .route("/weather/:city", get(handlers::get_current_weather))
        .route("/forecast/:city", get(handlers::get_forecast))
        .nest("/disasters", disaster_routes())
        .route("/strategies/:disaster_type", get(handlers::get_strategies))
        .nest("/views", view_routes())
        .nest("/image-analysis", image_analysis_routes(max_upload_bytes))
}

/// Prediction and history routes
fn disaster_routes() -> Router<AppState> {
    Router::new()
        .route("/predictions", get(handlers::get_all_predictions))
        .route("/predictions/:city", get(handlers::get_city_predictions))
        .route("/historical", get(handlers::get_historical_disasters))
}

/// Page view routes
fn view_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handlers::dashboard_view))
        .route("/prediction", get(handlers::prediction_view))
        .route("/strategies", get(handlers::strategies_view))
        .route("/image-analysis", get(handlers::image_analysis_view))
}

/// Image upload routes
fn image_analysis_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::upload_image)
                .layer(DefaultBodyLimit::max(max_upload_bytes + MULTIPART_OVERHEAD_BYTES)),
        )
        .route("/recent", get(handlers::list_recent_analyses))
}
