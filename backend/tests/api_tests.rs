//! HTTP API tests
//!
//! Drives the router with `tower::ServiceExt::oneshot` over in-process
//! collaborators; no network or database is needed.

mod common;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use common::{app_state, healthy_collaborators, FixedHistory, InMemoryRecords, StubWeather};
use disaster_watch_backend::{create_app, Collaborators};
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "dw-test-boundary";

fn app(collaborators: Collaborators) -> Router {
    create_app(app_state(collaborators))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

fn multipart_upload(filename: &str, location: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"location\"\r\n\r\n{location}\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n",
            b = BOUNDARY
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::post("/api/v1/image-analysis")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

// ============================================================================
// Catalog and health
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(healthy_collaborators()), "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_cities_and_disaster_types() {
    let (status, cities) = get(app(healthy_collaborators()), "/api/v1/cities").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cities.as_array().unwrap().len(), 20);
    assert_eq!(cities[0]["name"], "Mumbai");

    let (_, types) = get(app(healthy_collaborators()), "/api/v1/disaster-types").await;
    let types: Vec<&str> = types
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(types.len(), 10);
    assert!(types.contains(&"Heat Wave"));
}

// ============================================================================
// Predictions, weather, strategies
// ============================================================================

#[tokio::test]
async fn test_city_predictions() {
    let (status, body) = get(app(healthy_collaborators()), "/api/v1/disasters/predictions/Chennai").await;
    assert_eq!(status, StatusCode::OK);
    for prediction in body.as_array().unwrap() {
        assert_eq!(prediction["location"], "Chennai");
        assert!(prediction["probability"].as_f64().unwrap() > 0.3);
    }
}

#[tokio::test]
async fn test_unknown_city_is_not_found() {
    let (status, body) = get(app(healthy_collaborators()), "/api/v1/disasters/predictions/Atlantis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "UNKNOWN_LOCATION");
}

#[tokio::test]
async fn test_weather_endpoints() {
    let (status, body) = get(app(healthy_collaborators()), "/api/v1/weather/Pune").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "Pune");

    let (status, body) = get(app(healthy_collaborators()), "/api/v1/forecast/Pune").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);

    let collaborators = Collaborators {
        weather: Arc::new(StubWeather { available: false }),
        ..healthy_collaborators()
    };
    let (status, body) = get(app(collaborators), "/api/v1/weather/Pune").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "COLLABORATOR_UNAVAILABLE");
}

#[tokio::test]
async fn test_strategies_endpoint() {
    let (status, body) = get(app(healthy_collaborators()), "/api/v1/strategies/Heat%20Wave").await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["type"], "guideline");
    assert_eq!(records[0]["from_api"], false);
}

#[tokio::test]
async fn test_historical_failure_is_bad_gateway() {
    let collaborators = Collaborators {
        history: Arc::new(FixedHistory(None)),
        ..healthy_collaborators()
    };
    let (status, _) = get(app(collaborators), "/api/v1/disasters/historical").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

// ============================================================================
// Views
// ============================================================================

#[tokio::test]
async fn test_dashboard_view_defaults_to_mumbai() {
    let (status, body) = get(app(healthy_collaborators()), "/api/v1/views/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected_city"], "Mumbai");
    assert_eq!(body["weather"]["city"], "Mumbai");
    assert_eq!(body["forecast"].as_array().unwrap().len(), 5);
    assert!(body["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_dashboard_view_warns_instead_of_failing() {
    let (status, body) = get(app(healthy_collaborators()), "/api/v1/views/dashboard?city=Atlantis").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["weather"].is_null());
    assert!(body["predictions"].as_array().unwrap().is_empty());
    assert_eq!(body["warnings"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_prediction_view_with_failing_history() {
    let collaborators = Collaborators {
        history: Arc::new(FixedHistory(None)),
        ..healthy_collaborators()
    };
    let (status, body) = get(app(collaborators), "/api/v1/views/prediction").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["historical_disasters"].as_array().unwrap().is_empty());
    assert_eq!(body["disaster_types"].as_array().unwrap().len(), 10);
    let warnings = body["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].as_str().unwrap().contains("historical"));
}

#[tokio::test]
async fn test_strategies_view() {
    let (status, body) = get(app(healthy_collaborators()), "/api/v1/views/strategies?type=Drought").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected_type"], "Drought");
    assert_eq!(body["strategies"].as_array().unwrap().len(), 4);
}

// ============================================================================
// Image analysis
// ============================================================================

#[tokio::test]
async fn test_upload_then_list_recent() {
    let records = Arc::new(InMemoryRecords::default());
    let collaborators = Collaborators {
        records: records.clone(),
        ..healthy_collaborators()
    };
    let app = app(collaborators);

    let (status, body) = send(app.clone(), multipart_upload("street flood.png", "Patna", b"png bytes")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["analysis"]["disaster_type"], "Flood");
    assert_eq!(body["analysis"]["analysis_method"], "classification");
    assert_eq!(body["record"]["filename"], "street_flood.png");
    assert_eq!(body["record"]["location"], "Patna");
    assert_eq!(records.len(), 1);

    let (status, recent) = get(app.clone(), "/api/v1/image-analysis/recent").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recent.as_array().unwrap().len(), 1);

    let (status, view) = get(app, "/api/v1/views/image-analysis").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["recent_analyses"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_upload_rejects_other_file_types() {
    let (status, body) = send(
        app(healthy_collaborators()),
        multipart_upload("notes.txt", "", b"plain text"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "file");
}

#[tokio::test]
async fn test_recent_limit_is_validated() {
    let (status, _) = get(app(healthy_collaborators()), "/api/v1/image-analysis/recent?limit=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(app(healthy_collaborators()), "/api/v1/image-analysis/recent?limit=51").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
