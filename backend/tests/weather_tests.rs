//! Weather gateway tests
//!
//! Runs the Open-Meteo client against a mock server with recorded responses.

mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use common::{catalog, StubWeather};
use disaster_watch_backend::error::AppError;
use disaster_watch_backend::external::{OpenMeteoClient, WeatherGateway};
use disaster_watch_backend::services::WeatherService;
use rust_decimal::Decimal;
use std::str::FromStr;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn current_body() -> serde_json::Value {
    serde_json::json!({
        "latitude": 19.0,
        "longitude": 72.875,
        "current_weather": {
            "temperature": 29.6,
            "windspeed": 18.4,
            "winddirection": 250.0,
            "weathercode": 80,
            "time": "2024-07-10T14:00"
        },
        "hourly": {
            "time": ["2024-07-10T13:00", "2024-07-10T14:00", "2024-07-10T15:00"],
            "temperature_2m": [29.1, 29.6, 29.2],
            "relativehumidity_2m": [86, 84, 88],
            "precipitation": [0.4, 1.7, 2.3],
            "windspeed_10m": [17.0, 18.4, 19.9]
        }
    })
}

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "daily": {
            "time": ["2024-07-10", "2024-07-11", "2024-07-12", "2024-07-13",
                     "2024-07-14", "2024-07-15", "2024-07-16"],
            "weathercode": [80, 63, 95, 61, 3, 2, 1],
            "temperature_2m_max": [30.1, 29.8, 28.7, 29.9, 31.2, 31.5, 32.0],
            "temperature_2m_min": [26.2, 25.9, 25.4, 25.8, 26.5, 26.7, 27.0],
            "precipitation_sum": [18.2, 44.0, 71.5, 9.1, 0.0, 0.0, 0.2]
        }
    })
}

async fn mock_open_meteo() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("current_weather", "true"))
        .and(query_param("latitude", "19.076"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("timezone", "auto"))
        .and(query_param("forecast_days", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_current_conditions() {
    let server = mock_open_meteo().await;
    let client = OpenMeteoClient::new(server.uri(), 5).unwrap();
    let catalog = catalog();
    let mumbai = catalog.city("Mumbai").unwrap();

    let current = client.current(mumbai).await.unwrap();

    assert_eq!(current.city, "Mumbai");
    assert_eq!(current.temperature, Some(dec("29.6")));
    assert_eq!(current.humidity, Some(dec("84")));
    assert_eq!(current.precipitation, Some(dec("1.7")));
    assert_eq!(current.weathercode, Some(80));
    assert_eq!(current.weather_description, "Slight rain showers");
}

#[tokio::test]
async fn test_forecast_is_five_days() {
    let server = mock_open_meteo().await;
    let service = WeatherService::new(
        catalog(),
        Arc::new(OpenMeteoClient::new(server.uri(), 5).unwrap()),
    );

    let forecast = service.forecast("mumbai").await.unwrap();

    assert_eq!(forecast.len(), 5);
    assert_eq!(forecast[0].date, NaiveDate::from_ymd_opt(2024, 7, 10).unwrap());
    assert_eq!(forecast[2].weather_description, "Thunderstorm");
    assert_eq!(forecast[2].precipitation, Some(dec("71.5")));
    assert_eq!(forecast[4].temperature_max, Some(dec("31.2")));
}

#[tokio::test]
async fn test_upstream_error_is_collaborator_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let service = WeatherService::new(
        catalog(),
        Arc::new(OpenMeteoClient::new(server.uri(), 5).unwrap()),
    );
    let err = service.current("Delhi").await.unwrap_err();
    assert!(matches!(err, AppError::CollaboratorUnavailable { .. }));
}

#[tokio::test]
async fn test_unsupported_city() {
    let service = WeatherService::new(catalog(), Arc::new(StubWeather { available: true }));
    let err = service.current("Atlantis").await.unwrap_err();
    assert!(matches!(err, AppError::UnknownLocation(ref c) if c == "Atlantis"));
}
