//! Weather API client for fetching weather data
//!
//! Integrates with the Open-Meteo forecast API for current conditions and
//! daily forecasts. No API key is required.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{describe_weather_code, City, CurrentConditions, DailyForecast};

use super::WeatherGateway;
use crate::error::{AppError, AppResult};

const SERVICE: &str = "Weather service";

/// Number of forecast days returned to callers
pub const FORECAST_DAYS: usize = 5;

/// Days requested from the provider
const REQUESTED_FORECAST_DAYS: u32 = 7;

/// Open-Meteo API client
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

/// Open-Meteo response for current conditions
#[derive(Debug, Deserialize)]
struct OMCurrentResponse {
    #[serde(default)]
    current_weather: OMCurrentWeather,
    #[serde(default)]
    hourly: OMHourly,
}

#[derive(Debug, Default, Deserialize)]
struct OMCurrentWeather {
    temperature: Option<f64>,
    windspeed: Option<f64>,
    winddirection: Option<f64>,
    weathercode: Option<i32>,
    time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OMHourly {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    relativehumidity_2m: Vec<Option<f64>>,
    #[serde(default)]
    precipitation: Vec<Option<f64>>,
}

/// Open-Meteo response for the daily forecast
#[derive(Debug, Deserialize)]
struct OMForecastResponse {
    #[serde(default)]
    daily: OMDaily,
}

#[derive(Debug, Default, Deserialize)]
struct OMDaily {
    #[serde(default)]
    time: Vec<NaiveDate>,
    #[serde(default)]
    weathercode: Vec<Option<i32>>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
}

impl OpenMeteoClient {
    /// Create a new client against the given API base URL
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> AppResult<Self> {
        Ok(Self {
            client: super::http_client(timeout_secs)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch<T: for<'de> Deserialize<'de>>(
        &self,
        city: &City,
        params: &[(&str, String)],
    ) -> AppResult<T> {
        let url = format!("{}/forecast", self.base_url);
        let coordinates = city.coordinates;

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
            ])
            .query(params)
            .send()
            .await
            .map_err(|e| AppError::collaborator(SERVICE, format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::collaborator(
                SERVICE,
                format!("API error: {} - {}", status, body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::collaborator(SERVICE, format!("Failed to parse response: {}", e)))
    }

    fn convert_current_response(city: &City, data: OMCurrentResponse) -> CurrentConditions {
        let current = data.current_weather;

        // Humidity and precipitation come from the hourly slot matching the observation time
        let slot = current
            .time
            .as_deref()
            .and_then(|time| data.hourly.time.iter().position(|t| t == time));

        CurrentConditions {
            city: city.name.clone(),
            temperature: to_decimal(current.temperature),
            windspeed: to_decimal(current.windspeed),
            winddirection: to_decimal(current.winddirection),
            weathercode: current.weathercode,
            humidity: slot.and_then(|i| value_at(&data.hourly.relativehumidity_2m, i)),
            precipitation: slot.and_then(|i| value_at(&data.hourly.precipitation, i)),
            time: current.time,
            weather_description: describe_weather_code(current.weathercode).to_string(),
        }
    }

    fn convert_forecast_response(data: OMForecastResponse) -> Vec<DailyForecast> {
        let daily = data.daily;

        daily
            .time
            .iter()
            .take(FORECAST_DAYS)
            .enumerate()
            .map(|(i, &date)| {
                let weathercode = daily.weathercode.get(i).copied().flatten();
                DailyForecast {
                    date,
                    weathercode,
                    temperature_max: value_at(&daily.temperature_2m_max, i),
                    temperature_min: value_at(&daily.temperature_2m_min, i),
                    precipitation: value_at(&daily.precipitation_sum, i),
                    weather_description: describe_weather_code(weathercode).to_string(),
                }
            })
            .collect()
    }
}

#[async_trait]
impl WeatherGateway for OpenMeteoClient {
    async fn current(&self, city: &City) -> AppResult<CurrentConditions> {
        let data: OMCurrentResponse = self
            .fetch(
                city,
                &[
                    ("current_weather", "true".to_string()),
                    (
                        "hourly",
                        "temperature_2m,relativehumidity_2m,precipitation,windspeed_10m".to_string(),
                    ),
                ],
            )
            .await?;

        Ok(Self::convert_current_response(city, data))
    }

    async fn forecast(&self, city: &City) -> AppResult<Vec<DailyForecast>> {
        let data: OMForecastResponse = self
            .fetch(
                city,
                &[
                    (
                        "daily",
                        "weathercode,temperature_2m_max,temperature_2m_min,precipitation_sum"
                            .to_string(),
                    ),
                    ("timezone", "auto".to_string()),
                    ("forecast_days", REQUESTED_FORECAST_DAYS.to_string()),
                ],
            )
            .await?;

        Ok(Self::convert_forecast_response(data))
    }
}

fn to_decimal(value: Option<f64>) -> Option<Decimal> {
    value.and_then(Decimal::from_f64).map(|d| d.round_dp(2))
}

/// Reading at a series index; missing and null entries are both absent
fn value_at(values: &[Option<f64>], i: usize) -> Option<Decimal> {
    to_decimal(values.get(i).copied().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::DisasterType;

    fn mumbai() -> City {
        City::new("Mumbai", 19.0760, 72.8777, &[DisasterType::Flood])
    }

    #[test]
    fn test_current_picks_matching_hourly_slot() {
        let data: OMCurrentResponse = serde_json::from_value(serde_json::json!({
            "current_weather": {
                "temperature": 29.4, "windspeed": 12.1, "winddirection": 240.0,
                "weathercode": 63, "time": "2024-07-10T13:00"
            },
            "hourly": {
                "time": ["2024-07-10T12:00", "2024-07-10T13:00"],
                "relativehumidity_2m": [80.0, 88.0],
                "precipitation": [1.2, 3.4]
            }
        }))
        .unwrap();

        let current = OpenMeteoClient::convert_current_response(&mumbai(), data);
        assert_eq!(current.city, "Mumbai");
        assert_eq!(current.humidity, Decimal::from_f64(88.0));
        assert_eq!(current.precipitation, Decimal::from_f64(3.4));
        assert_eq!(current.weather_description, "Moderate rain");
    }

    #[test]
    fn test_current_without_matching_slot() {
        let data: OMCurrentResponse = serde_json::from_value(serde_json::json!({
            "current_weather": { "temperature": 21.0, "weathercode": 0, "time": "2024-01-01T00:00" },
            "hourly": { "time": ["2024-01-02T00:00"], "relativehumidity_2m": [50.0], "precipitation": [0.0] }
        }))
        .unwrap();

        let current = OpenMeteoClient::convert_current_response(&mumbai(), data);
        assert!(current.humidity.is_none());
        assert!(current.precipitation.is_none());
        assert_eq!(current.weather_description, "Clear sky");
    }

    #[test]
    fn test_forecast_truncated_to_five_days() {
        let data: OMForecastResponse = serde_json::from_value(serde_json::json!({
            "daily": {
                "time": ["2024-07-10", "2024-07-11", "2024-07-12", "2024-07-13",
                         "2024-07-14", "2024-07-15", "2024-07-16"],
                "weathercode": [61, 63, 65, 80, 81, 82, 95],
                "temperature_2m_max": [31.0, 30.5, 29.9, 30.1, 30.0, 29.0, 28.0],
                "temperature_2m_min": [26.0, 25.5, 25.0, 25.1, 25.2, 25.0, 24.0],
                "precipitation_sum": [12.0, 30.2, 55.1, 8.0, 3.3, 1.0, 0.0]
            }
        }))
        .unwrap();

        let forecast = OpenMeteoClient::convert_forecast_response(data);
        assert_eq!(forecast.len(), FORECAST_DAYS);
        assert_eq!(forecast[0].date, NaiveDate::from_ymd_opt(2024, 7, 10).unwrap());
        assert_eq!(forecast[2].weather_description, "Heavy rain");
        assert_eq!(forecast[4].weathercode, Some(81));
    }
}
