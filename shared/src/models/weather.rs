//! Weather data models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current conditions for a monitored city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city: String,
    pub temperature: Option<Decimal>,
    pub windspeed: Option<Decimal>,
    pub winddirection: Option<Decimal>,
    pub weathercode: Option<i32>,
    /// Relative humidity of the matching hourly slot, if any
    pub humidity: Option<Decimal>,
    pub precipitation: Option<Decimal>,
    /// Observation time as reported by the provider (local ISO-8601, minute precision)
    pub time: Option<String>,
    pub weather_description: String,
}

/// Daily weather forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weathercode: Option<i32>,
    pub temperature_max: Option<Decimal>,
    pub temperature_min: Option<Decimal>,
    pub precipitation: Option<Decimal>,
    pub weather_description: String,
}

/// Describe a WMO weather interpretation code
pub fn describe_weather_code(code: Option<i32>) -> &'static str {
    match code {
        Some(0) => "Clear sky",
        Some(1) => "Mainly clear",
        Some(2) => "Partly cloudy",
        Some(3) => "Overcast",
        Some(45) => "Fog",
        Some(48) => "Depositing rime fog",
        Some(51) => "Light drizzle",
        Some(53) => "Moderate drizzle",
        Some(55) => "Dense drizzle",
        Some(56) => "Light freezing drizzle",
        Some(57) => "Dense freezing drizzle",
        Some(61) => "Slight rain",
        Some(63) => "Moderate rain",
        Some(65) => "Heavy rain",
        Some(66) => "Light freezing rain",
        Some(67) => "Heavy freezing rain",
        Some(71) => "Slight snow fall",
        Some(73) => "Moderate snow fall",
        Some(75) => "Heavy snow fall",
        Some(77) => "Snow grains",
        Some(80) => "Slight rain showers",
        Some(81) => "Moderate rain showers",
        Some(82) => "Violent rain showers",
        Some(85) => "Slight snow showers",
        Some(86) => "Heavy snow showers",
        Some(95) => "Thunderstorm",
        Some(96) => "Thunderstorm with slight hail",
        Some(99) => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}
