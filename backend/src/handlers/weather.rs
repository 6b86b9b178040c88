//! HTTP handlers for weather endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use shared::{CurrentConditions, DailyForecast};

use crate::error::AppResult;
use crate::AppState;

/// Current conditions for a city
pub async fn get_current_weather(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> AppResult<Json<CurrentConditions>> {
    Ok(Json(state.weather.current(&city).await?))
}

/// Five-day forecast for a city
pub async fn get_forecast(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> AppResult<Json<Vec<DailyForecast>>> {
    Ok(Json(state.weather.forecast(&city).await?))
}
