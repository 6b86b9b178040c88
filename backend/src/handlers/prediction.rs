//! HTTP handlers for disaster predictions and history

use axum::{
    extract::{Path, State},
    Json,
};
use shared::{HistoricalDisaster, Prediction};

use super::today;
use crate::error::AppResult;
use crate::AppState;

/// Predictions for one city
pub async fn get_city_predictions(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> AppResult<Json<Vec<Prediction>>> {
    Ok(Json(state.predictions.for_city(&city, today())?))
}

/// Predictions for every monitored city
pub async fn get_all_predictions(State(state): State<AppState>) -> AppResult<Json<Vec<Prediction>>> {
    Ok(Json(state.predictions.for_all_cities(today())?))
}

/// Recent disasters in India
pub async fn get_historical_disasters(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<HistoricalDisaster>>> {
    Ok(Json(state.views.historical().await?))
}
