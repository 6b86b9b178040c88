//! Page views: everything one dashboard page needs in a single response

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use super::today;
use crate::error::AppResult;
use crate::services::dashboard::{
    DashboardView, ImageAnalysisView, PredictionView, StrategiesView, DEFAULT_CITY,
    DEFAULT_DISASTER_TYPE,
};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct DashboardQuery {
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct StrategiesQuery {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub disaster_type: Option<String>,
}

pub async fn dashboard_view(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> AppResult<Json<DashboardView>> {
    query.validate()?;
    let city = query.city.as_deref().unwrap_or(DEFAULT_CITY);
    Ok(Json(state.views.dashboard(city, today()).await))
}

pub async fn prediction_view(State(state): State<AppState>) -> Json<PredictionView> {
    Json(state.views.prediction_overview(today()).await)
}

pub async fn strategies_view(
    State(state): State<AppState>,
    Query(query): Query<StrategiesQuery>,
) -> AppResult<Json<StrategiesView>> {
    query.validate()?;
    let disaster_type = query.disaster_type.as_deref().unwrap_or(DEFAULT_DISASTER_TYPE);
    Ok(Json(state.views.strategies(disaster_type, today()).await))
}

pub async fn image_analysis_view(
    State(state): State<AppState>,
) -> AppResult<Json<ImageAnalysisView>> {
    Ok(Json(state.views.image_analysis().await?))
}
