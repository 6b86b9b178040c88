//! HTTP handlers for government response strategies

use axum::{
    extract::{Path, State},
    Json,
};
use shared::StrategyRecord;

use super::today;
use crate::AppState;

pub async fn get_strategies(
    State(state): State<AppState>,
    Path(disaster_type): Path<String>,
) -> Json<Vec<StrategyRecord>> {
    Json(state.strategies.get_strategies(&disaster_type, today()).await)
}
