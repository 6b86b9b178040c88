//! Monitored cities and disaster types

use axum::{extract::State, Json};
use shared::{City, DisasterType};

use crate::AppState;

pub async fn list_cities(State(state): State<AppState>) -> Json<Vec<City>> {
    Json(state.catalog.cities().to_vec())
}

pub async fn list_disaster_types() -> Json<Vec<DisasterType>> {
    Json(DisasterType::ALL.to_vec())
}
