//! Monitored city models

use serde::{Deserialize, Serialize};

use crate::models::DisasterType;
use crate::types::GpsCoordinates;

/// A city monitored by the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct City {
    pub name: String,
    pub coordinates: GpsCoordinates,
    /// Disaster types the city is historically prone to, in display order
    pub susceptible_to: Vec<DisasterType>,
}

impl City {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        susceptible_to: &[DisasterType],
    ) -> Self {
        Self {
            name: name.into(),
            coordinates: GpsCoordinates::new(latitude, longitude),
            susceptible_to: susceptible_to.to_vec(),
        }
    }

    /// Case-insensitive name match
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}
