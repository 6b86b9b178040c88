//! Disaster risk prediction models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DisasterType;

/// A short-lived disaster risk estimate for one city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub disaster_type: DisasterType,
    pub location: String,
    /// Probability in [0, 1], rounded to two decimals
    pub probability: f64,
    /// Severity on a 1-5 scale
    pub severity: u8,
    pub prediction_date: NaiveDate,
    pub valid_until: NaiveDate,
    pub description: String,
    pub precautions: Vec<String>,
}

impl Prediction {
    /// Number of days the prediction stays valid
    pub fn validity_days(&self) -> i64 {
        (self.valid_until - self.prediction_date).num_days()
    }
}
