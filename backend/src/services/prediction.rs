//! Disaster risk predictions for monitored cities

use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shared::prediction::PredictionEngine;
use shared::{Catalog, Prediction};

use crate::error::AppResult;

/// Runs the prediction engine with a shared generator
#[derive(Clone)]
pub struct PredictionService {
    engine: PredictionEngine,
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl PredictionService {
    /// A fixed seed makes every run draw the same sequence
    pub fn new(catalog: Arc<Catalog>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                tracing::info!(seed, "Prediction generator seeded from configuration");
                ChaCha8Rng::seed_from_u64(seed)
            }
            None => ChaCha8Rng::from_entropy(),
        };

        Self {
            engine: PredictionEngine::new(catalog),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn for_city(&self, city: &str, today: NaiveDate) -> AppResult<Vec<Prediction>> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let predictions = self.engine.predict(city, today, &mut *rng)?;

        tracing::debug!(city, count = predictions.len(), "Generated predictions");
        Ok(predictions)
    }

    pub fn for_all_cities(&self, today: NaiveDate) -> AppResult<Vec<Prediction>> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.engine.predict_all(today, &mut *rng)?)
    }
}
