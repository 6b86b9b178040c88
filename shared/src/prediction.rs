//! Seasonal disaster risk heuristic
//!
//! Scores each disaster type a city is prone to by whether the current
//! season is one where that type is more likely, with a few hand-tuned
//! overrides for well known patterns (monsoon floods, summer heat waves,
//! monsoon/post-monsoon cyclones). Draws come from the injected generator,
//! so output is only repeatable with a seeded generator.

use std::ops::RangeInclusive;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::catalog::Catalog;
use crate::error::DomainError;
use crate::models::{DisasterType, Prediction, Season};

/// Predictions at or below this probability are not reported
pub const MIN_REPORTED_PROBABILITY: f64 = 0.3;

const SEASONAL_PROBABILITY: RangeInclusive<f64> = 0.6..=0.9;
const SEASONAL_SEVERITY: RangeInclusive<u8> = 3..=5;
const OFF_SEASON_PROBABILITY: RangeInclusive<f64> = 0.1..=0.4;
const OFF_SEASON_SEVERITY: RangeInclusive<u8> = 1..=3;
const VALIDITY_DAYS: RangeInclusive<i64> = 5..=14;

/// Replaces the generic seasonal draw for one disaster type in the listed seasons
#[derive(Debug, Clone)]
pub struct SeasonalOverride {
    pub disaster_type: DisasterType,
    pub seasons: &'static [Season],
    pub probability: RangeInclusive<f64>,
    pub severity: RangeInclusive<u8>,
}

pub const SEASONAL_OVERRIDES: [SeasonalOverride; 3] = [
    SeasonalOverride {
        disaster_type: DisasterType::Flood,
        seasons: &[Season::Monsoon],
        probability: 0.7..=0.95,
        severity: 4..=5,
    },
    SeasonalOverride {
        disaster_type: DisasterType::HeatWave,
        seasons: &[Season::Summer],
        probability: 0.8..=0.95,
        severity: 3..=5,
    },
    SeasonalOverride {
        disaster_type: DisasterType::Cyclone,
        seasons: &[Season::Monsoon, Season::PostMonsoon],
        probability: 0.6..=0.85,
        severity: 3..=5,
    },
];

/// One probability/severity draw before filtering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskDraw {
    pub probability: f64,
    pub severity: u8,
}

fn override_for(disaster_type: DisasterType, season: Season) -> Option<&'static SeasonalOverride> {
    SEASONAL_OVERRIDES
        .iter()
        .find(|o| o.disaster_type == disaster_type && o.seasons.contains(&season))
}

/// Draw probability and severity for one disaster type
pub fn draw_risk<R: Rng + ?Sized>(
    disaster_type: DisasterType,
    season: Season,
    is_seasonal: bool,
    rng: &mut R,
) -> RiskDraw {
    let (probability, severity) = match override_for(disaster_type, season) {
        Some(o) => (o.probability.clone(), o.severity.clone()),
        None if is_seasonal => (SEASONAL_PROBABILITY, SEASONAL_SEVERITY),
        None => (OFF_SEASON_PROBABILITY, OFF_SEASON_SEVERITY),
    };

    RiskDraw {
        probability: round_probability(rng.gen_range(probability)),
        severity: rng.gen_range(severity),
    }
}

fn round_probability(p: f64) -> f64 {
    (p * 100.0).round() / 100.0
}

/// Rule-based prediction engine over a shared catalog
#[derive(Debug, Clone)]
pub struct PredictionEngine {
    catalog: Arc<Catalog>,
}

impl PredictionEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Predict disaster risks for one city, in the city's susceptibility order
    pub fn predict<R: Rng + ?Sized>(
        &self,
        city: &str,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Vec<Prediction>, DomainError> {
        let city = self
            .catalog
            .city(city)
            .ok_or_else(|| DomainError::UnknownLocation(city.to_string()))?;
        let season = Season::of(today);

        let mut predictions = Vec::new();
        for &disaster_type in &city.susceptible_to {
            let is_seasonal = self.catalog.is_seasonal(disaster_type, season);
            let draw = draw_risk(disaster_type, season, is_seasonal, rng);

            if draw.probability <= MIN_REPORTED_PROBABILITY {
                continue;
            }

            let valid_days = rng.gen_range(VALIDITY_DAYS);
            predictions.push(Prediction {
                disaster_type,
                location: city.name.clone(),
                probability: draw.probability,
                severity: draw.severity,
                prediction_date: today,
                valid_until: today + Duration::days(valid_days),
                description: self
                    .catalog
                    .description(disaster_type, draw.severity)?
                    .to_string(),
                precautions: self.catalog.precautions(disaster_type)?.to_vec(),
            });
        }

        Ok(predictions)
    }

    /// Predictions for every monitored city, in catalog order
    pub fn predict_all<R: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Vec<Prediction>, DomainError> {
        let mut all = Vec::new();
        for city in self.catalog.cities() {
            all.extend(self.predict(&city.name, today, rng)?);
        }
        Ok(all)
    }
}
