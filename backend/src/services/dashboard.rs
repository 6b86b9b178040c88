//! View composition for the dashboard pages
//!
//! Each view gathers everything one page needs. Collaborator failures do not
//! fail the view: the affected section is left empty and a warning is added.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use shared::{
    Catalog, City, CurrentConditions, DailyForecast, DisasterType, HistoricalDisaster, Prediction,
    StrategyRecord,
};

use crate::error::AppResult;
use crate::external::HistoricalFeed;
use crate::services::{
    ImageAnalysisRecord, ImageAnalysisService, PredictionService, StrategyService, WeatherService,
};

pub const DEFAULT_CITY: &str = "Mumbai";
pub const DEFAULT_DISASTER_TYPE: &str = "Flood";

/// Country and size of the historical disaster listing
pub const HISTORICAL_COUNTRY: &str = "India";
pub const HISTORICAL_LIMIT: u32 = 20;

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub cities: Vec<City>,
    pub selected_city: String,
    pub weather: Option<CurrentConditions>,
    pub forecast: Option<Vec<DailyForecast>>,
    pub predictions: Vec<Prediction>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictionView {
    pub cities: Vec<City>,
    pub disaster_types: Vec<DisasterType>,
    pub historical_disasters: Vec<HistoricalDisaster>,
    pub predictions: Vec<Prediction>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StrategiesView {
    pub disaster_types: Vec<DisasterType>,
    pub selected_type: String,
    pub strategies: Vec<StrategyRecord>,
}

#[derive(Debug, Serialize)]
pub struct ImageAnalysisView {
    pub cities: Vec<City>,
    pub disaster_types: Vec<DisasterType>,
    pub recent_analyses: Vec<ImageAnalysisRecord>,
}

#[derive(Clone)]
pub struct DashboardService {
    catalog: Arc<Catalog>,
    weather: WeatherService,
    predictions: PredictionService,
    strategies: StrategyService,
    images: ImageAnalysisService,
    history: Arc<dyn HistoricalFeed>,
    recent_limit: i64,
}

impl DashboardService {
    pub fn new(
        catalog: Arc<Catalog>,
        weather: WeatherService,
        predictions: PredictionService,
        strategies: StrategyService,
        images: ImageAnalysisService,
        history: Arc<dyn HistoricalFeed>,
        recent_limit: i64,
    ) -> Self {
        Self {
            catalog,
            weather,
            predictions,
            strategies,
            images,
            history,
            recent_limit,
        }
    }

    /// Recent disasters from the historical feed
    pub async fn historical(&self) -> AppResult<Vec<HistoricalDisaster>> {
        self.history
            .list_recent(HISTORICAL_COUNTRY, HISTORICAL_LIMIT)
            .await
    }

    pub async fn dashboard(&self, city: &str, today: NaiveDate) -> DashboardView {
        let mut warnings = Vec::new();

        let weather = tokio::try_join!(self.weather.current(city), self.weather.forecast(city));
        let (weather, forecast) = match weather {
            Ok((current, forecast)) => (Some(current), Some(forecast)),
            Err(e) => {
                warnings.push(format!("Could not fetch weather data: {}", e));
                (None, None)
            }
        };

        let predictions = self.predictions.for_city(city, today).unwrap_or_else(|e| {
            tracing::warn!(city, error = %e, "Error fetching disaster predictions");
            warnings.push(format!("Could not fetch disaster predictions: {}", e));
            Vec::new()
        });

        DashboardView {
            cities: self.catalog.cities().to_vec(),
            selected_city: city.to_string(),
            weather,
            forecast,
            predictions,
            warnings,
        }
    }

    pub async fn prediction_overview(&self, today: NaiveDate) -> PredictionView {
        let mut warnings = Vec::new();

        let historical_disasters = self.historical().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Error fetching historical disaster data");
            warnings.push(format!("Could not fetch historical disaster data: {}", e));
            Vec::new()
        });

        let predictions = self.predictions.for_all_cities(today).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Error fetching disaster predictions");
            warnings.push(format!("Could not fetch disaster predictions: {}", e));
            Vec::new()
        });

        PredictionView {
            cities: self.catalog.cities().to_vec(),
            disaster_types: DisasterType::ALL.to_vec(),
            historical_disasters,
            predictions,
            warnings,
        }
    }

    pub async fn strategies(&self, disaster_type: &str, today: NaiveDate) -> StrategiesView {
        StrategiesView {
            disaster_types: DisasterType::ALL.to_vec(),
            selected_type: disaster_type.to_string(),
            strategies: self.strategies.get_strategies(disaster_type, today).await,
        }
    }

    pub async fn image_analysis(&self) -> AppResult<ImageAnalysisView> {
        Ok(ImageAnalysisView {
            cities: self.catalog.cities().to_vec(),
            disaster_types: DisasterType::ALL.to_vec(),
            recent_analyses: self.images.recent(self.recent_limit).await?,
        })
    }
}
