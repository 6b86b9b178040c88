//! Weather lookups for monitored cities

use std::sync::Arc;

use shared::{Catalog, City, CurrentConditions, DailyForecast};

use crate::error::{AppError, AppResult};
use crate::external::WeatherGateway;

/// Resolves city names and delegates to the weather gateway
#[derive(Clone)]
pub struct WeatherService {
    catalog: Arc<Catalog>,
    gateway: Arc<dyn WeatherGateway>,
}

impl WeatherService {
    pub fn new(catalog: Arc<Catalog>, gateway: Arc<dyn WeatherGateway>) -> Self {
        Self { catalog, gateway }
    }

    fn resolve(&self, city: &str) -> AppResult<&City> {
        self.catalog
            .city(city)
            .ok_or_else(|| AppError::UnknownLocation(city.to_string()))
    }

    /// Current conditions for a monitored city
    pub async fn current(&self, city: &str) -> AppResult<CurrentConditions> {
        let city = self.resolve(city)?;
        self.gateway.current(city).await.map_err(|e| {
            tracing::error!(city = %city.name, error = %e, "Error fetching weather data");
            e
        })
    }

    /// Five-day forecast for a monitored city
    pub async fn forecast(&self, city: &str) -> AppResult<Vec<DailyForecast>> {
        let city = self.resolve(city)?;
        self.gateway.forecast(city).await.map_err(|e| {
            tracing::error!(city = %city.name, error = %e, "Error fetching forecast data");
            e
        })
    }
}
