//! Configuration management for the Disaster Watch dashboard
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with DW_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Open-Meteo weather API configuration
    pub weather: WeatherConfig,

    /// ReliefWeb API configuration (historical disasters and guidelines)
    pub reliefweb: ReliefWebConfig,

    /// Hugging Face inference API configuration
    pub huggingface: HuggingFaceConfig,

    /// Prediction engine configuration
    #[serde(default)]
    pub prediction: PredictionConfig,

    /// Image upload configuration
    pub uploads: UploadConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL
    pub api_endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReliefWebConfig {
    /// ReliefWeb API base URL
    pub api_endpoint: String,

    /// Application name sent with every request
    pub appname: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HuggingFaceConfig {
    /// Bearer token for the inference API (may be empty)
    pub api_token: String,

    /// Disaster image classifier model URL
    pub classifier_url: String,

    /// General image captioning model URL
    pub caption_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PredictionConfig {
    /// Fixed seed for reproducible predictions; entropy-seeded when unset
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    /// Maximum accepted image size in bytes
    pub max_bytes: usize,

    /// Number of recent analyses shown on the image analysis page
    pub recent_limit: i64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("DW_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 5000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.url", "postgres://localhost/disaster_watch")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("weather.api_endpoint", "https://api.open-meteo.com/v1")?
            .set_default("weather.timeout_secs", 30)?
            .set_default("reliefweb.api_endpoint", "https://api.reliefweb.int/v1")?
            .set_default("reliefweb.appname", "climate-disaster-app")?
            .set_default("reliefweb.timeout_secs", 30)?
            .set_default("huggingface.api_token", "")?
            .set_default(
                "huggingface.classifier_url",
                "https://api-inference.huggingface.co/models/davanstrien/disaster_types",
            )?
            .set_default(
                "huggingface.caption_url",
                "https://api-inference.huggingface.co/models/Salesforce/blip-image-captioning-base",
            )?
            .set_default("huggingface.timeout_secs", 60)?
            .set_default("uploads.max_bytes", shared::MAX_UPLOAD_BYTES as i64)?
            .set_default("uploads.recent_limit", 5)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (DW_ prefix)
            .add_source(
                Environment::with_prefix("DW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}
