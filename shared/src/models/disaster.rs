//! Disaster type models

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Disaster types tracked by the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DisasterType {
    Flood,
    Cyclone,
    Drought,
    Earthquake,
    Landslide,
    Tsunami,
    #[serde(rename = "Heat Wave")]
    HeatWave,
    #[serde(rename = "Cold Wave")]
    ColdWave,
    #[serde(rename = "Urban Flooding")]
    UrbanFlooding,
    #[serde(rename = "Forest Fire")]
    ForestFire,
}

impl DisasterType {
    /// All disaster types, in selector order
    pub const ALL: [DisasterType; 10] = [
        DisasterType::Flood,
        DisasterType::Cyclone,
        DisasterType::Drought,
        DisasterType::Earthquake,
        DisasterType::Landslide,
        DisasterType::Tsunami,
        DisasterType::HeatWave,
        DisasterType::ColdWave,
        DisasterType::UrbanFlooding,
        DisasterType::ForestFire,
    ];

    /// Human readable name, also used as the wire value
    pub fn name(&self) -> &'static str {
        match self {
            DisasterType::Flood => "Flood",
            DisasterType::Cyclone => "Cyclone",
            DisasterType::Drought => "Drought",
            DisasterType::Earthquake => "Earthquake",
            DisasterType::Landslide => "Landslide",
            DisasterType::Tsunami => "Tsunami",
            DisasterType::HeatWave => "Heat Wave",
            DisasterType::ColdWave => "Cold Wave",
            DisasterType::UrbanFlooding => "Urban Flooding",
            DisasterType::ForestFire => "Forest Fire",
        }
    }

    /// Parse a disaster type leniently: case-insensitive, and `_`/`-` count as spaces
    pub fn parse(input: &str) -> Option<DisasterType> {
        let normalized = input.trim().replace(['_', '-'], " ").to_lowercase();
        DisasterType::ALL
            .into_iter()
            .find(|t| t.name().to_lowercase() == normalized)
    }
}

impl std::fmt::Display for DisasterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisasterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisasterType::parse(s).ok_or_else(|| format!("Unknown disaster type: {}", s))
    }
}
