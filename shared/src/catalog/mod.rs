//! Static lookup tables used by the prediction engine and caption inference
//!
//! The catalog is built once at startup, validated, and shared read-only.
//! Validation guarantees that every disaster type a city or a caption keyword
//! family can produce has a full description table and precaution list.

mod builtin;

use std::collections::HashMap;

use crate::error::DomainError;
use crate::models::{City, DisasterType, Season};

/// Number of severity levels, and so the length of every description table
pub const SEVERITY_LEVELS: usize = 5;

/// Keywords that point to one disaster type when found in an image caption
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordFamily {
    pub disaster_type: DisasterType,
    pub keywords: Vec<String>,
}

impl KeywordFamily {
    pub fn new(disaster_type: DisasterType, keywords: &[&str]) -> Self {
        Self {
            disaster_type,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Raw table contents, validated by [`Catalog::new`]
#[derive(Debug, Clone, Default)]
pub struct CatalogParts {
    pub cities: Vec<City>,
    pub seasonal_affinity: HashMap<DisasterType, Vec<Season>>,
    pub descriptions: HashMap<DisasterType, Vec<String>>,
    pub precautions: HashMap<DisasterType, Vec<String>>,
    /// Scanned in order; the first family with a hit wins
    pub caption_keywords: Vec<KeywordFamily>,
}

/// Immutable lookup tables
#[derive(Debug, Clone)]
pub struct Catalog {
    cities: Vec<City>,
    seasonal_affinity: HashMap<DisasterType, Vec<Season>>,
    descriptions: HashMap<DisasterType, Vec<String>>,
    precautions: HashMap<DisasterType, Vec<String>>,
    caption_keywords: Vec<KeywordFamily>,
}

impl Catalog {
    /// Build a catalog, failing on the first table gap
    pub fn new(parts: CatalogParts) -> Result<Self, DomainError> {
        let catalog = Catalog {
            cities: parts.cities,
            seasonal_affinity: parts.seasonal_affinity,
            descriptions: parts.descriptions,
            precautions: parts.precautions,
            caption_keywords: parts.caption_keywords,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in tables for the 20 monitored Indian cities
    pub fn builtin() -> Result<Self, DomainError> {
        Catalog::new(builtin::parts())
    }

    fn validate(&self) -> Result<(), DomainError> {
        let referenced = self
            .cities
            .iter()
            .flat_map(|c| c.susceptible_to.iter().copied())
            .chain(self.caption_keywords.iter().map(|f| f.disaster_type));

        for disaster_type in referenced {
            match self.descriptions.get(&disaster_type) {
                Some(levels) if levels.len() == SEVERITY_LEVELS => {}
                _ => {
                    return Err(DomainError::ConfigurationGap {
                        disaster_type,
                        table: "description",
                    })
                }
            }
            match self.precautions.get(&disaster_type) {
                Some(list) if !list.is_empty() => {}
                _ => {
                    return Err(DomainError::ConfigurationGap {
                        disaster_type,
                        table: "precaution",
                    })
                }
            }
        }
        Ok(())
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.matches(name))
    }

    pub fn city_names(&self) -> Vec<&str> {
        self.cities.iter().map(|c| c.name.as_str()).collect()
    }

    /// Seasons in which the disaster type is more likely; empty if none
    pub fn seasons_for(&self, disaster_type: DisasterType) -> &[Season] {
        self.seasonal_affinity
            .get(&disaster_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_seasonal(&self, disaster_type: DisasterType, season: Season) -> bool {
        self.seasons_for(disaster_type).contains(&season)
    }

    /// Description for a severity level (1-5, higher levels clamp to 5)
    pub fn description(&self, disaster_type: DisasterType, severity: u8) -> Result<&str, DomainError> {
        let index = usize::from(severity.max(1) - 1).min(SEVERITY_LEVELS - 1);
        self.descriptions
            .get(&disaster_type)
            .and_then(|levels| levels.get(index))
            .map(String::as_str)
            .ok_or(DomainError::ConfigurationGap {
                disaster_type,
                table: "description",
            })
    }

    pub fn precautions(&self, disaster_type: DisasterType) -> Result<&[String], DomainError> {
        self.precautions
            .get(&disaster_type)
            .map(Vec::as_slice)
            .ok_or(DomainError::ConfigurationGap {
                disaster_type,
                table: "precaution",
            })
    }

    pub fn caption_keywords(&self) -> &[KeywordFamily] {
        &self.caption_keywords
    }
}
