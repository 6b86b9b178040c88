//! Domain errors shared by the engines

use thiserror::Error;

use crate::models::DisasterType;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// City is not part of the monitored set
    #[error("City '{0}' is not supported")]
    UnknownLocation(String),

    /// A lookup table lacks an entry for a referenced disaster type
    #[error("No {table} entry for disaster type {disaster_type}")]
    ConfigurationGap {
        disaster_type: DisasterType,
        table: &'static str,
    },
}
