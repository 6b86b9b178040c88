//! Domain models for the disaster watch dashboard

mod city;
mod disaster;
mod historical;
mod image_analysis;
mod prediction;
mod season;
mod strategy;
mod weather;

pub use city::*;
pub use disaster::*;
pub use historical::*;
pub use image_analysis::*;
pub use prediction::*;
pub use season::*;
pub use strategy::*;
pub use weather::*;
