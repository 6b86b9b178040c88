//! HTTP handlers

use chrono::{Local, NaiveDate};

pub mod catalog;
pub mod health;
pub mod image_analysis;
pub mod prediction;
pub mod strategy;
pub mod views;
pub mod weather;

pub use catalog::*;
pub use health::*;
pub use image_analysis::*;
pub use prediction::*;
pub use strategy::*;
pub use views::*;
pub use weather::*;

/// Local calendar date used for predictions and strategy records
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
