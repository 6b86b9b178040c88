//! Shared types, lookup tables and rule engines for the disaster watch dashboard
//!
//! This crate contains everything that needs no I/O: the monitored city and
//! disaster tables, the seasonal prediction heuristic, the built-in government
//! guideline records, and the verdict helpers used by image analysis. It is
//! used by the backend and, via WASM, by the browser.

pub mod catalog;
pub mod error;
pub mod inference;
pub mod models;
pub mod prediction;
pub mod strategies;
pub mod types;
pub mod validation;

pub use catalog::*;
pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
