//! WebAssembly module for the Disaster Watch dashboard
//!
//! Provides client-side helpers for:
//! - Upload checks before an image is sent
//! - Season resolution
//! - Caption keyword inference
//! - City and disaster type lists

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::inference::infer_from_caption;
use shared::Catalog;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str("disaster-watch helpers loaded"));
}

/// Why an upload would be rejected, or `None` when it is acceptable
#[wasm_bindgen]
pub fn upload_error(filename: &str, size_bytes: usize, location: &str) -> Option<String> {
    validate_image_filename(filename)
        .and_then(|_| validate_upload_size(size_bytes, MAX_UPLOAD_BYTES))
        .and_then(|_| validate_location(location.trim()))
        .err()
        .map(String::from)
}

/// Filename as the server will store it
#[wasm_bindgen]
pub fn sanitize_upload_filename(filename: &str) -> String {
    sanitize_filename(filename)
}

/// Season name for a month number (1-12)
#[wasm_bindgen]
pub fn season_for_month(month: u32) -> Option<String> {
    Season::for_month(month).map(|s| s.name().to_string())
}

/// Disaster type suggested by an image caption, or "Unknown"
#[wasm_bindgen]
pub fn infer_disaster_from_caption(caption: &str) -> String {
    match Catalog::builtin() {
        Ok(catalog) => infer_from_caption(caption, catalog.caption_keywords())
            .name()
            .to_string(),
        Err(_) => ImageVerdict::Unknown.name().to_string(),
    }
}

/// Names of the monitored cities, in display order
#[wasm_bindgen]
pub fn city_names() -> Vec<String> {
    Catalog::builtin()
        .map(|c| c.city_names().into_iter().map(String::from).collect())
        .unwrap_or_default()
}

/// Display names of all disaster types
#[wasm_bindgen]
pub fn disaster_type_names() -> Vec<String> {
    DisasterType::ALL.iter().map(|t| t.name().to_string()).collect()
}

/// Cities with coordinates and susceptibilities, as JSON
#[wasm_bindgen]
pub fn cities_json() -> String {
    Catalog::builtin()
        .ok()
        .and_then(|c| serde_json::to_string(c.cities()).ok())
        .unwrap_or_else(|| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_error() {
        assert_eq!(upload_error("flood.png", 1024, "Patna"), None);
        assert!(upload_error("flood.gif", 1024, "").is_some());
        assert!(upload_error("flood.jpg", MAX_UPLOAD_BYTES + 1, "").is_some());
        assert!(upload_error("flood.jpg", 1024, &"x".repeat(101)).is_some());
    }

    #[test]
    fn test_season_for_month() {
        assert_eq!(season_for_month(7).as_deref(), Some("Monsoon"));
        assert_eq!(season_for_month(12).as_deref(), Some("Pre-Winter"));
        assert_eq!(season_for_month(0), None);
    }

    #[test]
    fn test_caption_inference() {
        assert_eq!(infer_disaster_from_caption("a giant wave hits the shore"), "Tsunami");
        assert_eq!(infer_disaster_from_caption("people at a market"), "Unknown");
    }

    #[test]
    fn test_lists() {
        assert_eq!(city_names().len(), 20);
        assert_eq!(city_names()[0], "Mumbai");
        assert_eq!(disaster_type_names().len(), 10);
        assert!(cities_json().starts_with('['));
    }
}
