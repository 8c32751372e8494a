//! CSV ingestion for the two source tables
//!
//! Loading happens once at startup; everything downstream works on the
//! returned immutable vectors.

use std::path::Path;

use crate::error::AppResult;
use crate::models::{Restaurant, SurveyRecord};

/// Rows north of this latitude are data-entry junk for the covered city and
/// are cleared out alongside zeroed coordinates.
const MAX_VALID_LATITUDE: f64 = 29.0;

/// Rating-text marker for venues that have not been rated yet
const NOT_RATED: &str = "Not rated";

/// Load-time row filter narrowing the restaurant table to one city with
/// usable coordinates and ratings
#[derive(Debug, Clone)]
pub struct RestaurantFilter {
    pub country_code: u32,
    pub city: String,
}

impl RestaurantFilter {
    /// Whether a row survives the load-time narrowing
    pub fn retains(&self, restaurant: &Restaurant) -> bool {
        restaurant.country_code == self.country_code
            && restaurant.city == self.city
            && restaurant.longitude != 0.0
            && restaurant.latitude != 0.0
            && restaurant.latitude < MAX_VALID_LATITUDE
            && restaurant.rating_text != NOT_RATED
    }
}

/// Loads the comfort-food survey table
pub fn load_surveys(path: impl AsRef<Path>) -> AppResult<Vec<SurveyRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    tracing::debug!(rows = records.len(), "Survey table loaded");
    Ok(records)
}

/// Loads the restaurant table and applies the load-time row filter.
///
/// The public restaurant dump ships as latin-1, not UTF-8; bytes map straight
/// to code points before the CSV parse.
pub fn load_restaurants(
    path: impl AsRef<Path>,
    filter: &RestaurantFilter,
) -> AppResult<Vec<Restaurant>> {
    let bytes = std::fs::read(path)?;
    let text: String = bytes.iter().map(|&b| b as char).collect();

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut kept = Vec::new();
    let mut dropped = 0usize;
    for row in reader.deserialize::<Restaurant>() {
        let restaurant = row?;
        if filter.retains(&restaurant) {
            kept.push(restaurant);
        } else {
            dropped += 1;
        }
    }
    tracing::debug!(
        kept = kept.len(),
        dropped,
        "Restaurant table loaded and narrowed"
    );
    Ok(kept)
}
