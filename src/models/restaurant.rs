use serde::{Deserialize, Deserializer, Serialize};

/// One row of the restaurant directory
///
/// Column names follow the public restaurant dump this table is loaded from.
/// Numeric cells are parsed leniently: junk degrades to zero and the zero is
/// dealt with by the load-time row filter, never by a load failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    /// Restaurant display name
    #[serde(rename = "Restaurant Name")]
    pub name: String,
    /// Free-text, comma-separated cuisine list (e.g. "North Indian, Chinese")
    #[serde(rename = "Cuisines", default)]
    pub cuisines: String,
    /// Aggregate rating on a 0-5 scale
    #[serde(rename = "Aggregate rating", default, deserialize_with = "lenient_f32")]
    pub rating: f32,
    /// Textual rating bucket ("Excellent", "Not rated", ...)
    #[serde(rename = "Rating text", default)]
    pub rating_text: String,
    /// Street address
    #[serde(rename = "Address", default)]
    pub address: String,
    /// City the venue is in
    #[serde(rename = "City", default)]
    pub city: String,
    /// Numeric country code
    #[serde(rename = "Country Code", default, deserialize_with = "lenient_u32")]
    pub country_code: u32,
    #[serde(rename = "Longitude", default, deserialize_with = "lenient_f64")]
    pub longitude: f64,
    #[serde(rename = "Latitude", default, deserialize_with = "lenient_f64")]
    pub latitude: f64,
}

fn lenient_f32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(0.0))
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(0.0))
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(0))
}
