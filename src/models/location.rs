//! Location model for geocoded places

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Geocoded location, taken from the first provider match
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Canonical name as resolved by the provider
    pub name: String,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Input of the weather tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LocationQuery {
    /// City name
    pub location: String,
}
