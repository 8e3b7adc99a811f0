//! Open-Meteo geocoding and current-weather clients

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::http::HttpTransport;
use crate::models::{CurrentConditions, Location};
use crate::{Result, TravelAssistError};

pub mod open_meteo;

pub use open_meteo::weather_code_to_description;

/// Resolves free-text place names to coordinates
#[derive(Clone)]
pub struct GeocodingClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl GeocodingClient {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Resolve a place name to the provider's first match.
    ///
    /// Fails with `NotFound` when the provider has no match.
    #[instrument(skip(self))]
    pub async fn resolve(&self, location: &str) -> Result<Location> {
        let url = format!(
            "{}/search?name={}&count=1",
            self.base_url,
            urlencoding::encode(location)
        );
        debug!("OpenMeteo geocoding request URL: {}", url);

        let body = self.transport.get_text(&url).await?;
        let response: open_meteo::GeocodingResponse = serde_json::from_str(&body).map_err(|e| {
            TravelAssistError::parse(format!("Failed to parse OpenMeteo geocoding response: {e}"))
        })?;

        let first = response
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| TravelAssistError::location_not_found(location))?;

        let resolved = Location::from(first);
        info!(
            "Resolved '{}' to {} at ({})",
            location,
            resolved.name,
            resolved.format_coordinates()
        );
        Ok(resolved)
    }
}

/// Fetches current conditions for a coordinate pair
#[derive(Clone)]
pub struct WeatherClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl WeatherClient {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    #[instrument(skip(self))]
    pub async fn fetch_current(&self, lat: f64, lon: f64) -> Result<CurrentConditions> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current={}",
            self.base_url,
            lat,
            lon,
            open_meteo::CURRENT_VARIABLES
        );
        debug!("OpenMeteo API request URL: {}", url);

        let body = self.transport.get_text(&url).await?;
        let response: open_meteo::ForecastResponse = serde_json::from_str(&body).map_err(|e| {
            TravelAssistError::parse(format!("Failed to parse OpenMeteo weather response: {e}"))
        })?;

        let current = response.current.ok_or_else(|| {
            TravelAssistError::parse(format!(
                "No current weather data available from OpenMeteo for {lat:.4},{lon:.4}"
            ))
        })?;

        Ok(current.into())
    }
}
