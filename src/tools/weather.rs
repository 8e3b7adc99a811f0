//! `get-weather`: current weather for a place name

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, instrument};

use super::{Tool, input_schema, output_schema, parse_args, require_text, to_output};
use crate::Result;
use crate::config::TravelAssistConfig;
use crate::http::HttpTransport;
use crate::models::{LocationQuery, WeatherObservation};
use crate::weather::{GeocodingClient, WeatherClient};

/// Geocodes a place name, then fetches its current weather
#[derive(Clone)]
pub struct WeatherTool {
    geocoding: GeocodingClient,
    weather: WeatherClient,
}

impl WeatherTool {
    pub const ID: &'static str = "get-weather";

    pub fn new(geocoding: GeocodingClient, weather: WeatherClient) -> Self {
        Self { geocoding, weather }
    }

    pub fn from_config(transport: Arc<dyn HttpTransport>, config: &TravelAssistConfig) -> Self {
        Self::new(
            GeocodingClient::new(transport.clone(), &config.endpoints.geocoding_base_url),
            WeatherClient::new(transport, &config.endpoints.weather_base_url),
        )
    }

    /// Current weather at the first geocoding match for `location`.
    ///
    /// The `location` of the result is the geocoder's name for the place, not
    /// the query.
    #[instrument(skip(self))]
    pub async fn get_weather(&self, location: &str) -> Result<WeatherObservation> {
        let location = require_text("location", location)?;
        let resolved = self.geocoding.resolve(location).await?;
        let current = self
            .weather
            .fetch_current(resolved.latitude, resolved.longitude)
            .await?;

        let observation = WeatherObservation::from_conditions(current, resolved.name);
        info!(
            "Weather for {}: {}, {}, wind {}",
            observation.location,
            observation.conditions,
            observation.format_temperature(),
            observation.format_wind()
        );
        Ok(observation)
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn description(&self) -> &'static str {
        "Get current weather for a location"
    }

    fn input_schema(&self) -> Value {
        input_schema::<LocationQuery>()
    }

    fn output_schema(&self) -> Value {
        output_schema::<WeatherObservation>()
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let query: LocationQuery = parse_args(Self::ID, args)?;
        let observation = self.get_weather(&query.location).await?;
        to_output(&observation)
    }
}
