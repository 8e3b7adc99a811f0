//! Weather observation model

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current conditions at a coordinate pair, before the place name is attached
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Air temperature at 2m in Celsius
    pub temperature: f64,
    /// Apparent temperature in Celsius
    pub feels_like: f64,
    /// Relative humidity at 2m in percent
    pub humidity: f64,
    /// Wind speed at 10m in km/h
    pub wind_speed: f64,
    /// Wind gusts at 10m in km/h
    pub wind_gust: f64,
    /// Human-readable weather condition
    pub conditions: String,
}

/// Output of the weather tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_gust: f64,
    pub conditions: String,
    /// Resolved place name reported by the geocoder
    pub location: String,
}

impl WeatherObservation {
    /// Attach the resolved place name to a set of current conditions
    #[must_use]
    pub fn from_conditions(current: CurrentConditions, location: String) -> Self {
        Self {
            temperature: current.temperature,
            feels_like: current.feels_like,
            humidity: current.humidity,
            wind_speed: current.wind_speed,
            wind_gust: current.wind_gust,
            conditions: current.conditions,
            location,
        }
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C (feels like {:.1}°C)", self.temperature, self.feels_like)
    }

    /// Format wind information
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!(
            "{:.1} km/h (gusts {:.1} km/h)",
            self.wind_speed, self.wind_gust
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation() -> WeatherObservation {
        WeatherObservation::from_conditions(
            CurrentConditions {
                temperature: 18.3,
                feels_like: 17.0,
                humidity: 60.0,
                wind_speed: 12.3,
                wind_gust: 25.0,
                conditions: "Overcast".to_string(),
            },
            "Tokyo".to_string(),
        )
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(observation()).unwrap();
        assert_eq!(value["feelsLike"], 17.0);
        assert_eq!(value["windSpeed"], 12.3);
        assert_eq!(value["windGust"], 25.0);
        assert_eq!(value["location"], "Tokyo");
        assert!(value.get("feels_like").is_none());
    }

    #[test]
    fn test_formatting() {
        let weather = observation();
        assert_eq!(weather.format_temperature(), "18.3°C (feels like 17.0°C)");
        assert_eq!(weather.format_wind(), "12.3 km/h (gusts 25.0 km/h)");
    }
}
