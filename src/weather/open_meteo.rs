//! `OpenMeteo` API response structures

use serde::Deserialize;

use crate::models::{CurrentConditions, Location};

/// Variables requested in the `current` block of a forecast call
pub const CURRENT_VARIABLES: &str = "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,wind_gusts_10m,weather_code";

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    /// Omitted entirely when nothing matched
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Location::new(result.latitude, result.longitude, result.name)
    }
}

/// Forecast response from `OpenMeteo`; only the `current` block is requested
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub current: Option<CurrentData>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentData {
    #[serde(rename = "temperature_2m")]
    pub temperature: f64,
    pub apparent_temperature: f64,
    #[serde(rename = "relative_humidity_2m")]
    pub relative_humidity: f64,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: f64,
    #[serde(rename = "wind_gusts_10m")]
    pub wind_gusts: f64,
    /// Null or absent when the model has no code for the hour
    pub weather_code: Option<i64>,
}

impl From<CurrentData> for CurrentConditions {
    fn from(current: CurrentData) -> Self {
        Self {
            temperature: current.temperature,
            feels_like: current.apparent_temperature,
            humidity: current.relative_humidity,
            wind_speed: current.wind_speed,
            wind_gust: current.wind_gusts,
            conditions: current
                .weather_code
                .map_or("Unknown", weather_code_to_description)
                .to_string(),
        }
    }
}

/// Convert a WMO weather code to a human-readable description
#[must_use]
pub fn weather_code_to_description(code: i64) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "Clear sky")]
    #[case(1, "Mainly clear")]
    #[case(2, "Partly cloudy")]
    #[case(3, "Overcast")]
    #[case(45, "Foggy")]
    #[case(48, "Depositing rime fog")]
    #[case(51, "Light drizzle")]
    #[case(53, "Moderate drizzle")]
    #[case(55, "Dense drizzle")]
    #[case(56, "Light freezing drizzle")]
    #[case(57, "Dense freezing drizzle")]
    #[case(61, "Slight rain")]
    #[case(63, "Moderate rain")]
    #[case(65, "Heavy rain")]
    #[case(66, "Light freezing rain")]
    #[case(67, "Heavy freezing rain")]
    #[case(71, "Slight snow fall")]
    #[case(73, "Moderate snow fall")]
    #[case(75, "Heavy snow fall")]
    #[case(77, "Snow grains")]
    #[case(80, "Slight rain showers")]
    #[case(81, "Moderate rain showers")]
    #[case(82, "Violent rain showers")]
    #[case(85, "Slight snow showers")]
    #[case(86, "Heavy snow showers")]
    #[case(95, "Thunderstorm")]
    #[case(96, "Thunderstorm with slight hail")]
    #[case(99, "Thunderstorm with heavy hail")]
    fn test_known_weather_codes(#[case] code: i64, #[case] expected: &str) {
        assert_eq!(weather_code_to_description(code), expected);
    }

    #[rstest]
    #[case(-1)]
    #[case(4)]
    #[case(50)]
    #[case(100)]
    #[case(i64::MAX)]
    fn test_unknown_weather_codes(#[case] code: i64) {
        assert_eq!(weather_code_to_description(code), "Unknown");
    }

    #[test]
    fn test_current_data_conversion() {
        let response: ForecastResponse = serde_json::from_value(serde_json::json!({
            "latitude": 35.6,
            "longitude": 139.7,
            "current": {
                "time": "2026-10-19T09:00",
                "interval": 900,
                "temperature_2m": 21.4,
                "apparent_temperature": 20.9,
                "relative_humidity_2m": 55,
                "wind_speed_10m": 9.7,
                "wind_gusts_10m": 22.3,
                "weather_code": 3
            }
        }))
        .unwrap();

        let current: CurrentConditions = response.current.unwrap().into();
        assert_eq!(current.humidity, 55.0);
        assert_eq!(current.feels_like, 20.9);
        assert_eq!(current.conditions, "Overcast");
    }

    #[test]
    fn test_null_weather_code_is_unknown() {
        let current: CurrentData = serde_json::from_value(serde_json::json!({
            "temperature_2m": 7.0,
            "apparent_temperature": 5.5,
            "relative_humidity_2m": 70,
            "wind_speed_10m": 3.0,
            "wind_gusts_10m": 6.0,
            "weather_code": null
        }))
        .unwrap();
        assert_eq!(current.weather_code, None);

        let conditions: CurrentConditions = current.into();
        assert_eq!(conditions.conditions, "Unknown");
        assert_eq!(conditions.temperature, 7.0);
    }

    #[test]
    fn test_geocoding_without_results() {
        let response: GeocodingResponse =
            serde_json::from_value(serde_json::json!({ "generationtime_ms": 0.4 })).unwrap();
        assert!(response.results.is_none());
    }
}
