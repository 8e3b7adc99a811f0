//! Shared test helpers for tool integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use travelassist::{HttpTransport, TravelAssistConfig, TravelAssistError};

pub const GEOCODING: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const FORECAST: &str = "https://api.open-meteo.com/v1/forecast";
pub const STATIONS_BY_NAME: &str = "https://express.heartrails.com/api/json?method=getStations&name=";
pub const STATIONS_BY_COORDS: &str = "https://express.heartrails.com/api/json?method=getStations&x=";

enum Reply {
    Body(String),
    Fail(String),
}

/// Transport answering from canned routes matched by URL prefix.
#[derive(Default)]
pub struct FakeTransport {
    routes: Vec<(String, Reply)>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, prefix: &str, body: Value) -> Self {
        self.routes.push((prefix.to_string(), Reply::Body(body.to_string())));
        self
    }

    pub fn fail(mut self, prefix: &str, message: &str) -> Self {
        self.routes.push((prefix.to_string(), Reply::Fail(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get_text(&self, url: &str) -> travelassist::Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.routes.iter().find(|(prefix, _)| url.starts_with(prefix.as_str())) {
            Some((_, Reply::Body(body))) => Ok(body.clone()),
            Some((_, Reply::Fail(message))) => Err(TravelAssistError::transport(message.clone())),
            None => Err(TravelAssistError::transport(format!("unexpected request {url}"))),
        }
    }
}

pub fn config() -> TravelAssistConfig {
    TravelAssistConfig::default()
}

pub fn geocoding_hit(name: &str, latitude: f64, longitude: f64) -> Value {
    json!({
        "results": [{
            "id": 1850147,
            "name": name,
            "latitude": latitude,
            "longitude": longitude,
            "country_code": "JP",
            "timezone": "Asia/Tokyo"
        }],
        "generationtime_ms": 0.7
    })
}

pub fn current_weather(weather_code: i64) -> Value {
    json!({
        "latitude": 35.7,
        "longitude": 139.6875,
        "current_units": { "temperature_2m": "°C" },
        "current": {
            "time": "2026-10-19T09:00",
            "interval": 900,
            "temperature_2m": 22.1,
            "apparent_temperature": 21.3,
            "relative_humidity_2m": 58,
            "wind_speed_10m": 7.6,
            "wind_gusts_10m": 18.4,
            "weather_code": weather_code
        }
    })
}

pub fn station(name: &str, line: &str) -> Value {
    json!({
        "name": name,
        "prefecture": "東京都",
        "line": line,
        "city": "千代田区",
        "town": "丸の内一丁目",
        "postal": "1000005",
        "x": 139.766103,
        "y": 35.681391
    })
}

pub fn stations(entries: &[(&str, &str)]) -> Value {
    let list: Vec<Value> = entries.iter().map(|(name, line)| station(name, line)).collect();
    json!({ "response": { "station": list } })
}
