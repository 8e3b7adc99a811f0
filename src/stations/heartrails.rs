//! HeartRails Express `getStations` response structures

use serde::Deserialize;

use crate::models::StationRecord;

/// Top-level envelope; every answer is wrapped in `response`
#[derive(Debug, Deserialize)]
pub struct StationsEnvelope {
    pub response: StationsResponse,
}

/// Either a station list or an `error` message for unknown names
#[derive(Debug, Deserialize)]
pub struct StationsResponse {
    #[serde(default)]
    pub station: Option<Vec<StationRecord>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl StationsEnvelope {
    /// Station records, empty when the provider reported none
    #[must_use]
    pub fn into_stations(self) -> Vec<StationRecord> {
        self.response.station.unwrap_or_default()
    }
}
