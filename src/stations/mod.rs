//! HeartRails Express station clients
//!
//! Both clients talk to the same `getStations` endpoint: one looks stations up
//! by name, the other lists stations around a coordinate pair. The nearby
//! lookup only enriches a result, so its failures never reach the caller.

use std::sync::Arc;

use indexmap::IndexSet;
use tracing::{debug, info, instrument, warn};

use crate::http::HttpTransport;
use crate::models::StationRecord;
use crate::{Result, TravelAssistError};

pub mod heartrails;

async fn get_stations(
    transport: &dyn HttpTransport,
    url: &str,
) -> Result<Vec<StationRecord>> {
    debug!("HeartRails request URL: {}", url);
    let body = transport.get_text(url).await?;
    let envelope: heartrails::StationsEnvelope = serde_json::from_str(&body).map_err(|e| {
        TravelAssistError::parse(format!("Failed to parse HeartRails response: {e}"))
    })?;
    if let Some(error) = &envelope.response.error {
        debug!("HeartRails answered with an error: {}", error);
    }
    Ok(envelope.into_stations())
}

/// Looks stations up by name
#[derive(Clone)]
pub struct StationLookupClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl StationLookupClient {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// All records matching `station`, one per serving line, in provider order.
    ///
    /// Fails with `NotFound` when the provider returns no records.
    #[instrument(skip(self))]
    pub async fn lookup(&self, station: &str) -> Result<Vec<StationRecord>> {
        let url = format!(
            "{}?method=getStations&name={}",
            self.base_url,
            urlencoding::encode(station)
        );

        let records = get_stations(self.transport.as_ref(), &url).await?;
        if records.is_empty() {
            return Err(TravelAssistError::station_not_found(station));
        }

        info!("Found {} records for station '{}'", records.len(), station);
        Ok(records)
    }
}

/// Lists stations around a coordinate pair
#[derive(Clone)]
pub struct NearbyStationClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    limit: usize,
}

impl NearbyStationClient {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>, limit: usize) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            limit,
        }
    }

    /// Names of stations near `(x, y)`, or `None` when none are available.
    ///
    /// Transport, parse and empty results all yield `None`; the failure is
    /// logged and not returned.
    #[instrument(skip(self))]
    pub async fn find_nearby(&self, x: f64, y: f64, exclude_name: &str) -> Option<Vec<String>> {
        match self.try_find_nearby(x, y, exclude_name).await {
            Ok(names) if names.is_empty() => {
                debug!("No nearby stations around ({}, {})", x, y);
                None
            }
            Ok(names) => Some(names),
            Err(e) => {
                warn!("Failed to fetch nearby stations: {}", e);
                None
            }
        }
    }

    async fn try_find_nearby(&self, x: f64, y: f64, exclude_name: &str) -> Result<Vec<String>> {
        let url = format!("{}?method=getStations&x={}&y={}", self.base_url, x, y);
        let records = get_stations(self.transport.as_ref(), &url).await?;
        Ok(nearby_names(records, exclude_name, self.limit))
    }
}

/// Unique station names in provider order, without `exclude_name`, capped at `limit`
fn nearby_names(records: Vec<StationRecord>, exclude_name: &str, limit: usize) -> Vec<String> {
    let names: IndexSet<String> = records
        .into_iter()
        .map(|record| record.name)
        .filter(|name| name != exclude_name)
        .collect();

    names.into_iter().take(limit).collect()
}
