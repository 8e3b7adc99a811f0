//! `japan-train-info`: station lines, address and nearby stations

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, instrument};

use super::{Tool, input_schema, output_schema, parse_args, require_text, to_output};
use crate::Result;
use crate::config::TravelAssistConfig;
use crate::http::HttpTransport;
use crate::models::{StationQuery, StationResult};
use crate::stations::{NearbyStationClient, StationLookupClient};

/// Looks a station up by name and enriches it with nearby stations
#[derive(Clone)]
pub struct JapanTrainTool {
    lookup: StationLookupClient,
    nearby: NearbyStationClient,
}

impl JapanTrainTool {
    pub const ID: &'static str = "japan-train-info";

    pub fn new(lookup: StationLookupClient, nearby: NearbyStationClient) -> Self {
        Self { lookup, nearby }
    }

    pub fn from_config(transport: Arc<dyn HttpTransport>, config: &TravelAssistConfig) -> Self {
        let base_url = &config.endpoints.station_base_url;
        Self::new(
            StationLookupClient::new(transport.clone(), base_url),
            NearbyStationClient::new(transport, base_url, config.stations.nearby_limit),
        )
    }

    /// Station information for the first record matching `station`.
    ///
    /// Lines are collected from every matching record. A failed nearby lookup
    /// leaves `nearby_stations` unset without failing the call.
    #[instrument(skip(self))]
    pub async fn get_station_info(&self, station: &str) -> Result<StationResult> {
        let station = require_text("station", station)?;
        let records = self.lookup.lookup(station).await?;
        let canonical = &records[0];

        let nearby = self
            .nearby
            .find_nearby(canonical.x, canonical.y, &canonical.name)
            .await;

        let result = StationResult::assemble(canonical, &records, nearby);
        info!(
            "Station {}: {} lines, {} nearby",
            result.station,
            result.lines.len(),
            result.nearby_stations.as_ref().map_or(0, Vec::len)
        );
        Ok(result)
    }
}

#[async_trait]
impl Tool for JapanTrainTool {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn description(&self) -> &'static str {
        "日本の駅や路線の情報を取得します"
    }

    fn input_schema(&self) -> Value {
        input_schema::<StationQuery>()
    }

    fn output_schema(&self) -> Value {
        output_schema::<StationResult>()
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let query: StationQuery = parse_args(Self::ID, args)?;
        let result = self.get_station_info(&query.station).await?;
        to_output(&result)
    }
}
