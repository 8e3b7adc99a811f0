//! Station models for the HeartRails Express lookup

use indexmap::IndexSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One station record as returned by the provider.
///
/// A station served by several lines comes back once per line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationRecord {
    pub name: String,
    pub line: String,
    pub prefecture: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub postal: Option<String>,
    /// Longitude
    pub x: f64,
    /// Latitude
    pub y: f64,
}

impl StationRecord {
    /// Prefecture, city and town concatenated without separators
    #[must_use]
    pub fn address(&self) -> String {
        format!(
            "{}{}{}",
            self.prefecture,
            self.city,
            self.town.as_deref().unwrap_or_default()
        )
    }
}

/// Input of the station tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StationQuery {
    /// 駅名（例：東京、新宿、大阪）
    pub station: String,
}

/// Output of the station tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StationResult {
    pub station: String,
    /// Unique line names in provider order
    pub lines: Vec<String>,
    pub prefecture: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub address: String,
    /// Absent when the nearby lookup failed or found nothing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nearby_stations: Option<Vec<String>>,
}

impl StationResult {
    /// Assemble a result from the canonical record, every matching record and
    /// the optional nearby enrichment
    #[must_use]
    pub fn assemble(
        canonical: &StationRecord,
        records: &[StationRecord],
        nearby_stations: Option<Vec<String>>,
    ) -> Self {
        let lines: IndexSet<&str> = records.iter().map(|r| r.line.as_str()).collect();

        Self {
            station: canonical.name.clone(),
            lines: lines.into_iter().map(str::to_string).collect(),
            prefecture: canonical.prefecture.clone(),
            postal_code: canonical.postal.clone(),
            address: canonical.address(),
            nearby_stations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str, town: Option<&str>) -> StationRecord {
        StationRecord {
            name: "東京".to_string(),
            line: line.to_string(),
            prefecture: "東京都".to_string(),
            city: "千代田区".to_string(),
            town: town.map(str::to_string),
            postal: Some("1000005".to_string()),
            x: 139.766103,
            y: 35.681391,
        }
    }

    #[test]
    fn test_address_with_and_without_town() {
        assert_eq!(record("山手線", Some("丸の内")).address(), "東京都千代田区丸の内");
        assert_eq!(record("山手線", None).address(), "東京都千代田区");
    }

    #[test]
    fn test_lines_are_unique_in_provider_order() {
        let records = vec![
            record("山手線", None),
            record("中央線", None),
            record("山手線", None),
            record("京浜東北線", None),
        ];
        let result = StationResult::assemble(&records[0], &records, None);
        assert_eq!(result.lines, vec!["山手線", "中央線", "京浜東北線"]);
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let mut canonical = record("山手線", None);
        canonical.postal = None;
        let result = StationResult::assemble(&canonical, std::slice::from_ref(&canonical), None);
        let value = serde_json::to_value(&result).unwrap();

        assert!(value.get("nearbyStations").is_none());
        assert!(value.get("postalCode").is_none());
        assert_eq!(value["address"], "東京都千代田区");
    }

    #[test]
    fn test_record_tolerates_missing_city_and_town() {
        let record: StationRecord = serde_json::from_value(serde_json::json!({
            "name": "新宿",
            "line": "JR山手線",
            "prefecture": "東京都",
            "postal": "1600022",
            "x": 139.700464,
            "y": 35.689729
        }))
        .unwrap();
        assert_eq!(record.address(), "東京都");
        assert_eq!(record.postal.as_deref(), Some("1600022"));
    }
}
