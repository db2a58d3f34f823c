use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Number of legend buckets the map is partitioned into.
pub const BUCKET_COUNT: usize = 5;

/// Highest valid bucket index.
pub const MAX_BUCKET: u8 = (BUCKET_COUNT - 1) as u8;

/// Aggregated value for one county.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CountyTotal {
    #[serde(default)]
    pub interval: u8,
    #[serde(default)]
    pub total: f64,
}

impl CountyTotal {
    /// Bucket used for coloring. The server may place the county holding the
    /// maximum one past the last bucket.
    pub fn bucket(&self) -> u8 {
        self.interval.min(MAX_BUCKET)
    }
}

pub type CountyTotals = HashMap<String, CountyTotal>;

/// Payload of `GET /incidents` and `GET /poundsReleased`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapResponse {
    /// Ascending bucket thresholds.
    #[serde(default)]
    pub intervals: Vec<f64>,
    /// Keyed by county id (the `id` of the county's SVG element).
    #[serde(default)]
    pub totals: CountyTotals,
}

impl MapResponse {
    /// Data for a county, or bucket 0 / total 0 when the server has none.
    pub fn county(&self, id: &str) -> CountyTotal {
        self.totals.get(id).copied().unwrap_or_default()
    }

    /// Threshold `idx`, or 0 when the server sent fewer thresholds.
    pub fn threshold(&self, idx: usize) -> f64 {
        self.intervals.get(idx).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_payload() {
        let json = r#"{
            "intervals": [3.98, 15.85, 63.1, 251.19],
            "totals": {
                "48201": {"interval": 4, "total": 1021.0},
                "48001": {"interval": 0, "total": 0}
            }
        }"#;
        let resp: MapResponse = serde_json::from_str(json).expect("payload should parse");
        assert_eq!(resp.intervals.len(), 4);
        assert_eq!(resp.county("48201").bucket(), 4);
        assert_eq!(resp.county("48201").total, 1021.0);
    }

    #[test]
    fn missing_county_defaults_to_bucket_zero() {
        let resp = MapResponse::default();
        let county = resp.county("99999");
        assert_eq!(county.bucket(), 0);
        assert_eq!(county.total, 0.0);
    }

    #[test]
    fn clamps_bucket_past_the_last() {
        let county = CountyTotal {
            interval: 5,
            total: 10.0,
        };
        assert_eq!(county.bucket(), MAX_BUCKET);
    }

    #[test]
    fn missing_threshold_reads_as_zero() {
        let resp = MapResponse {
            intervals: vec![1.0, 2.0],
            totals: CountyTotals::new(),
        };
        assert_eq!(resp.threshold(1), 2.0);
        assert_eq!(resp.threshold(3), 0.0);
    }
}
