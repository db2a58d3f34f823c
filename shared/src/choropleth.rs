//! One render pass of the county map: legend text and per-county styling
//! derived from a `MapResponse` and the metric it was requested for.

use crate::humanize::humanize;
use crate::map_data::{BUCKET_COUNT, CountyTotal, MapResponse};
use crate::metric::MetricChoice;

/// CSS class every county element carries.
pub const COUNTY_CLASS: &str = "county";

/// Text of one legend slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub bucket: usize,
    /// Range description, e.g. "10 - 100".
    pub range: String,
    /// Metric label shown under the range.
    pub caption: String,
}

/// Range text for a legend slot. The lowest and highest buckets are open-ended;
/// the highest is bounded by the last threshold the server sent.
pub fn legend_range(bucket: usize, response: &MapResponse) -> String {
    let last = BUCKET_COUNT - 1;
    match bucket {
        0 => format!("< {}", humanize(response.threshold(0))),
        b if b >= last => {
            let top = response.intervals.last().copied().unwrap_or(0.0);
            format!("> {}", humanize(top))
        }
        b => format!(
            "{} - {}",
            humanize(response.threshold(b - 1)),
            humanize(response.threshold(b))
        ),
    }
}

/// Class attribute value for a county in `bucket`.
pub fn county_class(bucket: u8) -> String {
    format!("{COUNTY_CLASS} {COUNTY_CLASS}{bucket}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Choropleth {
    pub choice: MetricChoice,
    label: String,
    response: MapResponse,
}

impl Choropleth {
    pub fn new(choice: MetricChoice, response: MapResponse) -> Self {
        Self {
            choice,
            label: choice.label(),
            response,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Always exactly `BUCKET_COUNT` entries, lowest bucket first.
    pub fn legend(&self) -> Vec<LegendEntry> {
        (0..BUCKET_COUNT)
            .map(|bucket| LegendEntry {
                bucket,
                range: legend_range(bucket, &self.response),
                caption: self.label.clone(),
            })
            .collect()
    }

    pub fn county(&self, id: &str) -> CountyTotal {
        self.response.county(id)
    }

    pub fn county_class(&self, id: &str) -> String {
        county_class(self.county(id).bucket())
    }

    /// Tooltip for a county: "<name>: <total> <label>".
    pub fn tooltip(&self, name: &str, id: &str) -> String {
        format!("{name}: {} {}", humanize(self.county(id).total), self.label)
    }
}
