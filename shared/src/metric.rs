use serde::{Deserialize, Serialize};

/// Suffix appended to a metric label when values are normalized per 1,000 residents.
pub const PER_CAPITA_SUFFIX: &str = " / 1,000 res.";

/// Aggregate the map is colored by. Each variant is served by its own endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BaseMetric {
    #[default]
    Incidents,
    PoundsReleased,
}

impl BaseMetric {
    /// Path segment of the endpoint serving this metric.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Incidents => "incidents",
            Self::PoundsReleased => "poundsReleased",
        }
    }

    /// Unit word shown in the legend and tooltips.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Incidents => "incidents",
            Self::PoundsReleased => "pounds",
        }
    }
}

/// One of the four metric selectors: a base metric plus the per-capita flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MetricChoice {
    pub metric: BaseMetric,
    pub per_capita: bool,
}

impl MetricChoice {
    pub const INCIDENTS: Self = Self::new(BaseMetric::Incidents, false);
    pub const INCIDENTS_PER_CAPITA: Self = Self::new(BaseMetric::Incidents, true);
    pub const POUNDS: Self = Self::new(BaseMetric::PoundsReleased, false);
    pub const POUNDS_PER_CAPITA: Self = Self::new(BaseMetric::PoundsReleased, true);

    pub const fn new(metric: BaseMetric, per_capita: bool) -> Self {
        Self { metric, per_capita }
    }

    pub fn label(self) -> String {
        metric_label(self.metric, self.per_capita)
    }
}

/// Label for the active measure, e.g. "pounds / 1,000 res.".
pub fn metric_label(metric: BaseMetric, per_capita: bool) -> String {
    let mut label = metric.unit().to_string();
    if per_capita {
        label.push_str(PER_CAPITA_SUFFIX);
    }
    label
}
