pub mod chemical;
pub mod choropleth;
pub mod humanize;
pub mod map_data;
pub mod metric;

pub use chemical::{ChemicalFilter, ChemicalList};
pub use choropleth::{Choropleth, LegendEntry};
pub use humanize::humanize;
pub use map_data::{BUCKET_COUNT, CountyTotal, MapResponse};
pub use metric::{BaseMetric, MetricChoice};
