use gloo_net::http::Request;
use web_sys::RequestCache;

use triexplore_shared::{ChemicalList, MapResponse};

use crate::config::ClientConfig;
use crate::controller::MapRequest;

const CHEMICALS_PATH: &str = "chemicals";

/// Query parameters for a map request. Unfiltered and absolute views omit
/// their parameter entirely.
pub fn map_query(request: &MapRequest) -> Vec<(&'static str, String)> {
    let mut params = Vec::with_capacity(2);
    if let Some(code) = request.chemical.as_code() {
        params.push(("chemical", code.to_string()));
    }
    if request.choice.per_capita {
        params.push(("perCapita", "true".to_string()));
    }
    params
}

/// Fetch the chemical codes available for filtering.
pub async fn fetch_chemicals(config: &ClientConfig) -> Result<ChemicalList, String> {
    let resp = Request::get(&config.endpoint(CHEMICALS_PATH))
        .cache(RequestCache::Default)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<ChemicalList>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

/// Fetch per-county totals for the metric and filter in `request`.
pub async fn fetch_map(config: &ClientConfig, request: &MapRequest) -> Result<MapResponse, String> {
    let url = config.endpoint(request.choice.metric.endpoint());
    let resp = Request::get(&url)
        .query(map_query(request))
        .cache(RequestCache::Default)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<MapResponse>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use triexplore_shared::{ChemicalFilter, MetricChoice};

    fn request(choice: MetricChoice, chemical: ChemicalFilter) -> MapRequest {
        MapRequest {
            seq: 1,
            choice,
            chemical,
        }
    }

    #[test]
    fn unfiltered_absolute_query_is_empty() {
        let query = map_query(&request(MetricChoice::INCIDENTS, ChemicalFilter::All));
        assert!(query.is_empty());
    }

    #[test]
    fn chemical_and_per_capita_are_both_sent() {
        let query = map_query(&request(
            MetricChoice::POUNDS_PER_CAPITA,
            ChemicalFilter::Code("AMMONIA".to_string()),
        ));
        assert_eq!(
            query,
            vec![
                ("chemical", "AMMONIA".to_string()),
                ("perCapita", "true".to_string())
            ]
        );
    }

    #[test]
    fn per_capita_without_chemical() {
        let query = map_query(&request(
            MetricChoice::INCIDENTS_PER_CAPITA,
            ChemicalFilter::All,
        ));
        assert_eq!(query, vec![("perCapita", "true".to_string())]);
    }
}
