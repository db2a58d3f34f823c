use serde::{Deserialize, Serialize};

/// Filter value the backend treats as "no filter".
pub const ALL_CHEMICALS: &str = "ALL";

/// Upper bound on autocomplete suggestions shown at once.
pub const MAX_SUGGESTIONS: usize = 50;

/// Chemical filter applied to map queries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChemicalFilter {
    #[default]
    All,
    /// Uppercase chemical code known to the loaded list.
    Code(String),
}

impl ChemicalFilter {
    /// Code to send as the `chemical` query parameter, if any.
    pub fn as_code(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Code(code) => Some(code.as_str()),
        }
    }

    /// Text shown in the filter input for this filter.
    pub fn display_text(&self) -> &str {
        self.as_code().unwrap_or("")
    }
}

/// Trim and uppercase raw filter input.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Chemical codes served by `GET /chemicals`, most frequent first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChemicalList(Vec<String>);

impl ChemicalList {
    pub fn new(codes: Vec<String>) -> Self {
        Self(codes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.iter().any(|known| known == code)
    }

    /// Resolve raw input to a filter, or `None` when it names no known chemical.
    /// Empty input and `ALL` always resolve to the unfiltered view.
    pub fn resolve(&self, raw: &str) -> Option<ChemicalFilter> {
        let code = normalize(raw);
        if code.is_empty() || code == ALL_CHEMICALS {
            return Some(ChemicalFilter::All);
        }
        self.contains(&code).then_some(ChemicalFilter::Code(code))
    }

    /// Codes containing `term` (case-insensitive), in list order.
    /// An empty term matches everything.
    pub fn suggestions(&self, term: &str, limit: usize) -> Vec<String> {
        let needle = normalize(term);
        self.0
            .iter()
            .filter(|code| needle.is_empty() || code.to_uppercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> ChemicalList {
        ChemicalList::new(vec![
            "TOLUENE".to_string(),
            "AMMONIA".to_string(),
            "METHANOL".to_string(),
            "XYLENE (MIXED ISOMERS)".to_string(),
        ])
    }

    #[test]
    fn resolves_known_codes_case_insensitively() {
        assert_eq!(
            list().resolve(" toluene "),
            Some(ChemicalFilter::Code("TOLUENE".to_string()))
        );
    }

    #[test]
    fn empty_and_all_resolve_to_unfiltered() {
        assert_eq!(list().resolve(""), Some(ChemicalFilter::All));
        assert_eq!(list().resolve("   "), Some(ChemicalFilter::All));
        assert_eq!(list().resolve("all"), Some(ChemicalFilter::All));
        assert_eq!(ChemicalList::default().resolve(""), Some(ChemicalFilter::All));
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(list().resolve("BENZENE"), None);
        assert_eq!(ChemicalList::default().resolve("TOLUENE"), None);
    }

    #[test]
    fn suggestions_match_substrings_in_list_order() {
        assert_eq!(list().suggestions("en", 10), vec!["TOLUENE", "XYLENE (MIXED ISOMERS)"]);
        assert_eq!(list().suggestions("", 10).len(), 4);
        assert_eq!(list().suggestions("", 2), vec!["TOLUENE", "AMMONIA"]);
        assert!(list().suggestions("zzz", 10).is_empty());
    }

    #[test]
    fn filter_exposes_query_code() {
        assert_eq!(ChemicalFilter::All.as_code(), None);
        assert_eq!(ChemicalFilter::All.display_text(), "");
        let filter = ChemicalFilter::Code("AMMONIA".to_string());
        assert_eq!(filter.as_code(), Some("AMMONIA"));
    }

    #[test]
    fn parses_chemical_list_payload() {
        let parsed: ChemicalList =
            serde_json::from_str(r#"["AMMONIA","TOLUENE"]"#).expect("list should parse");
        assert_eq!(parsed.len(), 2);
        assert!(parsed.contains("TOLUENE"));
    }
}
