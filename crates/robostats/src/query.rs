//! Team list query filters and query-string encoding

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{District, SortMetric};

/// Default page size when the caller omits `limit`.
pub const DEFAULT_LIMIT: u32 = 100;

/// Default page start when the caller omits `offset`.
pub const DEFAULT_OFFSET: u32 = 0;

/// Filter, sort, and pagination options for the teams list endpoint.
///
/// Doubles as the `get-teams` tool input schema: every field is optional
/// and defaults are applied at encoding time, so `limit` and `offset`
/// always appear in the outgoing request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TeamQuery {
    /// Filter by country (e.g. "USA")
    pub country: Option<String>,
    /// Filter by state or province code (e.g. "CA")
    pub state: Option<String>,
    /// Filter by FRC district code
    pub district: Option<District>,
    /// Filter by whether the team is currently active
    pub active: Option<bool>,
    /// Metric to sort results by
    pub metric: Option<SortMetric>,
    /// Sort ascending instead of descending
    pub ascending: Option<bool>,
    /// Maximum number of teams to return (default 100)
    #[schemars(range(min = 1, max = 1000))]
    pub limit: Option<u32>,
    /// Number of teams to skip (default 0)
    #[schemars(range(min = 0))]
    pub offset: Option<u32>,
}

impl TeamQuery {
    /// Encode the query as key/value pairs in a fixed order.
    ///
    /// Absent optional fields are omitted entirely; `limit` and `offset`
    /// are always emitted, substituting the defaults when unset. The
    /// order is fixed so outgoing URLs are deterministic.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(country) = &self.country {
            pairs.push(("country", country.clone()));
        }
        if let Some(state) = &self.state {
            pairs.push(("state", state.clone()));
        }
        if let Some(district) = self.district {
            pairs.push(("district", district.as_code().to_string()));
        }
        if let Some(active) = self.active {
            pairs.push(("active", active.to_string()));
        }
        if let Some(metric) = self.metric {
            pairs.push(("metric", metric.as_code().to_string()));
        }
        if let Some(ascending) = self.ascending {
            pairs.push(("ascending", ascending.to_string()));
        }
        pairs.push(("limit", self.limit.unwrap_or(DEFAULT_LIMIT).to_string()));
        pairs.push(("offset", self.offset.unwrap_or(DEFAULT_OFFSET).to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(query: &TeamQuery) -> String {
        query
            .to_query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    #[test]
    fn test_empty_query_emits_only_defaults() {
        assert_eq!(encode(&TeamQuery::default()), "limit=100&offset=0");
    }

    #[test]
    fn test_country_with_explicit_limit() {
        let query = TeamQuery {
            country: Some("USA".to_string()),
            limit: Some(5),
            ..Default::default()
        };
        assert_eq!(encode(&query), "country=USA&limit=5&offset=0");
    }

    #[test]
    fn test_all_fields_in_declared_order() {
        let query = TeamQuery {
            country: Some("Canada".to_string()),
            state: Some("ON".to_string()),
            district: Some(District::Ont),
            active: Some(true),
            metric: Some(SortMetric::NormEpa),
            ascending: Some(false),
            limit: Some(50),
            offset: Some(10),
        };
        assert_eq!(
            encode(&query),
            "country=Canada&state=ON&district=ont&active=true&metric=norm_epa&ascending=false&limit=50&offset=10"
        );
    }

    #[test]
    fn test_absent_fields_never_emitted() {
        let query = TeamQuery {
            active: Some(false),
            ..Default::default()
        };
        let pairs = query.to_query_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["active", "limit", "offset"]);
        assert_eq!(pairs[0].1, "false");
    }

    #[test]
    fn test_deserializes_from_empty_object() {
        let query: TeamQuery = serde_json::from_str("{}").unwrap();
        assert!(query.country.is_none());
        assert!(query.limit.is_none());
        assert_eq!(encode(&query), "limit=100&offset=0");
    }
}
