//! HTTP client for the Statbotics API
//!
//! Thin read-only wrapper: one GET per call, no retries, no caching.
//! Failures are absorbed here and logged; callers only see `None`.

use reqwest::header;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;
use url::Url;

use crate::error::UpstreamError;
use crate::models::Team;
use crate::query::TeamQuery;

/// Base URL of the Statbotics API.
pub const API_BASE: &str = "https://api.statbotics.io";

/// Identifying header sent on every request.
pub const USER_AGENT: &str = "statbotics-app/1.0";

/// Read-only client for the Statbotics v3 API.
#[derive(Debug, Clone)]
pub struct StatboticsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl StatboticsClient {
    /// Create a client pointed at the production API.
    pub fn new() -> Result<Self, UpstreamError> {
        Self::with_base_url(API_BASE)
    }

    /// Create a client pointed at an alternate base URL.
    pub fn with_base_url(base: &str) -> Result<Self, UpstreamError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(base)?,
        })
    }

    /// Fetch a single team record by team number.
    pub async fn get_team(&self, team: u32) -> Option<Team> {
        self.fetch(&format!("/v3/team/{team}"), &[]).await
    }

    /// Fetch a filtered, sorted page of team records.
    pub async fn get_teams(&self, query: &TeamQuery) -> Option<Vec<Team>> {
        self.fetch("/v3/teams", &query.to_query_pairs()).await
    }

    /// Fetch season statistics for a year. The shape varies by season,
    /// so the payload stays an open JSON value.
    pub async fn get_year(&self, year: u32) -> Option<Value> {
        self.fetch(&format!("/v3/year/{year}"), &[]).await
    }

    /// Issue one GET and parse the JSON body. Any failure collapses to
    /// `None` after a diagnostic log line.
    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&'static str, String)],
    ) -> Option<T> {
        match self.request(path, pairs).await {
            Ok(body) => Some(body),
            Err(err) => {
                warn!(path, %err, "Statbotics request failed");
                None
            }
        }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&'static str, String)],
    ) -> Result<T, UpstreamError> {
        let mut url = self.base_url.join(path)?;
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(StatboticsClient::with_base_url("not a url").is_err());
    }

    #[test]
    fn test_identifying_header_value() {
        assert_eq!(USER_AGENT, "statbotics-app/1.0");
    }

    #[test]
    fn test_team_path_joins_against_base() {
        let base = Url::parse(API_BASE).unwrap();
        let url = base.join("/v3/team/254").unwrap();
        assert_eq!(url.as_str(), "https://api.statbotics.io/v3/team/254");
    }

    #[test]
    fn test_teams_url_carries_default_pagination() {
        let mut url = Url::parse(API_BASE).unwrap().join("/v3/teams").unwrap();
        url.query_pairs_mut()
            .extend_pairs(TeamQuery::default().to_query_pairs());
        assert_eq!(
            url.as_str(),
            "https://api.statbotics.io/v3/teams?limit=100&offset=0"
        );
    }
}
