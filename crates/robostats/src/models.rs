//! Data model for Statbotics team records
//!
//! All values are transient and request-scoped: deserialized from one
//! upstream JSON response, rendered once, then dropped.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A team record as returned by `/v3/team/{team}` and `/v3/teams`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Team number, unique per upstream
    pub team: u32,
    pub name: String,
    pub country: String,
    pub state: Option<String>,
    pub district: Option<String>,
    pub rookie_year: u32,
    pub active: bool,
    pub record: WinLossRecord,
    pub norm_epa: NormEpa,
}

/// All-time win/loss/tie record. Upstream guarantees winrate = wins/count
/// when count > 0; not validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinLossRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub count: u32,
    /// Win rate as a 0-1 fraction
    pub winrate: f64,
}

/// Normalized EPA (team-strength rating) variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormEpa {
    pub current: f64,
    pub recent: f64,
    pub mean: f64,
    pub max: f64,
}

/// FRC district codes accepted by the teams filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum District {
    Chs,
    Fim,
    Fin,
    Fit,
    Fma,
    Fnc,
    Fsc,
    Isr,
    Ne,
    Ont,
    Pch,
    Pnw,
}

impl District {
    /// Literal wire code sent to upstream.
    pub fn as_code(&self) -> &'static str {
        match self {
            District::Chs => "chs",
            District::Fim => "fim",
            District::Fin => "fin",
            District::Fit => "fit",
            District::Fma => "fma",
            District::Fnc => "fnc",
            District::Fsc => "fsc",
            District::Isr => "isr",
            District::Ne => "ne",
            District::Ont => "ont",
            District::Pch => "pch",
            District::Pnw => "pnw",
        }
    }
}

/// Sort metrics accepted by the teams list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortMetric {
    NormEpa,
    RookieYear,
    Wins,
    Losses,
    Ties,
    Winrate,
    Team,
    Name,
    Count,
}

impl SortMetric {
    /// Literal wire code sent to upstream.
    pub fn as_code(&self) -> &'static str {
        match self {
            SortMetric::NormEpa => "norm_epa",
            SortMetric::RookieYear => "rookie_year",
            SortMetric::Wins => "wins",
            SortMetric::Losses => "losses",
            SortMetric::Ties => "ties",
            SortMetric::Winrate => "winrate",
            SortMetric::Team => "team",
            SortMetric::Name => "name",
            SortMetric::Count => "count",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_wire_codes() {
        assert_eq!(
            serde_json::to_string(&District::Fim).unwrap(),
            "\"fim\""
        );
        let d: District = serde_json::from_str("\"pnw\"").unwrap();
        assert_eq!(d, District::Pnw);
        assert_eq!(d.as_code(), "pnw");
    }

    #[test]
    fn test_sort_metric_wire_codes() {
        assert_eq!(
            serde_json::to_string(&SortMetric::NormEpa).unwrap(),
            "\"norm_epa\""
        );
        let m: SortMetric = serde_json::from_str("\"rookie_year\"").unwrap();
        assert_eq!(m, SortMetric::RookieYear);
        assert_eq!(SortMetric::Winrate.as_code(), "winrate");
    }

    #[test]
    fn test_team_deserializes_with_null_district() {
        let team: Team = serde_json::from_str(
            r#"{
                "team": 254,
                "name": "The Cheesy Poofs",
                "country": "USA",
                "state": "CA",
                "district": null,
                "rookie_year": 1999,
                "active": true,
                "record": {"wins": 100, "losses": 10, "ties": 1, "count": 111, "winrate": 0.9},
                "norm_epa": {"current": 2000.0, "recent": 1990.5, "mean": 1950.0, "max": 2100.0}
            }"#,
        )
        .unwrap();
        assert_eq!(team.team, 254);
        assert!(team.district.is_none());
        assert_eq!(team.record.count, 111);
    }
}
