//! Statbotics MCP tool server
//!
//! Registers the three query tools and routes each invocation through
//! the upstream client and the matching formatter. Upstream failures
//! come back as ordinary text results, never as protocol errors: the
//! tool call itself succeeded, it simply found no data.

use anyhow::Result;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, ErrorData, Implementation, ServerCapabilities, ServerInfo,
    },
    schemars::JsonSchema,
    tool, tool_handler, tool_router, ServerHandler,
};
// Re-export schemars for derive macro
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use robostats::format::{format_team, format_teams_list, format_year_stats};
use robostats::{StatboticsClient, TeamQuery};

// Parameter structs for each tool

/// Parameters for get-team tool
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetTeamParams {
    /// Team number (e.g. 254)
    pub team: u32,
}

/// Parameters for get-year-stats tool
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetYearStatsParams {
    /// Competition season year (e.g. 2023)
    pub year: u32,
}

/// Statbotics MCP tool server
#[derive(Clone)]
pub struct RobostatsServer {
    tool_router: ToolRouter<Self>,
    client: StatboticsClient,
}

impl RobostatsServer {
    /// Create a server backed by the production Statbotics API.
    pub fn new() -> Result<Self> {
        Ok(Self {
            tool_router: Self::tool_router(),
            client: StatboticsClient::new()?,
        })
    }

    /// Create a server backed by an alternate API base URL.
    pub fn with_base_url(base: &str) -> Result<Self> {
        Ok(Self {
            tool_router: Self::tool_router(),
            client: StatboticsClient::with_base_url(base)?,
        })
    }
}

#[tool_handler]
impl ServerHandler for RobostatsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "robostats".to_string(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                title: Some("Robostats".to_string()),
                description: None,
                icons: None,
                website_url: None,
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Statbotics FRC statistics tools.\n\
                 \n\
                 - get-team: look up one team's record and EPA by team number\n\
                 - get-teams: list teams filtered by country, state, district, or \
                 active status, sorted by a chosen metric\n\
                 - get-year-stats: season-level scoring, percentile, and \
                 prediction-model statistics for a year"
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}

#[tool_router(router = tool_router)]
impl RobostatsServer {
    /// Look up a single team by number
    #[tool(
        name = "get-team",
        description = "Get Statbotics team data by team number"
    )]
    pub async fn get_team(
        &self,
        params: Parameters<GetTeamParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let team = params.0.team;
        let text = match self.client.get_team(team).await {
            Some(record) => format_team(&record),
            None => format!("Failed to retrieve data for team {team}"),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// List teams matching the given filters
    #[tool(
        name = "get-teams",
        description = "List Statbotics teams filtered by country, state, district, or active status, sorted by a chosen metric"
    )]
    pub async fn get_teams(
        &self,
        params: Parameters<TeamQuery>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = match self.client.get_teams(&params.0).await {
            Some(teams) => format_teams_list(&teams),
            None => "Failed to retrieve teams data".to_string(),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Season statistics for a competition year
    #[tool(
        name = "get-year-stats",
        description = "Get season-level Statbotics statistics for a competition year"
    )]
    pub async fn get_year_stats(
        &self,
        params: Parameters<GetYearStatsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let year = params.0.year;
        let text = match self.client.get_year(year).await {
            Some(stats) => format_year_stats(&stats),
            None => format!("Failed to retrieve data for year {year}"),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
