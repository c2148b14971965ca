//! Robostats - Statbotics API Client and Report Formatting
//!
//! This crate provides the data layer for the robostats MCP server:
//! fetching team and season statistics from the Statbotics API and
//! rendering them as fixed-layout text reports.
//!
//! # Features
//! - Typed team records with win/loss and normalized-EPA data
//! - Filterable team list queries with deterministic query encoding
//! - Season statistics formatting over Statbotics' open per-year schema

pub mod client;
pub mod error;
pub mod format;
pub mod models;
pub mod query;

pub use client::StatboticsClient;
pub use error::UpstreamError;
pub use models::{District, NormEpa, SortMetric, Team, WinLossRecord};
pub use query::TeamQuery;
