//! Error types for upstream API access

use reqwest::StatusCode;
use thiserror::Error;

/// Failures while talking to the Statbotics API.
///
/// These never reach a tool caller: the client absorbs them and logs a
/// diagnostic, surfacing only the absence of data.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),
}
