//! Manager API integration.
//!
//! # Data Flow
//! ```text
//! GatewayConfig.upstream (base URL, API key, timeout)
//!     → client.rs (reqwest client with default headers)
//!     → GET/POST {base_url}/employees
//!     → UpstreamError on anything but the accepted statuses
//! ```
//!
//! # Constraints
//! - The API key only comes from configuration and is never logged
//! - Every call carries the configured timeout
//! - No retries

pub mod client;

pub use client::ManagerClient;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from a Manager API call.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The client could not be built from configuration.
    #[error("invalid upstream configuration: {0}")]
    Config(String),

    /// The Manager API answered with a status the operation does not accept.
    #[error("Manager API responded with {status}")]
    Rejected { status: StatusCode, body: String },

    /// No answer within the configured timeout.
    #[error("Manager API timeout after {0} seconds")]
    Timeout(u64),

    /// Connection or protocol failure.
    #[error("Manager API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Accepted status, but the body is not JSON.
    #[error("Manager API returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Config(_) => "config",
            UpstreamError::Rejected { .. } => "rejected",
            UpstreamError::Timeout(_) => "timeout",
            UpstreamError::Transport(_) => "transport",
            UpstreamError::Decode(_) => "decode",
        }
    }
}
