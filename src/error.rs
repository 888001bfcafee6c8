//! Errors surfaced to gateway callers.
//!
//! Every failure a handler can produce is a [`GatewayError`]; its
//! `IntoResponse` impl picks the status code and renders an
//! [`ErrorResponse`] body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Hint appended to every upstream rejection.
pub const API_KEY_HINT: &str = "check API_KEY";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The inbound request is unusable.
    #[error("{0}")]
    Validation(String),

    /// The Manager API answered with a non-success status.
    #[error("{action}: {detail} - {hint}", hint = API_KEY_HINT)]
    UpstreamRejected {
        action: &'static str,
        status: u16,
        detail: String,
    },

    /// The Manager API could not be reached.
    #[error("Manager API unreachable: {0}")]
    UpstreamUnavailable(String),

    /// The Manager API answered with a body that is not JSON.
    #[error("Manager API returned an unreadable body: {0}")]
    InvalidUpstreamBody(String),

    /// The Manager API did not answer in time.
    #[error("Manager API did not respond within {0} seconds")]
    UpstreamTimeout(u64),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::UpstreamRejected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::UpstreamUnavailable(_) | GatewayError::InvalidUpstreamBody(_) => {
                StatusCode::BAD_GATEWAY
            }
            GatewayError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Map an upstream failure for the named action.
    ///
    /// `detail` renders the rejection detail from the upstream status and body.
    pub fn from_upstream<F>(action: &'static str, err: UpstreamError, detail: F) -> Self
    where
        F: FnOnce(u16, String) -> String,
    {
        match err {
            UpstreamError::Rejected { status, body } => {
                let status = status.as_u16();
                GatewayError::UpstreamRejected {
                    action,
                    status,
                    detail: detail(status, body),
                }
            }
            UpstreamError::Timeout(secs) => GatewayError::UpstreamTimeout(secs),
            UpstreamError::Transport(e) => GatewayError::UpstreamUnavailable(e.to_string()),
            UpstreamError::Decode(e) => GatewayError::InvalidUpstreamBody(e.to_string()),
            // Raised only while building the client, before the server starts.
            UpstreamError::Config(msg) => GatewayError::UpstreamUnavailable(msg),
        }
    }

    fn upstream_status(&self) -> Option<u16> {
        match self {
            GatewayError::UpstreamRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(status = %status, error = %self, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: self.to_string(),
            upstream_status: self.upstream_status(),
        };
        (status, Json(body)).into_response()
    }
}
