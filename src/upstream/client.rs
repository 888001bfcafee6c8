//! Manager API client with timeout and credential injection.
//!
//! # Responsibilities
//! - Hold one pooled `reqwest::Client` preloaded with the API-key header
//! - Issue the list and create calls
//! - Classify failures (rejection, timeout, transport, decode)

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::gateway::Pagination;
use crate::observability::metrics;
use crate::upstream::UpstreamError;

/// Client for the Manager API.
#[derive(Clone)]
pub struct ManagerClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl ManagerClient {
    /// Create a client from upstream configuration.
    ///
    /// A missing API key is allowed; calls are then sent without the header.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(key) = &config.api_key {
            let name = HeaderName::from_bytes(config.api_key_header.as_bytes()).map_err(|e| {
                UpstreamError::Config(format!(
                    "invalid API key header '{}': {}",
                    config.api_key_header, e
                ))
            })?;
            let mut value = HeaderValue::from_str(key)
                .map_err(|_| UpstreamError::Config("API key is not a valid header value".into()))?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UpstreamError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn employees_url(&self) -> String {
        format!("{}/employees", self.base_url)
    }

    /// `GET /employees?skip=..&pageSize=..`. Only 200 counts as success.
    pub async fn list_employees(&self, page: Pagination) -> Result<Value, UpstreamError> {
        let url = format!(
            "{}?skip={}&pageSize={}",
            self.employees_url(),
            page.skip,
            page.page_size
        );
        tracing::debug!(url = %url, "Fetching employees from Manager API");

        let start = Instant::now();
        let result = self.send(self.http.get(url), |s| s == StatusCode::OK).await;
        metrics::record_upstream("list_employees", outcome(&result), start);
        result
    }

    /// `POST /employees`. 200 and 201 count as success.
    pub async fn create_employee(&self, employee: &Value) -> Result<Value, UpstreamError> {
        tracing::debug!(url = %self.employees_url(), "Creating employee in Manager API");

        let start = Instant::now();
        let request = self.http.post(self.employees_url()).json(employee);
        let result = self
            .send(request, |s| s == StatusCode::OK || s == StatusCode::CREATED)
            .await;
        metrics::record_upstream("create_employee", outcome(&result), start);
        result
    }

    async fn send<F>(&self, request: reqwest::RequestBuilder, accept: F) -> Result<Value, UpstreamError>
    where
        F: Fn(StatusCode) -> bool,
    {
        let response = request.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !accept(status) {
            tracing::warn!(status = %status, "Manager API rejected request");
            return Err(UpstreamError::Rejected { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn classify(&self, err: reqwest::Error) -> UpstreamError {
        if err.is_timeout() {
            tracing::warn!(timeout_secs = self.timeout_secs, "Manager API timed out");
            UpstreamError::Timeout(self.timeout_secs)
        } else {
            tracing::error!(error = %err, "Manager API transport error");
            UpstreamError::Transport(err)
        }
    }
}

fn outcome(result: &Result<Value, UpstreamError>) -> &'static str {
    match result {
        Ok(_) => "success",
        Err(e) => e.kind(),
    }
}

impl std::fmt::Debug for ManagerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagerClient")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
