//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. All problems are
//! collected so a single startup attempt reports everything wrong.

use std::net::SocketAddr;

use axum::http::HeaderName;
use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("upstream.base_url '{url}' is invalid: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("upstream.api_key_header '{0}' is not a valid header name")]
    InvalidApiKeyHeader(String),

    #[error("{field} must be greater than zero")]
    ZeroValue { field: &'static str },

    #[error(
        "timeouts.request_secs ({request_secs}) must exceed upstream.timeout_secs ({upstream_secs})"
    )]
    RequestTimeoutNotAboveUpstream { request_secs: u64, upstream_secs: u64 },

    #[error("listener.host must not be empty")]
    EmptyHost,

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.upstream.base_url) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => {
            errors.push(ValidationError::InvalidBaseUrl {
                url: config.upstream.base_url.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.upstream.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if HeaderName::from_bytes(config.upstream.api_key_header.as_bytes()).is_err() {
        errors.push(ValidationError::InvalidApiKeyHeader(
            config.upstream.api_key_header.clone(),
        ));
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroValue { field: "upstream.timeout_secs" });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroValue { field: "timeouts.request_secs" });
    }
    // The upstream timeout has to fire before the request layer's.
    let (request_secs, upstream_secs) = (config.timeouts.request_secs, config.upstream.timeout_secs);
    if request_secs > 0 && upstream_secs > 0 && request_secs <= upstream_secs {
        errors.push(ValidationError::RequestTimeoutNotAboveUpstream {
            request_secs,
            upstream_secs,
        });
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroValue { field: "security.max_body_size" });
    }

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = GatewayConfig::default();
        config.upstream.base_url = "not a url".to_string();
        config.upstream.timeout_secs = 0;
        config.upstream.api_key_header = "bad header".to_string();
        config.listener.host = " ".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::EmptyHost));
        assert!(errors.contains(&ValidationError::ZeroValue { field: "upstream.timeout_secs" }));
    }

    #[test]
    fn test_request_timeout_must_exceed_upstream_timeout() {
        let mut config = GatewayConfig::default();
        config.upstream.timeout_secs = 10;
        config.timeouts.request_secs = 10;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::RequestTimeoutNotAboveUpstream {
                request_secs: 10,
                upstream_secs: 10,
            }]
        );

        config.timeouts.request_secs = 5;
        assert_eq!(validate_config(&config).unwrap_err().len(), 1);

        config.timeouts.request_secs = 11;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = GatewayConfig::default();
        config.upstream.base_url = "ftp://manager.example/api2".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = GatewayConfig::default();
        config.observability.metrics_address = "nowhere".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidMetricsAddress("nowhere".to_string())]
        );
    }
}
