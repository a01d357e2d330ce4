// ABOUTME: Shared utilities for provider implementations
// ABOUTME: Basic auth encoding and GET-with-retry for rate limited JSON endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{ACCEPT, AUTHORIZATION, RETRY_AFTER};
use reqwest::{Client, Response, StatusCode};
use runstream_core::constants::defaults;
use runstream_core::errors::{ProviderError, ProviderResult};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Wait suggested to the operator when the service sends no `Retry-After`
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Configuration for retry behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryBackoffConfig {
    /// Total number of requests before giving up
    pub max_attempts: u32,
    /// Delay before the first retry; doubles on every further retry
    pub base_delay_ms: u64,
    /// HTTP status codes that trigger a retry
    pub retryable_status_codes: Vec<StatusCode>,
}

impl Default for RetryBackoffConfig {
    fn default() -> Self {
        Self {
            max_attempts: defaults::RETRY_MAX_ATTEMPTS,
            base_delay_ms: defaults::RETRY_BASE_DELAY_MS,
            retryable_status_codes: vec![StatusCode::TOO_MANY_REQUESTS],
        }
    }
}

impl RetryBackoffConfig {
    /// Backoff before retry number `retry` (1-based)
    #[must_use]
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2_u64.saturating_pow(retry.saturating_sub(1));
        Duration::from_millis(self.base_delay_ms.saturating_mul(factor))
    }
}

/// Encode a Basic `Authorization` header value for `username:secret`
#[must_use]
pub fn basic_auth_header(username: &str, secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{username}:{secret}"));
    format!("Basic {encoded}")
}

/// GET a JSON document, retrying rate limited responses with exponential backoff
///
/// # Errors
///
/// Returns:
/// - `AuthenticationFailed` on 401
/// - `RateLimitExceeded` when every attempt was rate limited
/// - `ApiError` on any other non-success status
/// - `NetworkError` when the request cannot be sent
/// - `ParseError` when the body is not the expected JSON
pub async fn get_json_with_retry<T>(
    client: &Client,
    url: &str,
    authorization: &str,
    provider_name: &str,
    retry_config: &RetryBackoffConfig,
) -> ProviderResult<T>
where
    T: DeserializeOwned,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        debug!("{provider_name} API request to {url} (attempt {attempt})");

        let response = client
            .get(url)
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_owned(),
                url: url.to_owned(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if retry_config.retryable_status_codes.contains(&status) {
            if attempt >= retry_config.max_attempts {
                let max_attempts = retry_config.max_attempts;
                warn!(
                    "{provider_name} API rate limit exceeded - max attempts ({max_attempts}) reached"
                );
                return Err(ProviderError::RateLimitExceeded {
                    provider: provider_name.to_owned(),
                    url: url.to_owned(),
                    retry_after_secs: retry_after_secs(&response),
                });
            }

            let backoff = retry_config.delay_for(attempt);
            let status_code = status.as_u16();
            let backoff_ms = backoff.as_millis();
            warn!(
                "{provider_name} API rate limit hit ({status_code}) - retry {attempt}/{} after {backoff_ms}ms backoff",
                retry_config.max_attempts
            );
            tokio::time::sleep(backoff).await;
            continue;
        }

        return parse_response(response, url, provider_name).await;
    }
}

/// Map a final response to its JSON body or a classified error
async fn parse_response<T>(response: Response, url: &str, provider_name: &str) -> ProviderResult<T>
where
    T: DeserializeOwned,
{
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED {
        error!("{provider_name} rejected the API key for {url}");
        return Err(ProviderError::AuthenticationFailed {
            provider: provider_name.to_owned(),
            url: url.to_owned(),
            reason: "Authentication failed. Please check your API key.".to_owned(),
        });
    }

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let message = if text.is_empty() {
            status.canonical_reason().unwrap_or("unknown status").to_owned()
        } else {
            text
        };
        error!("{provider_name} API request failed - status: {status}, url: {url}");
        return Err(ProviderError::ApiError {
            provider: provider_name.to_owned(),
            url: url.to_owned(),
            status_code: status.as_u16(),
            message,
            retryable: status.is_server_error(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| ProviderError::NetworkError {
            provider: provider_name.to_owned(),
            url: url.to_owned(),
            message: e.to_string(),
        })?;

    serde_json::from_slice(&body).map_err(|e| ProviderError::ParseError {
        provider: provider_name.to_owned(),
        url: url.to_owned(),
        message: e.to_string(),
    })
}

fn retry_after_secs(response: &Response) -> u64 {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
