// ABOUTME: Structured error types for remote activity provider operations
// ABOUTME: Distinguishes authentication, API status, rate limit, transport, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised while talking to a remote activity provider.
///
/// Every variant carries the provider name and the offending URL so a fatal
/// failure can be reported to the operator without further context.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider rejected the credential (HTTP 401)
    #[error("{provider} authentication failed (401) for {url}: {reason}")]
    AuthenticationFailed {
        /// Provider name
        provider: String,
        /// Requested URL
        url: String,
        /// Human-readable reason
        reason: String,
    },

    /// The provider answered with a non-success status
    #[error("{provider} API request to {url} failed with status {status_code}: {message}")]
    ApiError {
        /// Provider name
        provider: String,
        /// Requested URL
        url: String,
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
        /// Whether retrying may succeed
        retryable: bool,
    },

    /// Rate limit still exceeded after all retry attempts
    #[error("{provider} API rate limit exceeded for {url}; retry after about {retry_after_secs}s")]
    RateLimitExceeded {
        /// Provider name
        provider: String,
        /// Requested URL
        url: String,
        /// Suggested wait before retrying
        retry_after_secs: u64,
    },

    /// Transport-level failure (DNS, connect, timeout, TLS)
    #[error("{provider} request to {url} failed: {message}")]
    NetworkError {
        /// Provider name
        provider: String,
        /// Requested URL
        url: String,
        /// Underlying error message
        message: String,
    },

    /// Response body was not the expected JSON
    #[error("failed to parse {provider} response from {url}: {message}")]
    ParseError {
        /// Provider name
        provider: String,
        /// Requested URL
        url: String,
        /// Parser message
        message: String,
    },
}

impl ProviderError {
    /// Whether the failed request may succeed if attempted again
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ApiError { retryable, .. } => *retryable,
            Self::RateLimitExceeded { .. } | Self::NetworkError { .. } => true,
            Self::AuthenticationFailed { .. } | Self::ParseError { .. } => false,
        }
    }

    /// HTTP status associated with the failure, when there is one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailed { .. } => Some(401),
            Self::ApiError { status_code, .. } => Some(*status_code),
            Self::RateLimitExceeded { .. } => Some(429),
            Self::NetworkError { .. } | Self::ParseError { .. } => None,
        }
    }

    /// URL of the request that failed
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::AuthenticationFailed { url, .. }
            | Self::ApiError { url, .. }
            | Self::RateLimitExceeded { url, .. }
            | Self::NetworkError { url, .. }
            | Self::ParseError { url, .. } => url,
        }
    }
}

/// Result alias for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
