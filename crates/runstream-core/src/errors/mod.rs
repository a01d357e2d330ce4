// ABOUTME: Unified error handling for the runstream pipeline
// ABOUTME: Standard error codes plus conversions from provider, storage, and config errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Domain errors (`ProviderError`, `StorageError`, `ConfigError`) are raised
//! where they happen and converted into `AppError` at the pass boundary, so
//! binaries only deal with one error type.

/// Configuration errors
pub mod config;
/// Remote provider errors
pub mod provider;
/// Artifact storage errors
pub mod storage;

pub use config::ConfigError;
pub use provider::{ProviderError, ProviderResult};
pub use storage::StorageError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Remote service rejected the credential
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed,
    /// Remote service returned an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError,
    /// Remote service kept rate limiting us
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited,
    /// Required configuration is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing,
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// Reading or writing an artifact failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError,
    /// Artifact content could not be encoded or decoded
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Anything else
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ExternalAuthFailed => "Authentication with external service failed",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalRateLimited => "External service rate limit exceeded",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the pipeline
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let code = match &error {
            ProviderError::AuthenticationFailed { .. } => ErrorCode::ExternalAuthFailed,
            ProviderError::RateLimitExceeded { .. } => ErrorCode::ExternalRateLimited,
            ProviderError::ApiError { .. }
            | ProviderError::NetworkError { .. }
            | ProviderError::ParseError { .. } => ErrorCode::ExternalServiceError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        let code = match &error {
            StorageError::Serialization { .. } => ErrorCode::SerializationError,
            StorageError::Io { .. } | StorageError::MissingActivities { .. } => {
                ErrorCode::StorageError
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::Missing { .. } => ErrorCode::ConfigMissing,
            ConfigError::Invalid { .. } => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_provider_error_conversion() {
        let error = AppError::from(ProviderError::AuthenticationFailed {
            provider: "intervals".to_owned(),
            url: "https://intervals.icu/api/v1/athlete/0/activities".to_owned(),
            reason: "bad key".to_owned(),
        });

        assert_eq!(error.code, ErrorCode::ExternalAuthFailed);
        assert!(error.message.contains("athlete/0/activities"));
        assert!(error.source.is_some());
    }

    #[test]
    fn test_storage_error_conversion() {
        let error = AppError::from(StorageError::MissingActivities {
            path: PathBuf::from("data/activities.json"),
        });

        assert_eq!(error.code, ErrorCode::StorageError);
        assert!(error.to_string().starts_with("Storage operation failed"));
    }

    #[test]
    fn test_config_error_conversion() {
        let error = AppError::from(ConfigError::missing("INTERVALS_API_KEY"));
        assert_eq!(error.code, ErrorCode::ConfigMissing);
        assert!(error.message.contains("INTERVALS_API_KEY"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ExternalRateLimited).unwrap();
        assert_eq!(json, "\"EXTERNAL_RATE_LIMITED\"");
    }
}
