// ABOUTME: Environment configuration for the extraction and merge passes
// ABOUTME: Reads credentials, data layout, HTTP and retry knobs from env vars with CLI overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based pipeline configuration

use chrono::{Datelike, Local, NaiveDate};
use runstream_core::constants::{api, defaults, env_config, providers};
use runstream_core::errors::ConfigError;
use runstream_providers::{ProviderConfig, RetryBackoffConfig};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Inclusive calendar date range of the activity list request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    oldest: NaiveDate,
    newest: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `oldest > newest`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when the bounds are reversed
    pub fn new(oldest: NaiveDate, newest: NaiveDate) -> Result<Self, ConfigError> {
        if oldest > newest {
            return Err(ConfigError::invalid(
                "--oldest",
                format!("{oldest} is after {newest}"),
            ));
        }
        Ok(Self { oldest, newest })
    }

    /// January 1 through December 31 of `year`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for years chrono cannot represent
    pub fn for_year(year: i32) -> Result<Self, ConfigError> {
        let bound = |month, day| {
            NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| ConfigError::invalid("--year", format!("{year} is out of range")))
        };
        Self::new(bound(1, 1)?, bound(12, 31)?)
    }

    /// The current calendar year in local time
    ///
    /// # Errors
    ///
    /// Propagates `for_year` errors
    pub fn current_year() -> Result<Self, ConfigError> {
        Self::for_year(Local::now().year())
    }

    /// Resolve command line date options
    ///
    /// Explicit bounds win over `year`; a single explicit bound is completed
    /// from `year` (or the current year).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for unparseable dates or reversed bounds
    pub fn resolve(
        year: Option<i32>,
        oldest: Option<&str>,
        newest: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let base = match year {
            Some(year) => Self::for_year(year)?,
            None => Self::current_year()?,
        };
        let oldest = oldest
            .map(|value| parse_date("--oldest", value))
            .transpose()?
            .unwrap_or(base.oldest);
        let newest = newest
            .map(|value| parse_date("--newest", value))
            .transpose()?
            .unwrap_or(base.newest);
        Self::new(oldest, newest)
    }

    /// Inclusive lower bound
    #[must_use]
    pub const fn oldest(&self) -> NaiveDate {
        self.oldest
    }

    /// Inclusive upper bound
    #[must_use]
    pub const fn newest(&self) -> NaiveDate {
        self.newest
    }
}

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
///
/// Returns `ConfigError::Invalid` naming `key` when the value is not a date
pub fn parse_date(key: &str, value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value.trim(), api::DATE_FORMAT)
        .map_err(|e| ConfigError::invalid(key, format!("'{value}' is not a YYYY-MM-DD date: {e}")))
}

/// intervals.icu connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct IntervalsApiConfig {
    /// API key; only the extraction pass requires it
    pub api_key: Option<String>,
    /// Athlete whose activities are listed
    pub athlete_id: String,
    /// API base URL
    pub base_url: String,
}

impl std::fmt::Debug for IntervalsApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalsApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("athlete_id", &self.athlete_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// HTTP client timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Settings shared by the extraction and merge passes
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Remote API settings
    pub api: IntervalsApiConfig,
    /// Root of the persisted intermediate and output files
    pub data_dir: PathBuf,
    /// Selected activity category
    pub activity_type: String,
    /// HTTP timeouts
    pub http: HttpClientConfig,
    /// Rate limit retry behaviour
    pub retry: RetryBackoffConfig,
}

impl PipelineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a numeric setting does not parse
    /// or is zero
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            api: IntervalsApiConfig {
                api_key: env_non_empty(env_config::API_KEY),
                athlete_id: env_or(env_config::ATHLETE_ID, api::SELF_ATHLETE_ID),
                base_url: env_or(env_config::API_BASE_URL, api::DEFAULT_BASE_URL),
            },
            data_dir: PathBuf::from(env_or(env_config::DATA_DIR, defaults::DATA_DIR)),
            activity_type: env_or(env_config::ACTIVITY_TYPE, defaults::ACTIVITY_TYPE),
            http: HttpClientConfig {
                timeout_secs: env_parse(
                    env_config::HTTP_TIMEOUT_SECS,
                    defaults::HTTP_TIMEOUT_SECS,
                )?,
                connect_timeout_secs: env_parse(
                    env_config::HTTP_CONNECT_TIMEOUT_SECS,
                    defaults::HTTP_CONNECT_TIMEOUT_SECS,
                )?,
            },
            retry: RetryBackoffConfig {
                max_attempts: env_parse(
                    env_config::RETRY_MAX_ATTEMPTS,
                    defaults::RETRY_MAX_ATTEMPTS,
                )?,
                base_delay_ms: env_parse(
                    env_config::RETRY_BASE_DELAY_MS,
                    defaults::RETRY_BASE_DELAY_MS,
                )?,
                ..RetryBackoffConfig::default()
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for zero timeouts, zero attempts, or an
    /// empty category, athlete id, or base URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                env_config::HTTP_TIMEOUT_SECS,
                "must be greater than zero",
            ));
        }
        if self.http.connect_timeout_secs == 0 {
            return Err(ConfigError::invalid(
                env_config::HTTP_CONNECT_TIMEOUT_SECS,
                "must be greater than zero",
            ));
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::invalid(
                env_config::RETRY_MAX_ATTEMPTS,
                "must be at least 1",
            ));
        }
        if self.activity_type.trim().is_empty() {
            return Err(ConfigError::invalid(
                env_config::ACTIVITY_TYPE,
                "must not be empty",
            ));
        }
        if self.api.athlete_id.trim().is_empty() {
            return Err(ConfigError::invalid(
                env_config::ATHLETE_ID,
                "must not be empty",
            ));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::invalid(
                env_config::API_BASE_URL,
                "must not be empty",
            ));
        }
        Ok(())
    }

    /// API key required by the extraction pass
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` when no key was configured
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api
            .api_key
            .as_deref()
            .ok_or_else(|| ConfigError::missing(env_config::API_KEY))
    }

    /// Provider settings for the intervals.icu client
    #[must_use]
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            name: providers::INTERVALS.to_owned(),
            api_base_url: self.api.base_url.clone(),
        }
    }

    /// Log a summary of the configuration without secrets
    pub fn log_summary(&self) {
        info!(
            data_dir = %self.data_dir.display(),
            activity_type = %self.activity_type,
            athlete_id = %self.api.athlete_id,
            base_url = %self.api.base_url,
            api_key_configured = self.api.api_key.is_some(),
            http.timeout_secs = self.http.timeout_secs,
            retry.max_attempts = self.retry.max_attempts,
            "Configuration loaded"
        );
    }
}

/// Environment variable, treating unset and blank the same
fn env_non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Get environment variable or default value
fn env_or(key: &str, default: &str) -> String {
    env_non_empty(key).unwrap_or_else(|| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn env_parse<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    env_non_empty(key).map_or(Ok(default), |value| {
        value
            .parse()
            .map_err(|e| ConfigError::invalid(key, format!("'{value}': {e}")))
    })
}
