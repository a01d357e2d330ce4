// ABOUTME: intervals.icu provider implementing the ActivityProvider trait
// ABOUTME: Lists activities by date range and fetches raw stream payloads with Basic auth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use reqwest::{Client, Url};
use runstream_core::constants::{api, auth, providers};
use runstream_core::errors::{ProviderError, ProviderResult};
use runstream_core::models::{Activity, ActivityId, StreamPayload};
use serde_json::Value;
use std::fmt;
use tracing::{info, instrument};

use crate::core::{ActivityProvider, ActivityQuery, ProviderConfig, StreamFetch};
use crate::http_client::shared_client;
use crate::utils::{basic_auth_header, get_json_with_retry, RetryBackoffConfig};

/// API key for intervals.icu
#[derive(Clone)]
pub struct IntervalsCredentials {
    api_key: String,
}

impl IntervalsCredentials {
    /// Wrap an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// `Authorization` header value: Basic `API_KEY:<key>`
    #[must_use]
    pub fn authorization_header(&self) -> String {
        basic_auth_header(auth::BASIC_AUTH_USERNAME, &self.api_key)
    }
}

impl fmt::Debug for IntervalsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalsCredentials")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// intervals.icu provider
pub struct IntervalsProvider {
    config: ProviderConfig,
    authorization: String,
    client: Client,
    retry: RetryBackoffConfig,
}

impl IntervalsProvider {
    /// Create a provider against the public API using the shared client
    #[must_use]
    pub fn new(credentials: &IntervalsCredentials) -> Self {
        Self::with_config(
            ProviderConfig {
                name: providers::INTERVALS.to_owned(),
                api_base_url: api::DEFAULT_BASE_URL.to_owned(),
            },
            credentials,
        )
    }

    /// Create a provider with custom configuration
    #[must_use]
    pub fn with_config(config: ProviderConfig, credentials: &IntervalsCredentials) -> Self {
        Self {
            config,
            authorization: credentials.authorization_header(),
            client: shared_client().clone(),
            retry: RetryBackoffConfig::default(),
        }
    }

    /// Use a specific HTTP client
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Use specific retry settings
    #[must_use]
    pub fn with_retry(mut self, retry: RetryBackoffConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Full list URL including the date range query
    fn activities_url(&self, query: &ActivityQuery) -> ProviderResult<String> {
        let base = self.config.endpoint(&api::activities_path(&query.athlete_id));
        let params = [
            (
                api::OLDEST_PARAM,
                query.oldest.format(api::DATE_FORMAT).to_string(),
            ),
            (
                api::NEWEST_PARAM,
                query.newest.format(api::DATE_FORMAT).to_string(),
            ),
        ];

        Url::parse_with_params(&base, &params)
            .map(String::from)
            .map_err(|e| ProviderError::NetworkError {
                provider: self.config.name.clone(),
                url: base,
                message: format!("invalid request URL: {e}"),
            })
    }

    fn streams_url(&self, activity_id: &ActivityId) -> String {
        let id = activity_id.to_string();
        self.config
            .endpoint(&api::streams_path(&urlencoding::encode(&id)))
    }

    async fn get_json<T>(&self, url: &str) -> ProviderResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        get_json_with_retry(
            &self.client,
            url,
            &self.authorization,
            &self.config.name,
            &self.retry,
        )
        .await
    }
}

#[async_trait]
impl ActivityProvider for IntervalsProvider {
    fn name(&self) -> &'static str {
        providers::INTERVALS
    }

    #[instrument(skip(self))]
    async fn fetch_activities(&self, query: &ActivityQuery) -> ProviderResult<Vec<Activity>> {
        let url = self.activities_url(query)?;
        info!(
            "Fetching activities from {} to {}",
            query.oldest.format(api::DATE_FORMAT),
            query.newest.format(api::DATE_FORMAT)
        );

        let activities: Vec<Activity> = self.get_json(&url).await?;
        let total = activities.len();
        let filtered = query.filter(activities);

        info!(
            total,
            kept = filtered.len(),
            activity_type = %query.activity_type,
            "Found {} activities",
            filtered.len()
        );
        Ok(filtered)
    }

    #[instrument(skip(self))]
    async fn fetch_streams(&self, activity_id: &ActivityId) -> StreamFetch {
        let url = self.streams_url(activity_id);
        self.get_json::<Value>(&url)
            .await
            .map(StreamPayload::from)
            .into()
    }
}
