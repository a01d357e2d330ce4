// ABOUTME: Core provider traits and request/result types for remote activity retrieval
// ABOUTME: Separates the run-critical activity list fetch from the best-effort stream fetch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Provider Contract
//!
//! Providers expose two operations with different failure policies:
//!
//! - `fetch_activities` is **run-critical**: it returns `ProviderResult` and any
//!   error is meant to abort the run, because every later step depends on it.
//! - `fetch_streams` is **best-effort**: it returns a `StreamFetch` so callers
//!   handle the failure arm explicitly and keep going with the next activity.

use async_trait::async_trait;
use chrono::NaiveDate;
use runstream_core::constants::{api, defaults};
use runstream_core::errors::{ProviderError, ProviderResult};
use runstream_core::models::{Activity, ActivityId, StreamPayload};

/// Static provider settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Provider name used in logs and errors
    pub name: String,
    /// API base URL without trailing slash
    pub api_base_url: String,
}

impl ProviderConfig {
    /// Join an endpoint path onto the base URL
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Parameters of an activity list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityQuery {
    /// Account whose activities are listed
    pub athlete_id: String,
    /// Inclusive lower date bound
    pub oldest: NaiveDate,
    /// Inclusive upper date bound
    pub newest: NaiveDate,
    /// Only activities with this category tag are kept
    pub activity_type: String,
}

impl ActivityQuery {
    /// Query for the authenticated athlete's default category
    #[must_use]
    pub fn new(oldest: NaiveDate, newest: NaiveDate) -> Self {
        Self {
            athlete_id: api::SELF_ATHLETE_ID.to_owned(),
            oldest,
            newest,
            activity_type: defaults::ACTIVITY_TYPE.to_owned(),
        }
    }

    /// Set the athlete id
    #[must_use]
    pub fn with_athlete_id(mut self, athlete_id: impl Into<String>) -> Self {
        self.athlete_id = athlete_id.into();
        self
    }

    /// Set the category filter
    #[must_use]
    pub fn with_activity_type(mut self, activity_type: impl Into<String>) -> Self {
        self.activity_type = activity_type.into();
        self
    }

    /// Keep the activities matching the category, in source order
    #[must_use]
    pub fn filter(&self, activities: Vec<Activity>) -> Vec<Activity> {
        activities
            .into_iter()
            .filter(|activity| activity.is_category(&self.activity_type))
            .collect()
    }
}

/// Outcome of a best-effort stream fetch
#[derive(Debug)]
pub enum StreamFetch {
    /// Streams are available
    Available(StreamPayload),
    /// The service answered but had no streams (e.g. manually logged activity)
    Empty,
    /// Fetching failed; callers treat this like `Empty`
    Failed(ProviderError),
}

impl StreamFetch {
    /// Classify a successfully fetched payload
    #[must_use]
    pub fn from_payload(payload: StreamPayload) -> Self {
        if payload.is_empty() {
            Self::Empty
        } else {
            Self::Available(payload)
        }
    }
}

impl From<ProviderResult<StreamPayload>> for StreamFetch {
    fn from(result: ProviderResult<StreamPayload>) -> Self {
        match result {
            Ok(payload) => Self::from_payload(payload),
            Err(error) => Self::Failed(error),
        }
    }
}

/// Remote source of activities and their sensor streams
#[async_trait]
pub trait ActivityProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &'static str;

    /// List activities in the query's date range, filtered to its category
    ///
    /// # Errors
    ///
    /// Any failure is returned; callers abort the run on it.
    async fn fetch_activities(&self, query: &ActivityQuery) -> ProviderResult<Vec<Activity>>;

    /// Fetch the raw stream payload of one activity
    async fn fetch_streams(&self, activity_id: &ActivityId) -> StreamFetch;
}
