// ABOUTME: Constants module with domain-separated organization
// ABOUTME: API endpoints, authentication literals, channel names, file layout, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Provider identifiers used in logs and error messages
pub mod providers {
    /// intervals.icu provider name
    pub const INTERVALS: &str = "intervals";
}

/// intervals.icu API endpoints
pub mod api {
    /// Default API base URL
    pub const DEFAULT_BASE_URL: &str = "https://intervals.icu/api/v1";
    /// Athlete id that resolves to the owner of the API key
    pub const SELF_ATHLETE_ID: &str = "0";
    /// Query parameter holding the inclusive lower date bound
    pub const OLDEST_PARAM: &str = "oldest";
    /// Query parameter holding the inclusive upper date bound
    pub const NEWEST_PARAM: &str = "newest";
    /// Calendar date format expected by the list endpoint
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Path of the list-activities endpoint for an athlete
    #[must_use]
    pub fn activities_path(athlete_id: &str) -> String {
        format!("athlete/{athlete_id}/activities")
    }

    /// Path of the per-activity streams endpoint
    #[must_use]
    pub fn streams_path(activity_id: &str) -> String {
        format!("activity/{activity_id}/streams")
    }
}

/// Basic authentication literals
pub mod auth {
    /// Fixed username paired with the caller's API key
    pub const BASIC_AUTH_USERNAME: &str = "API_KEY";
}

/// Stream channel names extracted by the merger
pub mod channels {
    /// Heart rate channel
    pub const HEARTRATE: &str = "heartrate";
    /// Smoothed velocity channel
    pub const VELOCITY_SMOOTH: &str = "velocity_smooth";
    /// Field carrying the channel name in a stream record
    pub const RECORD_TYPE_FIELD: &str = "type";
    /// Field carrying the samples in a stream record
    pub const RECORD_DATA_FIELD: &str = "data";
}

/// Data directory layout
pub mod files {
    /// Filtered activity collection written by the extractor
    pub const ACTIVITIES_FILE: &str = "activities.json";
    /// Directory holding one stream artifact per activity
    pub const STREAMS_DIR: &str = "streams";
    /// Extension of every artifact
    pub const JSON_EXTENSION: &str = "json";
    /// Merged output collection written by the merger
    pub const PROCESSED_FILE: &str = "processed_activities.json";
}

/// Default configuration values
pub mod defaults {
    /// Default data directory
    pub const DATA_DIR: &str = "data";
    /// Default activity category
    pub const ACTIVITY_TYPE: &str = "Run";
    /// Default request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Default connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default number of attempts for rate limited requests
    pub const RETRY_MAX_ATTEMPTS: u32 = 3;
    /// Default base delay for exponential backoff in milliseconds
    pub const RETRY_BASE_DELAY_MS: u64 = 1000;
}

/// Environment variable names
pub mod env_config {
    /// intervals.icu API key
    pub const API_KEY: &str = "INTERVALS_API_KEY";
    /// Athlete (account) identifier
    pub const ATHLETE_ID: &str = "INTERVALS_ATHLETE_ID";
    /// API base URL override
    pub const API_BASE_URL: &str = "INTERVALS_API_BASE_URL";
    /// Data directory
    pub const DATA_DIR: &str = "RUNSTREAM_DATA_DIR";
    /// Activity category filter
    pub const ACTIVITY_TYPE: &str = "RUNSTREAM_ACTIVITY_TYPE";
    /// Request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "RUNSTREAM_HTTP_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "RUNSTREAM_HTTP_CONNECT_TIMEOUT_SECS";
    /// Attempts for rate limited requests
    pub const RETRY_MAX_ATTEMPTS: &str = "RUNSTREAM_RETRY_MAX_ATTEMPTS";
    /// Base delay for exponential backoff
    pub const RETRY_BASE_DELAY_MS: &str = "RUNSTREAM_RETRY_BASE_DELAY_MS";
}

/// Service names used in structured logs
pub mod service_names {
    /// Pipeline service name
    pub const RUNSTREAM: &str = "runstream";
}
