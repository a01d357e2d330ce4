// ABOUTME: Tests for environment-driven pipeline configuration
// ABOUTME: Runs serially because every case mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runstream::config::PipelineConfig;
use runstream_core::errors::ConfigError;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const VARS: [&str; 9] = [
    "INTERVALS_API_KEY",
    "INTERVALS_ATHLETE_ID",
    "INTERVALS_API_BASE_URL",
    "RUNSTREAM_DATA_DIR",
    "RUNSTREAM_ACTIVITY_TYPE",
    "RUNSTREAM_HTTP_TIMEOUT_SECS",
    "RUNSTREAM_HTTP_CONNECT_TIMEOUT_SECS",
    "RUNSTREAM_RETRY_MAX_ATTEMPTS",
    "RUNSTREAM_RETRY_BASE_DELAY_MS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();

    let config = PipelineConfig::from_env().unwrap();

    assert_eq!(config.api.api_key, None);
    assert_eq!(config.api.athlete_id, "0");
    assert_eq!(config.api.base_url, "https://intervals.icu/api/v1");
    assert_eq!(config.data_dir, PathBuf::from("data"));
    assert_eq!(config.activity_type, "Run");
    assert_eq!(config.http.timeout_secs, 30);
    assert_eq!(config.http.connect_timeout_secs, 10);
    assert_eq!(config.retry.max_attempts, 3);
    assert_eq!(config.retry.base_delay_ms, 1000);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("INTERVALS_API_KEY", "abc123");
    env::set_var("INTERVALS_ATHLETE_ID", "i4242");
    env::set_var("RUNSTREAM_DATA_DIR", "/tmp/runstream");
    env::set_var("RUNSTREAM_ACTIVITY_TYPE", "Ride");
    env::set_var("RUNSTREAM_RETRY_MAX_ATTEMPTS", "5");

    let config = PipelineConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.require_api_key().unwrap(), "abc123");
    assert_eq!(config.api.athlete_id, "i4242");
    assert_eq!(config.data_dir, PathBuf::from("/tmp/runstream"));
    assert_eq!(config.activity_type, "Ride");
    assert_eq!(config.retry.max_attempts, 5);
}

#[test]
#[serial]
fn test_blank_api_key_counts_as_missing() {
    clear_env();
    env::set_var("INTERVALS_API_KEY", "   ");

    let config = PipelineConfig::from_env().unwrap();
    clear_env();

    match config.require_api_key().unwrap_err() {
        ConfigError::Missing { key } => assert_eq!(key, "INTERVALS_API_KEY"),
        other @ ConfigError::Invalid { .. } => panic!("unexpected error: {other:?}"),
    }
}

#[test]
#[serial]
fn test_unparseable_number_is_invalid() {
    clear_env();
    env::set_var("RUNSTREAM_HTTP_TIMEOUT_SECS", "thirty");

    let err = PipelineConfig::from_env().unwrap_err();
    clear_env();

    match err {
        ConfigError::Invalid { key, reason } => {
            assert_eq!(key, "RUNSTREAM_HTTP_TIMEOUT_SECS");
            assert!(reason.contains("thirty"));
        }
        other @ ConfigError::Missing { .. } => panic!("unexpected error: {other:?}"),
    }
}

#[test]
#[serial]
fn test_zero_attempts_is_rejected() {
    clear_env();
    env::set_var("RUNSTREAM_RETRY_MAX_ATTEMPTS", "0");

    let err = PipelineConfig::from_env().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
#[serial]
fn test_provider_config_uses_base_url() {
    clear_env();
    env::set_var("INTERVALS_API_BASE_URL", "http://localhost:8080/api/v1");

    let config = PipelineConfig::from_env().unwrap();
    clear_env();

    let provider = config.provider_config();
    assert_eq!(provider.name, "intervals");
    assert_eq!(
        provider.endpoint("athlete/0/activities"),
        "http://localhost:8080/api/v1/athlete/0/activities"
    );
}
