// ABOUTME: Integration tests for the extraction pass against a mock intervals.icu server
// ABOUTME: Verifies persisted artifacts, per-activity stream isolation, and fatal list errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use runstream::errors::ErrorCode;
use runstream::extractor::run_extraction;
use runstream::merger::{run_merge, MergeOptions};
use runstream::storage::{DataStore, StreamArtifact};
use runstream_core::models::ActivityId;
use runstream_providers::{
    ActivityQuery, IntervalsCredentials, IntervalsProvider, ProviderConfig, RetryBackoffConfig,
};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(server: &MockServer) -> IntervalsProvider {
    IntervalsProvider::with_config(
        ProviderConfig {
            name: "intervals".to_owned(),
            api_base_url: server.uri(),
        },
        &IntervalsCredentials::new("test-key"),
    )
    .with_retry(RetryBackoffConfig {
        base_delay_ms: 1,
        ..RetryBackoffConfig::default()
    })
}

fn query() -> ActivityQuery {
    ActivityQuery::new(
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
    )
}

async fn mount_streams(server: &MockServer, id: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/activity/{id}/streams")))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_extraction_persists_collection_and_streams() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/athlete/0/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "i1", "type": "Run", "name": "Intervals", "start_date_local": "2025-02-01T07:00:00", "icu_training_load": 55},
            {"id": "i2", "type": "Ride", "name": "Commute"},
            {"id": "i3", "type": "Run", "name": "Treadmill"},
            {"id": "i4", "type": "Run", "name": "Race"}
        ])))
        .mount(&server)
        .await;

    mount_streams(
        &server,
        "i1",
        ResponseTemplate::new(200).set_body_json(json!([
            {"type": "heartrate", "data": [130, 131]}
        ])),
    )
    .await;
    mount_streams(&server, "i3", ResponseTemplate::new(200).set_body_json(json!([]))).await;
    mount_streams(&server, "i4", ResponseTemplate::new(500)).await;

    let dir = TempDir::new().unwrap();
    let store = DataStore::new(dir.path().join("data"));

    let summary = run_extraction(&provider(&server), &query(), &store)
        .await
        .unwrap();

    assert_eq!(summary.activities, 3);
    assert_eq!(summary.streams_saved, 1);
    assert_eq!(summary.streams_empty, 1);
    assert_eq!(summary.streams_failed, 1);

    let collection: Vec<Value> =
        serde_json::from_str(&fs::read_to_string(store.activities_path()).unwrap()).unwrap();
    let ids: Vec<&Value> = collection.iter().map(|a| &a["id"]).collect();
    assert_eq!(ids, vec![&json!("i1"), &json!("i3"), &json!("i4")]);
    assert_eq!(collection[0]["icu_training_load"], 55);

    assert!(matches!(
        store.load_streams(&ActivityId::from("i1")),
        StreamArtifact::Present(_)
    ));
    assert!(!store.stream_path(&ActivityId::from("i3")).exists());
    assert!(!store.stream_path(&ActivityId::from("i4")).exists());
}

#[tokio::test]
async fn test_activity_without_id_is_kept_but_not_fetched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/athlete/0/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"type": "Run", "name": "Mystery"},
            {"id": "i9", "type": "Run"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/activity/i9/streams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"heartrate": [1]})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = DataStore::new(dir.path());

    let summary = run_extraction(&provider(&server), &query(), &store)
        .await
        .unwrap();

    assert_eq!(summary.activities, 2);
    assert_eq!(summary.skipped_without_id, 1);
    assert_eq!(summary.streams_saved, 1);
}

#[tokio::test]
async fn test_authentication_failure_aborts_without_artifacts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/athlete/0/activities"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = DataStore::new(dir.path());

    let err = run_extraction(&provider(&server), &query(), &store)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalAuthFailed);
    assert!(err.message.contains("/athlete/0/activities"));
    assert!(!store.activities_path().exists());
}

#[tokio::test]
async fn test_unreachable_service_aborts_without_artifacts() {
    let unreachable = IntervalsProvider::with_config(
        ProviderConfig {
            name: "intervals".to_owned(),
            api_base_url: "http://127.0.0.1:1/api/v1".to_owned(),
        },
        &IntervalsCredentials::new("test-key"),
    );

    let dir = TempDir::new().unwrap();
    let store = DataStore::new(dir.path());

    let err = run_extraction(&unreachable, &query(), &store)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("127.0.0.1:1"));
    assert!(!store.activities_path().exists());
    assert!(!store.streams_dir().exists());
}

#[tokio::test]
async fn test_unparseable_stream_body_is_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/athlete/0/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "garbled", "type": "Run"},
            {"id": "fine", "type": "Run"}
        ])))
        .mount(&server)
        .await;
    mount_streams(
        &server,
        "garbled",
        ResponseTemplate::new(200).set_body_string("not json"),
    )
    .await;
    mount_streams(
        &server,
        "fine",
        ResponseTemplate::new(200).set_body_json(json!({"heartrate": [150]})),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let store = DataStore::new(dir.path());

    let summary = run_extraction(&provider(&server), &query(), &store)
        .await
        .unwrap();

    assert_eq!(summary.activities, 2);
    assert_eq!(summary.streams_failed, 1);
    assert_eq!(summary.streams_saved, 1);
    assert!(!store.stream_path(&ActivityId::from("garbled")).exists());
    assert!(matches!(
        store.load_streams(&ActivityId::from("fine")),
        StreamArtifact::Present(_)
    ));
}

#[tokio::test]
async fn test_extract_then_merge() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/athlete/0/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "i1", "type": "Run", "start_date_local": "2025-04-01T06:00:00", "moving_time": 1200, "distance": 4000.0},
            {"id": "i2", "type": "Run", "start_date_local": "2025-04-02T06:00:00", "elapsed_time": 600}
        ])))
        .mount(&server)
        .await;
    mount_streams(
        &server,
        "i1",
        ResponseTemplate::new(200).set_body_json(json!([
            {"type": "heartrate", "data": [120, 125]},
            {"type": "velocity_smooth", "data": [3.0, 3.1]}
        ])),
    )
    .await;
    mount_streams(&server, "i2", ResponseTemplate::new(404)).await;

    let dir = TempDir::new().unwrap();
    let store = DataStore::new(dir.path());

    run_extraction(&provider(&server), &query(), &store)
        .await
        .unwrap();
    let summary = run_merge(
        &store,
        &MergeOptions {
            activity_type: Some("Run".to_owned()),
            output: None,
        },
    )
    .unwrap();

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.missing_streams, 1);

    let output: Value =
        serde_json::from_str(&fs::read_to_string(store.processed_path()).unwrap()).unwrap();
    assert_eq!(
        output,
        json!([
            {
                "id": "i1",
                "datetime": "2025-04-01T06:00:00",
                "duration": 1200,
                "distance": 4000.0,
                "heartrate": [120, 125],
                "velocity_smooth": [3.0, 3.1]
            },
            {
                "id": "i2",
                "datetime": "2025-04-02T06:00:00",
                "duration": 600,
                "distance": null,
                "heartrate": [],
                "velocity_smooth": []
            }
        ])
    );
}
