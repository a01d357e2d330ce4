// ABOUTME: Extract command wiring the intervals.icu provider into the extraction pass
// ABOUTME: Builds the shared HTTP client, credentials, and activity query from configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runstream::config::{DateRange, PipelineConfig};
use runstream::extractor::{run_extraction, ExtractionSummary};
use runstream::storage::DataStore;
use runstream_core::errors::AppResult;
use runstream_providers::{
    initialize_shared_client, ActivityQuery, IntervalsCredentials, IntervalsProvider,
};
use tracing::info;

/// Run the extraction pass
pub async fn run(config: &PipelineConfig, range: DateRange) -> AppResult<ExtractionSummary> {
    let credentials = IntervalsCredentials::new(config.require_api_key()?);

    initialize_shared_client(config.http.timeout_secs, config.http.connect_timeout_secs);
    let provider = IntervalsProvider::with_config(config.provider_config(), &credentials)
        .with_retry(config.retry.clone());

    let query = ActivityQuery::new(range.oldest(), range.newest())
        .with_athlete_id(config.api.athlete_id.as_str())
        .with_activity_type(config.activity_type.as_str());

    info!(
        oldest = %range.oldest(),
        newest = %range.newest(),
        athlete_id = %query.athlete_id,
        "Starting extraction"
    );
    run_extraction(&provider, &query, &DataStore::new(&config.data_dir)).await
}
