// ABOUTME: Merge command running the merge pass over the configured data directory
// ABOUTME: Re-applies the configured category filter before merging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runstream::config::PipelineConfig;
use runstream::merger::{run_merge, MergeOptions, MergeSummary};
use runstream::storage::DataStore;
use runstream_core::errors::AppResult;
use std::path::PathBuf;

/// Run the merge pass
pub fn run(config: &PipelineConfig, output: Option<PathBuf>) -> AppResult<MergeSummary> {
    let options = MergeOptions {
        activity_type: Some(config.activity_type.clone()),
        output,
    };
    run_merge(&DataStore::new(&config.data_dir), &options)
}
