// ABOUTME: Merge pass that joins persisted activities with their stream artifacts
// ABOUTME: Produces one canonical record per identified activity and writes them as one file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Merge Pass
//!
//! Per activity the stream artifact is resolved in this order:
//!
//! 1. no artifact: empty channels, warning
//! 2. unreadable or invalid JSON: empty channels, warning
//! 3. records, channels or unrecognized payload: reconciled by
//!    [`StreamPayload`](runstream_core::models::StreamPayload)
//!
//! Only a missing or unreadable activity collection and a failed output write
//! abort the pass.

use runstream_core::errors::AppResult;
use runstream_core::models::{Activity, ActivityId, ProcessedActivity};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::storage::{write_json, DataStore, StreamArtifact};

/// Options of a merge pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Only activities of this category are merged; `None` keeps all
    pub activity_type: Option<String>,
    /// Output file; defaults to the data directory's processed file
    pub output: Option<PathBuf>,
}

/// Counts reported at the end of a merge pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    /// Records written
    pub processed: usize,
    /// Activities of another category
    pub skipped_other_type: usize,
    /// Activities dropped for lacking an identifier
    pub skipped_without_id: usize,
    /// Records whose stream artifact was missing
    pub missing_streams: usize,
    /// Records whose stream artifact was unreadable
    pub malformed_streams: usize,
    /// Where the output was written
    pub output_path: PathBuf,
    /// Output size in bytes
    pub output_bytes: u64,
}

/// Merge one activity with its stream artifact
#[must_use]
pub fn merge_activity(
    id: ActivityId,
    activity: &Activity,
    artifact: &StreamArtifact,
) -> ProcessedActivity {
    match artifact {
        StreamArtifact::Present(payload) => {
            ProcessedActivity::assemble(id, activity, Some(payload))
        }
        StreamArtifact::Missing | StreamArtifact::Malformed(_) => {
            ProcessedActivity::assemble(id, activity, None)
        }
    }
}

/// Run the merge pass over `store`
///
/// # Errors
///
/// Returns an error if the activity collection is missing or unreadable, or
/// the output cannot be written
pub fn run_merge(store: &DataStore, options: &MergeOptions) -> AppResult<MergeSummary> {
    let activities = store.load_activities()?;
    info!(
        count = activities.len(),
        path = %store.activities_path().display(),
        "Loaded activities"
    );

    let mut processed = Vec::with_capacity(activities.len());
    let mut skipped_other_type = 0;
    let mut skipped_without_id = 0;
    let mut missing_streams = 0;
    let mut malformed_streams = 0;

    for activity in &activities {
        if let Some(category) = options.activity_type.as_deref() {
            if !activity.is_category(category) {
                skipped_other_type += 1;
                continue;
            }
        }

        let Some(id) = activity.identifier() else {
            warn!(
                "Activity without an ID ({}), dropping from output",
                activity.name().unwrap_or("unnamed")
            );
            skipped_without_id += 1;
            continue;
        };

        let artifact = store.load_streams(&id);
        match &artifact {
            StreamArtifact::Missing => {
                warn!(activity_id = %id, "No stream data found, using empty channels");
                missing_streams += 1;
            }
            StreamArtifact::Malformed(error) => {
                warn!(
                    activity_id = %id,
                    error = %error,
                    "Unreadable stream data, using empty channels"
                );
                malformed_streams += 1;
            }
            StreamArtifact::Present(_) => {}
        }

        processed.push(merge_activity(id, activity, &artifact));
    }

    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| store.processed_path());
    let output_bytes = write_json(&output_path, &processed)?;

    let summary = MergeSummary {
        processed: processed.len(),
        skipped_other_type,
        skipped_without_id,
        missing_streams,
        malformed_streams,
        output_path,
        output_bytes,
    };

    info!(
        processed = summary.processed,
        skipped_without_id = summary.skipped_without_id,
        missing_streams = summary.missing_streams,
        malformed_streams = summary.malformed_streams,
        path = %summary.output_path.display(),
        "Processed {} activities, output {:.1} KB",
        summary.processed,
        summary.output_bytes as f64 / 1024.0
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use runstream_core::models::StreamPayload;
    use serde_json::json;

    fn activity() -> Activity {
        serde_json::from_value(json!({
            "id": 7,
            "start_date_local": "2025-05-01T07:00:00",
            "elapsed_time": 1800,
            "distance": 5000.0
        }))
        .unwrap()
    }

    #[test]
    fn test_malformed_artifact_yields_empty_channels() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let artifact = StreamArtifact::Malformed(
            runstream_core::errors::StorageError::serialization("streams/7.json", err),
        );

        let id = ActivityId::from_value(&json!(7)).unwrap();
        let record = merge_activity(id, &activity(), &artifact);
        assert!(record.heartrate.is_empty());
        assert!(record.velocity.is_empty());
        assert_eq!(record.duration, Some(json!(1800)));
    }

    #[test]
    fn test_present_artifact_supplies_channels() {
        let artifact = StreamArtifact::Present(StreamPayload::from(json!({
            "heartrate": [120, 121],
            "velocity_smooth": [3.1]
        })));

        let record = merge_activity(ActivityId::from("7"), &activity(), &artifact);
        assert_eq!(record.heartrate, vec![json!(120), json!(121)]);
        assert_eq!(record.velocity, vec![json!(3.1)]);
    }
}
