// ABOUTME: Extraction pass that lists activities and persists their raw stream payloads
// ABOUTME: List failures abort the run; per-activity stream failures are logged and skipped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runstream_core::errors::AppResult;
use runstream_providers::{ActivityProvider, ActivityQuery, StreamFetch};
use tracing::{info, warn};

use crate::storage::DataStore;

/// Counts reported at the end of an extraction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Activities persisted to the collection
    pub activities: usize,
    /// Stream artifacts written
    pub streams_saved: usize,
    /// Activities whose streams were empty
    pub streams_empty: usize,
    /// Activities whose stream fetch failed
    pub streams_failed: usize,
    /// Activities skipped for lacking an identifier
    pub skipped_without_id: usize,
}

/// Run the extraction pass against `provider`, writing into `store`
///
/// # Errors
///
/// Returns an error if listing activities fails or an artifact cannot be
/// written. Stream fetch failures are not errors.
pub async fn run_extraction<P>(
    provider: &P,
    query: &ActivityQuery,
    store: &DataStore,
) -> AppResult<ExtractionSummary>
where
    P: ActivityProvider + ?Sized,
{
    let activities = provider.fetch_activities(query).await?;
    let activities_path = store.save_activities(&activities)?;
    info!(
        path = %activities_path.display(),
        count = activities.len(),
        "Saved activities"
    );

    let mut summary = ExtractionSummary {
        activities: activities.len(),
        ..ExtractionSummary::default()
    };
    let total = activities.len();

    for (index, activity) in activities.iter().enumerate() {
        let position = index + 1;
        let Some(id) = activity.identifier() else {
            warn!(
                "[{position}/{total}] Activity without an ID ({}), skipping streams",
                activity.name().unwrap_or("unnamed")
            );
            summary.skipped_without_id += 1;
            continue;
        };

        info!(
            "[{position}/{total}] {} - {} (ID: {id})",
            activity
                .start_date_local()
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown date"),
            activity.name().unwrap_or("unnamed")
        );

        match provider.fetch_streams(&id).await {
            StreamFetch::Available(payload) => {
                let path = store.save_streams(&id, &payload.into_value())?;
                info!(activity_id = %id, path = %path.display(), "Saved streams");
                summary.streams_saved += 1;
            }
            StreamFetch::Empty => {
                info!(activity_id = %id, "No streams available");
                summary.streams_empty += 1;
            }
            StreamFetch::Failed(error) => {
                warn!(
                    activity_id = %id,
                    url = error.url(),
                    status = ?error.status_code(),
                    retryable = error.is_retryable(),
                    error = %error,
                    "Could not fetch streams"
                );
                summary.streams_failed += 1;
            }
        }
    }

    info!(
        provider = provider.name(),
        activities = summary.activities,
        streams_saved = summary.streams_saved,
        streams_empty = summary.streams_empty,
        streams_failed = summary.streams_failed,
        skipped_without_id = summary.skipped_without_id,
        data_dir = %store.root().display(),
        "Extraction complete"
    );
    Ok(summary)
}
