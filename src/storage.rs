// ABOUTME: Data directory layout and JSON artifact persistence for both pipeline passes
// ABOUTME: Writes complete pretty-printed files and classifies stream artifacts on read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Directory
//!
//! ```text
//! <root>/activities.json            filtered activity collection
//! <root>/streams/<id>.json          raw stream payload per activity
//! <root>/processed_activities.json  merged output
//! ```
//!
//! Every write replaces the whole file.

use runstream_core::constants::files;
use runstream_core::errors::StorageError;
use runstream_core::models::{Activity, ActivityId, StreamPayload};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of looking up an activity's stream artifact
#[derive(Debug)]
pub enum StreamArtifact {
    /// No artifact was written for this activity
    Missing,
    /// The artifact exists but could not be read or parsed
    Malformed(StorageError),
    /// Parsed payload
    Present(StreamPayload),
}

/// Handle on a data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    /// Use `root` as the data directory; nothing is created until a write
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Data directory root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the filtered activity collection
    #[must_use]
    pub fn activities_path(&self) -> PathBuf {
        self.root.join(files::ACTIVITIES_FILE)
    }

    /// Directory holding stream artifacts
    #[must_use]
    pub fn streams_dir(&self) -> PathBuf {
        self.root.join(files::STREAMS_DIR)
    }

    /// Path of the stream artifact for `id`
    ///
    /// Path separators in the identifier are replaced so the artifact always
    /// lands directly inside the streams directory.
    #[must_use]
    pub fn stream_path(&self, id: &ActivityId) -> PathBuf {
        let file_stem: String = id
            .to_string()
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        self.streams_dir()
            .join(format!("{file_stem}.{}", files::JSON_EXTENSION))
    }

    /// Default path of the merged output
    #[must_use]
    pub fn processed_path(&self) -> PathBuf {
        self.root.join(files::PROCESSED_FILE)
    }

    /// Persist the filtered activity collection
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory or file cannot be written
    pub fn save_activities(&self, activities: &[Activity]) -> Result<PathBuf, StorageError> {
        let path = self.activities_path();
        write_json(&path, activities)?;
        Ok(path)
    }

    /// Load the activity collection written by the extraction pass
    ///
    /// # Errors
    ///
    /// Returns `MissingActivities` when the file does not exist, `Io` when it
    /// cannot be read and `Serialization` when it is not an activity array
    pub fn load_activities(&self) -> Result<Vec<Activity>, StorageError> {
        let path = self.activities_path();
        let content = match fs::read(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::MissingActivities { path });
            }
            Err(e) => return Err(StorageError::io(path, e)),
        };
        serde_json::from_slice(&content).map_err(|e| StorageError::serialization(path, e))
    }

    /// Persist a raw stream payload for `id`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory or file cannot be written
    pub fn save_streams(&self, id: &ActivityId, payload: &Value) -> Result<PathBuf, StorageError> {
        let path = self.stream_path(id);
        write_json(&path, payload)?;
        Ok(path)
    }

    /// Look up and parse the stream artifact for `id`
    #[must_use]
    pub fn load_streams(&self, id: &ActivityId) -> StreamArtifact {
        let path = self.stream_path(id);
        let content = match fs::read(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return StreamArtifact::Missing,
            Err(e) => return StreamArtifact::Malformed(StorageError::io(path, e)),
        };
        match serde_json::from_slice::<Value>(&content) {
            Ok(value) => StreamArtifact::Present(StreamPayload::from(value)),
            Err(e) => StreamArtifact::Malformed(StorageError::serialization(path, e)),
        }
    }
}

/// Serialize `value` as pretty JSON and replace `path` with it
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns `StorageError` if encoding fails or the file cannot be written
pub fn write_json<T>(path: &Path, value: &T) -> Result<u64, StorageError>
where
    T: Serialize + ?Sized,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }
    let bytes = serde_json::to_vec_pretty(value).map_err(|e| StorageError::serialization(path, e))?;
    fs::write(path, &bytes).map_err(|e| StorageError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "Wrote artifact");
    Ok(bytes.len() as u64)
}
