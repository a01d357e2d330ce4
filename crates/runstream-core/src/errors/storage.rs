// ABOUTME: Error types for reading and writing pipeline artifacts in the data directory
// ABOUTME: Wraps filesystem and JSON failures with the path that caused them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures touching persisted artifacts
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Artifact path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Artifact content could not be encoded or decoded
    #[error("invalid JSON in {}: {source}", path.display())]
    Serialization {
        /// Artifact path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// The activities collection has not been extracted yet
    #[error("activities file not found: {}", path.display())]
    MissingActivities {
        /// Expected path of the collection
        path: PathBuf,
    },
}

impl StorageError {
    /// Wrap an I/O error with its path
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a JSON error with its path
    #[must_use]
    pub fn serialization(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Serialization {
            path: path.into(),
            source,
        }
    }
}
