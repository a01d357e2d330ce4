// ABOUTME: Main library entry point for the runstream activity pipeline
// ABOUTME: Extraction and merge passes, data directory storage, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Runstream
//!
//! Retrieves activities and their sensor streams from intervals.icu and merges
//! them into one record per activity for visualization.
//!
//! The pipeline runs as two independent passes over a data directory:
//!
//! - **Extraction** lists activities in a date range, keeps one category, and
//!   persists the collection plus one raw stream payload per activity.
//! - **Merge** reads those files back, reconciles the two stream payload
//!   shapes, and writes `processed_activities.json`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use runstream::merger::{run_merge, MergeOptions};
//! use runstream::storage::DataStore;
//! use runstream_core::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let summary = run_merge(
//!         &DataStore::new("data"),
//!         &MergeOptions {
//!             activity_type: Some("Run".to_owned()),
//!             output: None,
//!         },
//!     )?;
//!     println!("merged {} activities", summary.processed);
//!     Ok(())
//! }
//! ```

/// Environment and command line configuration
pub mod config;

/// Extraction pass
pub mod extractor;

/// Structured logging setup
pub mod logging;

/// Merge pass
pub mod merger;

/// Data directory persistence
pub mod storage;

pub use runstream_core::{constants, errors, models};
