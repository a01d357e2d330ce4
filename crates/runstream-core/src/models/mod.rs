// ABOUTME: Core data models for the runstream pipeline
// ABOUTME: Re-exports Activity, ActivityId, StreamPayload, and ProcessedActivity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Activity`: one activity record as returned by the remote service
//! - `StreamPayload`: a per-activity sensor payload in one of its schema variants
//! - `ProcessedActivity`: the merged, schema-normalized output record

mod activity;
mod processed;
mod stream;

pub use activity::{Activity, ActivityId};
pub use processed::ProcessedActivity;
pub use stream::{ChannelData, StreamPayload};
