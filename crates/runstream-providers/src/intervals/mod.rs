// ABOUTME: intervals.icu provider module
// ABOUTME: Basic-auth client for the activity list and per-activity streams endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod provider;

pub use provider::{IntervalsCredentials, IntervalsProvider};
