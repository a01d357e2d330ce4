// ABOUTME: Configuration module for the runstream pipeline
// ABOUTME: Re-exports environment-driven settings and date range resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment and command line configuration
pub mod environment;

pub use environment::{
    parse_date, DateRange, HttpClientConfig, IntervalsApiConfig, PipelineConfig,
};
