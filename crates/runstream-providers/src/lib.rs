// ABOUTME: Remote activity provider implementations for the runstream pipeline
// ABOUTME: Provider trait, intervals.icu client, shared HTTP client, and retry utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Remote activity providers and their shared plumbing.

// Re-export runstream-core modules so provider code can use `crate::errors` etc.
pub use runstream_core::constants;
pub use runstream_core::errors;
pub use runstream_core::models;

/// Core provider traits and request/result types
pub mod core;
/// Shared HTTP client for provider API calls
pub mod http_client;
/// intervals.icu provider
pub mod intervals;
/// Provider utility functions (auth encoding, retry)
pub mod utils;

pub use core::{ActivityProvider, ActivityQuery, ProviderConfig, StreamFetch};
pub use http_client::{initialize_shared_client, shared_client};
pub use intervals::{IntervalsCredentials, IntervalsProvider};
pub use runstream_core::errors::{ProviderError, ProviderResult};
pub use utils::{basic_auth_header, get_json_with_retry, RetryBackoffConfig};
