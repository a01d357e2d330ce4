// ABOUTME: Core types and constants for the runstream activity pipeline
// ABOUTME: Foundation crate with error handling, activity/stream models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Runstream Core
//!
//! Foundation crate providing shared types and constants for the runstream
//! extraction and merge passes. Both the provider crate and the pipeline
//! crate depend on it, so it is kept free of I/O.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the provider/storage/config error enums
//! - **constants**: API endpoints, channel names, file layout, and defaults
//! - **models**: `Activity`, `StreamPayload`, and the merged `ProcessedActivity`

/// Unified error handling with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Activity, stream payload, and processed activity models
pub mod models;
