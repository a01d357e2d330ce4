// ABOUTME: Configuration error types for environment and command-line settings
// ABOUTME: Reports the offending key so operators can fix their setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Invalid or missing configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required setting was not provided
    #[error("missing required setting {key}")]
    Missing {
        /// Environment variable or flag name
        key: String,
    },

    /// A setting was provided but could not be used
    #[error("invalid value for {key}: {reason}")]
    Invalid {
        /// Environment variable or flag name
        key: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    /// Create a "missing" error
    #[must_use]
    pub fn missing(key: impl Into<String>) -> Self {
        Self::Missing { key: key.into() }
    }

    /// Create an "invalid" error
    #[must_use]
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
