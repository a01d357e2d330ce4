// ABOUTME: Shared argument groups and command modules for the runstream CLI
// ABOUTME: Applies command line overrides on top of the environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod extract;
pub mod merge;

use clap::Args;
use runstream::config::{DateRange, PipelineConfig};
use runstream_core::errors::AppResult;
use std::path::PathBuf;

/// Options every pass accepts
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Data directory (overrides `RUNSTREAM_DATA_DIR`)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Activity category to keep (overrides `RUNSTREAM_ACTIVITY_TYPE`)
    #[arg(long)]
    pub activity_type: Option<String>,
}

impl CommonArgs {
    /// Environment configuration with command line overrides applied
    pub fn load_config(
        &self,
        api_key: Option<&str>,
        athlete_id: Option<&str>,
    ) -> AppResult<PipelineConfig> {
        let mut config = PipelineConfig::from_env()?;

        if let Some(data_dir) = &self.data_dir {
            config.data_dir.clone_from(data_dir);
        }
        if let Some(activity_type) = &self.activity_type {
            config.activity_type.clone_from(activity_type);
        }
        if let Some(api_key) = api_key {
            config.api.api_key = Some(api_key.to_owned());
        }
        if let Some(athlete_id) = athlete_id {
            athlete_id.clone_into(&mut config.api.athlete_id);
        }

        config.validate()?;
        config.log_summary();
        Ok(config)
    }
}

/// Options of the extraction pass
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// intervals.icu API key (overrides `INTERVALS_API_KEY`)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Athlete id, `0` for the key's owner (overrides `INTERVALS_ATHLETE_ID`)
    #[arg(long)]
    pub athlete_id: Option<String>,

    /// Calendar year to download (defaults to the current year)
    #[arg(long, conflicts_with_all = ["oldest", "newest"])]
    pub year: Option<i32>,

    /// First day to download, YYYY-MM-DD
    #[arg(long)]
    pub oldest: Option<String>,

    /// Last day to download, YYYY-MM-DD
    #[arg(long)]
    pub newest: Option<String>,
}

impl SourceArgs {
    /// Resolve the requested date range
    pub fn date_range(&self) -> AppResult<DateRange> {
        Ok(DateRange::resolve(
            self.year,
            self.oldest.as_deref(),
            self.newest.as_deref(),
        )?)
    }
}

/// Options of the merge pass
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output file (defaults to `<data-dir>/processed_activities.json`)
    #[arg(long)]
    pub output: Option<PathBuf>,
}
