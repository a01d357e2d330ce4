// ABOUTME: Runstream CLI - extracts intervals.icu activities and merges their sensor streams
// ABOUTME: Subcommands run the extraction pass, the merge pass, or both in sequence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Download this year's runs and their streams into ./data
//! INTERVALS_API_KEY=... runstream extract
//!
//! # Download a specific year for another athlete
//! runstream extract --api-key KEY --athlete-id i12345 --year 2024
//!
//! # Merge the downloaded files into data/processed_activities.json
//! runstream merge
//!
//! # Both passes with an explicit date range
//! runstream sync --oldest 2025-03-01 --newest 2025-03-31
//! ```

mod commands;

use clap::{Parser, Subcommand};
use runstream::logging::LoggingConfig;
use runstream_core::errors::AppResult;
use std::process::ExitCode;
use tracing::{error, info};

use commands::{CommonArgs, OutputArgs, SourceArgs};

#[derive(Parser)]
#[command(
    name = "runstream",
    version,
    about = "Extract intervals.icu activities and merge their sensor streams",
    long_about = "Downloads activities and raw sensor streams from intervals.icu into a data directory, then merges heart rate and velocity channels into one record per activity."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Download activities and their streams
    Extract {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Merge downloaded activities with their streams
    Merge {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Extract, then merge
    Sync {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> AppResult<()> {
    match command {
        Command::Extract { common, source } => {
            let config = common.load_config(
                source.api_key.as_deref(),
                source.athlete_id.as_deref(),
            )?;
            commands::extract::run(&config, source.date_range()?).await?;
        }
        Command::Merge { common, output } => {
            let config = common.load_config(None, None)?;
            commands::merge::run(&config, output.output)?;
        }
        Command::Sync {
            common,
            source,
            output,
        } => {
            let config = common.load_config(
                source.api_key.as_deref(),
                source.athlete_id.as_deref(),
            )?;
            commands::extract::run(&config, source.date_range()?).await?;
            info!("Extraction finished, merging");
            commands::merge::run(&config, output.output)?;
        }
    }
    Ok(())
}
