// ABOUTME: TrackG CLI - command-line front end for the repetition engine
// ABOUTME: Lists the exercise catalog and replays recorded landmark streams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List the exercise catalog
//! trackg-cli exercises
//!
//! # Catalog as an id -> name JSON object
//! trackg-cli exercises --json
//!
//! # Replay a recorded stream starting on Lateral Raise
//! trackg-cli replay session.jsonl --exercise 3
//!
//! # Replay from stdin and print the report as JSON
//! cat session.jsonl | trackg-cli replay - --json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use trackg::config::TrackerConfig;
use trackg::constants::service_names;
use trackg::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "trackg-cli",
    about = "TrackG Exercise Repetition CLI",
    long_about = "Command-line tool for inspecting the exercise catalog and replaying recorded pose landmark streams."
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
    /// List supported exercises
    Exercises {
        /// Print the catalog as a JSON object of id to name
        #[arg(long)]
        json: bool,
    },

    /// Replay a JSON Lines landmark stream through a tracking session
    Replay {
        /// Stream file, or `-` for stdin
        path: PathBuf,

        /// Starting exercise id or slug (defaults to `TRACKG_DEFAULT_EXERCISE`)
        #[arg(long, short = 'e')]
        exercise: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env().with_service_name(service_names::TRACKG_CLI);
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = TrackerConfig::from_env()?;
    debug!(environment = %config.environment, "Configuration ready");

    match cli.command {
        Command::Exercises { json } => commands::exercises::list(json)?,
        Command::Replay {
            path,
            exercise,
            json,
        } => commands::replay::run(&config, &path, exercise.as_deref(), json)?,
    }

    Ok(())
}
