// ABOUTME: Stream replay command for trackg-cli
// ABOUTME: Opens a file or stdin, runs the replay driver, and prints the report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::info;
use trackg::config::TrackerConfig;
use trackg::errors::{AppError, AppResult};
use trackg::exercises::ExerciseKind;
use trackg::replay::{run_replay, ReplayReport};

use crate::helpers::display::display_report;

/// Replay the stream at `path`, or stdin when `path` is `-`
pub fn run(
    config: &TrackerConfig,
    path: &Path,
    exercise: Option<&str>,
    json: bool,
) -> AppResult<()> {
    let exercise = resolve_exercise(config, exercise)?;
    info!(path = %path.display(), exercise = exercise.slug(), "Replaying landmark stream");

    let report = if path.as_os_str() == "-" {
        run_replay(io::stdin().lock(), exercise)?
    } else {
        let file = File::open(path).map_err(|err| {
            AppError::not_found(format!("replay stream {}", path.display())).with_source(err)
        })?;
        run_replay(BufReader::new(file), exercise)?
    };

    print_report(&report, json)
}

fn resolve_exercise(config: &TrackerConfig, requested: Option<&str>) -> AppResult<ExerciseKind> {
    requested.map_or(Ok(config.default_exercise), |value| {
        value.parse::<ExerciseKind>().map_err(AppError::from)
    })
}

fn print_report(report: &ReplayReport, json: bool) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        display_report(report);
    }
    Ok(())
}
