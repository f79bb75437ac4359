// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for trackg-cli
// ABOUTME: Provides consistent display functions for the catalog and replay reports

use trackg::exercises::CatalogEntry;
use trackg::replay::ReplayReport;

/// Display the exercise catalog as a table
pub fn display_catalog(entries: impl Iterator<Item = CatalogEntry>) {
    println!("\nSupported Exercises");
    println!("{}", "=".repeat(40));
    println!("{:<4} {:<20} SLUG", "ID", "NAME");
    for entry in entries {
        println!("{:<4} {:<20} {}", entry.id, entry.name, entry.kind.slug());
    }
}

/// Display a finished replay
pub fn display_report(report: &ReplayReport) {
    println!("\nReplay Summary");
    println!("{}", "=".repeat(50));
    println!("   Frames: {}", report.frames);
    println!("   No detection: {}", report.no_detections);
    println!("   Total reps: {}", report.total_repetitions());

    println!("\nSEGMENTS:");
    for segment in &report.segments {
        println!("   {}: {} reps", segment.exercise_name, segment.repetitions);
        for (index, seconds) in segment.rep_seconds.iter().enumerate() {
            println!("      rep {}: {seconds:.2}s", index + 1);
        }
    }

    if !report.rejected_selections.is_empty() {
        println!("\nREJECTED SELECTIONS:");
        for rejected in &report.rejected_selections {
            println!("   line {}: {}", rejected.line, rejected.reason);
        }
    }

    let snapshot = &report.final_snapshot;
    println!("\nFINAL STATE:");
    println!("   Exercise: {}", snapshot.exercise_name);
    println!("   Reps: {}", snapshot.repetitions);
    println!(
        "   Stage: {}",
        snapshot.stage.map_or("-", |stage| stage.as_str())
    );
    if !snapshot.feedback.is_empty() {
        println!("   Feedback: {}", snapshot.feedback);
    }
    if let Some(seconds) = snapshot.seconds_since_last_rep {
        println!("   Last rep: {seconds:.2}s");
    }
}
