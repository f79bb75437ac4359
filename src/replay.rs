// ABOUTME: Offline replay of recorded landmark streams through a tracking session
// ABOUTME: Parses JSON Lines events, drives a manual clock from capture times, and reports reps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Landmark Stream Replay
//!
//! A replay stream is JSON Lines, one event per line:
//!
//! ```text
//! {"type":"frame","at_ms":0,"joints":{"left_shoulder":{"x":0.3,"y":0.3}}}
//! {"type":"no_detection","at_ms":33}
//! {"type":"select","at_ms":40,"exercise":"3"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. `at_ms` is the capture
//! time since stream start and must never decrease; it drives a
//! [`ManualClock`], so rep timing in a replay is fully deterministic.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::BufRead;
use std::mem;
use std::time::Duration;
use tracing::{debug, info, warn};
use trackg_core::errors::{AppError, AppResult};
use trackg_core::JointFrame;

use crate::exercises::ExerciseKind;
use crate::tracking::{
    FrameOutcome, ManualClock, SessionSnapshot, SnapshotPublisher, TrackingSession,
};

/// One line of a replay stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    /// Landmarks detected in a captured frame
    Frame {
        /// Capture time in milliseconds since stream start
        at_ms: u64,
        /// Detected joints; may be partial
        joints: JointFrame,
    },
    /// A captured frame with no person detected
    NoDetection {
        /// Capture time in milliseconds since stream start
        at_ms: u64,
    },
    /// The user picked an exercise from the catalog
    Select {
        /// Capture time in milliseconds since stream start
        at_ms: u64,
        /// Catalog id as entered
        exercise: String,
    },
}

impl ReplayEvent {
    /// Capture time of the event
    #[must_use]
    pub const fn at_ms(&self) -> u64 {
        match self {
            Self::Frame { at_ms, .. } | Self::NoDetection { at_ms } | Self::Select { at_ms, .. } => {
                *at_ms
            }
        }
    }

    /// Parse a single stream line
    ///
    /// Returns `Ok(None)` for blank and comment lines.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidFormat` naming `line_number` when the line
    /// is not a valid event
    pub fn parse_line(line: &str, line_number: usize) -> AppResult<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        serde_json::from_str(trimmed).map(Some).map_err(|err| {
            AppError::invalid_format(format!("Malformed replay event on line {line_number}: {err}"))
                .with_details(json!({ "line": line_number }))
                .with_source(err)
        })
    }
}

/// Repetitions counted while one exercise was active
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySegment {
    /// Exercise active during the segment
    pub exercise: ExerciseKind,
    /// Display name of the exercise
    pub exercise_name: &'static str,
    /// Repetitions completed before the next switch or end of stream
    pub repetitions: u32,
    /// Seconds reported for each completed repetition, in order
    pub rep_seconds: Vec<f64>,
}

impl ReplaySegment {
    fn new(exercise: ExerciseKind) -> Self {
        Self {
            exercise,
            exercise_name: exercise.display_name(),
            repetitions: 0,
            rep_seconds: Vec::new(),
        }
    }
}

/// A `select` event naming an id outside the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedSelection {
    /// Stream line of the event
    pub line: usize,
    /// Id as it appeared in the stream
    pub exercise: String,
    /// Error message shown to the user
    pub reason: String,
}

/// Summary of a finished replay
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Frame events that reached the session, including partial ones
    pub frames: usize,
    /// Explicit `no_detection` events
    pub no_detections: usize,
    /// One segment per active exercise, in stream order
    pub segments: Vec<ReplaySegment>,
    /// Selections the session refused
    pub rejected_selections: Vec<RejectedSelection>,
    /// Session state after the last event
    pub final_snapshot: SessionSnapshot,
}

impl ReplayReport {
    /// Repetitions summed over every segment
    #[must_use]
    pub fn total_repetitions(&self) -> u32 {
        self.segments
            .iter()
            .fold(0_u32, |total, segment| total.saturating_add(segment.repetitions))
    }
}

/// Replay driver owning a session timed by a manual clock
#[derive(Debug)]
pub struct Replay {
    session: TrackingSession<ManualClock>,
    clock: ManualClock,
    last_at_ms: u64,
    frames: usize,
    no_detections: usize,
    finished_segments: Vec<ReplaySegment>,
    current_segment: ReplaySegment,
    rejected_selections: Vec<RejectedSelection>,
}

impl Replay {
    /// Start a replay on the given exercise at stream time zero
    #[must_use]
    pub fn new(exercise: ExerciseKind) -> Self {
        let clock = ManualClock::new();
        Self {
            session: TrackingSession::new(exercise, clock.clone()),
            clock,
            last_at_ms: 0,
            frames: 0,
            no_detections: 0,
            finished_segments: Vec::new(),
            current_segment: ReplaySegment::new(exercise),
            rejected_selections: Vec::new(),
        }
    }

    /// Session being driven
    #[must_use]
    pub const fn session(&self) -> &TrackingSession<ManualClock> {
        &self.session
    }

    /// Apply one parsed event
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` when the event's timestamp is
    /// earlier than the previous event's
    pub fn apply(&mut self, event: ReplayEvent, line_number: usize) -> AppResult<()> {
        let at_ms = event.at_ms();
        if at_ms < self.last_at_ms {
            return Err(AppError::invalid_input(format!(
                "Timestamp on line {line_number} goes backwards: {at_ms}ms after {}ms",
                self.last_at_ms
            ))
            .with_details(json!({
                "line": line_number,
                "at_ms": at_ms,
                "previous_at_ms": self.last_at_ms,
            })));
        }
        self.last_at_ms = at_ms;
        self.clock.set_elapsed(Duration::from_millis(at_ms));

        match event {
            ReplayEvent::Frame { joints, .. } => {
                self.frames += 1;
                let outcome = self.session.process_frame(&joints);
                self.record(outcome);
            }
            ReplayEvent::NoDetection { .. } => {
                self.no_detections += 1;
                let outcome = self.session.process_frame(&JointFrame::empty());
                self.record(outcome);
            }
            ReplayEvent::Select { exercise, .. } => match self.session.select_exercise(&exercise) {
                Ok(kind) => {
                    let finished = mem::replace(&mut self.current_segment, ReplaySegment::new(kind));
                    self.finished_segments.push(finished);
                }
                Err(err) => {
                    debug!(line = line_number, exercise = %exercise, "Selection rejected during replay");
                    self.rejected_selections.push(RejectedSelection {
                        line: line_number,
                        exercise,
                        reason: err.to_string(),
                    });
                }
            },
        }
        Ok(())
    }

    fn record(&mut self, outcome: FrameOutcome) {
        if let FrameOutcome::RepCompleted {
            repetitions,
            elapsed,
        } = outcome
        {
            self.current_segment.repetitions = repetitions;
            self.current_segment.rep_seconds.push(elapsed.as_secs_f64());
        }
    }

    /// Read every event from `reader`, publishing a snapshot after each one
    /// when a publisher is given
    ///
    /// # Errors
    ///
    /// Returns the first read, parse, or timestamp error; events before it
    /// have already been applied to the session
    pub fn run<R: BufRead>(
        mut self,
        reader: R,
        publisher: Option<&SnapshotPublisher>,
    ) -> AppResult<ReplayReport> {
        info!(
            session.id = %self.session.session_id(),
            exercise = self.session.exercise().slug(),
            "Replay started"
        );

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line?;
            let Some(event) = ReplayEvent::parse_line(&line, line_number)? else {
                continue;
            };
            if let Err(err) = self.apply(event, line_number) {
                warn!(line = line_number, error = %err, "Replay aborted");
                return Err(err);
            }
            if let Some(publisher) = publisher {
                publisher.publish(self.session.snapshot());
            }
        }

        Ok(self.finish())
    }

    /// Close the current segment and build the report
    #[must_use]
    pub fn finish(self) -> ReplayReport {
        let mut segments = self.finished_segments;
        segments.push(self.current_segment);
        let report = ReplayReport {
            frames: self.frames,
            no_detections: self.no_detections,
            segments,
            rejected_selections: self.rejected_selections,
            final_snapshot: self.session.snapshot(),
        };
        info!(
            session.id = %report.final_snapshot.session_id,
            frames = report.frames,
            no_detections = report.no_detections,
            repetitions = report.total_repetitions(),
            rejected = report.rejected_selections.len(),
            "Replay finished"
        );
        report
    }
}

/// Replay a whole stream starting on `exercise`
///
/// # Errors
///
/// Returns an error for unreadable input, a malformed line, or a timestamp
/// that goes backwards
pub fn run_replay<R: BufRead>(reader: R, exercise: ExerciseKind) -> AppResult<ReplayReport> {
    Replay::new(exercise).run(reader, None)
}
