// ABOUTME: Mutable tracking session driving the active exercise state machine per frame
// ABOUTME: Owns stage, rep counter, feedback, and rep timing; resets on exercise switch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};
use trackg_core::errors::ExerciseError;
use trackg_core::JointFrame;
use uuid::Uuid;

use super::clock::{Clock, MonotonicClock};
use super::snapshot::SessionSnapshot;
use crate::config::TrackerConfig;
use crate::exercises::{ExerciseKind, FormCue, RepetitionFsm, Stage};

/// What a processed frame did to the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// No usable landmarks; the session is unchanged
    NoDetection,
    /// Stage and feedback were refreshed without completing a repetition
    Updated {
        /// Measured angle in degrees
        angle: f64,
        /// Stage stored for the next frame
        stage: Option<Stage>,
        /// Feedback for this frame
        cue: FormCue,
    },
    /// The frame completed a repetition
    RepCompleted {
        /// Counter value after the increment
        repetitions: u32,
        /// Time since the previous completion (or the timer baseline)
        elapsed: Duration,
    },
}

/// Single-owner state of one workout session
///
/// Created with an explicit starting exercise and clock, mutated once per
/// processed frame by the thread driving the frame loop. Other threads observe
/// it only through [`SessionSnapshot`] copies.
#[derive(Debug)]
pub struct TrackingSession<C: Clock = MonotonicClock> {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    exercise: ExerciseKind,
    stage: Option<Stage>,
    repetitions: u32,
    feedback: Option<FormCue>,
    last_rep_at: Instant,
    last_rep_duration: Option<Duration>,
    clock: C,
}

impl TrackingSession<MonotonicClock> {
    /// Create a session timed by the system monotonic clock
    #[must_use]
    pub fn with_system_clock(exercise: ExerciseKind) -> Self {
        Self::new(exercise, MonotonicClock)
    }
}

impl<C: Clock> TrackingSession<C> {
    /// Create a session with zeroed counters; the rep timer starts now
    #[must_use]
    pub fn new(exercise: ExerciseKind, clock: C) -> Self {
        let session_id = Uuid::new_v4();
        info!(
            session.id = %session_id,
            exercise = exercise.slug(),
            "Tracking session started"
        );
        Self {
            session_id,
            started_at: Utc::now(),
            exercise,
            stage: None,
            repetitions: 0,
            feedback: None,
            last_rep_at: clock.now(),
            last_rep_duration: None,
            clock,
        }
    }

    /// Create a session starting on the configured default exercise
    #[must_use]
    pub fn from_config(config: &TrackerConfig, clock: C) -> Self {
        Self::new(config.default_exercise, clock)
    }

    /// Feed one frame of landmarks through the active exercise
    ///
    /// An empty frame, or one missing a joint the exercise measures, is the
    /// "no detection" case and leaves every field untouched.
    pub fn process_frame(&mut self, joints: &JointFrame) -> FrameOutcome {
        if joints.is_empty() {
            trace!(session.id = %self.session_id, "No landmarks in frame");
            return FrameOutcome::NoDetection;
        }

        let Some(evaluation) = self.exercise.evaluate(joints, self.stage) else {
            trace!(
                session.id = %self.session_id,
                exercise = self.exercise.slug(),
                detected = joints.len(),
                "Frame lacks joints required by exercise"
            );
            return FrameOutcome::NoDetection;
        };

        trace!(
            session.id = %self.session_id,
            angle = evaluation.angle,
            stage = ?evaluation.next_stage,
            "Frame evaluated"
        );
        self.stage = evaluation.next_stage;
        self.feedback = Some(evaluation.cue);

        if !evaluation.rep_completed {
            return FrameOutcome::Updated {
                angle: evaluation.angle,
                stage: evaluation.next_stage,
                cue: evaluation.cue,
            };
        }

        let now = self.clock.now();
        let elapsed = now.saturating_duration_since(self.last_rep_at);
        self.last_rep_at = now;
        self.last_rep_duration = Some(elapsed);
        self.repetitions = self.repetitions.saturating_add(1);

        debug!(
            session.id = %self.session_id,
            exercise = self.exercise.slug(),
            repetitions = self.repetitions,
            rep.seconds = elapsed.as_secs_f64(),
            "Repetition completed"
        );

        FrameOutcome::RepCompleted {
            repetitions: self.repetitions,
            elapsed,
        }
    }

    /// Switch to the exercise with the given catalog id
    ///
    /// Resets the counter, stage, and feedback. The rep timer baseline is
    /// kept, so the first rep of the new exercise reports time since the last
    /// rep of the previous one; call [`Self::reset_timer`] for a clean timer.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::InvalidExerciseId` when `id` is outside the
    /// catalog; the session is left unchanged.
    pub fn select_exercise(&mut self, id: &str) -> Result<ExerciseKind, ExerciseError> {
        match ExerciseKind::from_catalog_id(id) {
            Ok(kind) => {
                self.switch_to(kind);
                Ok(kind)
            }
            Err(err) => {
                warn!(
                    session.id = %self.session_id,
                    exercise.id = id,
                    "Rejected exercise selection"
                );
                Err(err)
            }
        }
    }

    /// Switch to an already-resolved exercise, with the same reset semantics
    /// as [`Self::select_exercise`]
    pub fn switch_to(&mut self, exercise: ExerciseKind) {
        info!(
            session.id = %self.session_id,
            from = self.exercise.slug(),
            to = exercise.slug(),
            discarded_repetitions = self.repetitions,
            "Exercise switched"
        );
        self.exercise = exercise;
        self.repetitions = 0;
        self.stage = None;
        self.feedback = None;
    }

    /// Restart the rep timer baseline at the current instant
    pub fn reset_timer(&mut self) {
        self.last_rep_at = self.clock.now();
        self.last_rep_duration = None;
    }

    /// Immutable copy of the values the presentation layer displays
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.session_id,
            exercise: self.exercise,
            exercise_id: self.exercise.catalog_id(),
            exercise_name: self.exercise.display_name(),
            repetitions: self.repetitions,
            stage: self.stage,
            feedback: self.feedback.map(FormCue::message).unwrap_or_default(),
            feedback_tone: self.feedback.map(FormCue::tone),
            seconds_since_last_rep: self.last_rep_duration.map(|d| d.as_secs_f64()),
            started_at: self.started_at,
            captured_at: Utc::now(),
        }
    }

    /// Session identifier used in logs
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Active exercise
    #[must_use]
    pub const fn exercise(&self) -> ExerciseKind {
        self.exercise
    }

    /// Stage stored after the last evaluated frame
    #[must_use]
    pub const fn stage(&self) -> Option<Stage> {
        self.stage
    }

    /// Repetitions completed since the last exercise switch
    #[must_use]
    pub const fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// Feedback from the last evaluated frame
    #[must_use]
    pub const fn feedback(&self) -> Option<FormCue> {
        self.feedback
    }

    /// Duration between the two most recent completions
    #[must_use]
    pub const fn last_rep_duration(&self) -> Option<Duration> {
        self.last_rep_duration
    }
}
