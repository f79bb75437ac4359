// ABOUTME: Threshold-band state machine shared by every exercise variant
// ABOUTME: Classifies a joint angle into rest, active, or transition and flags completed reps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Threshold-band repetition state machine
//!
//! Every exercise measures one joint angle and splits its range into three
//! bands. The rest band is checked first, then the active band; anything else
//! is the transition band, which leaves the stage untouched. A repetition is
//! counted when an angle lands in the rest band while the stored stage is the
//! active one, so the count changes on the return to the starting phase and
//! never on entering the active phase.

use serde::Serialize;
use trackg_core::{joint_angle, Joint, JointFrame};

use super::feedback::FormCue;
use super::stage::Stage;

/// One-sided strict bound on an angle, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Matches angles strictly greater than the value
    Above(f64),
    /// Matches angles strictly less than the value
    Below(f64),
}

impl Bound {
    /// Whether the angle falls inside the bound
    #[must_use]
    pub fn contains(self, angle: f64) -> bool {
        match self {
            Self::Above(limit) => angle > limit,
            Self::Below(limit) => angle < limit,
        }
    }
}

/// A band of the angle range tied to a stage and the cue shown while in it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseBand {
    /// Angles belonging to this band
    pub bound: Bound,
    /// Stage recorded when an angle lands in the band
    pub stage: Stage,
    /// Feedback while the angle is in the band
    pub cue: FormCue,
}

/// Feedback for angles between the rest and active bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionCue {
    /// Same cue across the whole transition band
    Uniform(FormCue),
    /// Separate cues inside and outside an inclusive sub-window
    Windowed {
        /// Lowest angle of the window
        min: f64,
        /// Highest angle of the window
        max: f64,
        /// Cue inside the window
        inside: FormCue,
        /// Cue in the rest of the transition band
        outside: FormCue,
    },
}

impl TransitionCue {
    fn cue_for(self, angle: f64) -> FormCue {
        match self {
            Self::Uniform(cue) => cue,
            Self::Windowed {
                min,
                max,
                inside,
                outside,
            } => {
                if (min..=max).contains(&angle) {
                    inside
                } else {
                    outside
                }
            }
        }
    }
}

/// Three joints whose angle is measured, with the vertex in the middle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AngleJoints {
    /// First distal joint
    pub from: Joint,
    /// Joint at which the angle is measured
    pub vertex: Joint,
    /// Second distal joint
    pub to: Joint,
}

impl AngleJoints {
    /// Measure the angle in a frame, if all three joints were detected
    #[must_use]
    pub fn measure(&self, joints: &JointFrame) -> Option<f64> {
        joints
            .triple(self.from, self.vertex, self.to)
            .map(|(a, b, c)| joint_angle(a, b, c))
    }
}

/// Result of evaluating one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Measured angle in degrees
    pub angle: f64,
    /// Whether this frame completed a repetition
    pub rep_completed: bool,
    /// Advisory feedback for the frame
    pub cue: FormCue,
    /// Stage the caller must store for the next frame
    pub next_stage: Option<Stage>,
}

/// Complete threshold configuration for one exercise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExerciseProfile {
    /// Joints forming the measured angle
    pub angle: AngleJoints,
    /// Starting phase; entering it from the active phase completes a rep
    pub rest: PhaseBand,
    /// Working phase
    pub active: PhaseBand,
    /// Feedback between the two
    pub transition: TransitionCue,
}

impl ExerciseProfile {
    /// Evaluate a frame against the stored stage
    ///
    /// Returns `None` when a joint needed for the angle is missing, in which
    /// case the frame must not alter any state.
    #[must_use]
    pub fn evaluate(&self, joints: &JointFrame, stage: Option<Stage>) -> Option<Evaluation> {
        self.angle
            .measure(joints)
            .map(|angle| self.classify(angle, stage))
    }

    /// Classify an already-measured angle
    #[must_use]
    pub fn classify(&self, angle: f64, stage: Option<Stage>) -> Evaluation {
        if self.rest.bound.contains(angle) {
            Evaluation {
                angle,
                rep_completed: stage == Some(self.active.stage),
                cue: self.rest.cue,
                next_stage: Some(self.rest.stage),
            }
        } else if self.active.bound.contains(angle) {
            Evaluation {
                angle,
                rep_completed: false,
                cue: self.active.cue,
                next_stage: Some(self.active.stage),
            }
        } else {
            Evaluation {
                angle,
                rep_completed: false,
                cue: self.transition.cue_for(angle),
                next_stage: stage,
            }
        }
    }
}
