// ABOUTME: Exercise state machines turning joint angles into debounced repetition counts
// ABOUTME: Exposes the common evaluation contract, the six variants, and the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Exercise State Machines
//!
//! Each supported exercise is an [`ExerciseKind`] variant backed by a static
//! [`ExerciseProfile`]. Evaluation is pure: the caller passes the joints and
//! the stage it stored after the previous frame, and receives the stage to
//! store next. Nothing here holds state between calls.

/// Immutable exercise catalog
pub mod catalog;

/// Advisory feedback cues
pub mod feedback;

/// Supported exercise variants and their profiles
pub mod kind;

/// Threshold-band state machine
pub mod profile;

/// Repetition phase tags
pub mod stage;

pub use catalog::{CatalogEntry, ExerciseCatalog};
pub use feedback::{FeedbackTone, FormCue};
pub use kind::ExerciseKind;
pub use profile::{AngleJoints, Bound, Evaluation, ExerciseProfile, PhaseBand, TransitionCue};
pub use stage::Stage;

use trackg_core::JointFrame;

/// Common contract of every repetition state machine
pub trait RepetitionFsm {
    /// Evaluate one frame given the stage stored after the previous one
    ///
    /// Returns `None` when the frame lacks a joint the machine needs; the
    /// caller must then leave its state untouched.
    fn evaluate(&self, joints: &JointFrame, stage: Option<Stage>) -> Option<Evaluation>;
}

impl RepetitionFsm for ExerciseProfile {
    fn evaluate(&self, joints: &JointFrame, stage: Option<Stage>) -> Option<Evaluation> {
        Self::evaluate(self, joints, stage)
    }
}

impl RepetitionFsm for ExerciseKind {
    fn evaluate(&self, joints: &JointFrame, stage: Option<Stage>) -> Option<Evaluation> {
        self.profile().evaluate(joints, stage)
    }
}
