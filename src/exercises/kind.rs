// ABOUTME: Closed set of supported exercises and the threshold profile each one runs
// ABOUTME: Implements catalog ids, display names, slugs, and profile dispatch per variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use trackg_core::constants::thresholds::{
    bicep_curl, front_raise, hammer_curl, lateral_raise, shoulder_press, tricep_extension,
};
use trackg_core::errors::ExerciseError;
use trackg_core::Joint;

use super::feedback::FormCue;
use super::profile::{AngleJoints, Bound, ExerciseProfile, PhaseBand, TransitionCue};
use super::stage::Stage;

/// Elbow angle of the left arm (shoulder-elbow-wrist)
const LEFT_ELBOW: AngleJoints = AngleJoints {
    from: Joint::LeftShoulder,
    vertex: Joint::LeftElbow,
    to: Joint::LeftWrist,
};

const BICEP_CURL: ExerciseProfile = ExerciseProfile {
    angle: LEFT_ELBOW,
    rest: PhaseBand {
        bound: Bound::Above(bicep_curl::EXTENDED_ABOVE),
        stage: Stage::Down,
        cue: FormCue::ArmExtended,
    },
    active: PhaseBand {
        bound: Bound::Below(bicep_curl::FLEXED_BELOW),
        stage: Stage::Up,
        cue: FormCue::FullFlexion,
    },
    transition: TransitionCue::Windowed {
        min: bicep_curl::FLEXED_BELOW,
        max: bicep_curl::IN_MOTION_MAX,
        inside: FormCue::InMotion,
        outside: FormCue::KeepElbowSteady,
    },
};

const SHOULDER_PRESS: ExerciseProfile = ExerciseProfile {
    angle: LEFT_ELBOW,
    rest: PhaseBand {
        bound: Bound::Below(shoulder_press::RACKED_BELOW),
        stage: Stage::Down,
        cue: FormCue::StartingPosition,
    },
    active: PhaseBand {
        bound: Bound::Above(shoulder_press::LOCKED_OUT_ABOVE),
        stage: Stage::Up,
        cue: FormCue::ArmsExtended,
    },
    transition: TransitionCue::Uniform(FormCue::Pressing),
};

const LATERAL_RAISE: ExerciseProfile = ExerciseProfile {
    angle: AngleJoints {
        from: Joint::LeftHip,
        vertex: Joint::LeftShoulder,
        to: Joint::LeftElbow,
    },
    rest: PhaseBand {
        bound: Bound::Below(lateral_raise::DOWN_BELOW),
        stage: Stage::Down,
        cue: FormCue::ArmsDown,
    },
    active: PhaseBand {
        bound: Bound::Above(lateral_raise::RAISED_ABOVE),
        stage: Stage::Up,
        cue: FormCue::ArmsAtShoulderHeight,
    },
    transition: TransitionCue::Uniform(FormCue::Raising),
};

const FRONT_RAISE: ExerciseProfile = ExerciseProfile {
    angle: AngleJoints {
        from: Joint::LeftHip,
        vertex: Joint::LeftShoulder,
        to: Joint::LeftWrist,
    },
    rest: PhaseBand {
        bound: Bound::Below(front_raise::DOWN_BELOW),
        stage: Stage::Down,
        cue: FormCue::ArmsDownReady,
    },
    active: PhaseBand {
        bound: Bound::Above(front_raise::RAISED_ABOVE),
        stage: Stage::Up,
        cue: FormCue::ArmsForward,
    },
    transition: TransitionCue::Uniform(FormCue::RaisingForward),
};

const HAMMER_CURL: ExerciseProfile = ExerciseProfile {
    angle: LEFT_ELBOW,
    rest: PhaseBand {
        bound: Bound::Above(hammer_curl::EXTENDED_ABOVE),
        stage: Stage::Down,
        cue: FormCue::ArmExtended,
    },
    active: PhaseBand {
        bound: Bound::Below(hammer_curl::FLEXED_BELOW),
        stage: Stage::Up,
        cue: FormCue::FullFlexion,
    },
    transition: TransitionCue::Uniform(FormCue::Contracting),
};

// Extended is the reference stage: a rep completes on the return to lockout.
const TRICEP_EXTENSION: ExerciseProfile = ExerciseProfile {
    angle: LEFT_ELBOW,
    rest: PhaseBand {
        bound: Bound::Above(tricep_extension::EXTENDED_ABOVE),
        stage: Stage::Extended,
        cue: FormCue::FullExtension,
    },
    active: PhaseBand {
        bound: Bound::Below(tricep_extension::FLEXED_BELOW),
        stage: Stage::Flexed,
        cue: FormCue::ArmFlexed,
    },
    transition: TransitionCue::Uniform(FormCue::Extending),
};

/// Supported weight-training exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Dumbbell bicep curl
    #[default]
    BicepCurl,
    /// Overhead shoulder press
    ShoulderPress,
    /// Dumbbell lateral raise
    LateralRaise,
    /// Dumbbell front raise
    FrontRaise,
    /// Neutral-grip hammer curl
    HammerCurl,
    /// Overhead tricep extension
    TricepExtension,
}

impl ExerciseKind {
    /// Every exercise, in catalog order
    pub const ALL: [Self; 6] = [
        Self::BicepCurl,
        Self::ShoulderPress,
        Self::LateralRaise,
        Self::FrontRaise,
        Self::HammerCurl,
        Self::TricepExtension,
    ];

    /// Catalog identifier used by selection commands
    #[must_use]
    pub const fn catalog_id(self) -> &'static str {
        match self {
            Self::BicepCurl => "1",
            Self::ShoulderPress => "2",
            Self::LateralRaise => "3",
            Self::FrontRaise => "4",
            Self::HammerCurl => "5",
            Self::TricepExtension => "6",
        }
    }

    /// Human-readable name for the presentation layer
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BicepCurl => "Bicep Curl",
            Self::ShoulderPress => "Shoulder Press",
            Self::LateralRaise => "Lateral Raise",
            Self::FrontRaise => "Front Raise",
            Self::HammerCurl => "Hammer Curl",
            Self::TricepExtension => "Tricep Extension",
        }
    }

    /// snake_case name, matching the serialized form
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::BicepCurl => "bicep_curl",
            Self::ShoulderPress => "shoulder_press",
            Self::LateralRaise => "lateral_raise",
            Self::FrontRaise => "front_raise",
            Self::HammerCurl => "hammer_curl",
            Self::TricepExtension => "tricep_extension",
        }
    }

    /// Threshold profile driving this exercise's state machine
    #[must_use]
    pub const fn profile(self) -> &'static ExerciseProfile {
        match self {
            Self::BicepCurl => &BICEP_CURL,
            Self::ShoulderPress => &SHOULDER_PRESS,
            Self::LateralRaise => &LATERAL_RAISE,
            Self::FrontRaise => &FRONT_RAISE,
            Self::HammerCurl => &HAMMER_CURL,
            Self::TricepExtension => &TRICEP_EXTENSION,
        }
    }

    /// Resolve a catalog identifier ("1" to "6")
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::InvalidExerciseId` for identifiers outside the catalog
    pub fn from_catalog_id(id: &str) -> Result<Self, ExerciseError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.catalog_id() == id)
            .ok_or_else(|| ExerciseError::invalid_id(id))
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Accepts a catalog id or a slug (case-insensitive)
impl FromStr for ExerciseKind {
    type Err = ExerciseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::from_catalog_id(trimmed).or_else(|err| {
            Self::ALL
                .into_iter()
                .find(|kind| kind.slug().eq_ignore_ascii_case(trimmed))
                .ok_or(err)
        })
    }
}
