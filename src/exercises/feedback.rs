// ABOUTME: Advisory form cues produced by the exercise state machines each frame
// ABOUTME: Cues carry a display message and a tone; they never influence rep counting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the presentation layer should emphasise a cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTone {
    /// Confirms a well-executed phase (rendered as success)
    Positive,
    /// Describes motion in progress or asks for a correction
    Guidance,
}

/// Textual feedback for the current phase of the movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormCue {
    /// Curl arm fully straightened
    ArmExtended,
    /// Curl arm fully bent
    FullFlexion,
    /// Curl arm moving through the controlled window
    InMotion,
    /// Curl arm outside the controlled window
    KeepElbowSteady,
    /// Press racked at shoulder height
    StartingPosition,
    /// Press locked out overhead
    ArmsExtended,
    /// Press between rack and lockout
    Pressing,
    /// Lateral raise arms at the sides
    ArmsDown,
    /// Lateral raise arms level with the shoulders
    ArmsAtShoulderHeight,
    /// Lateral raise in progress
    Raising,
    /// Front raise arms resting in front of the thighs
    ArmsDownReady,
    /// Front raise arms level in front of the body
    ArmsForward,
    /// Front raise in progress
    RaisingForward,
    /// Hammer curl in progress
    Contracting,
    /// Tricep extension arm bent behind the head
    ArmFlexed,
    /// Tricep extension arm locked out
    FullExtension,
    /// Tricep extension in progress
    Extending,
}

impl FormCue {
    /// Message shown to the athlete
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ArmExtended => "Arm extended - good!",
            Self::FullFlexion => "Full flexion - perfect!",
            Self::InMotion => "In motion...",
            Self::KeepElbowSteady => "Keep your elbow steady",
            Self::StartingPosition => "Starting position - ready!",
            Self::ArmsExtended => "Arms extended - excellent!",
            Self::Pressing => "Pressing...",
            Self::ArmsDown => "Arms down - good!",
            Self::ArmsAtShoulderHeight => "Arms at shoulder height - perfect!",
            Self::Raising => "Raising...",
            Self::ArmsDownReady => "Arms down - ready!",
            Self::ArmsForward => "Arms forward - excellent!",
            Self::RaisingForward => "Raising forward...",
            Self::Contracting => "Contracting...",
            Self::ArmFlexed => "Arm flexed - good!",
            Self::FullExtension => "Full extension - excellent!",
            Self::Extending => "Extending...",
        }
    }

    /// Emphasis for the presentation layer
    #[must_use]
    pub const fn tone(self) -> FeedbackTone {
        match self {
            Self::ArmExtended
            | Self::FullFlexion
            | Self::ArmsExtended
            | Self::ArmsDown
            | Self::ArmsAtShoulderHeight
            | Self::ArmsForward
            | Self::ArmFlexed
            | Self::FullExtension => FeedbackTone::Positive,
            Self::InMotion
            | Self::KeepElbowSteady
            | Self::StartingPosition
            | Self::Pressing
            | Self::Raising
            | Self::ArmsDownReady
            | Self::RaisingForward
            | Self::Contracting
            | Self::Extending => FeedbackTone::Guidance,
        }
    }
}

impl fmt::Display for FormCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_cues_are_guidance() {
        // "ready" confirms a position but is not praise
        assert_eq!(FormCue::StartingPosition.tone(), FeedbackTone::Guidance);
        assert_eq!(FormCue::ArmsDownReady.tone(), FeedbackTone::Guidance);
        assert_eq!(FormCue::FullFlexion.tone(), FeedbackTone::Positive);
    }

    #[test]
    fn test_display_uses_message() {
        assert_eq!(FormCue::Pressing.to_string(), "Pressing...");
    }
}
