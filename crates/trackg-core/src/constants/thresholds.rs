// ABOUTME: Joint angle thresholds delimiting rest, active, and transition phases
// ABOUTME: One submodule per exercise; all bounds are strict comparisons in degrees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Bicep curl, measured at the elbow (shoulder-elbow-wrist)
pub mod bicep_curl {
    /// Arm counts as extended above this angle
    pub const EXTENDED_ABOVE: f64 = 160.0;
    /// Arm counts as fully flexed below this angle
    pub const FLEXED_BELOW: f64 = 40.0;
    /// Upper edge of the controlled-motion window (lower edge is `FLEXED_BELOW`)
    pub const IN_MOTION_MAX: f64 = 90.0;
}

/// Shoulder press, measured at the elbow (shoulder-elbow-wrist)
pub mod shoulder_press {
    /// Starting (racked) position below this angle
    pub const RACKED_BELOW: f64 = 90.0;
    /// Arms locked out overhead above this angle
    pub const LOCKED_OUT_ABOVE: f64 = 160.0;
}

/// Lateral raise, measured at the shoulder (hip-shoulder-elbow)
pub mod lateral_raise {
    /// Arms resting at the sides below this angle
    pub const DOWN_BELOW: f64 = 30.0;
    /// Arms at shoulder height above this angle
    pub const RAISED_ABOVE: f64 = 80.0;
}

/// Front raise, measured at the shoulder (hip-shoulder-wrist)
pub mod front_raise {
    /// Arms resting in front of the thighs below this angle
    pub const DOWN_BELOW: f64 = 30.0;
    /// Arms raised forward above this angle
    pub const RAISED_ABOVE: f64 = 80.0;
}

/// Hammer curl, measured at the elbow (shoulder-elbow-wrist)
pub mod hammer_curl {
    /// Arm counts as extended above this angle
    pub const EXTENDED_ABOVE: f64 = 160.0;
    /// Arm counts as fully flexed below this angle
    pub const FLEXED_BELOW: f64 = 45.0;
}

/// Tricep extension, measured at the elbow (shoulder-elbow-wrist)
pub mod tricep_extension {
    /// Arm locked out above this angle
    pub const EXTENDED_ABOVE: f64 = 160.0;
    /// Arm bent behind the head below this angle
    pub const FLEXED_BELOW: f64 = 60.0;
}
