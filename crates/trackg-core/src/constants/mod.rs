// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for phase thresholds, catalog ids, and environment names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Phase thresholds live in [`thresholds`], one submodule per
//! exercise.

/// Joint angle thresholds (degrees) that delimit exercise phases
pub mod thresholds;

/// Fixed exercise catalog identifiers
pub mod catalog {
    /// Identifier of the first catalog entry
    pub const FIRST_ID: &str = "1";
    /// Identifier of the last catalog entry
    pub const LAST_ID: &str = "6";
    /// Exercise selected when no configuration overrides it
    pub const DEFAULT_EXERCISE_ID: &str = "1";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Catalog id or slug of the exercise a new session starts with
    pub const DEFAULT_EXERCISE: &str = "TRACKG_DEFAULT_EXERCISE";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "TRACKG_ENVIRONMENT";
}

/// Service names for structured logging
pub mod service_names {
    /// Repetition engine service name
    pub const TRACKG_ENGINE: &str = "trackg-engine";
    /// Command-line tool service name
    pub const TRACKG_CLI: &str = "trackg-cli";
}

/// Geometry constants
pub mod geometry {
    /// Largest angle the vertex calculation can report
    pub const MAX_ANGLE_DEGREES: f64 = 180.0;
    /// Full turn in degrees, used to reflect reflex angles
    pub const FULL_TURN_DEGREES: f64 = 360.0;
    /// Angle reported when a ray has zero length
    pub const DEGENERATE_ANGLE_DEGREES: f64 = 0.0;
}
