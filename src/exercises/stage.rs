// ABOUTME: Repetition phase tags remembered between frames by the exercise state machines
// ABOUTME: Stage is stored by the session as Option<Stage>, with None meaning unset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Last observed phase of a repetition
///
/// Each exercise uses two of these values: curls, presses and raises move
/// between [`Stage::Down`] and [`Stage::Up`], the tricep extension between
/// [`Stage::Extended`] and [`Stage::Flexed`]. A session that has not yet seen
/// either phase stores `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Resting or starting phase of curls, presses and raises
    Down,
    /// Active phase of curls, presses and raises
    Up,
    /// Locked-out arm during a tricep extension
    Extended,
    /// Bent arm during a tricep extension
    Flexed,
}

impl Stage {
    /// Lowercase tag, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::Extended => "extended",
            Self::Flexed => "flexed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
