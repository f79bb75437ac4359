// ABOUTME: Benchmark fixtures generating synthetic landmark streams
// ABOUTME: Provides deterministic curl and raise cycles for reproducible measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures generating synthetic landmark streams.

use std::f64::consts::PI;
use trackg::geometry::Point2D;
use trackg::models::{Joint, JointFrame};

/// Frames per simulated repetition (one second of 30 fps video)
pub const FRAMES_PER_REP: usize = 30;

/// Predefined stream lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum StreamLength {
    /// A handful of reps
    Short,
    /// A full set at 30 fps
    Set,
}

impl StreamLength {
    #[must_use]
    pub const fn reps(self) -> usize {
        match self {
            Self::Short => 3,
            Self::Set => 12,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Short => "3_reps",
            Self::Set => "12_reps",
        }
    }
}

/// Elbow angle for frame `i` of a cycle sweeping 175 -> 20 -> 175 degrees
fn cycle_angle(i: usize) -> f64 {
    let phase = (i % FRAMES_PER_REP) as f64 / FRAMES_PER_REP as f64;
    77.5f64.mul_add((2.0 * PI * phase).cos(), 97.5)
}

/// Left arm with the requested elbow angle
#[must_use]
pub fn arm_at(degrees: f64) -> JointFrame {
    let theta = degrees.to_radians();
    JointFrame::empty()
        .with(Joint::LeftHip, Point2D::new(0.5, 0.8))
        .with(Joint::LeftShoulder, Point2D::new(0.5, 0.3))
        .with(Joint::LeftElbow, Point2D::new(0.5, 0.5))
        .with(
            Joint::LeftWrist,
            Point2D::new(0.2f64.mul_add(theta.sin(), 0.5), 0.2f64.mul_add(-theta.cos(), 0.5)),
        )
}

/// Continuous curl stream, with every tenth frame dropped to no detection
#[must_use]
pub fn curl_stream(length: StreamLength) -> Vec<JointFrame> {
    (0..length.reps() * FRAMES_PER_REP)
        .map(|i| {
            if i % 10 == 9 {
                JointFrame::empty()
            } else {
                arm_at(cycle_angle(i))
            }
        })
        .collect()
}
