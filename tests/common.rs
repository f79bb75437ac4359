// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging plus joint frame builders posed at chosen angles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::uninlined_format_args
)]
//! Shared test utilities for `trackg`
//!
//! Frames are built from a target angle so tests read in degrees rather than
//! coordinates. The left arm hangs from a shoulder at (0.5, 0.3) with the hip
//! directly below it.

use std::env;
use std::f64::consts::PI;
use std::sync::Once;
use tracing::Level;
use trackg::geometry::Point2D;
use trackg::models::{Joint, JointFrame};

static INIT_LOGGER: Once = Once::new();

const SHOULDER: Point2D = Point2D::new(0.5, 0.3);
const ELBOW: Point2D = Point2D::new(0.5, 0.5);
const HIP: Point2D = Point2D::new(0.5, 0.8);
const FOREARM: f64 = 0.2;
const UPPER_ARM: f64 = 0.2;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Left arm posed so the shoulder-elbow-wrist angle is `degrees`
///
/// The upper arm hangs straight down; the hip is included so the frame is
/// also usable by exercises that measure at the shoulder.
pub fn elbow_frame(degrees: f64) -> JointFrame {
    let theta = degrees * PI / 180.0;
    let wrist = Point2D::new(
        FOREARM.mul_add(theta.sin(), ELBOW.x),
        FOREARM.mul_add(-theta.cos(), ELBOW.y),
    );
    JointFrame::empty()
        .with(Joint::LeftShoulder, SHOULDER)
        .with(Joint::LeftElbow, ELBOW)
        .with(Joint::LeftWrist, wrist)
        .with(Joint::LeftHip, HIP)
}

/// Straight left arm raised so hip-shoulder-elbow and hip-shoulder-wrist are
/// both `degrees`
pub fn shoulder_frame(degrees: f64) -> JointFrame {
    let phi = degrees * PI / 180.0;
    let (sin, cos) = (phi.sin(), phi.cos());
    let elbow = Point2D::new(
        UPPER_ARM.mul_add(sin, SHOULDER.x),
        UPPER_ARM.mul_add(cos, SHOULDER.y),
    );
    let wrist = Point2D::new(
        (UPPER_ARM + FOREARM).mul_add(sin, SHOULDER.x),
        (UPPER_ARM + FOREARM).mul_add(cos, SHOULDER.y),
    );
    JointFrame::empty()
        .with(Joint::LeftHip, HIP)
        .with(Joint::LeftShoulder, SHOULDER)
        .with(Joint::LeftElbow, elbow)
        .with(Joint::LeftWrist, wrist)
}

/// Fully extended arm used by the bicep curl walkthrough
pub fn extended_arm() -> JointFrame {
    JointFrame::empty()
        .with(Joint::LeftShoulder, Point2D::new(0.3, 0.3))
        .with(Joint::LeftElbow, Point2D::new(0.3, 0.5))
        .with(Joint::LeftWrist, Point2D::new(0.3, 0.7))
}

/// Tightly curled arm (about 18 degrees at the elbow)
pub fn flexed_arm() -> JointFrame {
    JointFrame::empty()
        .with(Joint::LeftShoulder, Point2D::new(0.3, 0.3))
        .with(Joint::LeftElbow, Point2D::new(0.3, 0.5))
        .with(Joint::LeftWrist, Point2D::new(0.25, 0.35))
}

/// JSON Lines event for a frame
pub fn frame_line(at_ms: u64, frame: &JointFrame) -> String {
    format!(
        r#"{{"type":"frame","at_ms":{},"joints":{}}}"#,
        at_ms,
        serde_json::to_string(frame).unwrap()
    )
}
