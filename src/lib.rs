// ABOUTME: Main library entry point for the TrackG exercise repetition engine
// ABOUTME: Counts repetitions from per-frame pose landmarks with per-exercise state machines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # TrackG
//!
//! Real-time exercise repetition counting from 2-D pose landmarks.
//!
//! Each frame of detected joints flows through three layers:
//!
//! - **Geometry** (`trackg_core::geometry`): planar angle at a vertex joint
//! - **Exercises**: one threshold-band state machine per supported exercise
//! - **Tracking**: the mutable session owning the counter, stage, feedback and
//!   rep timing, plus an immutable snapshot channel for presentation threads
//!
//! Supporting modules load configuration from the environment, install the
//! `tracing` subscriber, and replay recorded landmark streams offline.
//!
//! ## Example Usage
//!
//! ```rust
//! use trackg::exercises::ExerciseKind;
//! use trackg::tracking::{ManualClock, TrackingSession};
//! use trackg::models::{Joint, JointFrame};
//! use trackg::geometry::Point2D;
//!
//! let mut session = TrackingSession::new(ExerciseKind::BicepCurl, ManualClock::new());
//! let extended = JointFrame::empty()
//!     .with(Joint::LeftShoulder, Point2D::new(0.3, 0.3))
//!     .with(Joint::LeftElbow, Point2D::new(0.3, 0.5))
//!     .with(Joint::LeftWrist, Point2D::new(0.3, 0.7));
//! session.process_frame(&extended);
//! assert_eq!(session.repetitions(), 0);
//! ```

/// Environment-based configuration
pub mod config;

/// Exercise catalog and repetition state machines
pub mod exercises;

/// Structured logging setup
pub mod logging;

/// Offline replay of recorded landmark streams
pub mod replay;

/// Tracking sessions, clocks, and snapshots
pub mod tracking;

pub use trackg_core::{constants, errors, geometry, models};
