// ABOUTME: Core types and constants for the TrackG repetition engine
// ABOUTME: Foundation crate with error handling, geometry, joint models, and thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # TrackG Core
//!
//! Foundation crate providing shared types and constants for the TrackG
//! repetition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ExerciseError`
//! - **constants**: Phase thresholds, catalog identifiers, and environment variable names
//! - **geometry**: Planar points and the vertex angle calculation
//! - **models**: Body joints and per-frame joint coordinates

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Planar geometry for joint angle measurement
pub mod geometry;

/// Core data models (joints, joint frames)
pub mod models;

pub use geometry::{joint_angle, Point2D};
pub use models::{Joint, JointFrame};
