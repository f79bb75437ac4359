// ABOUTME: Configuration module for tracker defaults and deployment environment
// ABOUTME: Re-exports the environment-variable backed TrackerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables:
//!
//! - `TRACKG_DEFAULT_EXERCISE`: catalog id or slug of the starting exercise (default `1`)
//! - `TRACKG_ENVIRONMENT`: `development`, `production` or `testing`

/// Environment variable parsing
pub mod environment;

pub use environment::{Environment, TrackerConfig};
