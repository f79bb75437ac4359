// ABOUTME: Core data models shared by the exercise state machines and the session
// ABOUTME: Re-exports body joint identifiers and the per-frame joint coordinate map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Body joints and per-frame joint coordinates
mod joints;

pub use joints::{Joint, JointFrame};
