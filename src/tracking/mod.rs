// ABOUTME: Tracking session module driving exercise state machines frame by frame
// ABOUTME: Re-exports the session, injectable clocks, and the snapshot channel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Injectable monotonic clocks
pub mod clock;

/// Mutable per-workout session state
pub mod session;

/// Immutable snapshots for the presentation layer
pub mod snapshot;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use session::{FrameOutcome, TrackingSession};
pub use snapshot::{SessionSnapshot, SnapshotPublisher, SnapshotReceiver};
