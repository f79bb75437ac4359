// ABOUTME: Immutable session snapshots and the channel publishing them to other threads
// ABOUTME: Uses tokio watch so presentation readers never touch the live session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use uuid::Uuid;

use crate::exercises::{ExerciseKind, FeedbackTone, Stage};

/// Output contract consumed by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Session the values belong to
    pub session_id: Uuid,
    /// Active exercise variant
    pub exercise: ExerciseKind,
    /// Catalog identifier of the active exercise
    pub exercise_id: &'static str,
    /// Display name of the active exercise
    pub exercise_name: &'static str,
    /// Repetitions since the last exercise switch
    pub repetitions: u32,
    /// Stage stored after the last evaluated frame
    pub stage: Option<Stage>,
    /// Feedback text, empty before the first evaluated frame
    pub feedback: &'static str,
    /// Emphasis for the feedback text
    pub feedback_tone: Option<FeedbackTone>,
    /// Seconds between the two most recent completions, absent before the first rep
    pub seconds_since_last_rep: Option<f64>,
    /// Wall-clock session start
    pub started_at: DateTime<Utc>,
    /// Wall-clock time the snapshot was taken
    pub captured_at: DateTime<Utc>,
}

/// Frame-loop side of the snapshot channel
#[derive(Debug)]
pub struct SnapshotPublisher {
    sender: watch::Sender<SessionSnapshot>,
}

/// Reader side of the snapshot channel; cheap to clone, safe to move across threads
pub type SnapshotReceiver = watch::Receiver<SessionSnapshot>;

impl SnapshotPublisher {
    /// Create a channel seeded with an initial snapshot
    #[must_use]
    pub fn new(initial: SessionSnapshot) -> (Self, SnapshotReceiver) {
        let (sender, receiver) = watch::channel(initial);
        (Self { sender }, receiver)
    }

    /// Replace the published snapshot, waking readers only when it changed
    /// in a way the presentation layer displays
    pub fn publish(&self, snapshot: SessionSnapshot) {
        self.sender.send_if_modified(|current| {
            let changed = !current.same_display(&snapshot);
            *current = snapshot;
            changed
        });
    }

    /// Additional reader for another consumer
    #[must_use]
    pub fn subscribe(&self) -> SnapshotReceiver {
        self.sender.subscribe()
    }

    /// Number of live readers
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl SessionSnapshot {
    /// Equality ignoring capture time
    #[must_use]
    pub fn same_display(&self, other: &Self) -> bool {
        self.session_id == other.session_id
            && self.exercise == other.exercise
            && self.repetitions == other.repetitions
            && self.stage == other.stage
            && self.feedback == other.feedback
            && self.seconds_since_last_rep == other.seconds_since_last_rep
    }
}
