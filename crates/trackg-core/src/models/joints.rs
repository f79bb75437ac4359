// ABOUTME: Body joint identifiers and the fixed-size per-frame joint coordinate map
// ABOUTME: JointFrame is allocation-free and tolerates joints missing from a detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point2D;

/// Upper-body joints tracked by the landmark source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    /// Left shoulder
    LeftShoulder,
    /// Right shoulder
    RightShoulder,
    /// Left elbow
    LeftElbow,
    /// Right elbow
    RightElbow,
    /// Left wrist
    LeftWrist,
    /// Right wrist
    RightWrist,
    /// Left hip
    LeftHip,
    /// Right hip
    RightHip,
}

impl Joint {
    /// Number of tracked joints
    pub const COUNT: usize = 8;

    /// Every tracked joint, in slot order
    pub const ALL: [Self; Self::COUNT] = [
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
    ];

    /// Slot of this joint inside a [`JointFrame`]
    const fn slot(self) -> usize {
        self as usize
    }

    /// Stable snake_case name, matching the serialized form
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Joint coordinates detected in a single video frame
///
/// A joint the landmark source did not report is simply absent. An empty
/// frame is the "no detection" signal.
///
/// Serialized as a JSON object keyed by joint name:
///
/// ```json
/// { "left_shoulder": { "x": 0.3, "y": 0.3 }, "left_elbow": { "x": 0.3, "y": 0.5 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Joint, Point2D>", into = "BTreeMap<Joint, Point2D>")]
pub struct JointFrame {
    slots: [Option<Point2D>; Joint::COUNT],
}

impl JointFrame {
    /// Create a frame with no detected joints
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            slots: [None; Joint::COUNT],
        }
    }

    /// Builder-style insertion
    #[must_use]
    pub fn with(mut self, joint: Joint, point: Point2D) -> Self {
        self.slots[joint.slot()] = Some(point);
        self
    }

    /// Record or overwrite the position of a joint
    pub fn insert(&mut self, joint: Joint, point: Point2D) {
        self.slots[joint.slot()] = Some(point);
    }

    /// Position of a joint, if it was detected
    #[must_use]
    pub const fn get(&self, joint: Joint) -> Option<Point2D> {
        self.slots[joint.slot()]
    }

    /// Positions of three joints, only when all of them were detected
    #[must_use]
    pub const fn triple(&self, a: Joint, b: Joint, c: Joint) -> Option<(Point2D, Point2D, Point2D)> {
        match (self.get(a), self.get(b), self.get(c)) {
            (Some(a), Some(b), Some(c)) => Some((a, b, c)),
            _ => None,
        }
    }

    /// Number of detected joints
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// True when no joint was detected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// True when every tracked joint was detected
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Detected joints with their positions, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (Joint, Point2D)> + '_ {
        Joint::ALL
            .iter()
            .filter_map(|&joint| self.get(joint).map(|point| (joint, point)))
    }
}

impl FromIterator<(Joint, Point2D)> for JointFrame {
    fn from_iter<I: IntoIterator<Item = (Joint, Point2D)>>(iter: I) -> Self {
        let mut frame = Self::empty();
        for (joint, point) in iter {
            frame.insert(joint, point);
        }
        frame
    }
}

impl From<BTreeMap<Joint, Point2D>> for JointFrame {
    fn from(map: BTreeMap<Joint, Point2D>) -> Self {
        map.into_iter().collect()
    }
}

impl From<JointFrame> for BTreeMap<Joint, Point2D> {
    fn from(frame: JointFrame) -> Self {
        frame.iter().collect()
    }
}
