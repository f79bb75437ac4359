// ABOUTME: Planar geometry for measuring the angle formed at a body joint
// ABOUTME: Provides Point2D and the atan2-based vertex angle with a degenerate fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::geometry::{
    DEGENERATE_ANGLE_DEGREES, FULL_TURN_DEGREES, MAX_ANGLE_DEGREES,
};

/// A normalized image-plane coordinate
///
/// Values are typically in `[0, 1]` but are not clamped: pose estimation
/// noise may place a landmark slightly outside the frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal position, growing to the right
    pub x: f64,
    /// Vertical position, growing downwards
    pub y: f64,
}

impl Point2D {
    /// Create a point from its coordinates
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Direction of the ray from `self` to `target`, in radians
    ///
    /// Returns `None` when the two points coincide.
    fn bearing_to(self, target: Self) -> Option<f64> {
        let dx = target.x - self.x;
        let dy = target.y - self.y;
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        Some(dy.atan2(dx))
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Angle in degrees at `vertex` between the rays towards `a` and `c`
///
/// Always in `[0, 180]`. When either ray has zero length (an undetected
/// landmark often collapses onto its neighbour) the angle is undefined and
/// `0.0` is returned instead. Non-finite coordinates also yield `0.0`.
///
/// # Example
///
/// ```rust
/// use trackg_core::{joint_angle, Point2D};
///
/// let angle = joint_angle(
///     Point2D::new(0.0, 1.0),
///     Point2D::new(0.0, 0.0),
///     Point2D::new(1.0, 0.0),
/// );
/// assert!((angle - 90.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn joint_angle(a: Point2D, vertex: Point2D, c: Point2D) -> f64 {
    let (Some(towards_a), Some(towards_c)) = (vertex.bearing_to(a), vertex.bearing_to(c)) else {
        trace!(?a, ?vertex, ?c, "zero-length ray, using degenerate angle");
        return DEGENERATE_ANGLE_DEGREES;
    };

    let mut angle = (towards_c - towards_a).to_degrees().abs();
    if angle > MAX_ANGLE_DEGREES {
        angle = FULL_TURN_DEGREES - angle;
    }

    if angle.is_finite() {
        angle
    } else {
        trace!(?a, ?vertex, ?c, "non-finite joint coordinates, using degenerate angle");
        DEGENERATE_ANGLE_DEGREES
    }
}
