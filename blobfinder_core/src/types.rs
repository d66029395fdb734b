//! Fundamental types used across the entire workspace.

use sensor_models::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Identifier types — newtype wrappers so handles are never confused at
// compile time. A ModelId is the opaque stable handle of a world entity;
// self-exclusion during ray casting compares these, never addresses.
// ---------------------------------------------------------------------------

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ModelId(pub u64);

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SensorId(pub u32);

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Pose
// ---------------------------------------------------------------------------

/// A 2-D pose: position in meters, heading in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub a: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, a: f64) -> Self {
        Self { x, y, a }
    }

    /// Compose `child` (expressed in this pose's frame) into the frame
    /// this pose is expressed in.
    pub fn compose(&self, child: &Pose) -> Pose {
        let (sin, cos) = self.a.sin_cos();
        Pose {
            x: self.x + child.x * cos - child.y * sin,
            y: self.y + child.x * sin + child.y * cos,
            a: self.a + child.a,
        }
    }
}

// ---------------------------------------------------------------------------
// RayHit — one candidate yielded by a line-of-sight traversal
// ---------------------------------------------------------------------------

/// A hit candidate along a ray: which entity was struck, its color, and
/// the range at which it was struck.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub model: ModelId,
    pub color: Color,
    pub range: f64,
}

// ---------------------------------------------------------------------------
// Blob — one detected color blob in the sensor's pixel frame
// ---------------------------------------------------------------------------

/// A contiguous (gap-tolerant) run of same-channel scan columns, reported
/// with bounding box, centroid, range, and area. Rebuilt from scratch every
/// update; no identity across frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    /// 0-based index into the configured channel table
    pub channel: usize,
    /// Channel color, copied from the config at detection time
    pub color: Color,
    /// Pixel centroid
    pub x: i32,
    pub y: i32,
    /// Pixel bounding box, inclusive
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    /// `(top - bottom) * (left - right)` over the clipped box; both
    /// factors are normally negative
    pub area: i32,
    /// Range to the blob center, millimeters, truncated
    pub range: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_rotates_and_translates() {
        let parent = Pose::new(1.0, 2.0, std::f64::consts::FRAC_PI_2);
        let child = Pose::new(1.0, 0.0, 0.0);
        let global = parent.compose(&child);
        assert!((global.x - 1.0).abs() < 1e-12);
        assert!((global.y - 3.0).abs() < 1e-12);
        assert!((global.a - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn identity_compose_is_noop() {
        let p = Pose::new(-3.5, 0.25, 0.7);
        let q = p.compose(&Pose::default());
        assert_eq!(p, q);
    }
}
