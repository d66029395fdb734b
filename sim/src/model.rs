//! World entities: shaped, colored, optionally moving models.
//!
//! Each model has a pose in its parent's frame (or the world frame when it
//! has no parent), an optional solid shape that rays can strike, and a
//! motion spec stepped by the simulator each tick.

use blobfinder_core::types::{ModelId, Pose};
use sensor_models::Color;
use serde::{Deserialize, Serialize};

/// Solid footprint of a model. Rects are centered on the model's pose and
/// rotated by its heading.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f64 },
    Rect { width: f64, height: f64 },
}

/// Describes how a model moves between ticks.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum Motion {
    /// Stays put.
    #[default]
    Fixed,
    /// Constant velocity in the world frame (m/s).
    Linear { vx: f64, vy: f64 },
    /// Spins in place. `omega` = yaw rate (rad/s).
    Turn { omega: f64 },
}

/// A simulated entity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Model {
    /// Opaque stable handle, assigned by the world
    pub id: ModelId,
    /// Parent in the pose tree; `None` means the pose is world-global
    pub parent: Option<ModelId>,
    /// Pose in the parent's frame
    pub pose: Pose,
    /// Solid footprint; `None` makes the model invisible to rays
    pub shape: Option<Shape>,
    /// Color reported when a ray strikes this model
    pub color: Color,
    pub motion: Motion,
}

impl Model {
    /// Advance the pose by `dt` seconds according to the motion spec.
    pub fn step(&mut self, dt: f64) {
        match self.motion {
            Motion::Fixed => {}
            Motion::Linear { vx, vy } => {
                self.pose.x += vx * dt;
                self.pose.y += vy * dt;
            }
            Motion::Turn { omega } => {
                self.pose.a += omega * dt;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensor_models::color;

    fn model(motion: Motion) -> Model {
        Model {
            id: ModelId(1),
            parent: None,
            pose: Pose::new(1.0, 2.0, 0.5),
            shape: Some(Shape::Circle { radius: 0.4 }),
            color: color::RED,
            motion,
        }
    }

    #[test]
    fn fixed_model_does_not_move() {
        let mut m = model(Motion::Fixed);
        m.step(10.0);
        assert_eq!(m.pose, Pose::new(1.0, 2.0, 0.5));
    }

    #[test]
    fn linear_motion_translates() {
        let mut m = model(Motion::Linear { vx: 2.0, vy: -1.0 });
        m.step(0.5);
        assert!((m.pose.x - 2.0).abs() < 1e-12);
        assert!((m.pose.y - 1.5).abs() < 1e-12);
        assert!((m.pose.a - 0.5).abs() < 1e-12);
    }

    #[test]
    fn turn_motion_spins_in_place() {
        let mut m = model(Motion::Turn { omega: 0.2 });
        m.step(2.0);
        assert!((m.pose.a - 0.9).abs() < 1e-12);
        assert!((m.pose.x - 1.0).abs() < 1e-12);
    }
}
