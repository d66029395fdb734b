//! The simulated world: a model arena, its pose tree, and the occupancy
//! grid that ray traversals walk.

use crate::grid::OccupancyGrid;
use crate::model::{Model, Motion, Shape};
use crate::raytrace::RayIter;
use blobfinder_core::types::{ModelId, Pose, RayHit};
use blobfinder_core::Raytrace;
use sensor_models::Color;
use tracing::trace;

/// Default spatial-index cell size (meters).
pub const DEFAULT_CELL_SIZE: f64 = 1.0;

pub struct World {
    models: Vec<Model>,
    grid: OccupancyGrid,
}

impl Default for World {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

impl World {
    pub fn new(cell_size: f64) -> Self {
        Self {
            models: Vec::new(),
            grid: OccupancyGrid::new(cell_size),
        }
    }

    /// Add a model and return its handle. The pose is relative to the
    /// world frame; use [`World::add_child`] to attach to a parent.
    pub fn add_model(
        &mut self,
        pose: Pose,
        shape: Option<Shape>,
        color: Color,
        motion: Motion,
    ) -> ModelId {
        self.push(None, pose, shape, color, motion)
    }

    /// Add a model whose pose is expressed in `parent`'s frame.
    pub fn add_child(
        &mut self,
        parent: ModelId,
        pose: Pose,
        shape: Option<Shape>,
        color: Color,
        motion: Motion,
    ) -> ModelId {
        self.push(Some(parent), pose, shape, color, motion)
    }

    fn push(
        &mut self,
        parent: Option<ModelId>,
        pose: Pose,
        shape: Option<Shape>,
        color: Color,
        motion: Motion,
    ) -> ModelId {
        let id = ModelId(self.models.len() as u64);
        self.models.push(Model {
            id,
            parent,
            pose,
            shape,
            color,
            motion,
        });
        id
    }

    pub fn model(&self, id: ModelId) -> &Model {
        &self.models[id.0 as usize]
    }

    pub fn model_mut(&mut self, id: ModelId) -> &mut Model {
        &mut self.models[id.0 as usize]
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub(crate) fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Resolve a model's pose into the world frame by composing the
    /// parent chain.
    pub fn global_pose(&self, id: ModelId) -> Pose {
        let model = self.model(id);
        match model.parent {
            Some(parent) => self.global_pose(parent).compose(&model.pose),
            None => model.pose,
        }
    }

    /// Advance every model's motion by `dt` seconds and re-rasterize the
    /// spatial index.
    pub fn step(&mut self, dt: f64) {
        for model in &mut self.models {
            model.step(dt);
        }
        self.rebuild_grid();
        trace!(models = self.models.len(), "world stepped");
    }

    /// Re-register every shaped model's world-frame bounding box in the
    /// occupancy grid. Must run after any pose mutation and before rays
    /// are cast.
    pub fn rebuild_grid(&mut self) {
        let boxes: Vec<(ModelId, (f64, f64), (f64, f64))> = self
            .models
            .iter()
            .filter_map(|m| {
                let shape = m.shape?;
                let pose = self.global_pose(m.id);
                let (ex, ey) = match shape {
                    Shape::Circle { radius } => (radius, radius),
                    Shape::Rect { width, height } => {
                        let (sin, cos) = pose.a.sin_cos();
                        (
                            (width / 2.0 * cos).abs() + (height / 2.0 * sin).abs(),
                            (width / 2.0 * sin).abs() + (height / 2.0 * cos).abs(),
                        )
                    }
                };
                Some((m.id, (pose.x - ex, pose.y - ey), (pose.x + ex, pose.y + ey)))
            })
            .collect();

        self.grid.clear();
        for (id, min, max) in boxes {
            self.grid.insert_aabb(id, min, max);
        }
    }

    /// Inherent traversal entry point; [`Raytrace`] delegates here.
    pub fn trace_ray(&self, x: f64, y: f64, heading: f64, max_range: f64) -> RayIter<'_> {
        RayIter::new(self, x, y, heading, max_range)
    }
}

impl Raytrace for World {
    fn trace(
        &self,
        x: f64,
        y: f64,
        heading: f64,
        max_range: f64,
    ) -> impl Iterator<Item = RayHit> + '_ {
        self.trace_ray(x, y, heading, max_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensor_models::color;

    #[test]
    fn child_pose_composes_through_parent_chain() {
        let mut world = World::default();
        let base = world.add_model(
            Pose::new(1.0, 2.0, std::f64::consts::FRAC_PI_2),
            None,
            color::GRAY,
            Motion::Fixed,
        );
        let arm = world.add_child(base, Pose::new(1.0, 0.0, 0.0), None, color::GRAY, Motion::Fixed);
        let tip = world.add_child(arm, Pose::new(0.5, 0.0, 0.1), None, color::GRAY, Motion::Fixed);

        let pose = world.global_pose(tip);
        assert!((pose.x - 1.0).abs() < 1e-9);
        assert!((pose.y - 3.5).abs() < 1e-9);
        assert!((pose.a - (std::f64::consts::FRAC_PI_2 + 0.1)).abs() < 1e-9);
    }

    #[test]
    fn step_moves_models_and_refreshes_grid() {
        let mut world = World::default();
        let id = world.add_model(
            Pose::new(10.0, 0.0, 0.0),
            Some(Shape::Circle { radius: 0.5 }),
            color::RED,
            Motion::Linear { vx: -1.0, vy: 0.0 },
        );
        world.rebuild_grid();
        assert_eq!(world.trace_ray(0.0, 0.0, 0.0, 8.0).count(), 0);

        // after 4 s the beacon is at x = 6, inside the 8 m range
        for _ in 0..40 {
            world.step(0.1);
        }
        let hits: Vec<_> = world.trace_ray(0.0, 0.0, 0.0, 8.0).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].model, id);
        assert!((hits[0].range - 5.5).abs() < 1e-9);
    }
}
