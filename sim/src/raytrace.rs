//! Lazy, range-ordered line-of-sight traversal.
//!
//! A [`RayIter`] walks occupancy-grid cells along the ray (Amanatides–Woo
//! stepping) and yields exact ray/shape intersections in increasing-range
//! order. A hit is only released once the walk has passed the distance at
//! which it occurred, so no later cell can produce a closer one: every
//! model is registered in each cell its bounding box touches, which means
//! the cell containing a hit point always lists the model that was struck.

use crate::model::Shape;
use crate::world::World;
use blobfinder_core::types::{ModelId, Pose, RayHit};
use nalgebra::Vector2;
use std::collections::{BinaryHeap, HashSet};

/// Heap entry ordered by ascending range.
struct Pending(RayHit);

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.0.range == other.0.range
    }
}
impl Eq for Pending {}
impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pending {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // reversed: BinaryHeap is a max-heap, we want the nearest hit first
        other.0.range.total_cmp(&self.0.range)
    }
}

pub struct RayIter<'a> {
    world: &'a World,
    origin: Vector2<f64>,
    dir: Vector2<f64>,
    max_range: f64,

    // grid walk state
    ix: i32,
    iy: i32,
    step_x: i32,
    step_y: i32,
    t_max_x: f64,
    t_max_y: f64,
    t_delta_x: f64,
    t_delta_y: f64,
    /// Entry distance of the next unprocessed cell.
    t_entry: f64,
    exhausted: bool,

    seen: HashSet<ModelId>,
    pending: BinaryHeap<Pending>,
}

impl<'a> RayIter<'a> {
    pub(crate) fn new(world: &'a World, x: f64, y: f64, heading: f64, max_range: f64) -> Self {
        let cell = world.grid().cell_size();
        let dir = Vector2::new(heading.cos(), heading.sin());
        let (ix, iy) = world.grid().key(x, y);

        // Distance to the first cell boundary and between boundaries, per axis.
        let axis = |pos: f64, d: f64, i: i32| -> (f64, f64) {
            if d > 0.0 {
                (((i + 1) as f64 * cell - pos) / d, cell / d)
            } else if d < 0.0 {
                ((i as f64 * cell - pos) / d, cell / -d)
            } else {
                (f64::INFINITY, f64::INFINITY)
            }
        };
        let (t_max_x, t_delta_x) = axis(x, dir.x, ix);
        let (t_max_y, t_delta_y) = axis(y, dir.y, iy);

        Self {
            world,
            origin: Vector2::new(x, y),
            dir,
            max_range,
            ix,
            iy,
            step_x: if dir.x > 0.0 { 1 } else { -1 },
            step_y: if dir.y > 0.0 { 1 } else { -1 },
            t_max_x,
            t_max_y,
            t_delta_x,
            t_delta_y,
            t_entry: 0.0,
            exhausted: world.grid().is_empty(),
            seen: HashSet::new(),
            pending: BinaryHeap::new(),
        }
    }

    /// Gather intersection candidates from the current cell, then advance
    /// the walk by one cell.
    fn visit_cell(&mut self) {
        if let Some(ids) = self.world.grid().cell((self.ix, self.iy)) {
            for &id in ids {
                if !self.seen.insert(id) {
                    continue;
                }
                let model = self.world.model(id);
                let Some(shape) = model.shape else { continue };
                let pose = self.world.global_pose(id);
                if let Some(range) = intersect(self.origin, self.dir, &pose, &shape) {
                    if range <= self.max_range {
                        self.pending.push(Pending(RayHit {
                            model: id,
                            color: model.color,
                            range,
                        }));
                    }
                }
            }
        }

        if self.t_max_x < self.t_max_y {
            self.ix += self.step_x;
            self.t_entry = self.t_max_x;
            self.t_max_x += self.t_delta_x;
        } else {
            self.iy += self.step_y;
            self.t_entry = self.t_max_y;
            self.t_max_y += self.t_delta_y;
        }
        if self.t_entry > self.max_range {
            self.exhausted = true;
        }
    }
}

impl Iterator for RayIter<'_> {
    type Item = RayHit;

    fn next(&mut self) -> Option<RayHit> {
        loop {
            if let Some(nearest) = self.pending.peek() {
                if self.exhausted || nearest.0.range <= self.t_entry {
                    return self.pending.pop().map(|p| p.0);
                }
            } else if self.exhausted {
                return None;
            }
            self.visit_cell();
        }
    }
}

/// Exact ray/shape intersection: range along the (unit) direction at which
/// the ray enters the shape, clamped to 0 when the origin is inside.
fn intersect(origin: Vector2<f64>, dir: Vector2<f64>, pose: &Pose, shape: &Shape) -> Option<f64> {
    match *shape {
        Shape::Circle { radius } => {
            let oc = origin - Vector2::new(pose.x, pose.y);
            let b = dir.dot(&oc);
            let disc = b * b - (oc.dot(&oc) - radius * radius);
            if disc < 0.0 {
                return None;
            }
            let sqrt = disc.sqrt();
            let t_far = -b + sqrt;
            if t_far < 0.0 {
                return None;
            }
            Some((-b - sqrt).max(0.0))
        }
        Shape::Rect { width, height } => {
            // slab test in the rect's local frame
            let (sin, cos) = pose.a.sin_cos();
            let oc = origin - Vector2::new(pose.x, pose.y);
            let local_o = Vector2::new(oc.x * cos + oc.y * sin, -oc.x * sin + oc.y * cos);
            let local_d = Vector2::new(dir.x * cos + dir.y * sin, -dir.x * sin + dir.y * cos);

            let mut t_near = f64::NEG_INFINITY;
            let mut t_far = f64::INFINITY;
            for (o, d, half) in [
                (local_o.x, local_d.x, width / 2.0),
                (local_o.y, local_d.y, height / 2.0),
            ] {
                if d.abs() < 1e-12 {
                    if o.abs() > half {
                        return None;
                    }
                    continue;
                }
                let (t0, t1) = ((-half - o) / d, (half - o) / d);
                let (t0, t1) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
                t_near = t_near.max(t0);
                t_far = t_far.min(t1);
            }
            if t_far < t_near || t_far < 0.0 {
                return None;
            }
            Some(t_near.max(0.0))
        }
    }
}
