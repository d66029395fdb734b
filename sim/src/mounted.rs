//! A blobfinder mounted on a world model, with per-tick scan scheduling.

use crate::world::World;
use blobfinder_core::types::{Blob, SensorId};
use blobfinder_core::{Blobfinder, Sensor};

/// One configured sensor in the simulation: the sensor itself, the model
/// carrying it, and its scan schedule.
pub struct MountedSensor {
    pub id: SensorId,
    pub sensor: Blobfinder,
    /// Scan rate (Hz) — time between scans = 1.0 / refresh_rate
    pub refresh_rate: f64,
    /// Next scheduled scan time
    pub next_scan_time: f64,
}

impl MountedSensor {
    pub fn new(id: u32, sensor: Blobfinder, refresh_rate: f64) -> Self {
        Self {
            id: SensorId(id),
            sensor,
            refresh_rate,
            next_scan_time: 0.0,
        }
    }

    /// Check if this sensor should scan at the current simulation time.
    pub fn should_scan(&self, t: f64) -> bool {
        t >= self.next_scan_time
    }

    /// Advance the schedule by one scan interval.
    pub fn advance_schedule(&mut self) {
        self.next_scan_time += 1.0 / self.refresh_rate;
    }

    /// Run one update at the carrying model's current global pose and
    /// return the frame's blobs.
    pub fn scan<'a>(&'a mut self, world: &World) -> &'a [Blob] {
        let pose = world.global_pose(self.sensor.model());
        self.sensor.update(pose, world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Motion, Shape};
    use blobfinder_core::types::{ModelId, Pose};
    use sensor_models::color;

    fn beacon_world() -> (World, ModelId) {
        let mut world = World::default();
        // The robot body sits at the ray origin; rays must skip it.
        let body = world.add_model(
            Pose::default(),
            Some(Shape::Circle { radius: 0.3 }),
            color::GRAY,
            Motion::Fixed,
        );
        world.add_model(
            Pose::new(4.0, 0.0, 0.0),
            Some(Shape::Circle { radius: 0.5 }),
            color::RED,
            Motion::Fixed,
        );
        world.rebuild_grid();
        (world, body)
    }

    #[test]
    fn scan_sees_through_own_body() {
        let (world, body) = beacon_world();
        let mut mounted = MountedSensor::new(0, Blobfinder::new(body), 1.0);

        let blobs = mounted.scan(&world).to_vec();
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0].channel, 0, "red is channel 0");
        assert_eq!(blobs[0].range, 3500);
        assert!(blobs[0].left <= 80 && 80 <= blobs[0].right);
        assert!(blobs[0].left > 40 && blobs[0].right < 120);
    }

    #[test]
    fn schedule_fires_at_refresh_rate() {
        let (_, body) = beacon_world();
        let mut mounted = MountedSensor::new(0, Blobfinder::new(body), 2.0);

        assert!(mounted.should_scan(0.0));
        mounted.advance_schedule();
        assert!(!mounted.should_scan(0.25));
        assert!(mounted.should_scan(0.5));
        mounted.advance_schedule();
        assert!((mounted.next_scan_time - 1.0).abs() < 1e-12);
    }
}
