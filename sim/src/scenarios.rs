//! Scenario definitions.
//!
//! Each scenario is a named configuration of world models and mounted
//! blobfinders. All scenarios are deterministic given the same seed.

use crate::model::{Motion, Shape};
use crate::mounted::MountedSensor;
use crate::world::World;
use blobfinder_core::types::{ModelId, Pose};
use blobfinder_core::Blobfinder;
use sensor_models::{color, BlobfinderParams, Color};

/// Which pre-defined scenario to load.
#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ScenarioKind {
    /// A lone robot in an empty world — every frame is blank
    Empty,
    /// A spinning robot inside a ring of colored beacons
    Beacons,
    /// A robot driving down a walled corridor with door markers
    Corridor,
    /// Seeded random clutter, part of it drifting through the fan
    Clutter,
}

/// A fully configured simulation scenario.
pub struct Scenario {
    pub name: String,
    pub seed: u64,
    pub duration: f64, // seconds
    pub sim_dt: f64,   // simulation step (s)
    pub world: World,
    pub sensors: Vec<MountedSensor>,
}

impl Scenario {
    /// Build the named scenario. Uses `seed` for repeatability.
    pub fn build(kind: ScenarioKind, seed: u64) -> Self {
        match kind {
            ScenarioKind::Empty => Self::empty(seed),
            ScenarioKind::Beacons => Self::beacons(seed),
            ScenarioKind::Corridor => Self::corridor(seed),
            ScenarioKind::Clutter => Self::clutter(seed),
        }
    }

    // -----------------------------------------------------------------------
    // Scenario 1: Empty
    // -----------------------------------------------------------------------
    fn empty(seed: u64) -> Self {
        let mut world = World::default();
        let body = robot(&mut world, Pose::default(), Motion::Fixed);
        world.rebuild_grid();

        Scenario {
            name: "empty".into(),
            seed,
            duration: 5.0,
            sim_dt: 0.1,
            sensors: vec![MountedSensor::new(0, Blobfinder::new(body), 10.0)],
            world,
        }
    }

    // -----------------------------------------------------------------------
    // Scenario 2: Beacons
    // -----------------------------------------------------------------------
    fn beacons(seed: u64) -> Self {
        let mut world = World::default();
        let body = robot(&mut world, Pose::default(), Motion::Turn { omega: 0.3 });

        // 12 beacons on a 5 m ring, colors cycling through the default
        // channel set
        let palette = BlobfinderParams::default().channels;
        for i in 0..12 {
            let angle = i as f64 * std::f64::consts::TAU / 12.0;
            beacon(
                &mut world,
                5.0 * angle.cos(),
                5.0 * angle.sin(),
                0.4,
                palette[i % palette.len()],
                Motion::Fixed,
            );
        }
        world.rebuild_grid();

        Scenario {
            name: "beacons".into(),
            seed,
            duration: 30.0,
            sim_dt: 0.1,
            sensors: vec![MountedSensor::new(0, Blobfinder::new(body), 10.0)],
            world,
        }
    }

    // -----------------------------------------------------------------------
    // Scenario 3: Corridor
    // -----------------------------------------------------------------------
    fn corridor(seed: u64) -> Self {
        let mut world = World::default();
        let body = robot(
            &mut world,
            Pose::default(),
            Motion::Linear { vx: 0.5, vy: 0.0 },
        );

        // two 30 m walls, unclassifiable gray
        for y in [-2.0, 2.0] {
            world.add_model(
                Pose::new(12.0, y, 0.0),
                Some(Shape::Rect {
                    width: 30.0,
                    height: 0.2,
                }),
                color::GRAY,
                Motion::Fixed,
            );
        }

        // door markers along the right-hand wall
        for (i, x) in [4.0, 10.0, 16.0, 22.0].into_iter().enumerate() {
            let marker_color = if i % 2 == 0 { color::GREEN } else { color::BLUE };
            world.add_model(
                Pose::new(x, -1.7, 0.0),
                Some(Shape::Rect {
                    width: 0.6,
                    height: 0.3,
                }),
                marker_color,
                Motion::Fixed,
            );
        }
        world.rebuild_grid();

        Scenario {
            name: "corridor".into(),
            seed,
            duration: 40.0,
            sim_dt: 0.1,
            sensors: vec![MountedSensor::new(0, Blobfinder::new(body), 5.0)],
            world,
        }
    }

    // -----------------------------------------------------------------------
    // Scenario 4: Clutter
    // -----------------------------------------------------------------------
    fn clutter(seed: u64) -> Self {
        use rand::prelude::*;
        use rand_chacha::ChaCha8Rng;
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(4));

        let mut world = World::default();
        let body = robot(&mut world, Pose::default(), Motion::Fixed);

        let palette = BlobfinderParams::default().channels;
        for _ in 0..40 {
            let range = 2.0 + rng.gen::<f64>() * 10.0;
            let angle = rng.gen::<f64>() * std::f64::consts::TAU;
            let motion = if rng.gen::<f64>() < 0.25 {
                Motion::Linear {
                    vx: (rng.gen::<f64>() - 0.5) * 0.8,
                    vy: (rng.gen::<f64>() - 0.5) * 0.8,
                }
            } else {
                Motion::Fixed
            };
            beacon(
                &mut world,
                range * angle.cos(),
                range * angle.sin(),
                0.2 + rng.gen::<f64>() * 0.3,
                palette[rng.gen_range(0..palette.len())],
                motion,
            );
        }
        world.rebuild_grid();

        Scenario {
            name: "clutter".into(),
            seed,
            duration: 60.0,
            sim_dt: 0.1,
            sensors: vec![MountedSensor::new(0, Blobfinder::new(body), 10.0)],
            world,
        }
    }
}

// ---------------------------------------------------------------------------
// Builder helpers
// ---------------------------------------------------------------------------

fn robot(world: &mut World, pose: Pose, motion: Motion) -> ModelId {
    world.add_model(
        pose,
        Some(Shape::Circle { radius: 0.3 }),
        color::GRAY,
        motion,
    )
}

fn beacon(world: &mut World, x: f64, y: f64, radius: f64, color: Color, motion: Motion) {
    world.add_model(
        Pose::new(x, y, 0.0),
        Some(Shape::Circle { radius }),
        color,
        motion,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scenario_never_detects() {
        let mut scenario = Scenario::build(ScenarioKind::Empty, 1);
        let world = &scenario.world;
        for sensor in &mut scenario.sensors {
            assert!(sensor.scan(world).is_empty());
        }
    }

    #[test]
    fn beacons_scenario_detects_from_the_first_frame() {
        let mut scenario = Scenario::build(ScenarioKind::Beacons, 1);
        let world = &scenario.world;
        let blobs = scenario.sensors[0].scan(world);
        assert!(!blobs.is_empty(), "the ring should be visible immediately");
    }

    #[test]
    fn clutter_is_deterministic_for_a_seed() {
        let mut a = Scenario::build(ScenarioKind::Clutter, 42);
        let mut b = Scenario::build(ScenarioKind::Clutter, 42);
        let blobs_a = a.sensors[0].scan(&a.world).to_vec();
        let blobs_b = b.sensors[0].scan(&b.world).to_vec();
        assert_eq!(blobs_a, blobs_b);
    }
}
