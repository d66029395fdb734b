//! `sim` — Simulated world: models, spatial index, ray traversal,
//! scenarios, scan scheduling, replay logs.

pub mod grid;
pub mod model;
pub mod mounted;
pub mod raytrace;
pub mod replay;
pub mod scenarios;
pub mod world;

pub use model::{Model, Motion, Shape};
pub use mounted::MountedSensor;
pub use raytrace::RayIter;
pub use replay::{load_blob_log, save_blob_log, BlobFrame, BlobLog};
pub use scenarios::{Scenario, ScenarioKind};
pub use world::World;
