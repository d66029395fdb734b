//! `blobfinder_core` — Core simulated color-blob vision algorithms.
//!
//! # Module layout
//! - [`types`]    — Fundamental types (IDs, pose, ray hits, blobs)
//! - [`classify`] — Color → configured channel classification
//! - [`scan`]     — Horizontal ray fan casting
//! - [`segment`]  — Gap-tolerant 1-D run segmentation
//! - [`geometry`] — Pixel box / centroid / range / area per run
//! - [`sensor`]   — The blobfinder sensor and its trait seams

pub mod classify;
pub mod geometry;
pub mod scan;
pub mod segment;
pub mod sensor;
pub mod types;

pub use sensor::{Blobfinder, Raytrace, ScanObserver, Sensor};
pub use types::{Blob, ModelId, Pose, RayHit, SensorId};
