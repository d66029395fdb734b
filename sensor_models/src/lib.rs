//! `sensor_models` — Blobfinder sensor parameters and color codes.

pub mod blobfinder;
pub mod color;

pub use blobfinder::{BlobfinderParams, CHANNELS_MAX};
pub use color::{lookup_color, Color};
