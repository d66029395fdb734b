//! Blob logs: serialize per-frame sensor output for offline analysis.

use blobfinder_core::types::{Blob, SensorId};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// A full recorded run of a scenario.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlobLog {
    pub scenario_name: String,
    pub seed: u64,
    pub sim_dt: f64,
    pub duration: f64,
    /// One entry per sensor scan, in chronological order
    pub frames: Vec<BlobFrame>,
}

/// The output of one sensor update: the whole replaced blob list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlobFrame {
    pub time: f64,
    pub sensor: SensorId,
    pub blobs: Vec<Blob>,
}

/// Save a blob log to a JSON file.
pub fn save_blob_log(log: &BlobLog, path: &Path) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, log)?;
    Ok(())
}

/// Load a blob log from a JSON file.
pub fn load_blob_log(path: &Path) -> anyhow::Result<BlobLog> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);
    let log: BlobLog = serde_json::from_reader(reader)?;
    Ok(log)
}
