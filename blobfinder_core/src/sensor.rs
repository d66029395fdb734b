//! The blobfinder sensor: configuration, blob store, and the per-tick
//! update pipeline (cast fan → segment → build blobs).

use crate::geometry::build_blob;
use crate::scan::cast_fan;
use crate::segment::segment;
use crate::types::{Blob, ModelId, Pose, RayHit};
use sensor_models::BlobfinderParams;
use tracing::debug;

// ---------------------------------------------------------------------------
// Trait seams
// ---------------------------------------------------------------------------

/// Line-of-sight traversal over a world's spatial index.
///
/// A traversal enumerates hit candidates along one ray in increasing-range
/// order, bounded by `max_range`. It is consumed once; the caster creates
/// a fresh traversal per ray.
pub trait Raytrace {
    fn trace(
        &self,
        x: f64,
        y: f64,
        heading: f64,
        max_range: f64,
    ) -> impl Iterator<Item = RayHit> + '_;
}

/// Debug observer for a scan in progress. Purely observational: no method
/// has any effect on the computed output, and every method defaults to a
/// no-op so an observer-less sensor costs nothing.
pub trait ScanObserver {
    /// Called once at the start of each fan, before any ray.
    fn clear(&mut self) {}
    /// Called once per ray with the column index, the sensor pose, the
    /// ray heading, and the recorded (non-self) hit if any.
    fn ray(&mut self, _column: usize, _pose: Pose, _heading: f64, _hit: Option<&RayHit>) {}
}

/// A simulated sensor as the host scheduler sees it: reset to defaults,
/// and one synchronous update per tick.
pub trait Sensor<W: Raytrace> {
    /// Restore the default configuration and empty the output store.
    fn initialize(&mut self);
    /// Run one full scan at `pose` and replace the output wholesale.
    fn update(&mut self, pose: Pose, world: &W) -> &[Blob];
}

// ---------------------------------------------------------------------------
// Blobfinder
// ---------------------------------------------------------------------------

/// The color-blob vision sensor. Owns its configuration and the current
/// frame's blob list; the list is cleared and rebuilt on every update, so
/// no blob survives or is mutated across ticks.
pub struct Blobfinder {
    /// Entity the sensor is mounted on — its own body is excluded from
    /// ray hits.
    model: ModelId,
    pub params: BlobfinderParams,
    blobs: Vec<Blob>,
    observer: Option<Box<dyn ScanObserver + Send>>,
}

impl Blobfinder {
    /// Create a sensor with default parameters, mounted on `model`.
    pub fn new(model: ModelId) -> Self {
        Self::with_params(model, BlobfinderParams::default())
    }

    pub fn with_params(model: ModelId, params: BlobfinderParams) -> Self {
        Self {
            model,
            params,
            blobs: Vec::new(),
            observer: None,
        }
    }

    /// Attach a debug observer. Observers are optional and never required
    /// for correctness.
    pub fn with_observer(mut self, observer: Box<dyn ScanObserver + Send>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    /// The current frame's blobs, in left-to-right scan order.
    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }
}

impl<W: Raytrace> Sensor<W> for Blobfinder {
    fn initialize(&mut self) {
        self.params = BlobfinderParams::default();
        self.blobs.clear();
    }

    fn update(&mut self, pose: Pose, world: &W) -> &[Blob] {
        let scan = cast_fan(
            &self.params,
            self.model,
            pose,
            world,
            self.observer.as_deref_mut(),
        );

        self.blobs.clear();
        for run in segment(&scan.channels) {
            self.blobs.push(build_blob(&self.params, &run, &scan.ranges));
        }

        debug!(
            model = %self.model,
            columns = scan.channels.len(),
            blobs = self.blobs.len(),
            "blobfinder scan complete"
        );

        &self.blobs
    }
}
