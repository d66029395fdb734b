//! Ray fan casting: one ray per scan column across the field of view.

use crate::classify::classify;
use crate::sensor::{Raytrace, ScanObserver};
use crate::types::{ModelId, Pose, RayHit};
use sensor_models::BlobfinderParams;

/// One scan-line's worth of per-column results. `channels[s]` is 0 for an
/// unclassified column, else the 1-based channel index; `ranges[s]` is
/// only meaningful where `channels[s]` is nonzero.
#[derive(Clone, Debug)]
pub struct ScanLine {
    pub channels: Vec<u8>,
    pub ranges: Vec<f64>,
}

/// Cast the horizontal fan from `pose` and classify what each ray first
/// strikes. The scan sweeps clockwise: column 0 is the left edge of the
/// field of view. Hits on `self_model` are skipped; hits on its ancestors
/// or descendants are not.
pub fn cast_fan<W: Raytrace>(
    params: &BlobfinderParams,
    self_model: ModelId,
    pose: Pose,
    world: &W,
    mut observer: Option<&mut (dyn ScanObserver + Send + 'static)>,
) -> ScanLine {
    let width = params.scan_width;
    let mut channels = vec![0u8; width];
    let mut ranges = vec![0.0f64; width];

    // Starting angle: left edge of the fan.
    let start = pose.a + params.pan + params.zoom / 2.0;
    let dth = params.zoom / width as f64;

    if let Some(obs) = observer.as_deref_mut() {
        obs.clear();
    }

    for s in 0..width {
        let heading = start - s as f64 * dth;

        let hit: Option<RayHit> = world
            .trace(pose.x, pose.y, heading, params.range_max)
            .find(|h| h.model != self_model);

        if let Some(hit) = hit {
            if let Some(c) = classify(&params.channels, hit.color) {
                channels[s] = (c + 1) as u8;
                ranges[s] = hit.range;
            }
        }

        if let Some(obs) = observer.as_deref_mut() {
            obs.ray(s, pose, heading, hit.as_ref());
        }
    }

    ScanLine { channels, ranges }
}
