//! Blobfinder sensor parameters.

use crate::color::{self, Color};
use serde::{Deserialize, Serialize};

/// Capacity of the channel table. Configuration loading keeps
/// `channels.len()` at or below this; the scan itself never re-checks it.
pub const CHANNELS_MAX: usize = 16;

/// Physical configuration of a blobfinder sensor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlobfinderParams {
    /// Horizontal scan resolution (pixels) — one ray per column
    pub scan_width: usize,
    /// Vertical scan resolution (pixels) — derived analytically, never cast
    pub scan_height: usize,
    /// Maximum ray length (meters)
    pub range_max: f64,
    /// Horizontal aim offset from the carrying model's heading (radians)
    pub pan: f64,
    /// Vertical aim offset (radians). Carried in the config but not
    /// consumed by the single-scanline scan.
    pub tilt: f64,
    /// Horizontal field of view (radians)
    pub zoom: f64,
    /// Colors the sensor is tuned to, in channel order (at most
    /// [`CHANNELS_MAX`])
    pub channels: Vec<Color>,
}

impl Default for BlobfinderParams {
    fn default() -> Self {
        Self {
            scan_width: 160,  // pixels
            scan_height: 120, // pixels
            range_max: 8.0,   // meters
            pan: 0.0,         // radians
            tilt: 0.0,
            zoom: 60.0_f64.to_radians(), // field of view
            channels: vec![
                color::RED,
                color::GREEN,
                color::BLUE,
                color::YELLOW,
                color::CYAN,
                color::MAGENTA,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_sensor() {
        let p = BlobfinderParams::default();
        assert_eq!(p.scan_width, 160);
        assert_eq!(p.scan_height, 120);
        assert!((p.range_max - 8.0).abs() < 1e-12);
        assert!((p.zoom - std::f64::consts::FRAC_PI_3).abs() < 1e-12);
        assert_eq!(p.channels.len(), 6);
        assert!(p.channels.len() <= CHANNELS_MAX);
        assert_eq!(p.channels[0], color::lookup_color("red").unwrap());
        assert_eq!(p.channels[5], color::lookup_color("magenta").unwrap());
    }
}
