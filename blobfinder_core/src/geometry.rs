//! Blob geometry: pixel box, centroid, range, and area for one run.
//!
//! The scan is a single horizontal line, so the vertical extent is not
//! measured — it is derived from a fixed assumed object height and the
//! sensor's vertical angular resolution, then clipped to the pixel frame.

use crate::segment::Run;
use crate::types::Blob;
use sensor_models::BlobfinderParams;

/// Assumed height of any detected object (meters). The vertical pixel
/// extent of every blob is computed from this, never from extra rays.
pub const OBJECT_HEIGHT: f64 = 0.6;

/// Build the output record for one segmented run. `ranges` is the
/// per-column range array from the same scan; entries are 0.0 for
/// unclassified columns.
pub fn build_blob(params: &BlobfinderParams, run: &Run, ranges: &[f64]) -> Blob {
    let x_center = run.left + (run.right - run.left) / 2;

    let mut range_to_center = ranges[x_center];
    if range_to_center == 0.0 {
        // The centroid can land on the one unclassified column the
        // segmenter tolerates inside a run (e.g. two 1-pixel blobs one
        // pixel apart); fall back to the range at the run's start.
        range_to_center = ranges[run.left];
    }

    // Vertical angular resolution reuses the horizontal field of view.
    let y_rads_per_pixel = params.zoom / params.scan_height as f64;
    let half_angle = (OBJECT_HEIGHT / 2.0).atan2(range_to_center);

    let half_height = params.scan_height as i32 / 2;
    let mut top = half_height - (half_angle / y_rads_per_pixel).round() as i32;
    let mut bottom = half_height - (-half_angle / y_rads_per_pixel).round() as i32;

    // Centroid keeps the unclipped extent even when the box is clipped.
    let y_center = top + (bottom - top) / 2;

    if top < 0 {
        top = 0;
    }
    if bottom > params.scan_height as i32 - 1 {
        bottom = params.scan_height as i32 - 1;
    }

    let left = run.left as i32;
    let right = run.right as i32;
    let channel = (run.channel - 1) as usize;

    Blob {
        channel,
        color: params.channels[channel],
        x: x_center as i32,
        y: y_center,
        left,
        top,
        right,
        bottom,
        area: (top - bottom) * (left - right),
        range: (range_to_center * 1000.0) as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> BlobfinderParams {
        BlobfinderParams {
            zoom: std::f64::consts::FRAC_PI_3,
            scan_height: 120,
            ..Default::default()
        }
    }

    fn ranges_with(width: usize, entries: &[(usize, f64)]) -> Vec<f64> {
        let mut ranges = vec![0.0; width];
        for &(i, r) in entries {
            ranges[i] = r;
        }
        ranges
    }

    #[test]
    fn box_centroid_and_area_closed_form() {
        // left=40, right=59, zoom=π/3, scan_height=120, range=2.0:
        // x = 49, half_angle = atan2(0.3, 2.0) ≈ 0.14889,
        // y_rads_per_pixel = π/360 → 17 pixels of half-extent,
        // top = 43, bottom = 77, y = 60, area = (43-77)(40-59) = 646.
        let run = Run { channel: 3, left: 40, right: 59 };
        let ranges = ranges_with(160, &[(49, 2.0)]);
        let blob = build_blob(&params(), &run, &ranges);

        assert_eq!(blob.channel, 2);
        assert_eq!(blob.x, 49);
        assert_eq!(blob.top, 43);
        assert_eq!(blob.bottom, 77);
        assert_eq!(blob.y, 60);
        assert_eq!(blob.area, 646);
        assert_eq!(blob.range, 2000);
        assert_eq!((blob.left, blob.right), (40, 59));
    }

    #[test]
    fn zero_range_centroid_falls_back_to_left_edge() {
        // Two 1-pixel blobs one pixel apart segment into [10, 12] with no
        // range recorded at the centroid column 11.
        let run = Run { channel: 1, left: 10, right: 12 };
        let ranges = ranges_with(160, &[(10, 3.0), (12, 5.0)]);
        let blob = build_blob(&params(), &run, &ranges);
        assert_eq!(blob.range, 3000);
    }

    #[test]
    fn close_object_clips_to_frame_after_centroid() {
        // range = 0.05 → half-extent of 161 pixels: box clips to
        // [0, 119] but the centroid keeps the unclipped midpoint.
        let run = Run { channel: 1, left: 10, right: 19 };
        let ranges = ranges_with(160, &[(14, 0.05)]);
        let blob = build_blob(&params(), &run, &ranges);

        assert_eq!(blob.top, 0);
        assert_eq!(blob.bottom, 119);
        assert_eq!(blob.y, 60, "centroid reflects the unclipped extent");
        assert_eq!(blob.area, (0 - 119) * (10 - 19));
        assert_eq!(blob.range, 50);
    }

    #[test]
    fn centroid_division_truncates_toward_left() {
        let run = Run { channel: 1, left: 10, right: 13 };
        let ranges = ranges_with(160, &[(11, 4.0)]);
        let blob = build_blob(&params(), &run, &ranges);
        assert_eq!(blob.x, 11);
    }
}
