//! Channel classification: struck color → configured channel index.

use sensor_models::Color;

/// Find the channel a color belongs to: the lowest-index entry of
/// `channels` that equals `color` exactly. Returns the 0-based index, or
/// `None` when no entry matches. No partial or fuzzy matching.
pub fn classify(channels: &[Color], color: Color) -> Option<usize> {
    channels.iter().position(|&c| c == color)
}
