//! Procedural pipe gap placement.
//!
//! Successive gaps drift by a bounded random amount, with a slight pull back
//! toward the middle of the screen so runs don't hug one edge.

use super::config::GameConfig;
use rand::Rng;

/// One generated gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapPlacement {
    pub top_height: f64,
    pub bottom_y: f64,
    /// Feed back as `previous_center` on the next call.
    pub center: f64,
}

/// Place the next gap relative to the previous one.
///
/// With no previous center the gap is centered at `first_center_fraction` of
/// the height, so every run opens the same way.
pub fn generate<R: Rng>(
    config: &GameConfig,
    previous_center: Option<f64>,
    rng: &mut R,
) -> GapPlacement {
    let height = config.play_height;
    let (band_min, band_max) = config.center_band();

    let target = match previous_center {
        None => config.first_center_fraction * height,
        Some(prev) => {
            let bound = config.max_movement_fraction * height;
            let movement = if bound > 0.0 {
                rng.gen_range(-bound..=bound)
            } else {
                0.0
            };
            let mid = height / 2.0;
            let pull = (mid - prev) * config.center_pull;
            prev + movement + pull
        }
    };
    let center = target.clamp(band_min, band_max);

    let gap = config.gap_size();
    let min_top = config.min_barrier_fraction * height;
    let max_top = (height - gap - min_top).max(min_top);
    let top_height = (center - gap / 2.0).clamp(min_top, max_top);

    GapPlacement {
        top_height,
        bottom_y: top_height + gap,
        center: top_height + gap / 2.0,
    }
}
