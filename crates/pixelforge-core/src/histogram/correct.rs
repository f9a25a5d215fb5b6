//! Automatic color correction by peak alignment.
//!
//! Each channel's dominant mid-tone value is found from its histogram. Every
//! channel is then shifted so its peak lands on the rounded mean of the
//! three peaks. Values at or beyond the shadow/highlight limits are left
//! alone so pure blacks and whites stay neutral.

use log::debug;

use super::Histogram;
use crate::grid::{clamp_u8, Channel, PixelGrid};

/// Values at or below this are treated as shadows and never shifted.
const SHADOW_LIMIT: u8 = 10;

/// Values at or above this are treated as highlights and never shifted.
const HIGHLIGHT_LIMIT: u8 = 245;

/// Align the histogram peaks of the three channels.
pub fn color_correct(grid: &PixelGrid) -> PixelGrid {
    let hist = Histogram::from_grid(grid);
    let peaks = Channel::ALL.map(|c| hist.peak(c) as i32);
    let average = (peaks.iter().sum::<i32>() as f64 / 3.0).round() as i32;
    let offsets = peaks.map(|p| average - p);

    debug!(
        "color correction: peaks {:?}, average {}, offsets {:?}",
        peaks, average, offsets
    );

    if offsets == [0, 0, 0] {
        return grid.clone();
    }

    grid.map_pixels(|rgb| {
        let mut out = rgb;
        for (v, offset) in out.iter_mut().zip(offsets) {
            if *v > SHADOW_LIMIT && *v < HIGHLIGHT_LIMIT {
                *v = clamp_u8(*v as i32 + offset);
            }
        }
        out
    })
}
