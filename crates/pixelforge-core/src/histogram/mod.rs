//! Per-channel histograms and the transforms built on them.
//!
//! - [`Histogram`] counts channel values in a single pass.
//! - [`color_correct`] aligns the dominant mid-tone peak of each channel.
//! - [`render_histogram`] draws the three distributions as a 256×256 image.

mod correct;
mod render;

pub use correct::color_correct;
pub use render::{render_histogram, HISTOGRAM_SIZE};

use crate::grid::{Channel, PixelGrid};

/// Lowest bin considered when searching for a channel peak.
pub const PEAK_SEARCH_START: usize = 11;

/// One past the highest bin considered when searching for a channel peak.
pub const PEAK_SEARCH_END: usize = 245;

/// Frequency of every 8-bit value in each channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    /// Red channel histogram (256 bins)
    pub red: [u32; 256],
    /// Green channel histogram (256 bins)
    pub green: [u32; 256],
    /// Blue channel histogram (256 bins)
    pub blue: [u32; 256],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            red: [0; 256],
            green: [0; 256],
            blue: [0; 256],
        }
    }
}

impl Histogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every channel value of `grid`.
    pub fn from_grid(grid: &PixelGrid) -> Self {
        let mut hist = Self::new();
        for chunk in grid.pixels().chunks_exact(3) {
            hist.red[chunk[0] as usize] += 1;
            hist.green[chunk[1] as usize] += 1;
            hist.blue[chunk[2] as usize] += 1;
        }
        hist
    }

    /// Bins of one channel.
    pub fn channel(&self, channel: Channel) -> &[u32; 256] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Largest bin across all channels.
    pub fn max_value(&self) -> u32 {
        Channel::ALL
            .iter()
            .filter_map(|&c| self.channel(c).iter().max().copied())
            .max()
            .unwrap_or(0)
    }

    /// Index of the most frequent value of `channel` within
    /// `[PEAK_SEARCH_START, PEAK_SEARCH_END)`.
    ///
    /// Pure blacks and whites are ignored so that clipped regions do not
    /// dominate. Ties resolve to the lowest index.
    pub fn peak(&self, channel: Channel) -> usize {
        let bins = self.channel(channel);
        let mut best = PEAK_SEARCH_START;
        for i in PEAK_SEARCH_START..PEAK_SEARCH_END {
            if bins[i] > bins[best] {
                best = i;
            }
        }
        best
    }

    /// Check for highlight clipping (values at 255).
    pub fn has_highlight_clipping(&self) -> bool {
        self.red[255] > 0 || self.green[255] > 0 || self.blue[255] > 0
    }

    /// Check for shadow clipping (values at 0).
    pub fn has_shadow_clipping(&self) -> bool {
        self.red[0] > 0 || self.green[0] > 0 || self.blue[0] > 0
    }
}
