//! Greyscale channel derivation.
//!
//! Each mode reduces a pixel to a single value which is then written to all
//! three output channels.

use serde::{Deserialize, Serialize};

use crate::grid::PixelGrid;
use crate::luminance::calculate_luma_u8;

/// How the single greyscale value is derived from `(r, g, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivedChannel {
    /// `max(r, g, b)`
    Value,
    /// Rounded ITU-R BT.709 weighted sum.
    Luma,
    /// `floor((r + g + b) / 3)`
    Intensity,
}

impl DerivedChannel {
    /// Derive the greyscale value of one pixel.
    #[inline]
    pub fn evaluate(self, [r, g, b]: [u8; 3]) -> u8 {
        match self {
            DerivedChannel::Value => r.max(g).max(b),
            DerivedChannel::Luma => calculate_luma_u8(r, g, b),
            DerivedChannel::Intensity => ((r as u16 + g as u16 + b as u16) / 3) as u8,
        }
    }
}

/// Replace every pixel by its derived greyscale value.
pub fn derive_channel(grid: &PixelGrid, mode: DerivedChannel) -> PixelGrid {
    grid.map_pixels(|rgb| {
        let v = mode.evaluate(rgb);
        [v, v, v]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(r: u8, g: u8, b: u8) -> PixelGrid {
        PixelGrid::from_raw(1, 1, vec![r, g, b]).unwrap()
    }

    #[test]
    fn test_value_is_max() {
        let out = derive_channel(&single(12, 200, 45), DerivedChannel::Value);
        assert_eq!(out.pixel(0, 0), [200, 200, 200]);
    }

    #[test]
    fn test_intensity_floors_average() {
        // (10 + 20 + 31) / 3 = 20.33
        let out = derive_channel(&single(10, 20, 31), DerivedChannel::Intensity);
        assert_eq!(out.pixel(0, 0), [20, 20, 20]);
    }

    #[test]
    fn test_intensity_of_white() {
        let out = derive_channel(&single(255, 255, 255), DerivedChannel::Intensity);
        assert_eq!(out.pixel(0, 0), [255, 255, 255]);
    }

    #[test]
    fn test_luma_rounds() {
        // 0.2126*100 + 0.7152*150 + 0.0722*200 = 142.98
        let out = derive_channel(&single(100, 150, 200), DerivedChannel::Luma);
        assert_eq!(out.pixel(0, 0), [143, 143, 143]);
    }

    #[test]
    fn test_luma_pure_green() {
        // 0.7152 * 255 = 182.38
        assert_eq!(DerivedChannel::Luma.evaluate([0, 255, 0]), 182);
    }

    #[test]
    fn test_output_is_monochrome() {
        let grid = PixelGrid::from_raw(
            2,
            2,
            vec![1, 50, 200, 30, 30, 31, 255, 0, 7, 90, 91, 92],
        )
        .unwrap();
        for mode in [
            DerivedChannel::Value,
            DerivedChannel::Luma,
            DerivedChannel::Intensity,
        ] {
            assert!(derive_channel(&grid, mode).is_monochrome());
        }
    }
}
