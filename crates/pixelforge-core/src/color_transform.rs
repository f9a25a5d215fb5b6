//! Linear color transforms.
//!
//! Every pixel's `(r, g, b)` column vector is multiplied by a fixed 3×3
//! matrix. Each output row is rounded to the nearest integer and clamped.

use crate::grid::{round_to_u8, PixelGrid};
use crate::luminance::{LUMA_B, LUMA_G, LUMA_R};

/// A 3×3 matrix applied to `[r, g, b]ᵀ`; row `i` produces output channel `i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub [[f64; 3]; 3]);

/// Luma weights on every row: the output is neutral grey.
pub const GREYSCALE: ColorMatrix = ColorMatrix([
    [LUMA_R, LUMA_G, LUMA_B],
    [LUMA_R, LUMA_G, LUMA_B],
    [LUMA_R, LUMA_G, LUMA_B],
]);

/// Classic sepia toning weights.
pub const SEPIA: ColorMatrix = ColorMatrix([
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
]);

impl ColorMatrix {
    /// Multiply one pixel, rounding and clamping each output channel.
    #[inline]
    pub fn transform(&self, [r, g, b]: [u8; 3]) -> [u8; 3] {
        let (r, g, b) = (r as f64, g as f64, b as f64);
        self.0.map(|row| round_to_u8(row[0] * r + row[1] * g + row[2] * b))
    }
}

/// Apply `matrix` to every pixel.
pub fn apply_color_transform(grid: &PixelGrid, matrix: &ColorMatrix) -> PixelGrid {
    grid.map_pixels(|rgb| matrix.transform(rgb))
}
