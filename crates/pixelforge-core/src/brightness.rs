//! Constant brightness offset.

use crate::grid::{clamp_u8, PixelGrid};

/// Add `delta` to every channel value, clamping to 0-255.
///
/// A negative delta darkens the image.
pub fn adjust_brightness(grid: &PixelGrid, delta: i32) -> PixelGrid {
    if delta == 0 {
        return grid.clone();
    }
    grid.map_pixels(|rgb| rgb.map(|v| clamp_u8((v as i32).saturating_add(delta))))
}
