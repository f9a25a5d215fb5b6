//! Luma weights using ITU-R BT.709 coefficients.
//!
//! Shared by the luma channel derivation and the greyscale color matrix so
//! both produce identical values.

/// ITU-R BT.709 coefficient for the red channel.
pub const LUMA_R: f64 = 0.2126;

/// ITU-R BT.709 coefficient for the green channel.
pub const LUMA_G: f64 = 0.7152;

/// ITU-R BT.709 coefficient for the blue channel.
pub const LUMA_B: f64 = 0.0722;

/// Weighted luma sum of 8-bit RGB values, unrounded.
#[inline]
pub fn calculate_luma(r: u8, g: u8, b: u8) -> f64 {
    LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64
}

/// Luma of 8-bit RGB values, rounded to the nearest integer.
#[inline]
pub fn calculate_luma_u8(r: u8, g: u8, b: u8) -> u8 {
    calculate_luma(r, g, b).round().clamp(0.0, 255.0) as u8
}
