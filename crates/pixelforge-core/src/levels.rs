//! Level adjustment through a quadratic tone curve.
//!
//! The curve is the unique parabola passing through `(shadow, 0)`,
//! `(mid, 128)` and `(highlight, 255)`. It is sampled once into a 256-entry
//! lookup table which is then applied to every channel of every pixel.

use crate::error::{EditError, EditResult};
use crate::grid::PixelGrid;

/// `f(v) = a·v² + b·v + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelCurve {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LevelCurve {
    /// Fit the parabola through `(shadow, 0)`, `(mid, 128)`, `(highlight, 255)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `0 <= shadow < mid < highlight <= 255`.
    pub fn fit(shadow: i32, mid: i32, highlight: i32) -> EditResult<Self> {
        if !(0 <= shadow && shadow < mid && mid < highlight && highlight <= 255) {
            return Err(EditError::invalid(format!(
                "levels must satisfy 0 <= shadow < mid < highlight <= 255, got ({shadow}, {mid}, {highlight})"
            )));
        }

        let (s, m, h) = (shadow as f64, mid as f64, highlight as f64);
        let denom = s * s * (m - h) - s * (m * m - h * h) + h * m * m - m * h * h;
        let a = -s * (128.0 - 255.0) + 128.0 * h - 255.0 * m;
        let b = s * s * (128.0 - 255.0) + 255.0 * m * m - 128.0 * h * h;
        let c = s * s * (255.0 * m - 128.0 * h) - s * (255.0 * m * m - 128.0 * h * h);

        Ok(Self {
            a: a / denom,
            b: b / denom,
            c: c / denom,
        })
    }

    /// Raw curve value, before truncation or clamping.
    #[inline]
    pub fn evaluate(&self, v: f64) -> f64 {
        self.a * v * v + self.b * v + self.c
    }

    /// Channel output for input `v`: truncated toward zero, then clamped.
    #[inline]
    pub fn output(&self, v: u8) -> u8 {
        (self.evaluate(v as f64).trunc() as i64).clamp(0, 255) as u8
    }

    /// Pre-computed `lut[input] = output`.
    pub fn to_lut(&self) -> [u8; 256] {
        let mut lut = [0u8; 256];
        for (i, value) in lut.iter_mut().enumerate() {
            *value = self.output(i as u8);
        }
        lut
    }
}

/// Remap every channel of `grid` through the level curve.
///
/// # Errors
///
/// Returns `InvalidArgument` for an unordered or out-of-range triple.
pub fn adjust_levels(
    grid: &PixelGrid,
    shadow: i32,
    mid: i32,
    highlight: i32,
) -> EditResult<PixelGrid> {
    let lut = LevelCurve::fit(shadow, mid, highlight)?.to_lut();
    Ok(grid.map_pixels(|rgb| rgb.map(|v| lut[v as usize])))
}
