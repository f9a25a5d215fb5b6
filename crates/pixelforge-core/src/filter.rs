//! Spatial convolution filters.
//!
//! A square kernel of odd side is centered on every pixel and applied to
//! each channel independently. Kernel taps that fall outside the image are
//! skipped: edge pixels receive a partial sum without renormalization.

use crate::error::{EditError, EditResult};
use crate::grid::PixelGrid;

/// 3×3 Gaussian-like blur weights.
pub const BLUR_WEIGHTS: [[f64; 3]; 3] = [
    [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
    [1.0 / 8.0, 1.0 / 4.0, 1.0 / 8.0],
    [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
];

/// 5×5 sharpen weights: center 1, inner ring 1/4, outer ring -1/8.
pub const SHARPEN_WEIGHTS: [[f64; 5]; 5] = [
    [-0.125, -0.125, -0.125, -0.125, -0.125],
    [-0.125, 0.25, 0.25, 0.25, -0.125],
    [-0.125, 0.25, 1.0, 0.25, -0.125],
    [-0.125, 0.25, 0.25, 0.25, -0.125],
    [-0.125, -0.125, -0.125, -0.125, -0.125],
];

/// A square convolution kernel with odd side length.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    size: usize,
    /// Row-major weights, `size * size` entries.
    weights: Vec<f64>,
}

impl Kernel {
    /// Build a kernel from its rows.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the kernel is empty, not square, or has
    /// an even side length.
    pub fn new(rows: &[&[f64]]) -> EditResult<Self> {
        let size = rows.len();
        if size == 0 || size % 2 == 0 {
            return Err(EditError::invalid(format!(
                "kernel side must be odd, got {size}"
            )));
        }
        if rows.iter().any(|row| row.len() != size) {
            return Err(EditError::invalid("kernel must be square"));
        }
        Ok(Self {
            size,
            weights: rows.iter().flat_map(|row| row.iter().copied()).collect(),
        })
    }

    /// The 3×3 blur kernel.
    pub fn blur() -> Self {
        Self {
            size: 3,
            weights: BLUR_WEIGHTS.iter().flatten().copied().collect(),
        }
    }

    /// The 5×5 sharpen kernel.
    pub fn sharpen() -> Self {
        Self {
            size: 5,
            weights: SHARPEN_WEIGHTS.iter().flatten().copied().collect(),
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn weight(&self, row: usize, col: usize) -> f64 {
        self.weights[row * self.size + col]
    }
}

/// Convolve every channel of `grid` with `kernel`.
///
/// Sums are clamped to 0-255 and truncated toward zero.
pub fn convolve(grid: &PixelGrid, kernel: &Kernel) -> PixelGrid {
    let (height, width) = (grid.height() as i64, grid.width() as i64);
    let half = (kernel.size / 2) as i64;
    let mut out = PixelGrid::new(grid.height(), grid.width());

    for y in 0..height {
        for x in 0..width {
            let mut sum = [0.0f64; 3];

            for ky in -half..=half {
                let py = y + ky;
                if py < 0 || py >= height {
                    continue;
                }
                for kx in -half..=half {
                    let px = x + kx;
                    if px < 0 || px >= width {
                        continue;
                    }
                    let w = kernel.weight((ky + half) as usize, (kx + half) as usize);
                    let rgb = grid.pixel(py as u32, px as u32);
                    for (acc, v) in sum.iter_mut().zip(rgb) {
                        *acc += v as f64 * w;
                    }
                }
            }

            out.put_pixel(y as u32, x as u32, sum.map(|v| v.clamp(0.0, 255.0) as u8));
        }
    }

    out
}
