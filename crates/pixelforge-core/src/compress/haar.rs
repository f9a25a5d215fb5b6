//! Square 2D Haar wavelet transform and coefficient thresholding.

use std::f64::consts::FRAC_1_SQRT_2;

/// Square block of wavelet coefficients, row-major.
///
/// The side is always a power of two so every scale halves evenly.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    side: usize,
    values: Vec<f64>,
}

impl Coefficients {
    /// Zero-pad a `height × width` channel into the smallest enclosing
    /// power-of-two square.
    pub fn from_channel(channel: &[f64], height: usize, width: usize) -> Self {
        debug_assert_eq!(channel.len(), height * width);
        let side = height.max(width).next_power_of_two();
        let mut values = vec![0.0; side * side];
        for (y, row) in channel.chunks_exact(width.max(1)).take(height).enumerate() {
            values[y * side..y * side + width].copy_from_slice(row);
        }
        Self { side, values }
    }

    /// Side length of the padded square.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Coefficient at `(y, x)`.
    pub fn get(&self, y: usize, x: usize) -> f64 {
        self.values[y * self.side + x]
    }

    /// All coefficients, row-major.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Copy the top-left `height × width` region back out.
    pub fn crop(&self, height: usize, width: usize) -> Vec<f64> {
        let mut out = Vec::with_capacity(height * width);
        for y in 0..height {
            out.extend_from_slice(&self.values[y * self.side..y * self.side + width]);
        }
        out
    }

    fn row_mut(&mut self, y: usize, len: usize) -> &mut [f64] {
        let start = y * self.side;
        &mut self.values[start..start + len]
    }

    fn load_column(&self, x: usize, column: &mut [f64]) {
        for (y, v) in column.iter_mut().enumerate() {
            *v = self.values[y * self.side + x];
        }
    }

    fn store_column(&mut self, x: usize, column: &[f64]) {
        for (y, &v) in column.iter().enumerate() {
            self.values[y * self.side + x] = v;
        }
    }
}

/// One forward Haar step over `data`: pairwise averages into the first
/// half, differences into the second, both scaled by 1/√2.
fn forward_step(data: &mut [f64], scratch: &mut [f64]) {
    let half = data.len() / 2;
    for i in 0..half {
        let (a, b) = (data[2 * i], data[2 * i + 1]);
        scratch[i] = (a + b) * FRAC_1_SQRT_2;
        scratch[half + i] = (a - b) * FRAC_1_SQRT_2;
    }
    data.copy_from_slice(&scratch[..data.len()]);
}

/// Inverse of [`forward_step`]: re-interleave averages and differences.
fn inverse_step(data: &mut [f64], scratch: &mut [f64]) {
    let half = data.len() / 2;
    for i in 0..half {
        let (avg, diff) = (data[i], data[half + i]);
        scratch[2 * i] = (avg + diff) * FRAC_1_SQRT_2;
        scratch[2 * i + 1] = (avg - diff) * FRAC_1_SQRT_2;
    }
    data.copy_from_slice(&scratch[..data.len()]);
}

/// Multi-level forward transform.
///
/// At each scale `c`, from the full side down to 2, the rows and then the
/// columns of the top-left `c × c` block are transformed.
pub fn haar_forward_2d(coeffs: &mut Coefficients) {
    let side = coeffs.side;
    let mut scratch = vec![0.0; side];
    let mut column = vec![0.0; side];

    let mut c = side;
    while c > 1 {
        for y in 0..c {
            forward_step(coeffs.row_mut(y, c), &mut scratch);
        }
        for x in 0..c {
            coeffs.load_column(x, &mut column[..c]);
            forward_step(&mut column[..c], &mut scratch);
            coeffs.store_column(x, &column[..c]);
        }
        c /= 2;
    }
}

/// Multi-level inverse transform, undoing [`haar_forward_2d`].
///
/// Scales grow from 2 to the full side; columns are restored before rows.
pub fn haar_inverse_2d(coeffs: &mut Coefficients) {
    let side = coeffs.side;
    let mut scratch = vec![0.0; side];
    let mut column = vec![0.0; side];

    let mut c = 2;
    while c <= side {
        for x in 0..c {
            coeffs.load_column(x, &mut column[..c]);
            inverse_step(&mut column[..c], &mut scratch);
            coeffs.store_column(x, &column[..c]);
        }
        for y in 0..c {
            inverse_step(coeffs.row_mut(y, c), &mut scratch);
        }
        c *= 2;
    }
}

/// Zero every coefficient whose magnitude falls below the `percent`
/// percentile of the distinct non-zero magnitudes.
///
/// With `n` distinct magnitudes sorted ascending, the cutoff is the one at
/// index `floor(percent / 100 · (n − 1))`. Returns the cutoff, or `None`
/// when every coefficient is already zero.
pub fn apply_threshold(coeffs: &mut Coefficients, percent: f64) -> Option<f64> {
    let mut magnitudes: Vec<f64> = coeffs
        .values
        .iter()
        .map(|v| v.abs())
        .filter(|&v| v != 0.0)
        .collect();
    if magnitudes.is_empty() {
        return None;
    }
    magnitudes.sort_by(f64::total_cmp);
    magnitudes.dedup();

    let index = (percent / 100.0 * (magnitudes.len() - 1) as f64).floor() as usize;
    let threshold = magnitudes[index.min(magnitudes.len() - 1)];

    for v in coeffs.values.iter_mut() {
        if v.abs() < threshold {
            *v = 0.0;
        }
    }
    Some(threshold)
}
