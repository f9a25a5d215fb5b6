//! Lossy compression through a 2D Haar wavelet.
//!
//! Each channel is padded to a power-of-two square, transformed, stripped
//! of its smallest coefficients and reconstructed. The image keeps its
//! dimensions; only detail is lost.

mod haar;

pub use haar::{apply_threshold, haar_forward_2d, haar_inverse_2d, Coefficients};

use log::debug;

use crate::error::{EditError, EditResult};
use crate::grid::{round_to_u8, Channel, PixelGrid};

/// Compress `grid`, discarding detail according to `percent` (0-100).
///
/// `0` reconstructs the image up to rounding; `100` keeps only the
/// largest coefficients of each channel.
///
/// # Errors
///
/// Returns `InvalidArgument` if `percent` is outside `[0, 100]`.
pub fn compress(grid: &PixelGrid, percent: f64) -> EditResult<PixelGrid> {
    if !(0.0..=100.0).contains(&percent) {
        return Err(EditError::invalid(format!(
            "compression percent must be between 0 and 100, got {percent}"
        )));
    }

    let (height, width) = (grid.height() as usize, grid.width() as usize);
    if height == 1 || width <= 1 {
        return Ok(grid.clone());
    }

    let mut out = grid.clone();
    for channel in Channel::ALL {
        let c = channel.index();
        let values: Vec<f64> = grid.pixels().chunks_exact(3).map(|p| p[c] as f64).collect();

        let mut coeffs = Coefficients::from_channel(&values, height, width);
        haar_forward_2d(&mut coeffs);
        let threshold = apply_threshold(&mut coeffs, percent);
        haar_inverse_2d(&mut coeffs);

        debug!(
            "haar {:?}: side {}, threshold {:?}",
            channel,
            coeffs.side(),
            threshold
        );

        let restored = coeffs.crop(height, width);
        for (y, row) in restored.chunks_exact(width).enumerate() {
            for (x, &v) in row.iter().enumerate() {
                out.set(y as u32, x as u32, c, round_to_u8(v))?;
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(height: u32, width: u32) -> PixelGrid {
        let mut pixels = Vec::new();
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[(x * 20) as u8, (y * 30) as u8, ((x + y) * 10) as u8]);
            }
        }
        PixelGrid::from_raw(height, width, pixels).unwrap()
    }

    #[test]
    fn test_rejects_out_of_range_percent() {
        let grid = gradient(4, 4);
        assert!(compress(&grid, 240.0).is_err());
        assert!(compress(&grid, -1.0).is_err());
        assert!(compress(&grid, f64::NAN).is_err());
    }

    #[test]
    fn test_zero_percent_is_lossless() {
        let grid = gradient(5, 7);
        assert_eq!(compress(&grid, 0.0).unwrap(), grid);
    }

    #[test]
    fn test_uniform_image_survives_full_compression() {
        let grid = PixelGrid::from_raw(4, 4, vec![100; 48]).unwrap();
        assert_eq!(compress(&grid, 100.0).unwrap(), grid);
    }

    #[test]
    fn test_full_compression_loses_detail() {
        let grid = gradient(8, 8);
        let out = compress(&grid, 100.0).unwrap();
        assert_eq!((out.height(), out.width()), (8, 8));
        assert_ne!(out, grid);
    }

    #[test]
    fn test_degenerate_shapes_pass_through() {
        let row = gradient(1, 6);
        assert_eq!(compress(&row, 90.0).unwrap(), row);
        let column = gradient(6, 1);
        assert_eq!(compress(&column, 90.0).unwrap(), column);
        let empty = PixelGrid::new(0, 0);
        assert_eq!(compress(&empty, 50.0).unwrap(), empty);
    }
}
