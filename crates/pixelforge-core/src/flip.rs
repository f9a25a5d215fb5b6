//! Horizontal and vertical mirroring.

use serde::{Deserialize, Serialize};

use crate::grid::PixelGrid;

/// Mirror axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipAxis {
    /// Left-right mirror: column `x` moves to `width - 1 - x`.
    Horizontal,
    /// Top-bottom mirror: row `y` moves to `height - 1 - y`.
    Vertical,
}

/// Mirror the image along `axis`.
pub fn flip(grid: &PixelGrid, axis: FlipAxis) -> PixelGrid {
    let (height, width) = (grid.height(), grid.width());
    let mut out = PixelGrid::new(height, width);

    for y in 0..height {
        for x in 0..width {
            let (src_y, src_x) = match axis {
                FlipAxis::Horizontal => (y, width - 1 - x),
                FlipAxis::Vertical => (height - 1 - y, x),
            };
            out.put_pixel(y, x, grid.pixel(src_y, src_x));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(height: u32, width: u32) -> PixelGrid {
        let mut pixels = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let v = (y * width + x) as u8;
                pixels.extend_from_slice(&[v, v.wrapping_add(100), v.wrapping_mul(2)]);
            }
        }
        PixelGrid::from_raw(height, width, pixels).unwrap()
    }

    #[test]
    fn test_horizontal_flip() {
        let grid = numbered(2, 3);
        let out = flip(&grid, FlipAxis::Horizontal);
        assert_eq!(out.pixel(0, 0), grid.pixel(0, 2));
        assert_eq!(out.pixel(0, 2), grid.pixel(0, 0));
        assert_eq!(out.pixel(1, 1), grid.pixel(1, 1));
    }

    #[test]
    fn test_vertical_flip() {
        let grid = numbered(3, 2);
        let out = flip(&grid, FlipAxis::Vertical);
        assert_eq!(out.pixel(0, 0), grid.pixel(2, 0));
        assert_eq!(out.pixel(2, 1), grid.pixel(0, 1));
        assert_eq!(out.pixel(1, 0), grid.pixel(1, 0));
    }

    #[test]
    fn test_flip_empty_image() {
        let grid = PixelGrid::new(0, 0);
        let out = flip(&grid, FlipAxis::Horizontal);
        assert!(out.is_empty());
    }

    #[test]
    fn test_flip_single_column_horizontal_is_identity() {
        let grid = numbered(4, 1);
        assert_eq!(flip(&grid, FlipAxis::Horizontal), grid);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn grid_strategy() -> impl Strategy<Value = PixelGrid> {
        (1u32..=16, 1u32..=16).prop_flat_map(|(h, w)| {
            proptest::collection::vec(any::<u8>(), (h * w * 3) as usize)
                .prop_map(move |pixels| PixelGrid::from_raw(h, w, pixels).unwrap())
        })
    }

    proptest! {
        /// Property: flipping twice along the same axis restores the image.
        #[test]
        fn prop_flip_is_involution(grid in grid_strategy(), vertical in any::<bool>()) {
            let axis = if vertical { FlipAxis::Vertical } else { FlipAxis::Horizontal };
            let twice = flip(&flip(&grid, axis), axis);
            prop_assert_eq!(twice, grid);
        }

        /// Property: flipping keeps the dimensions.
        #[test]
        fn prop_flip_keeps_dimensions(grid in grid_strategy(), vertical in any::<bool>()) {
            let axis = if vertical { FlipAxis::Vertical } else { FlipAxis::Horizontal };
            let out = flip(&grid, axis);
            prop_assert_eq!((out.height(), out.width()), (grid.height(), grid.width()));
        }
    }
}
