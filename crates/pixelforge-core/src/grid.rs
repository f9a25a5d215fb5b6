//! The pixel data model.
//!
//! A [`PixelGrid`] is an 8-bit RGB raster stored row-major with three bytes
//! per pixel. Dimensions are fixed at construction and the buffer is only
//! reachable through accessors, so two grids never share storage.

use serde::{Deserialize, Serialize};

use crate::error::{EditError, EditResult};

/// One of the three color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Index of this channel inside a pixel (R=0, G=1, B=2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Byte length of an RGB buffer, or `None` on overflow.
fn buffer_len(height: u32, width: u32) -> Option<usize> {
    (height as usize)
        .checked_mul(width as usize)?
        .checked_mul(3)
}

/// An RGB image with 8-bit channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    height: u32,
    width: u32,
    pixels: Vec<u8>,
}

impl PixelGrid {
    /// Create a black image of the given size.
    pub fn new(height: u32, width: u32) -> Self {
        Self {
            height,
            width,
            pixels: vec![0u8; buffer_len(height, width).unwrap_or(usize::MAX)],
        }
    }

    /// Wrap an existing row-major RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `pixels.len() != height * width * 3`, or
    /// if that size does not fit in `usize`.
    pub fn from_raw(height: u32, width: u32, pixels: Vec<u8>) -> EditResult<Self> {
        let expected = buffer_len(height, width).ok_or_else(|| {
            EditError::invalid(format!("image of {}x{} is too large", width, height))
        })?;
        if pixels.len() != expected {
            return Err(EditError::invalid(format!(
                "pixel buffer holds {} bytes, expected {} for {}x{}",
                pixels.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    /// Create a grid from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            height,
            width,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an `image::RgbImage` for encoding.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.height as usize * self.width as usize
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// The whole buffer, row-major, 3 bytes per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the grid and return its buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    #[inline]
    fn offset(&self, y: u32, x: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    fn checked_offset(&self, y: u32, x: u32, channel: usize) -> EditResult<usize> {
        if y >= self.height || x >= self.width || channel > 2 {
            return Err(EditError::OutOfBounds { y, x, channel });
        }
        Ok(self.offset(y, x) + channel)
    }

    /// Read one channel value.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinates or channel are outside the grid.
    pub fn get(&self, y: u32, x: u32, channel: usize) -> EditResult<u8> {
        let idx = self.checked_offset(y, x, channel)?;
        Ok(self.pixels[idx])
    }

    /// Write one channel value.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinates or channel are outside the grid.
    pub fn set(&mut self, y: u32, x: u32, channel: usize, value: u8) -> EditResult<()> {
        let idx = self.checked_offset(y, x, channel)?;
        self.pixels[idx] = value;
        Ok(())
    }

    /// Write one channel value, clamping it to 0-255 first.
    pub fn set_clamped(&mut self, y: u32, x: u32, channel: usize, value: i32) -> EditResult<()> {
        self.set(y, x, channel, clamp_u8(value))
    }

    /// RGB triple at `(y, x)`.
    ///
    /// Panics if the coordinates are outside the grid; transforms only call
    /// this while iterating over known dimensions.
    #[inline]
    pub fn pixel(&self, y: u32, x: u32) -> [u8; 3] {
        let i = self.offset(y, x);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Overwrite the RGB triple at `(y, x)`. Panics outside the grid.
    #[inline]
    pub fn put_pixel(&mut self, y: u32, x: u32, rgb: [u8; 3]) {
        let i = self.offset(y, x);
        self.pixels[i..i + 3].copy_from_slice(&rgb);
    }

    /// Build a new grid by applying `f` to every pixel.
    pub fn map_pixels<F>(&self, mut f: F) -> PixelGrid
    where
        F: FnMut([u8; 3]) -> [u8; 3],
    {
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for chunk in self.pixels.chunks_exact(3) {
            pixels.extend_from_slice(&f([chunk[0], chunk[1], chunk[2]]));
        }
        PixelGrid {
            height: self.height,
            width: self.width,
            pixels,
        }
    }

    /// True when every pixel has R = G = B.
    pub fn is_monochrome(&self) -> bool {
        self.pixels
            .chunks_exact(3)
            .all(|p| p[0] == p[1] && p[1] == p[2])
    }

    /// Copy the columns `[x_start, x_start + width)` into a new grid.
    pub(crate) fn columns(&self, x_start: u32, width: u32) -> PixelGrid {
        let mut out = PixelGrid::new(self.height, width);
        let row_bytes = width as usize * 3;
        for y in 0..self.height {
            let src = self.offset(y, x_start);
            let dst = out.offset(y, 0);
            out.pixels[dst..dst + row_bytes].copy_from_slice(&self.pixels[src..src + row_bytes]);
        }
        out
    }

    /// Paste `other` so that its left edge lands on column `x_start`.
    pub(crate) fn paste_columns(&mut self, other: &PixelGrid, x_start: u32) {
        let row_bytes = other.width as usize * 3;
        for y in 0..self.height.min(other.height) {
            let src = other.offset(y, 0);
            let dst = self.offset(y, x_start);
            self.pixels[dst..dst + row_bytes].copy_from_slice(&other.pixels[src..src + row_bytes]);
        }
    }
}

/// Clamp an integer into the 0-255 channel range.
#[inline]
pub fn clamp_u8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Round a real value to the nearest integer and clamp it into 0-255.
#[inline]
pub fn round_to_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_black() {
        let grid = PixelGrid::new(4, 5);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.pixels().len(), 60);
        assert!(grid.pixels().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_zero_sized_grid() {
        let grid = PixelGrid::new(0, 10);
        assert!(grid.is_empty());
        assert_eq!(grid.pixel_count(), 0);
    }

    #[test]
    fn test_from_raw_rejects_bad_length() {
        let result = PixelGrid::from_raw(2, 2, vec![0u8; 11]);
        assert!(matches!(result, Err(EditError::InvalidArgument(_))));
    }

    #[test]
    fn test_from_raw_rejects_overflowing_dims() {
        let result = PixelGrid::from_raw(u32::MAX, u32::MAX, vec![]);
        assert!(matches!(result, Err(EditError::InvalidArgument(_))));
        assert_eq!(buffer_len(u32::MAX, u32::MAX), None);
        assert_eq!(buffer_len(2, 5), Some(30));
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut grid = PixelGrid::new(3, 3);
        grid.set(1, 2, 0, 200).unwrap();
        grid.set(1, 2, 2, 17).unwrap();
        assert_eq!(grid.get(1, 2, 0).unwrap(), 200);
        assert_eq!(grid.get(1, 2, 1).unwrap(), 0);
        assert_eq!(grid.get(1, 2, 2).unwrap(), 17);
        assert_eq!(grid.pixel(1, 2), [200, 0, 17]);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = PixelGrid::new(3, 4);
        assert!(matches!(
            grid.get(3, 0, 0),
            Err(EditError::OutOfBounds { y: 3, .. })
        ));
        assert!(matches!(
            grid.get(0, 4, 0),
            Err(EditError::OutOfBounds { x: 4, .. })
        ));
        assert!(matches!(
            grid.get(0, 0, 3),
            Err(EditError::OutOfBounds { channel: 3, .. })
        ));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = PixelGrid::new(2, 2);
        assert!(grid.set(2, 0, 0, 1).is_err());
        assert!(grid.set(0, 0, 5, 1).is_err());
    }

    #[test]
    fn test_set_clamped() {
        let mut grid = PixelGrid::new(1, 1);
        grid.set_clamped(0, 0, 0, 300).unwrap();
        grid.set_clamped(0, 0, 1, -20).unwrap();
        grid.set_clamped(0, 0, 2, 99).unwrap();
        assert_eq!(grid.pixel(0, 0), [255, 0, 99]);
    }

    #[test]
    fn test_map_pixels_does_not_touch_source() {
        let grid = PixelGrid::from_raw(1, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let swapped = grid.map_pixels(|[r, g, b]| [b, g, r]);
        assert_eq!(swapped.pixels(), &[3, 2, 1, 6, 5, 4]);
        assert_eq!(grid.pixels(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_is_monochrome() {
        let grey = PixelGrid::from_raw(1, 2, vec![9, 9, 9, 200, 200, 200]).unwrap();
        assert!(grey.is_monochrome());
        let color = PixelGrid::from_raw(1, 2, vec![9, 9, 9, 200, 201, 200]).unwrap();
        assert!(!color.is_monochrome());
    }

    #[test]
    fn test_columns_and_paste() {
        let grid = PixelGrid::from_raw(
            2,
            3,
            vec![
                1, 1, 1, 2, 2, 2, 3, 3, 3, //
                4, 4, 4, 5, 5, 5, 6, 6, 6,
            ],
        )
        .unwrap();
        let right = grid.columns(1, 2);
        assert_eq!(right.width(), 2);
        assert_eq!(right.pixel(0, 0), [2, 2, 2]);
        assert_eq!(right.pixel(1, 1), [6, 6, 6]);

        let mut canvas = PixelGrid::new(2, 4);
        canvas.paste_columns(&right, 2);
        assert_eq!(canvas.pixel(0, 2), [2, 2, 2]);
        assert_eq!(canvas.pixel(1, 3), [6, 6, 6]);
        assert_eq!(canvas.pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_rgb_image_conversion() {
        let grid = PixelGrid::from_raw(1, 2, vec![10, 20, 30, 40, 50, 60]).unwrap();
        let img = grid.to_rgb_image().unwrap();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(1, 0).0, [40, 50, 60]);
        let back = PixelGrid::from_rgb_image(img);
        assert_eq!(back, grid);
    }

    #[test]
    fn test_channel_index() {
        assert_eq!(Channel::Red.index(), 0);
        assert_eq!(Channel::Green.index(), 1);
        assert_eq!(Channel::Blue.index(), 2);
    }

    #[test]
    fn test_clamp_helpers() {
        assert_eq!(clamp_u8(-5), 0);
        assert_eq!(clamp_u8(256), 255);
        assert_eq!(round_to_u8(127.5), 128);
        assert_eq!(round_to_u8(-0.4), 0);
        assert_eq!(round_to_u8(900.0), 255);
    }
}
