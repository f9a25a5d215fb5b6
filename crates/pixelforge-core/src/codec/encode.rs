//! Encoding pixel grids into image containers.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder};
use log::debug;

use super::{CodecError, ImageFormat};
use crate::grid::PixelGrid;

/// JPEG quality used for every export.
pub const JPEG_QUALITY: u8 = 90;

/// Encode `grid` in the requested container.
///
/// # Errors
///
/// Returns `CodecError::EmptyImage` for a zero-sized grid and
/// `CodecError::Encode` if the encoder fails.
pub fn encode(grid: &PixelGrid, format: ImageFormat) -> Result<Vec<u8>, CodecError> {
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return Err(CodecError::EmptyImage { width, height });
    }

    let mut buffer = Cursor::new(Vec::new());
    let pixels = grid.pixels();
    let color = ExtendedColorType::Rgb8;

    let result = match format {
        ImageFormat::Png => PngEncoder::new(&mut buffer).write_image(pixels, width, height, color),
        ImageFormat::Jpeg => JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY)
            .write_image(pixels, width, height, color),
        ImageFormat::Ppm => PnmEncoder::new(&mut buffer)
            .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
            .write_image(pixels, width, height, color),
    };
    result.map_err(|e| CodecError::Encode(e.to_string()))?;

    let bytes = buffer.into_inner();
    debug!(
        "encoded {}x{} image as {:?}: {} bytes",
        width,
        height,
        format,
        bytes.len()
    );
    Ok(bytes)
}
