//! Decoding image containers into pixel grids.

use std::io::Cursor;

use image::ImageReader;
use log::debug;

use super::CodecError;
use crate::grid::PixelGrid;

/// Decode PNG, JPEG or PPM bytes into an RGB grid.
///
/// The container is detected from the content, not a file name. Alpha is
/// dropped and grey images are expanded to three channels.
///
/// # Errors
///
/// Returns `CodecError::Decode` if the format is unknown or the data is
/// corrupted.
pub fn decode(bytes: &[u8]) -> Result<PixelGrid, CodecError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CodecError::Decode(e.to_string()))?;

    let format = reader.format();
    let img = reader
        .decode()
        .map_err(|e| CodecError::Decode(e.to_string()))?;

    debug!(
        "decoded {:?} image: {}x{}",
        format,
        img.width(),
        img.height()
    );
    Ok(PixelGrid::from_rgb_image(img.into_rgb8()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ascii_ppm() {
        let bytes = b"P3\n2 1\n255\n255 0 0  0 0 255\n";
        let grid = decode(bytes).unwrap();
        assert_eq!((grid.height(), grid.width()), (1, 2));
        assert_eq!(grid.pixel(0, 0), [255, 0, 0]);
        assert_eq!(grid.pixel(0, 1), [0, 0, 255]);
    }

    #[test]
    fn test_decode_binary_ppm() {
        let mut bytes = b"P6\n1 2\n255\n".to_vec();
        bytes.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        let grid = decode(&bytes).unwrap();
        assert_eq!((grid.height(), grid.width()), (2, 1));
        assert_eq!(grid.pixel(1, 0), [4, 5, 6]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            decode(&[0x00, 0x01, 0x02, 0x03]),
            Err(CodecError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_empty_fails() {
        assert!(decode(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_png_fails() {
        let bytes = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        assert!(matches!(decode(&bytes), Err(CodecError::Decode(_))));
    }
}
