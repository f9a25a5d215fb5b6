//! Image file I/O.
//!
//! PNG, JPEG and PPM containers are read and written through the `image`
//! crate. Everything past this module works on [`PixelGrid`] only.

mod decode;
mod encode;
mod types;

pub use decode::decode;
pub use encode::{encode, JPEG_QUALITY};
pub use types::{CodecError, ImageFormat};

use std::fs;
use std::path::Path;

use log::debug;

use crate::grid::PixelGrid;

/// Read and decode the image at `path`.
///
/// # Errors
///
/// Returns `CodecError::Io` if the file cannot be read and
/// `CodecError::Decode` if its content is not a supported image.
pub fn load(path: &Path) -> Result<PixelGrid, CodecError> {
    debug!("loading {}", path.display());
    let bytes = fs::read(path).map_err(|e| CodecError::Io(format!("{}: {e}", path.display())))?;
    decode(&bytes)
}

/// Encode `grid` in the format implied by the extension of `path` and
/// write it out.
///
/// # Errors
///
/// Returns `CodecError::UnsupportedFormat` for an unknown extension, any
/// encoder error, or `CodecError::Io` if the file cannot be written.
pub fn save(grid: &PixelGrid, path: &Path) -> Result<(), CodecError> {
    let format = ImageFormat::from_path(path)?;
    let bytes = encode(grid, format)?;
    debug!("saving {} ({:?})", path.display(), format);
    fs::write(path, bytes).map_err(|e| CodecError::Io(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> PixelGrid {
        PixelGrid::from_raw(2, 2, vec![0, 0, 0, 255, 255, 255, 255, 255, 255, 0, 0, 0]).unwrap()
    }

    #[test]
    fn test_save_and_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checker.png");
        save(&checker(), &path).unwrap();
        assert_eq!(load(&path).unwrap(), checker());
    }

    #[test]
    fn test_save_and_load_ppm() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checker.PPM");
        save(&checker(), &path).unwrap();
        assert_eq!(load(&path).unwrap(), checker());
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checker.tiff");
        assert!(matches!(
            save(&checker(), &path),
            Err(CodecError::UnsupportedFormat(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load(&dir.path().join("missing.png")),
            Err(CodecError::Io(_))
        ));
    }
}
