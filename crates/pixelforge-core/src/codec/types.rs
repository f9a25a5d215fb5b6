//! Core types for image file I/O.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading or writing image files.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The file extension does not name a supported container.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The bytes could not be decoded as an image.
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// The encoder rejected the pixel data.
    #[error("Failed to encode image: {0}")]
    Encode(String),

    /// Reading or writing the file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Zero-sized images cannot be written by any supported encoder.
    #[error("Cannot encode an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },
}

/// Supported file containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    /// Binary portable pixmap (P6).
    Ppm,
}

impl ImageFormat {
    /// Match a file extension, ignoring case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "ppm" => Some(ImageFormat::Ppm),
            _ => None,
        }
    }

    /// Pick the format from the extension of `path`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for a missing or unknown extension.
    pub fn from_path(path: &Path) -> Result<Self, CodecError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| CodecError::UnsupportedFormat(path.display().to_string()))
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Ppm => "ppm",
        }
    }
}
