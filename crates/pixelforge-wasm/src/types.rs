//! WASM-compatible wrapper types for image data.

use pixelforge_core::{EditResult, PixelGrid};
use wasm_bindgen::prelude::*;

/// An RGB image owned by WASM memory.
///
/// Pixels are 3 bytes each, row-major. Calling `pixels()` copies them into a
/// JavaScript `Uint8Array`.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImage {
    /// Create an image from dimensions and RGB pixel data.
    ///
    /// The buffer length is checked when the image is first used.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsImage {
        JsImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional; wasm-bindgen's finalizer releases it otherwise.
    pub fn free(self) {}
}

impl JsImage {
    pub(crate) fn from_grid(grid: PixelGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            pixels: grid.into_raw(),
        }
    }

    /// Copy into a core grid, validating the buffer length.
    pub(crate) fn to_grid(&self) -> EditResult<PixelGrid> {
        PixelGrid::from_raw(self.height, self.width, self.pixels.clone())
    }
}
