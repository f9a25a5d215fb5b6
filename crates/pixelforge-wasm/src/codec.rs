//! Image decode/encode bindings.

use pixelforge_core::codec::{self, CodecError, ImageFormat};
use wasm_bindgen::prelude::*;

use crate::error::to_js_error;
use crate::types::JsImage;

/// Decode PNG, JPEG or PPM bytes into an RGB image.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsImage, JsValue> {
    codec::decode(bytes)
        .map(JsImage::from_grid)
        .map_err(to_js_error)
}

/// Encode an image. `format` is a file extension: `png`, `jpg`/`jpeg` or
/// `ppm`.
#[wasm_bindgen]
pub fn encode_image(image: &JsImage, format: &str) -> Result<Vec<u8>, JsValue> {
    encode_with_extension(image, format).map_err(to_js_error)
}

fn encode_with_extension(image: &JsImage, extension: &str) -> Result<Vec<u8>, CodecError> {
    let format = ImageFormat::from_extension(extension)
        .ok_or_else(|| CodecError::UnsupportedFormat(extension.to_string()))?;
    let grid = image
        .to_grid()
        .map_err(|e| CodecError::Encode(e.to_string()))?;
    codec::encode(&grid, format)
}
