//! Split-preview bindings.

use pixelforge_core::{preview, EditResult};
use wasm_bindgen::prelude::*;

use crate::error::to_js_error;
use crate::types::JsImage;

/// Cut an image at `percent` of its width.
///
/// Returns a two-element array `[left, right]`.
#[wasm_bindgen]
pub fn split_preview(image: &JsImage, percent: f64) -> Result<js_sys::Array, JsValue> {
    let (left, right) = split_images(image, percent).map_err(to_js_error)?;
    Ok(js_sys::Array::of2(&left.into(), &right.into()))
}

/// Join two images of equal height with a 3-pixel white separator.
#[wasm_bindgen]
pub fn concatenate_preview(left: &JsImage, right: &JsImage) -> Result<JsImage, JsValue> {
    concatenate_images(left, right).map_err(to_js_error)
}

fn split_images(image: &JsImage, percent: f64) -> EditResult<(JsImage, JsImage)> {
    let (left, right) = preview::split(&image.to_grid()?, percent)?;
    Ok((JsImage::from_grid(left), JsImage::from_grid(right)))
}

fn concatenate_images(left: &JsImage, right: &JsImage) -> EditResult<JsImage> {
    preview::concatenate(&left.to_grid()?, &right.to_grid()?).map(JsImage::from_grid)
}
