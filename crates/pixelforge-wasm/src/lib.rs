//! PixelForge WASM - WebAssembly bindings for PixelForge
//!
//! This crate exposes the pixelforge-core engine to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `types` - `JsImage`, the RGB image wrapper shared by every binding
//! - `codec` - PNG/JPEG/PPM decode and encode
//! - `operation` - Edit operations described as JS objects
//! - `preview` - Split-screen preview helpers
//! - `histogram` - Histogram data and chart rendering
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, apply_operation } from '@pixelforge/wasm';
//!
//! await init();
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const preview = apply_operation(image, { op: "blur" }, 50);
//! ```

use wasm_bindgen::prelude::*;

mod codec;
mod error;
mod histogram;
mod operation;
mod preview;
mod types;

pub use codec::{decode_image, encode_image};
pub use histogram::{compute_histogram, render_histogram, JsHistogram};
pub use operation::{apply_operation, apply_pipeline, supports_preview};
pub use preview::{concatenate_preview, split_preview};
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
