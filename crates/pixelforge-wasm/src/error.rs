//! Conversion of Rust errors into JavaScript exceptions.

use std::fmt::Display;

use wasm_bindgen::JsValue;
use web_sys::console;

/// Log `err` to the browser console and wrap it as a thrown string.
pub(crate) fn to_js_error(err: impl Display) -> JsValue {
    let value = JsValue::from_str(&err.to_string());
    console::error_1(&value);
    value
}
