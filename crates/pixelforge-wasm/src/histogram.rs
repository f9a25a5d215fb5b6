//! Histogram bindings.

use pixelforge_core::grid::Channel;
use pixelforge_core::histogram::{self, Histogram};
use wasm_bindgen::prelude::*;

use crate::error::to_js_error;
use crate::types::JsImage;

/// Histogram result accessible from JavaScript.
///
/// Contains 256-bin histograms for the red, green and blue channels, the
/// mid-tone peak of each channel and clipping flags.
#[wasm_bindgen]
pub struct JsHistogram {
    red: Vec<u32>,
    green: Vec<u32>,
    blue: Vec<u32>,
    peaks: Vec<u32>,
    max_value: u32,
    has_highlight_clipping: bool,
    has_shadow_clipping: bool,
}

#[wasm_bindgen]
impl JsHistogram {
    /// Get red channel histogram (256 bins).
    pub fn red(&self) -> Vec<u32> {
        self.red.clone()
    }

    /// Get green channel histogram (256 bins).
    pub fn green(&self) -> Vec<u32> {
        self.green.clone()
    }

    /// Get blue channel histogram (256 bins).
    pub fn blue(&self) -> Vec<u32> {
        self.blue.clone()
    }

    /// Peak value of each channel as `[red, green, blue]`, ignoring
    /// near-black and near-white bins.
    pub fn peaks(&self) -> Vec<u32> {
        self.peaks.clone()
    }

    /// Get maximum bin value across all RGB channels.
    #[wasm_bindgen(getter)]
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Check if any RGB channel has values at 255 (highlight clipping).
    #[wasm_bindgen(getter)]
    pub fn has_highlight_clipping(&self) -> bool {
        self.has_highlight_clipping
    }

    /// Check if any RGB channel has values at 0 (shadow clipping).
    #[wasm_bindgen(getter)]
    pub fn has_shadow_clipping(&self) -> bool {
        self.has_shadow_clipping
    }
}

impl From<Histogram> for JsHistogram {
    fn from(hist: Histogram) -> Self {
        JsHistogram {
            red: hist.red.to_vec(),
            green: hist.green.to_vec(),
            blue: hist.blue.to_vec(),
            peaks: Channel::ALL.iter().map(|&c| hist.peak(c) as u32).collect(),
            max_value: hist.max_value(),
            has_highlight_clipping: hist.has_highlight_clipping(),
            has_shadow_clipping: hist.has_shadow_clipping(),
        }
    }
}

/// Count the channel values of `image`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const hist = compute_histogram(image);
/// const redBins = hist.red();   // Uint32Array[256]
/// const [r, g, b] = hist.peaks();
/// hist.free();
/// ```
#[wasm_bindgen]
pub fn compute_histogram(image: &JsImage) -> Result<JsHistogram, JsValue> {
    let grid = image.to_grid().map_err(to_js_error)?;
    Ok(Histogram::from_grid(&grid).into())
}

/// Render the 256×256 histogram chart of `image`.
#[wasm_bindgen]
pub fn render_histogram(image: &JsImage) -> Result<JsImage, JsValue> {
    let grid = image.to_grid().map_err(to_js_error)?;
    Ok(JsImage::from_grid(histogram::render_histogram(&grid)))
}
