//! Serializable description of a single edit.
//!
//! Front ends build an [`Operation`] (directly, from JSON via serde, or from
//! a script command) and hand it to the engine, which dispatches to the
//! matching transform.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::brightness::adjust_brightness;
use crate::channel::{derive_channel, DerivedChannel};
use crate::color_transform::{apply_color_transform, GREYSCALE, SEPIA};
use crate::component::extract_component;
use crate::compress::compress;
use crate::error::{EditError, EditResult};
use crate::filter::{convolve, Kernel};
use crate::flip::{flip, FlipAxis};
use crate::grid::{Channel, PixelGrid};
use crate::histogram::color_correct;
use crate::levels::adjust_levels;
use crate::preview;

/// One image transform with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Operation {
    /// Keep one channel, zero the others.
    Component { channel: Channel },
    /// Replace every pixel with a derived grey value.
    Derive { mode: DerivedChannel },
    Flip { axis: FlipAxis },
    /// Add `delta` to every channel.
    Brightness { delta: i32 },
    Greyscale,
    Sepia,
    Blur,
    Sharpen,
    ColorCorrect,
    /// Quadratic level curve through the three control points.
    Levels { shadow: i32, mid: i32, highlight: i32 },
    /// Haar compression discarding `percent` of the detail.
    Compress { percent: f64 },
}

impl Operation {
    /// Short kebab-case name, matching the serialized tag.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Component { .. } => "component",
            Operation::Derive { .. } => "derive",
            Operation::Flip { .. } => "flip",
            Operation::Brightness { .. } => "brightness",
            Operation::Greyscale => "greyscale",
            Operation::Sepia => "sepia",
            Operation::Blur => "blur",
            Operation::Sharpen => "sharpen",
            Operation::ColorCorrect => "color-correct",
            Operation::Levels { .. } => "levels",
            Operation::Compress { .. } => "compress",
        }
    }

    /// Whether the operation can be shown as a split preview.
    pub fn supports_preview(&self) -> bool {
        matches!(
            self,
            Operation::Derive { .. }
                | Operation::Greyscale
                | Operation::Sepia
                | Operation::Blur
                | Operation::Sharpen
                | Operation::ColorCorrect
                | Operation::Levels { .. }
        )
    }

    /// Apply the operation to the whole image.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidArgument` from parameterized transforms.
    pub fn apply(&self, grid: &PixelGrid) -> EditResult<PixelGrid> {
        debug!(
            "applying {} to {}x{} image",
            self.name(),
            grid.width(),
            grid.height()
        );
        let out = match *self {
            Operation::Component { channel } => extract_component(grid, channel),
            Operation::Derive { mode } => derive_channel(grid, mode),
            Operation::Flip { axis } => flip(grid, axis),
            Operation::Brightness { delta } => adjust_brightness(grid, delta),
            Operation::Greyscale => apply_color_transform(grid, &GREYSCALE),
            Operation::Sepia => apply_color_transform(grid, &SEPIA),
            Operation::Blur => convolve(grid, &Kernel::blur()),
            Operation::Sharpen => convolve(grid, &Kernel::sharpen()),
            Operation::ColorCorrect => color_correct(grid),
            Operation::Levels {
                shadow,
                mid,
                highlight,
            } => adjust_levels(grid, shadow, mid, highlight)?,
            Operation::Compress { percent } => compress(grid, percent)?,
        };
        Ok(out)
    }

    /// Apply the operation to the left `percent` of the image.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an out-of-range percent, or for a
    /// percent other than 100 on an operation without preview support.
    pub fn apply_with_preview(&self, grid: &PixelGrid, percent: f64) -> EditResult<PixelGrid> {
        if percent != 100.0 && !self.supports_preview() {
            return Err(EditError::invalid(format!(
                "{} does not support split preview",
                self.name()
            )));
        }
        preview::apply_with_preview(grid, percent, |part| self.apply(part))
    }
}
