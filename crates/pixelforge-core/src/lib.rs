//! PixelForge Core - Image transform engine
//!
//! This crate provides the pixel model and every transform of PixelForge:
//! channel extraction, flips, brightness, color matrices, convolution
//! filters, histogram color correction, level curves, Haar wavelet
//! compression and split-screen previews. File I/O and a small scripting
//! language sit on top of the engine.
//!
//! Every transform borrows its source grid and returns a new one; nothing
//! is modified in place.

pub mod brightness;
pub mod channel;
pub mod codec;
pub mod color_transform;
pub mod component;
pub mod compress;
pub mod error;
pub mod filter;
pub mod flip;
pub mod grid;
pub mod histogram;
pub mod levels;
pub mod luminance;
pub mod operation;
pub mod preview;
pub mod script;

pub use brightness::adjust_brightness;
pub use channel::{derive_channel, DerivedChannel};
pub use codec::{CodecError, ImageFormat};
pub use color_transform::{apply_color_transform, ColorMatrix, GREYSCALE, SEPIA};
pub use component::{combine_rgb, extract_component, split_rgb};
pub use compress::compress;
pub use error::{EditError, EditResult};
pub use filter::{convolve, Kernel};
pub use flip::{flip, FlipAxis};
pub use grid::{Channel, PixelGrid};
pub use histogram::{color_correct, render_histogram, Histogram};
pub use levels::{adjust_levels, LevelCurve};
pub use operation::Operation;
pub use preview::{apply_with_preview, concatenate, split};
pub use script::{ScriptError, Session};
