//! Error type shared by every transform in the engine.

use thiserror::Error;

/// Errors raised by engine operations.
///
/// Every operation validates its arguments before allocating the output
/// grid, so an error always means nothing was produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A numeric parameter was outside its accepted range, or two images
    /// had incompatible dimensions.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Pixel access outside the grid.
    #[error("Pixel ({y}, {x}) channel {channel} is out of bounds")]
    OutOfBounds { y: u32, x: u32, channel: usize },
}

impl EditError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        EditError::InvalidArgument(message.into())
    }
}

/// Result alias used throughout the engine.
pub type EditResult<T> = Result<T, EditError>;
