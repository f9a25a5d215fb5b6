//! Split-screen previews.
//!
//! A preview applies a transform to the left `percent` of the image only and
//! places it next to the untouched remainder, separated by a white bar.

use crate::error::{EditError, EditResult};
use crate::grid::PixelGrid;

/// Width of the white bar between the two halves of a preview.
pub const SEPARATOR_WIDTH: u32 = 3;

const SEPARATOR: [u8; 3] = [255, 255, 255];

fn check_percent(percent: f64) -> EditResult<()> {
    if !(0.0..=100.0).contains(&percent) {
        return Err(EditError::invalid(format!(
            "preview percent must be between 0 and 100, got {percent}"
        )));
    }
    Ok(())
}

/// Cut `grid` vertically at `floor(width · percent / 100)`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `percent` is outside `[0, 100]`.
pub fn split(grid: &PixelGrid, percent: f64) -> EditResult<(PixelGrid, PixelGrid)> {
    check_percent(percent)?;
    let left_width = ((grid.width() as f64 * percent / 100.0).floor() as u32).min(grid.width());
    let left = grid.columns(0, left_width);
    let right = grid.columns(left_width, grid.width() - left_width);
    Ok((left, right))
}

/// Place `left` and `right` side by side with a white separator between.
///
/// # Errors
///
/// Returns `InvalidArgument` if the heights differ.
pub fn concatenate(left: &PixelGrid, right: &PixelGrid) -> EditResult<PixelGrid> {
    if left.height() != right.height() {
        return Err(EditError::invalid(format!(
            "cannot concatenate images of height {} and {}",
            left.height(),
            right.height()
        )));
    }

    let width = left.width() + SEPARATOR_WIDTH + right.width();
    let mut out = PixelGrid::new(left.height(), width);
    out.paste_columns(left, 0);
    for y in 0..out.height() {
        for x in left.width()..left.width() + SEPARATOR_WIDTH {
            out.put_pixel(y, x, SEPARATOR);
        }
    }
    out.paste_columns(right, left.width() + SEPARATOR_WIDTH);
    Ok(out)
}

/// Run `transform` on the left `percent` of `grid` and join it with the
/// untouched right side. At 100 the whole image is transformed and no
/// separator is added.
///
/// # Errors
///
/// Returns `InvalidArgument` for an out-of-range `percent`, or whatever
/// `transform` returns.
pub fn apply_with_preview<F>(grid: &PixelGrid, percent: f64, transform: F) -> EditResult<PixelGrid>
where
    F: FnOnce(&PixelGrid) -> EditResult<PixelGrid>,
{
    check_percent(percent)?;
    if percent == 100.0 {
        return transform(grid);
    }
    let (left, right) = split(grid, percent)?;
    concatenate(&transform(&left)?, &right)
}
