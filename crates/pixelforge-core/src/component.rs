//! Color component extraction and recombination.
//!
//! A component image keeps one channel of the source and zeroes the other
//! two. Three component images can be recombined into a full RGB image.

use crate::error::{EditError, EditResult};
use crate::grid::{Channel, PixelGrid};

/// Keep only `channel`, zeroing the other two.
pub fn extract_component(grid: &PixelGrid, channel: Channel) -> PixelGrid {
    let keep = channel.index();
    grid.map_pixels(|rgb| {
        let mut out = [0u8; 3];
        out[keep] = rgb[keep];
        out
    })
}

/// Split an image into its red, green and blue component images.
pub fn split_rgb(grid: &PixelGrid) -> (PixelGrid, PixelGrid, PixelGrid) {
    (
        extract_component(grid, Channel::Red),
        extract_component(grid, Channel::Green),
        extract_component(grid, Channel::Blue),
    )
}

/// Combine the red channel of `red`, the green channel of `green` and the
/// blue channel of `blue` into one image.
///
/// # Errors
///
/// Returns `InvalidArgument` unless all three images have the same size.
pub fn combine_rgb(red: &PixelGrid, green: &PixelGrid, blue: &PixelGrid) -> EditResult<PixelGrid> {
    let dims = (red.height(), red.width());
    if (green.height(), green.width()) != dims || (blue.height(), blue.width()) != dims {
        return Err(EditError::invalid(format!(
            "cannot combine images of sizes {}x{}, {}x{} and {}x{}",
            red.width(),
            red.height(),
            green.width(),
            green.height(),
            blue.width(),
            blue.height()
        )));
    }

    let pixels = red
        .pixels()
        .chunks_exact(3)
        .zip(green.pixels().chunks_exact(3))
        .zip(blue.pixels().chunks_exact(3))
        .flat_map(|((r, g), b)| [r[0], g[1], b[2]])
        .collect();
    PixelGrid::from_raw(dims.0, dims.1, pixels)
}
