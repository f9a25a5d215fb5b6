//! Histogram visualization.
//!
//! The output is a fixed 256×256 raster: white background, one polyline per
//! channel (or a single dark grey line for monochrome images), and a light
//! grey grid every 16 pixels drawn over the lines. Column `i` plots bin `i`;
//! the tallest bin across all channels reaches row 0.

use super::Histogram;
use crate::grid::{Channel, PixelGrid};

/// Side length of the rendered histogram.
pub const HISTOGRAM_SIZE: u32 = 256;

const GRID_SPACING: usize = 16;

const BACKGROUND: [u8; 3] = [255, 255, 255];
const GRID_LINE: [u8; 3] = [192, 192, 192];
const MONOCHROME_LINE: [u8; 3] = [64, 64, 64];
const CHANNEL_LINES: [[u8; 3]; 3] = [[255, 0, 0], [0, 255, 0], [0, 0, 255]];

/// Render the channel histograms of `grid` as a 256×256 image.
pub fn render_histogram(grid: &PixelGrid) -> PixelGrid {
    let hist = Histogram::from_grid(grid);
    let monochrome = grid.is_monochrome();
    let max = hist.max_value().max(1) as u64;
    let top = (HISTOGRAM_SIZE - 1) as u64;

    let rows: [[i64; 256]; 3] = Channel::ALL.map(|c| {
        let bins = *hist.channel(c);
        bins.map(|freq| (top - (freq as u64 * top / max).min(top)) as i64)
    });

    let mut canvas = PixelGrid::new(HISTOGRAM_SIZE, HISTOGRAM_SIZE).map_pixels(|_| BACKGROUND);

    for i in 1..256usize {
        for (c, row) in rows.iter().enumerate() {
            let color = if monochrome {
                MONOCHROME_LINE
            } else {
                CHANNEL_LINES[c]
            };
            draw_line(&mut canvas, (i as i64 - 1, row[i - 1]), (i as i64, row[i]), color);
        }
    }

    let last = HISTOGRAM_SIZE as i64 - 1;
    for k in (0..HISTOGRAM_SIZE as usize).step_by(GRID_SPACING) {
        let k = k as i64;
        draw_line(&mut canvas, (0, k), (last, k), GRID_LINE);
        draw_line(&mut canvas, (k, 0), (k, last), GRID_LINE);
    }

    canvas
}

/// Bresenham line between two `(x, y)` points, clipped to the canvas.
fn draw_line(canvas: &mut PixelGrid, from: (i64, i64), to: (i64, i64), color: [u8; 3]) {
    let (mut x, mut y) = from;
    let (x1, y1) = to;
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(canvas, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[inline]
fn plot(canvas: &mut PixelGrid, x: i64, y: i64, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(y as u32, x as u32, color);
    }
}
