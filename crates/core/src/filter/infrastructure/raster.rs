use std::ops::Range;

use crate::shared::color::Color;
use crate::shared::frame::Frame;

/// Draws a thick line segment from `(x0, y0)` to `(x1, y1)`.
///
/// Bresenham walk stamping a square brush of side `thickness` (half-width
/// `thickness / 2`, floored) at every visited pixel. Pixels outside the
/// frame are clipped individually, so out-of-bounds endpoints are legal.
/// Caller guarantees a 3-channel frame.
pub(super) fn draw_line(
    frame: &mut Frame,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    color: Color,
    thickness: u32,
) {
    let radius = i64::from(thickness / 2);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        stamp(frame, x, y, color, radius);
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

fn stamp(frame: &mut Frame, cx: i64, cy: i64, color: Color, radius: i64) {
    let (xs, ys) = match brush_bounds(frame, cx, cy, radius) {
        Some(bounds) => bounds,
        None => return,
    };
    let width = frame.width() as usize;
    let channels = frame.channels() as usize;
    let bytes = color.channels();
    let data = frame.data_mut();

    for y in ys {
        for x in xs.clone() {
            let idx = (y * width + x) * channels;
            data[idx..idx + bytes.len()].copy_from_slice(&bytes);
        }
    }
}

/// Brush extent around `(cx, cy)` clipped to the frame, or `None` if the
/// brush lies entirely outside.
fn brush_bounds(
    frame: &Frame,
    cx: i64,
    cy: i64,
    radius: i64,
) -> Option<(Range<usize>, Range<usize>)> {
    let w = i64::from(frame.width());
    let h = i64::from(frame.height());
    let x_lo = (cx - radius).max(0);
    let x_hi = (cx + radius).min(w - 1);
    let y_lo = (cy - radius).max(0);
    let y_hi = (cy + radius).min(h - 1);
    if x_lo > x_hi || y_lo > y_hi {
        return None;
    }
    Some((
        x_lo as usize..(x_hi + 1) as usize,
        y_lo as usize..(y_hi + 1) as usize,
    ))
}
