//! Integer Bresenham line rasterization.

use crate::canvas::view::Canvas;
use crate::color::blend::PixelBlend;
use crate::foundation::error::CanvasResult;

/// Draw a line from `p0` to `p1` inclusive, blending with the canvas mode.
pub fn line(canvas: &mut Canvas<'_>, p0: (i32, i32), p1: (i32, i32), color: u32) -> CanvasResult<()> {
    let mode = canvas.blend_mode();
    line_with(canvas, p0, p1, color, mode)
}

/// Draw a line from `p0` to `p1` inclusive with an explicit blend strategy.
///
/// Every pixel is plotted through the checked path, so an endpoint outside the canvas fails
/// with `OutOfBounds` once the walk reaches it.
pub fn line_with<B: PixelBlend>(
    canvas: &mut Canvas<'_>,
    p0: (i32, i32),
    p1: (i32, i32),
    color: u32,
    blend: B,
) -> CanvasResult<()> {
    let ((x0, y0), (x1, y1)) = (p0, p1);
    let span = |a: i32, b: i32| (i64::from(b) - i64::from(a)).abs();
    if span(y0, y1) < span(x0, x1) {
        if x0 > x1 {
            line_shallow(canvas, (x1, y1), (x0, y0), color, blend)
        } else {
            line_shallow(canvas, (x0, y0), (x1, y1), color, blend)
        }
    } else if y0 > y1 {
        line_steep(canvas, (x1, y1), (x0, y0), color, blend)
    } else {
        line_steep(canvas, (x0, y0), (x1, y1), color, blend)
    }
}

// x is the driving axis; requires x0 <= x1. Deltas are i64 so any i32 endpoints fit.
fn line_shallow<B: PixelBlend>(
    canvas: &mut Canvas<'_>,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    color: u32,
    blend: B,
) -> CanvasResult<()> {
    let dx = i64::from(x1) - i64::from(x0);
    let (dy, yi) = if y1 >= y0 {
        (i64::from(y1) - i64::from(y0), 1)
    } else {
        (i64::from(y0) - i64::from(y1), -1)
    };

    let mut d = 2 * dy - dx;
    let mut y = y0;
    for x in x0..=x1 {
        canvas.blend_pixel_with(x, y, color, blend)?;
        if d > 0 {
            y += yi;
            d += 2 * (dy - dx);
        } else {
            d += 2 * dy;
        }
    }
    Ok(())
}

// y is the driving axis; requires y0 <= y1.
fn line_steep<B: PixelBlend>(
    canvas: &mut Canvas<'_>,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    color: u32,
    blend: B,
) -> CanvasResult<()> {
    let (dx, xi) = if x1 >= x0 {
        (i64::from(x1) - i64::from(x0), 1)
    } else {
        (i64::from(x0) - i64::from(x1), -1)
    };
    let dy = i64::from(y1) - i64::from(y0);

    let mut d = 2 * dx - dy;
    let mut x = x0;
    for y in y0..=y1 {
        canvas.blend_pixel_with(x, y, color, blend)?;
        if d > 0 {
            x += xi;
            d += 2 * (dx - dy);
        } else {
            d += 2 * dx;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/draw/line.rs"]
mod tests;
