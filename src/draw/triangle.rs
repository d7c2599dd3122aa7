//! Filled triangle scan conversion.
//!
//! Vertices are sorted by `y` and the triangle is split at the middle vertex into a
//! flat-bottom half (rows `y0..=y1`) and a flat-top half (rows `y1+1..=y2`). Each half is
//! filled row by row between two edges interpolated from its apex, clipped to the canvas.

use std::mem::swap;

use crate::canvas::view::Canvas;
use crate::color::blend::PixelBlend;

/// Fill the triangle `p0, p1, p2`, blending with the canvas mode.
pub fn fill_triangle(
    canvas: &mut Canvas<'_>,
    p0: (i32, i32),
    p1: (i32, i32),
    p2: (i32, i32),
    color: u32,
) {
    let mode = canvas.blend_mode();
    fill_triangle_with(canvas, p0, p1, p2, color, mode);
}

/// Fill the triangle `p0, p1, p2` with an explicit blend strategy.
///
/// Parts outside the canvas are clipped; each covered pixel is blended exactly once. A
/// triangle whose vertices all share one row covers nothing.
pub fn fill_triangle_with<B: PixelBlend>(
    canvas: &mut Canvas<'_>,
    mut p0: (i32, i32),
    mut p1: (i32, i32),
    mut p2: (i32, i32),
    color: u32,
    blend: B,
) {
    if p0.1 > p1.1 {
        swap(&mut p0, &mut p1);
    }
    if p0.1 > p2.1 {
        swap(&mut p0, &mut p2);
    }
    if p1.1 > p2.1 {
        swap(&mut p1, &mut p2);
    }
    let ((x0, y0), (x1, y1), (x2, y2)) = (p0, p1, p2);

    let mut fill = FlatFill {
        canvas,
        color,
        blend,
    };

    if y1 == y2 {
        fill.run((x0, y0), y1, (x1, x2), (y0, y1));
        return;
    }
    if y0 == y1 {
        fill.run((x2, y2), y0, (x0, x1), (y0, y2));
        return;
    }

    let x_split = lerp_x(x0, y0, x2, y2, y1);
    fill.run((x0, y0), y1, (x1, x_split), (y0, y1));
    fill.run((x2, y2), y1, (x1, x_split), (y1 + 1, y2));
}

struct FlatFill<'c, 'a, B> {
    canvas: &'c mut Canvas<'a>,
    color: u32,
    blend: B,
}

impl<B: PixelBlend> FlatFill<'_, '_, B> {
    /// Fill rows `rows.0..=rows.1` of the flat triangle with `apex` and a horizontal base at
    /// `base_y` running between `base_x.0` and `base_x.1`.
    fn run(&mut self, apex: (i32, i32), base_y: i32, base_x: (i32, i32), rows: (i32, i32)) {
        let (ax, ay) = apex;
        if base_y == ay {
            return;
        }
        let (bx_left, bx_right) = (base_x.0.min(base_x.1), base_x.0.max(base_x.1));

        let (width, height) = (self.canvas.width(), self.canvas.height());
        let first = rows.0.min(rows.1).max(0);
        let last = rows.0.max(rows.1).min(height - 1);

        for y in first..=last {
            let x_left = lerp_x(ax, ay, bx_left, base_y, y);
            let x_right = lerp_x(ax, ay, bx_right, base_y, y);
            for x in x_left.max(0)..x_right.saturating_add(1).min(width) {
                self.canvas
                    .blend_pixel_unchecked_with(x, y, self.color, self.blend);
            }
        }
    }
}

/// X coordinate at row `y` on the edge `(xa, ya) -> (xb, yb)`, saturated to `i32`; requires
/// `ya != yb`.
fn lerp_x(xa: i32, ya: i32, xb: i32, yb: i32, y: i32) -> i32 {
    let num = (i128::from(y) - i128::from(ya)) * (i128::from(xb) - i128::from(xa));
    let x = i128::from(xa) + num / (i128::from(yb) - i128::from(ya));
    x.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/draw/triangle.rs"]
mod tests;
