//! Rotated and fully affine blits with inverse-mapped nearest-neighbour sampling.
//!
//! The source rectangle is placed so that its pivot lands on the destination point, rotated
//! (and optionally scaled) around it. The rotated corners give an axis-aligned destination
//! box; every destination pixel in that box is mapped back through the inverse transform and
//! sampled at its centre. Samples that land outside the source are transparent white, and are
//! still blended so that modes which act on transparent input behave consistently.

use kurbo::{Affine, Point, Vec2};

use crate::canvas::view::{Canvas, CanvasRef};
use crate::color::blend::PixelBlend;
use crate::color::pixel::pack;
use crate::foundation::math::round_to_i32;

/// Sample used where the inverse mapping leaves the source.
pub const OUTSIDE_SOURCE: u32 = pack(0xFF, 0xFF, 0xFF, 0x00);

/// Rotate `src` by `radians` around `pivot` (source space) and place the pivot at `at`
/// (destination space), blending with the destination's mode.
pub fn copy_rotated(
    src: &CanvasRef<'_>,
    dst: &mut Canvas<'_>,
    at: (i32, i32),
    pivot: (i32, i32),
    radians: f64,
) {
    let mode = dst.blend_mode();
    copy_rotated_with(src, dst, at, pivot, radians, mode);
}

/// [`copy_rotated`] with an explicit blend strategy.
///
/// Rotation maps `(x, y)` to `(cos*x + sin*y, -sin*x + cos*y)`.
pub fn copy_rotated_with<B: PixelBlend>(
    src: &CanvasRef<'_>,
    dst: &mut Canvas<'_>,
    at: (i32, i32),
    pivot: (i32, i32),
    radians: f64,
    blend: B,
) {
    if src.is_empty() {
        tracing::debug!("copy_rotated: empty source, nothing to draw");
        return;
    }
    let (sin, cos) = radians.sin_cos();
    let rotate = |x: f64, y: f64| Point::new(cos * x + sin * y, -sin * x + cos * y);

    let left = -f64::from(pivot.0);
    let top = -f64::from(pivot.1);
    let right = left + f64::from(src.width());
    let bottom = top + f64::from(src.height());
    let corners = [
        rotate(left, top) + Vec2::new(f64::from(at.0), f64::from(at.1)),
        rotate(right, top) + Vec2::new(f64::from(at.0), f64::from(at.1)),
        rotate(right, bottom) + Vec2::new(f64::from(at.0), f64::from(at.1)),
        rotate(left, bottom) + Vec2::new(f64::from(at.0), f64::from(at.1)),
    ];

    let Some(bounds) = DstBounds::from_corners(corners, dst) else {
        return;
    };
    for y in bounds.y0..bounds.y1 {
        let dy = f64::from(y) + 0.5 - f64::from(at.1);
        for x in bounds.x0..bounds.x1 {
            let dx = f64::from(x) + 0.5 - f64::from(at.0);
            let sx = (cos * dx - sin * dy).floor() as i32 + pivot.0;
            let sy = (sin * dx + cos * dy).floor() as i32 + pivot.1;
            dst.blend_pixel_unchecked_with(x, y, sample(src, sx, sy), blend);
        }
    }
}

/// Scale `src` by `(scale_x, scale_y)`, rotate by `radians` around `pivot` and place the
/// pivot at `at`, blending with the destination's mode.
pub fn copy_affine(
    src: &CanvasRef<'_>,
    dst: &mut Canvas<'_>,
    at: (i32, i32),
    pivot: (i32, i32),
    radians: f64,
    scale: (f64, f64),
) {
    let mode = dst.blend_mode();
    copy_affine_with(src, dst, at, pivot, radians, scale, mode);
}

/// [`copy_affine`] with an explicit blend strategy.
///
/// A zero scale on either axis collapses the source to nothing and draws nothing. Negative
/// scales mirror the source along that axis.
pub fn copy_affine_with<B: PixelBlend>(
    src: &CanvasRef<'_>,
    dst: &mut Canvas<'_>,
    at: (i32, i32),
    pivot: (i32, i32),
    radians: f64,
    scale: (f64, f64),
    blend: B,
) {
    if src.is_empty() || scale.0 == 0.0 || scale.1 == 0.0 {
        tracing::debug!(?scale, "copy_affine: empty effective source, nothing to draw");
        return;
    }

    let forward = Affine::translate((f64::from(at.0), f64::from(at.1)))
        * Affine::rotate(-radians)
        * Affine::scale_non_uniform(scale.0, scale.1)
        * Affine::translate((-f64::from(pivot.0), -f64::from(pivot.1)));
    let (w, h) = (f64::from(src.width()), f64::from(src.height()));
    let corners = [
        forward * Point::new(0.0, 0.0),
        forward * Point::new(w, 0.0),
        forward * Point::new(w, h),
        forward * Point::new(0.0, h),
    ];

    let Some(bounds) = DstBounds::from_corners(corners, dst) else {
        return;
    };
    let inverse = forward.inverse();
    for y in bounds.y0..bounds.y1 {
        for x in bounds.x0..bounds.x1 {
            let p = inverse * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let color = sample(src, p.x.floor() as i32, p.y.floor() as i32);
            dst.blend_pixel_unchecked_with(x, y, color, blend);
        }
    }
}

fn sample(src: &CanvasRef<'_>, x: i32, y: i32) -> u32 {
    if src.is_within_bounds(x, y) {
        src.pixel_unchecked(x, y)
    } else {
        OUTSIDE_SOURCE
    }
}

/// Half-open destination box covered by a transformed source, clipped to the canvas.
struct DstBounds {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl DstBounds {
    fn from_corners(corners: [Point; 4], dst: &Canvas<'_>) -> Option<Self> {
        let xs = corners.map(|p| round_to_i32(p.x));
        let ys = corners.map(|p| round_to_i32(p.y));
        let min = |v: [i32; 4]| v.into_iter().min().unwrap_or(0);
        let max = |v: [i32; 4]| v.into_iter().max().unwrap_or(0);

        let bounds = Self {
            x0: min(xs).max(0),
            y0: min(ys).max(0),
            x1: max(xs).min(dst.width()),
            y1: max(ys).min(dst.height()),
        };
        (bounds.x0 < bounds.x1 && bounds.y0 < bounds.y1).then_some(bounds)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rotate.rs"]
mod tests;
