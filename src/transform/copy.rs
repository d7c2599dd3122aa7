use crate::canvas::view::{Canvas, CanvasRef};
use crate::color::blend::PixelBlend;
use crate::foundation::math::sort_top_left;

/// Scale the whole of `src` onto the destination rectangle `p0 -> p1`, blending with the
/// destination's mode.
pub fn copy_rect(src: &CanvasRef<'_>, dst: &mut Canvas<'_>, p0: (i32, i32), p1: (i32, i32)) {
    let mode = dst.blend_mode();
    copy_rect_with(src, dst, p0, p1, mode);
}

/// Scale the whole of `src` onto the destination rectangle `p0 -> p1` (half-open).
///
/// Each axis maps linearly, `src = (dst - origin) * src_extent / dst_extent`, with
/// nearest-lower sampling. `p0.x > p1.x` mirrors horizontally and `p0.y > p1.y` vertically.
/// The rectangle is clipped to the destination; an empty source draws nothing.
pub fn copy_rect_with<B: PixelBlend>(
    src: &CanvasRef<'_>,
    dst: &mut Canvas<'_>,
    p0: (i32, i32),
    p1: (i32, i32),
    blend: B,
) {
    if src.is_empty() {
        tracing::debug!("copy_rect: empty source, nothing to draw");
        return;
    }

    let target_w = (i64::from(p0.0) - i64::from(p1.0)).abs();
    let target_h = (i64::from(p0.1) - i64::from(p1.1)).abs();
    let mirrored_x = p0.0 > p1.0;
    let mirrored_y = p0.1 > p1.1;
    let (left, top, right, bottom) = sort_top_left(p0.0, p0.1, p1.0, p1.1);

    let (src_w, src_h) = (src.width(), src.height());
    let (start_x, end_x) = (left.max(0), right.min(dst.width()));
    let (start_y, end_y) = (top.max(0), bottom.min(dst.height()));

    for dst_y in start_y..end_y {
        let mut src_y = scale_offset(dst_y, top, src_h, target_h);
        if mirrored_y {
            src_y = src.height() - 1 - src_y;
        }
        for dst_x in start_x..end_x {
            let mut src_x = scale_offset(dst_x, left, src_w, target_w);
            if mirrored_x {
                src_x = src.width() - 1 - src_x;
            }
            dst.blend_pixel_unchecked_with(dst_x, dst_y, src.pixel_unchecked(src_x, src_y), blend);
        }
    }
}

/// `(dst - origin) * src_extent / target_extent` for `origin <= dst < origin + target_extent`.
fn scale_offset(dst: i32, origin: i32, src_extent: i32, target_extent: i64) -> i32 {
    let offset = i128::from(dst) - i128::from(origin);
    (offset * i128::from(src_extent) / i128::from(target_extent)) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/transform/copy.rs"]
mod tests;
