use crate::canvas::view::Canvas;
use crate::color::blend::PixelBlend;
use crate::foundation::error::CanvasResult;

/// Fill the half-open rectangle spanned by the corner pair with the canvas mode.
pub fn fill_rectangle(
    canvas: &mut Canvas<'_>,
    p0: (i32, i32),
    p1: (i32, i32),
    color: u32,
) -> CanvasResult<()> {
    canvas.sub_canvas(p0.0, p0.1, p1.0, p1.1)?.fill(color);
    Ok(())
}

/// [`fill_rectangle`] with an explicit blend strategy.
pub fn fill_rectangle_with<B: PixelBlend>(
    canvas: &mut Canvas<'_>,
    p0: (i32, i32),
    p1: (i32, i32),
    color: u32,
    blend: B,
) -> CanvasResult<()> {
    canvas
        .sub_canvas(p0.0, p0.1, p1.0, p1.1)?
        .fill_with(color, blend);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/draw/rect.rs"]
mod tests;
