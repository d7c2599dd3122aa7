use crate::canvas::view::Canvas;
use crate::color::blend::PixelBlend;
use crate::draw::line::line_with;
use crate::foundation::error::CanvasResult;

/// Outline a closed polygon, blending with the canvas mode.
pub fn polygon(canvas: &mut Canvas<'_>, vertices: &[(i32, i32)], color: u32) -> CanvasResult<()> {
    let mode = canvas.blend_mode();
    polygon_with(canvas, vertices, color, mode)
}

/// Outline a closed polygon: one line per consecutive vertex pair, last vertex back to the
/// first. An empty vertex list draws nothing.
pub fn polygon_with<B: PixelBlend>(
    canvas: &mut Canvas<'_>,
    vertices: &[(i32, i32)],
    color: u32,
    blend: B,
) -> CanvasResult<()> {
    for (i, &from) in vertices.iter().enumerate() {
        let to = vertices[(i + 1) % vertices.len()];
        line_with(canvas, from, to, color, blend)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/draw/polygon.rs"]
mod tests;
