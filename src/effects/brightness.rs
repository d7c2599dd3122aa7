use crate::canvas::view::{Canvas, CanvasRef};
use crate::color::pixel::unpack;

/// `max(r, g, b) * alpha / 255²`, in `[0, 1]`.
pub fn max_channel(pixel: u32) -> f32 {
    let (r, g, b, a) = unpack(pixel);
    f32::from(r.max(g).max(b)) * f32::from(a) / (255.0 * 255.0)
}

/// Perceived brightness `sqrt(0.299 r² + 0.587 g² + 0.114 b²) * alpha / 255²`, in `[0, 1]`.
pub fn luminance(pixel: u32) -> f32 {
    let (r, g, b, a) = unpack(pixel);
    let (r, g, b) = (f32::from(r), f32::from(g), f32::from(b));
    (0.299 * r * r + 0.587 * g * g + 0.114 * b * b).sqrt() * f32::from(a) / (255.0 * 255.0)
}

/// Named brightness measure for configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrightnessMetric {
    /// [`max_channel`].
    MaxChannel,
    /// [`luminance`].
    #[default]
    Luminance,
}

impl BrightnessMetric {
    /// Measure `pixel` with this metric.
    pub fn measure(self, pixel: u32) -> f32 {
        match self {
            Self::MaxChannel => max_channel(pixel),
            Self::Luminance => luminance(pixel),
        }
    }
}

/// Copy `src` into `dst`, replacing every pixel whose brightness is below `threshold` with
/// `fill`. Writes go through the destination's blend mode; only the region covered by both
/// canvases is written.
pub fn filter_by_brightness<M>(
    src: &CanvasRef<'_>,
    dst: &mut Canvas<'_>,
    threshold: f32,
    measure: M,
    fill: u32,
) where
    M: Fn(u32) -> f32,
{
    let width = src.width().min(dst.width());
    let height = src.height().min(dst.height());
    for y in 0..height {
        for x in 0..width {
            let pixel = src.pixel_unchecked(x, y);
            let out = if measure(pixel) < threshold {
                fill
            } else {
                pixel
            };
            dst.blend_pixel_unchecked(x, y, out);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/brightness.rs"]
mod tests;
