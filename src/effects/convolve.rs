//! Separable 1D convolution over straight-alpha canvases.
//!
//! Colour is premultiplied by alpha while accumulating so that transparent taps do not bleed
//! their (meaningless) colour into the result, then un-premultiplied on output. Taps that fall
//! outside the source are skipped rather than clamped or wrapped; the remaining weights
//! renormalize the result.

use crate::canvas::view::{Canvas, CanvasRef};
use crate::color::blend::PixelBlend;
use crate::color::pixel::{TRANSPARENT, pack, unpack};
use crate::effects::kernel::Kernel;
use crate::foundation::math::f32_to_u8;

#[derive(Clone, Copy, Debug)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Convolve each row of `src` with `kernel`, writing through the destination's blend mode.
///
/// Only the region covered by both canvases is written.
pub fn convolve_horizontal(src: &CanvasRef<'_>, dst: &mut Canvas<'_>, kernel: &Kernel) {
    let mode = dst.blend_mode();
    convolve(src, dst, kernel, Axis::Horizontal, mode);
}

/// Convolve each column of `src` with `kernel`, writing through the destination's blend mode.
///
/// Only the region covered by both canvases is written.
pub fn convolve_vertical(src: &CanvasRef<'_>, dst: &mut Canvas<'_>, kernel: &Kernel) {
    let mode = dst.blend_mode();
    convolve(src, dst, kernel, Axis::Vertical, mode);
}

/// [`convolve_horizontal`] with an explicit blend strategy.
pub fn convolve_horizontal_with<B: PixelBlend>(
    src: &CanvasRef<'_>,
    dst: &mut Canvas<'_>,
    kernel: &Kernel,
    blend: B,
) {
    convolve(src, dst, kernel, Axis::Horizontal, blend);
}

/// [`convolve_vertical`] with an explicit blend strategy.
pub fn convolve_vertical_with<B: PixelBlend>(
    src: &CanvasRef<'_>,
    dst: &mut Canvas<'_>,
    kernel: &Kernel,
    blend: B,
) {
    convolve(src, dst, kernel, Axis::Vertical, blend);
}

fn convolve<B: PixelBlend>(
    src: &CanvasRef<'_>,
    dst: &mut Canvas<'_>,
    kernel: &Kernel,
    axis: Axis,
    blend: B,
) {
    let width = src.width().min(dst.width());
    let height = src.height().min(dst.height());
    let radius = kernel.radius();

    for y in 0..height {
        for x in 0..width {
            let mut acc = Accum::default();
            for (i, &weight) in kernel.weights().iter().enumerate() {
                let offset = i as i32 - radius;
                let (sx, sy) = match axis {
                    Axis::Horizontal => (x + offset, y),
                    Axis::Vertical => (x, y + offset),
                };
                if src.is_within_bounds(sx, sy) {
                    acc.add(src.pixel_unchecked(sx, sy), weight);
                }
            }
            dst.blend_pixel_unchecked_with(x, y, acc.resolve(), blend);
        }
    }
}

/// Running sums for one output pixel: premultiplied colour, alpha and total weight.
#[derive(Default)]
struct Accum {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
    weight: f32,
}

impl Accum {
    fn add(&mut self, pixel: u32, weight: f32) {
        let (r, g, b, a) = unpack(pixel);
        let a = f32::from(a);
        let premul = a / 255.0 * weight;
        self.r += f32::from(r) * premul;
        self.g += f32::from(g) * premul;
        self.b += f32::from(b) * premul;
        self.a += a * weight;
        self.weight += weight;
    }

    /// A neighbourhood with no alpha (or no taps) resolves to transparent black.
    fn resolve(&self) -> u32 {
        if self.weight <= 0.0 || self.a <= 0.0 {
            return TRANSPARENT;
        }
        let alpha = self.a / self.weight;
        let unpremul = |c: f32| c / self.weight / (alpha / 255.0);
        pack(
            u32::from(f32_to_u8(unpremul(self.r))),
            u32::from(f32_to_u8(unpremul(self.g))),
            u32::from(f32_to_u8(unpremul(self.b))),
            u32::from(f32_to_u8(alpha)),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/convolve.rs"]
mod tests;
