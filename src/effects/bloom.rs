use crate::canvas::view::{Canvas, CanvasRef};
use crate::color::blend::{Add, Overwrite};
use crate::color::pixel::TRANSPARENT;
use crate::effects::brightness::{BrightnessMetric, filter_by_brightness};
use crate::effects::convolve::{convolve_horizontal_with, convolve_vertical};
use crate::effects::kernel::{Kernel, gaussian_kernel};
use crate::foundation::error::{CanvasError, CanvasResult};
use crate::render::buffer_pool::BufferPool;
use crate::transform::copy::copy_rect_with;

/// Parameters for [`bloom`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BloomOpts {
    /// Pixels dimmer than this (in `[0, 1]`) do not glow.
    pub threshold: f32,
    /// Gaussian kernel taps; even sizes grow by one.
    pub kernel_size: usize,
    /// Gaussian sigma; `None` uses `(kernel_size - 1) / 2`.
    pub sigma: Option<f32>,
    /// Brightness measure used for thresholding.
    pub metric: BrightnessMetric,
    /// Replacement for pixels below the threshold in the bright pass.
    pub fill: u32,
}

impl Default for BloomOpts {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            kernel_size: 9,
            sigma: None,
            metric: BrightnessMetric::Luminance,
            fill: TRANSPARENT,
        }
    }
}

impl BloomOpts {
    /// Parse options from JSON; missing fields take their defaults.
    pub fn from_json(s: &str) -> CanvasResult<Self> {
        let opts: Self = serde_json::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject a non-finite threshold or sigma.
    pub fn validate(&self) -> CanvasResult<()> {
        if !self.threshold.is_finite() {
            return Err(CanvasError::validation("bloom threshold must be finite"));
        }
        if self.sigma.is_some_and(|s| !s.is_finite()) {
            return Err(CanvasError::validation("bloom sigma must be finite"));
        }
        Ok(())
    }
}

/// Separable 2D blur: a horizontal pass into pooled scratch, then a vertical pass into `dst`.
///
/// The final pass writes through the destination's blend mode.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(w = src.width(), h = src.height(), taps = kernel.weights().len())
)]
pub fn gaussian_blur(
    src: &CanvasRef<'_>,
    dst: &mut Canvas<'_>,
    pool: &BufferPool,
    kernel: &Kernel,
) -> CanvasResult<()> {
    let (w, h) = (src.width(), src.height());
    let mut scratch = pool.borrow(w, h);
    let mut pass = scratch.canvas(w, h)?;
    convolve_horizontal_with(src, &mut pass, kernel, Overwrite);
    convolve_vertical(&pass.view(), dst, kernel);
    Ok(())
}

/// Glow around the bright parts of `src`.
///
/// The bright pass (pixels at or above `opts.threshold`) is blurred, `src` is copied onto
/// `dst` with overwrite, and the blurred bright pass is added on top.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(w = src.width(), h = src.height(), threshold = opts.threshold, taps = opts.kernel_size)
)]
pub fn bloom(
    src: &CanvasRef<'_>,
    dst: &mut Canvas<'_>,
    pool: &BufferPool,
    opts: &BloomOpts,
) -> CanvasResult<()> {
    opts.validate()?;
    let kernel = gaussian_kernel(opts.kernel_size, opts.sigma)?;
    let (w, h) = (src.width(), src.height());

    let mut bright = pool.borrow(w, h);
    let mut bright_canvas = bright.canvas(w, h)?;
    let metric = opts.metric;
    filter_by_brightness(
        src,
        &mut bright_canvas,
        opts.threshold,
        |p| metric.measure(p),
        opts.fill,
    );

    let mut blurred = pool.borrow(w, h);
    let mut blurred_canvas = blurred.canvas(w, h)?;
    gaussian_blur(&bright_canvas.view(), &mut blurred_canvas, pool, &kernel)?;

    copy_rect_with(src, dst, (0, 0), (w, h), Overwrite);
    copy_rect_with(&blurred_canvas.view(), dst, (0, 0), (w, h), Add);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/bloom.rs"]
mod tests;
