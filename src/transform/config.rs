use crate::canvas::view::{Canvas, CanvasRef};
use crate::color::blend::PixelBlend;
use crate::foundation::error::{CanvasError, CanvasResult};
use crate::foundation::math::round_to_i32;
use crate::transform::copy::copy_rect_with;
use crate::transform::rotate::{copy_affine_with, copy_rotated_with};

/// Placement of a source canvas for [`blit`]: scale, then rotate around the pivot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Transform {
    /// Rotation in radians.
    pub rotation: f64,
    /// Pivot column in source space.
    pub origin_x: i32,
    /// Pivot row in source space.
    pub origin_y: i32,
    /// Horizontal scale; negative mirrors, zero draws nothing.
    pub scale_x: f64,
    /// Vertical scale; negative mirrors, zero draws nothing.
    pub scale_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            origin_x: 0,
            origin_y: 0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl Transform {
    /// Pure rotation around a pivot.
    pub fn rotate_around(radians: f64, origin_x: i32, origin_y: i32) -> Self {
        Self {
            rotation: radians,
            origin_x,
            origin_y,
            ..Self::default()
        }
    }

    /// Same transform with a different scale.
    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Reject non-finite rotation or scale factors.
    pub fn validate(&self) -> CanvasResult<()> {
        if !self.rotation.is_finite() {
            return Err(CanvasError::validation("transform rotation must be finite"));
        }
        if !self.scale_x.is_finite() || !self.scale_y.is_finite() {
            return Err(CanvasError::validation("transform scale must be finite"));
        }
        Ok(())
    }

    fn pivot(&self) -> (i32, i32) {
        (self.origin_x, self.origin_y)
    }
}

/// Draw `src` onto `dst` with its pivot at `at`, blending with the destination's mode.
pub fn blit(
    src: &CanvasRef<'_>,
    dst: &mut Canvas<'_>,
    at: (i32, i32),
    transform: &Transform,
) -> CanvasResult<()> {
    let mode = dst.blend_mode();
    blit_with(src, dst, at, transform, mode)
}

/// Draw `src` onto `dst` with its pivot at `at`, picking the cheapest path that realizes
/// `transform`: an axis-aligned scaled copy without rotation, a plain rotation at unit
/// scale, and the full affine mapping otherwise.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(
        src_w = src.width(),
        src_h = src.height(),
        rotation = transform.rotation,
        scale_x = transform.scale_x,
        scale_y = transform.scale_y,
    )
)]
pub fn blit_with<B: PixelBlend>(
    src: &CanvasRef<'_>,
    dst: &mut Canvas<'_>,
    at: (i32, i32),
    transform: &Transform,
    blend: B,
) -> CanvasResult<()> {
    transform.validate()?;

    if transform.rotation == 0.0 {
        if transform.scale_x == 0.0 || transform.scale_y == 0.0 {
            tracing::debug!("zero scale, nothing to draw");
            return Ok(());
        }
        let left = at.0 - round_to_i32(f64::from(transform.origin_x) * transform.scale_x);
        let top = at.1 - round_to_i32(f64::from(transform.origin_y) * transform.scale_y);
        let right = left + round_to_i32(f64::from(src.width()) * transform.scale_x);
        let bottom = top + round_to_i32(f64::from(src.height()) * transform.scale_y);
        copy_rect_with(src, dst, (left, top), (right, bottom), blend);
    } else if transform.scale_x == 1.0 && transform.scale_y == 1.0 {
        copy_rotated_with(src, dst, at, transform.pivot(), transform.rotation, blend);
    } else {
        copy_affine_with(
            src,
            dst,
            at,
            transform.pivot(),
            transform.rotation,
            (transform.scale_x, transform.scale_y),
            blend,
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/transform/config.rs"]
mod tests;
