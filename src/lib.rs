//! softcanvas is a deterministic software 2D rasterizer over caller-owned pixel buffers.
//!
//! The engine never owns image memory. A [`Canvas`] is a strided, mutable view over a slice
//! of packed 32-bit pixels (or a byte buffer in a configurable [`ChannelLayout`]); every
//! operation writes back into that slice through a per-pixel blend strategy.
//!
//! - Pixels and compositing: [`pack`], [`unpack`], [`blend`] and [`BlendMode`]
//! - Drawing: [`line`], [`polygon`], [`fill_triangle`], [`fill_rectangle`]
//! - Geometric blits: [`copy_rect`], [`copy_rotated`], [`copy_affine`] and the [`blit`]
//!   dispatcher driven by a [`Transform`]
//! - Post-processing: separable convolution, [`gaussian_blur`], brightness extraction and
//!   [`bloom`], drawing scratch space from a [`BufferPool`]
//!
//! Every drawing and blit function has a `_with` twin that takes an explicit, statically
//! dispatched [`PixelBlend`] strategy instead of the canvas's runtime [`BlendMode`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod canvas;
mod color;
mod draw;
mod effects;
mod foundation;
mod render;
mod transform;

pub use crate::canvas::guard::BlendModeGuard;
pub use crate::canvas::view::{Canvas, CanvasRef};
pub use crate::color::blend;
pub use crate::color::blend::{BlendMode, PixelBlend};
pub use crate::color::pixel::{
    ChannelLayout, SHIFT_ALPHA, SHIFT_BLUE, SHIFT_GREEN, SHIFT_RED, TRANSPARENT, alpha, pack,
    unpack,
};
pub use crate::foundation::error::{CanvasError, CanvasResult};

pub use crate::draw::line::{line, line_with};
pub use crate::draw::polygon::{polygon, polygon_with};
pub use crate::draw::rect::{fill_rectangle, fill_rectangle_with};
pub use crate::draw::triangle::{fill_triangle, fill_triangle_with};

pub use crate::transform::config::{Transform, blit, blit_with};
pub use crate::transform::copy::{copy_rect, copy_rect_with};
pub use crate::transform::rotate::{
    OUTSIDE_SOURCE, copy_affine, copy_affine_with, copy_rotated, copy_rotated_with,
};

pub use crate::effects::bloom::{BloomOpts, bloom, gaussian_blur};
pub use crate::effects::brightness::{
    BrightnessMetric, filter_by_brightness, luminance, max_channel,
};
pub use crate::effects::convolve::{
    convolve_horizontal, convolve_horizontal_with, convolve_vertical, convolve_vertical_with,
};
pub use crate::effects::kernel::{Kernel, box_kernel, gaussian_kernel};

pub use crate::render::buffer_pool::{BufferPool, BufferPoolStats, PooledBuffer};
