use crate::canvas::geometry::Geometry;
use crate::canvas::guard::BlendModeGuard;
use crate::color::blend::{BlendMode, PixelBlend};
use crate::color::pixel::ChannelLayout;
use crate::foundation::error::{CanvasError, CanvasResult};
use crate::foundation::math::sort_top_left;

/// Mutable, non-owning view over a caller-owned pixel buffer.
///
/// The view is `(buffer, width, height, stride)` plus the blend mode used by
/// [`Canvas::blend_pixel`]. Row `y` starts at cell `y * stride`; cells between `width` and
/// `stride` are never touched. Dropping a canvas never frees the buffer.
#[derive(Debug)]
pub struct Canvas<'a> {
    data: &'a mut [u32],
    geom: Geometry,
    blend_mode: BlendMode,
}

/// Read-only counterpart of [`Canvas`], used as the source of blits and convolutions.
#[derive(Clone, Copy, Debug)]
pub struct CanvasRef<'a> {
    data: &'a [u32],
    geom: Geometry,
}

fn pixels_from_bytes<'b>(bytes: &'b mut [u8]) -> CanvasResult<&'b mut [u32]> {
    bytemuck::try_cast_slice_mut(bytes).map_err(|err| {
        CanvasError::invalid_dimension(format!("byte buffer cannot hold 32-bit pixels: {err}"))
    })
}

impl<'a> Canvas<'a> {
    /// Create a tightly packed canvas (`stride == width`) with [`BlendMode::Overwrite`].
    pub fn new(data: &'a mut [u32], width: i32, height: i32) -> CanvasResult<Self> {
        Self::with_stride(data, width, height, width)
    }

    /// Create a canvas whose rows are `stride` cells apart.
    pub fn with_stride(
        data: &'a mut [u32],
        width: i32,
        height: i32,
        stride: i32,
    ) -> CanvasResult<Self> {
        let geom = Geometry::validated(width, height, stride, data.len(), None)?;
        Ok(Self {
            data,
            geom,
            blend_mode: BlendMode::Overwrite,
        })
    }

    /// Create a canvas over a byte buffer whose channel order is described by `layout`.
    ///
    /// `stride` is counted in pixels. The buffer must be 4-byte aligned and a whole number of
    /// pixels long.
    pub fn from_bytes(
        bytes: &'a mut [u8],
        width: i32,
        height: i32,
        stride: i32,
        layout: ChannelLayout,
    ) -> CanvasResult<Self> {
        let data = pixels_from_bytes(bytes)?;
        let geom = Geometry::validated(width, height, stride, data.len(), Some(layout))?;
        Ok(Self {
            data,
            geom,
            blend_mode: BlendMode::Overwrite,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 {
        self.geom.width
    }

    /// Height in pixels.
    pub fn height(&self) -> i32 {
        self.geom.height
    }

    /// Distance between row starts, in pixels.
    pub fn stride(&self) -> i32 {
        self.geom.stride
    }

    /// Channel layout for byte-addressed canvases; `None` for packed canvases.
    pub fn layout(&self) -> Option<ChannelLayout> {
        self.geom.layout
    }

    /// `true` when the canvas has no pixels.
    pub fn is_empty(&self) -> bool {
        self.geom.is_empty()
    }

    /// `true` when `(x, y)` addresses a pixel of this canvas.
    pub fn is_within_bounds(&self, x: i32, y: i32) -> bool {
        self.geom.is_within_bounds(x, y)
    }

    /// Current runtime blend mode.
    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    /// Change the runtime blend mode in place.
    pub fn set_blend_mode(&mut self, mode: BlendMode) -> &mut Self {
        self.blend_mode = mode;
        self
    }

    /// Switch to `mode` until the returned guard is dropped, then restore the previous mode.
    pub fn with_blend_mode(&mut self, mode: BlendMode) -> BlendModeGuard<'_, 'a> {
        BlendModeGuard::new(self, mode)
    }

    /// Read-only view over the same pixels.
    pub fn view(&self) -> CanvasRef<'_> {
        CanvasRef {
            data: &*self.data,
            geom: self.geom,
        }
    }

    /// Read pixel `(x, y)`.
    pub fn pixel(&self, x: i32, y: i32) -> CanvasResult<u32> {
        self.geom.check_bounds(x, y)?;
        Ok(self.pixel_unchecked(x, y))
    }

    /// Read pixel `(x, y)` without a bounds check.
    ///
    /// The caller guarantees `(x, y)` is inside the canvas. Debug builds assert it; release
    /// builds may read a padding cell or panic on the slice index instead.
    #[inline]
    pub fn pixel_unchecked(&self, x: i32, y: i32) -> u32 {
        self.geom.decode(self.data[self.geom.index(x, y)])
    }

    /// Blend `color` into `(x, y)` using the canvas blend mode.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: u32) -> CanvasResult<()> {
        let mode = self.blend_mode;
        self.blend_pixel_with(x, y, color, mode)
    }

    /// Blend `color` into `(x, y)` using an explicit strategy.
    pub fn blend_pixel_with<B: PixelBlend>(
        &mut self,
        x: i32,
        y: i32,
        color: u32,
        blend: B,
    ) -> CanvasResult<()> {
        self.geom.check_bounds(x, y)?;
        self.blend_pixel_unchecked_with(x, y, color, blend);
        Ok(())
    }

    /// Unchecked variant of [`Canvas::blend_pixel`]; see [`Canvas::pixel_unchecked`].
    #[inline]
    pub fn blend_pixel_unchecked(&mut self, x: i32, y: i32, color: u32) {
        let mode = self.blend_mode;
        self.blend_pixel_unchecked_with(x, y, color, mode);
    }

    /// Unchecked variant of [`Canvas::blend_pixel_with`]; see [`Canvas::pixel_unchecked`].
    #[inline]
    pub fn blend_pixel_unchecked_with<B: PixelBlend>(
        &mut self,
        x: i32,
        y: i32,
        color: u32,
        blend: B,
    ) {
        let idx = self.geom.index(x, y);
        let bg = self.geom.decode(self.data[idx]);
        self.data[idx] = self.geom.encode(blend.blend(color, bg));
    }

    /// Store `color` at `(x, y)` regardless of the blend mode.
    pub fn overwrite_pixel(&mut self, x: i32, y: i32, color: u32) -> CanvasResult<()> {
        self.geom.check_bounds(x, y)?;
        let idx = self.geom.index(x, y);
        self.data[idx] = self.geom.encode(color);
        Ok(())
    }

    /// Blend `color` into every pixel, row by row.
    pub fn fill(&mut self, color: u32) -> &mut Self {
        let mode = self.blend_mode;
        self.fill_with(color, mode)
    }

    /// Blend `color` into every pixel with an explicit strategy.
    pub fn fill_with<B: PixelBlend>(&mut self, color: u32, blend: B) -> &mut Self {
        for y in 0..self.geom.height {
            for x in 0..self.geom.width {
                self.blend_pixel_unchecked_with(x, y, color, blend);
            }
        }
        self
    }

    /// View of the rectangle spanned by the corner pair, sharing this canvas's storage.
    ///
    /// Corners are normalized per axis; the rectangle is half-open, so `(x1, y1)` is one past
    /// the last included pixel. The sub-canvas inherits the blend mode and channel layout.
    pub fn sub_canvas(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> CanvasResult<Canvas<'_>> {
        let (x0, y0, x1, y1) = sort_top_left(x0, y0, x1, y1);
        let (geom, offset) = self.geom.window(x0, y0, x1, y1)?;
        Ok(Canvas {
            data: &mut self.data[offset..],
            geom,
            blend_mode: self.blend_mode,
        })
    }
}

impl<'a> CanvasRef<'a> {
    /// Create a tightly packed read-only view.
    pub fn new(data: &'a [u32], width: i32, height: i32) -> CanvasResult<Self> {
        Self::with_stride(data, width, height, width)
    }

    /// Create a read-only view whose rows are `stride` cells apart.
    pub fn with_stride(data: &'a [u32], width: i32, height: i32, stride: i32) -> CanvasResult<Self> {
        let geom = Geometry::validated(width, height, stride, data.len(), None)?;
        Ok(Self { data, geom })
    }

    /// Read-only view over a byte buffer with an explicit channel layout.
    pub fn from_bytes(
        bytes: &'a [u8],
        width: i32,
        height: i32,
        stride: i32,
        layout: ChannelLayout,
    ) -> CanvasResult<Self> {
        let data: &[u32] = bytemuck::try_cast_slice(bytes).map_err(|err| {
            CanvasError::invalid_dimension(format!("byte buffer cannot hold 32-bit pixels: {err}"))
        })?;
        let geom = Geometry::validated(width, height, stride, data.len(), Some(layout))?;
        Ok(Self { data, geom })
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 {
        self.geom.width
    }

    /// Height in pixels.
    pub fn height(&self) -> i32 {
        self.geom.height
    }

    /// Distance between row starts, in pixels.
    pub fn stride(&self) -> i32 {
        self.geom.stride
    }

    /// `true` when the view has no pixels.
    pub fn is_empty(&self) -> bool {
        self.geom.is_empty()
    }

    /// `true` when `(x, y)` addresses a pixel of this view.
    pub fn is_within_bounds(&self, x: i32, y: i32) -> bool {
        self.geom.is_within_bounds(x, y)
    }

    /// Read pixel `(x, y)`.
    pub fn pixel(&self, x: i32, y: i32) -> CanvasResult<u32> {
        self.geom.check_bounds(x, y)?;
        Ok(self.pixel_unchecked(x, y))
    }

    /// Read pixel `(x, y)` without a bounds check; see [`Canvas::pixel_unchecked`].
    #[inline]
    pub fn pixel_unchecked(&self, x: i32, y: i32) -> u32 {
        self.geom.decode(self.data[self.geom.index(x, y)])
    }

    /// Read-only view of the rectangle spanned by the corner pair.
    pub fn sub_view(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> CanvasResult<CanvasRef<'a>> {
        let (x0, y0, x1, y1) = sort_top_left(x0, y0, x1, y1);
        let (geom, offset) = self.geom.window(x0, y0, x1, y1)?;
        Ok(CanvasRef {
            data: &self.data[offset..],
            geom,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/view.rs"]
mod tests;
