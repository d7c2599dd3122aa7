use crate::color::pixel::ChannelLayout;
use crate::foundation::error::{CanvasError, CanvasResult};

/// Shape of a strided view: everything a canvas knows besides its storage and blend mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Geometry {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) stride: i32,
    pub(crate) layout: Option<ChannelLayout>,
}

impl Geometry {
    /// Validate `stride >= width >= 0`, `height >= 0` and that `len` cells cover every row.
    pub(crate) fn validated(
        width: i32,
        height: i32,
        stride: i32,
        len: usize,
        layout: Option<ChannelLayout>,
    ) -> CanvasResult<Self> {
        if width < 0 {
            return Err(CanvasError::invalid_dimension(format!(
                "invalid width: {width}"
            )));
        }
        if height < 0 {
            return Err(CanvasError::invalid_dimension(format!(
                "invalid height: {height}"
            )));
        }
        if stride < width {
            return Err(CanvasError::invalid_dimension(format!(
                "invalid stride: {stride} (width {width})"
            )));
        }

        let geom = Self {
            width,
            height,
            stride,
            layout,
        };
        let required = geom.required_len();
        if len < required {
            return Err(CanvasError::invalid_dimension(format!(
                "buffer holds {len} pixels, {width}x{height} with stride {stride} needs {required}"
            )));
        }
        Ok(geom)
    }

    /// Minimum number of cells a buffer needs: `stride * (height - 1) + width`.
    pub(crate) fn required_len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.stride as usize) * (self.height as usize - 1) + self.width as usize
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub(crate) fn is_within_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    pub(crate) fn check_bounds(&self, x: i32, y: i32) -> CanvasResult<()> {
        if self.is_within_bounds(x, y) {
            return Ok(());
        }
        Err(CanvasError::out_of_bounds(x, y, self.width, self.height))
    }

    #[inline]
    pub(crate) fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!(
            self.is_within_bounds(x, y),
            "unchecked access ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        (self.stride as usize) * (y as usize) + (x as usize)
    }

    #[inline]
    pub(crate) fn decode(&self, stored: u32) -> u32 {
        match self.layout {
            None => stored,
            Some(layout) => layout.decode(stored),
        }
    }

    #[inline]
    pub(crate) fn encode(&self, pixel: u32) -> u32 {
        match self.layout {
            None => pixel,
            Some(layout) => layout.encode(pixel),
        }
    }

    /// Geometry of the `[x0, x1) x [y0, y1)` window, with the cell offset of its origin.
    pub(crate) fn window(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> CanvasResult<(Self, usize)> {
        self.check_bounds(x0, y0)?;
        self.check_bounds(x1 - 1, y1 - 1)?;
        let offset = (self.stride as usize) * (y0 as usize) + (x0 as usize);
        Ok((
            Self {
                width: x1 - x0,
                height: y1 - y0,
                stride: self.stride,
                layout: self.layout,
            },
            offset,
        ))
    }
}
