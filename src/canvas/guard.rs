use std::ops::{Deref, DerefMut};

use crate::canvas::view::Canvas;
use crate::color::blend::BlendMode;

/// Scoped blend-mode override returned by [`Canvas::with_blend_mode`].
///
/// The guard dereferences to the canvas, so drawing calls go through it. When it is dropped,
/// on any exit path including `?` and panics, the mode captured at construction is restored.
#[must_use = "the previous blend mode is restored as soon as the guard is dropped"]
pub struct BlendModeGuard<'c, 'a> {
    canvas: &'c mut Canvas<'a>,
    previous: BlendMode,
}

impl<'c, 'a> BlendModeGuard<'c, 'a> {
    pub(crate) fn new(canvas: &'c mut Canvas<'a>, mode: BlendMode) -> Self {
        let previous = canvas.blend_mode();
        canvas.set_blend_mode(mode);
        Self { canvas, previous }
    }

    /// Mode that will be restored on drop.
    pub fn previous(&self) -> BlendMode {
        self.previous
    }
}

impl<'a> Deref for BlendModeGuard<'_, 'a> {
    type Target = Canvas<'a>;

    fn deref(&self) -> &Self::Target {
        &*self.canvas
    }
}

impl DerefMut for BlendModeGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.canvas
    }
}

impl Drop for BlendModeGuard<'_, '_> {
    fn drop(&mut self) {
        self.canvas.set_blend_mode(self.previous);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/guard.rs"]
mod tests;
