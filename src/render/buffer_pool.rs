use std::cell::RefCell;
use std::ops::{Deref, DerefMut};

use crate::canvas::view::{Canvas, CanvasRef};
use crate::foundation::error::CanvasResult;

/// Allocation and retention counters for a [`BufferPool`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferPoolStats {
    /// Buffers sitting on the free list.
    pub retained_buffers: usize,
    /// Total pixel capacity of the free list.
    pub retained_pixels: usize,
    /// Buffers currently lent out.
    pub on_loan: usize,
    /// Buffers allocated over the pool's lifetime.
    pub alloc_buffers: u64,
    /// Pixels allocated over the pool's lifetime.
    pub alloc_pixels: u64,
}

#[derive(Default)]
struct PoolState {
    free: Vec<Vec<u32>>,
    stats: BufferPoolStats,
}

/// Recycling allocator for temporary pixel buffers.
///
/// Lookup is first-fit over the free list: the first retained buffer whose capacity covers
/// the request is lent out whole. Buffers are never freed or shrunk while the pool lives, so
/// its footprint is the high-water mark of concurrent loans. The pool is single-threaded and
/// is passed explicitly to the operations that need scratch space.
#[derive(Default)]
pub struct BufferPool {
    state: RefCell<PoolState>,
}

impl BufferPool {
    /// Empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the pool's counters.
    pub fn stats(&self) -> BufferPoolStats {
        self.state.borrow().stats.clone()
    }

    /// Lend a buffer of at least `width * height` pixels.
    ///
    /// A recycled buffer keeps whatever its previous borrower wrote; fresh buffers are zeroed.
    /// Negative dimensions are treated as zero.
    pub fn borrow(&self, width: i32, height: i32) -> PooledBuffer<'_> {
        let len = (width.max(0) as usize).saturating_mul(height.max(0) as usize);
        let mut state = self.state.borrow_mut();
        state.stats.on_loan += 1;

        if let Some(i) = state.free.iter().position(|b| b.len() >= len) {
            let data = state.free.remove(i);
            state.stats.retained_buffers -= 1;
            state.stats.retained_pixels -= data.len();
            return PooledBuffer {
                pool: self,
                data,
                len,
            };
        }

        tracing::trace!(width, height, pixels = len, "buffer pool miss, allocating");
        state.stats.alloc_buffers = state.stats.alloc_buffers.saturating_add(1);
        state.stats.alloc_pixels = state.stats.alloc_pixels.saturating_add(len as u64);
        PooledBuffer {
            pool: self,
            data: vec![0; len],
            len,
        }
    }

    fn release(&self, data: Vec<u32>) {
        let mut state = self.state.borrow_mut();
        state.stats.on_loan -= 1;
        state.stats.retained_buffers += 1;
        state.stats.retained_pixels += data.len();
        state.free.push(data);
    }
}

/// A buffer on loan from a [`BufferPool`]; returned to the pool's free list on drop.
///
/// Dereferences to exactly the requested number of pixels, even when the backing storage
/// is larger.
pub struct PooledBuffer<'p> {
    pool: &'p BufferPool,
    data: Vec<u32>,
    len: usize,
}

impl PooledBuffer<'_> {
    /// Overwrite-mode canvas over the first `width * height` pixels of the loan.
    pub fn canvas(&mut self, width: i32, height: i32) -> CanvasResult<Canvas<'_>> {
        Canvas::new(&mut self.data[..self.len], width, height)
    }

    /// Read-only view over the first `width * height` pixels of the loan.
    pub fn view(&self, width: i32, height: i32) -> CanvasResult<CanvasRef<'_>> {
        CanvasRef::new(&self.data[..self.len], width, height)
    }
}

impl Deref for PooledBuffer<'_> {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.data[..self.len]
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut [u32] {
        &mut self.data[..self.len]
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.data));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/buffer_pool.rs"]
mod tests;
