//! `AlignedBuffer` - an owning handle over one aligned allocation.
//!
//! Wraps the header-based functions of [`aligned`](super::aligned) so callers
//! never see the pointer arithmetic: the block is freed on drop, resizing goes
//! through [`reallocate_align`], and the contents are always initialized
//! (zero-filled on allocation and on growth), so the buffer derefs to `[u8]`.

use core::fmt;
use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;

use super::aligned::{free_align, reallocate_align, MIN_ALIGNMENT};
use super::allocator::AllocError;
use crate::memory::bytes::{copy_memory, zero_memory};

/// A zero-initialized, heap-allocated byte buffer with a fixed alignment.
pub struct AlignedBuffer {
    // `None` while the buffer is empty.
    block: Option<NonNull<u8>>,
    len: usize,
    alignment: usize,
}

impl AlignedBuffer {
    /// Allocates `size` zeroed bytes aligned to `alignment`.
    ///
    /// # Errors
    /// [`AllocError::InvalidLayout`] if `alignment` is not a power of two,
    /// [`AllocError::OutOfMemory`] if the allocation fails.
    pub fn new(size: usize, alignment: usize) -> Result<Self, AllocError> {
        if !alignment.is_power_of_two() {
            return Err(AllocError::InvalidLayout);
        }
        let mut buffer = Self { block: None, len: 0, alignment };
        buffer.resize(size)?;
        Ok(buffer)
    }

    /// Allocates a buffer holding a copy of `bytes`.
    ///
    /// # Errors
    /// As for [`AlignedBuffer::new`].
    pub fn from_slice(bytes: &[u8], alignment: usize) -> Result<Self, AllocError> {
        let mut buffer = Self::new(bytes.len(), alignment)?;
        // SAFETY: the buffer owns `bytes.len()` bytes and is a fresh allocation.
        unsafe { copy_memory(buffer.as_mut_ptr(), bytes.as_ptr(), bytes.len()) };
        Ok(buffer)
    }

    /// Number of bytes in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The alignment requested at construction.
    #[inline]
    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Pointer to the first byte; dangling (but non-null) when empty.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.block.unwrap_or_else(NonNull::dangling).as_ptr()
    }

    /// Mutable pointer to the first byte; dangling (but non-null) when empty.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.block.unwrap_or_else(NonNull::dangling).as_ptr()
    }

    /// The contents as a byte slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: `len` initialized bytes live at `as_ptr()`.
        unsafe { core::slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// The contents as a mutable byte slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        let len = self.len;
        // SAFETY: `len` initialized bytes live at `as_mut_ptr()`, uniquely borrowed.
        unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    /// Changes the length to `size`, keeping the common prefix and zeroing
    /// any new bytes.
    ///
    /// # Errors
    /// [`AllocError::OutOfMemory`] if the new block cannot be allocated; the
    /// buffer is unchanged in that case.
    pub fn resize(&mut self, size: usize) -> Result<(), AllocError> {
        // SAFETY: `block` is either `None` or a live block owned by `self`.
        let resized = unsafe { reallocate_align(self.block, size, self.alignment) };
        if size != 0 && resized.is_none() {
            return Err(AllocError::OutOfMemory {
                size,
                alignment: self.alignment.max(MIN_ALIGNMENT),
            });
        }
        if let Some(block) = resized {
            if size > self.len {
                // SAFETY: bytes `len..size` belong to the block.
                unsafe { zero_memory(block.as_ptr().add(self.len), size - self.len) };
            }
        }
        self.block = resized;
        self.len = size;
        Ok(())
    }
}

impl Drop for AlignedBuffer {
    fn drop(&mut self) {
        // SAFETY: the block is owned by `self` and released exactly once.
        unsafe { free_align(self.block.take()) }
    }
}

// SAFETY: the buffer uniquely owns its block; no interior mutability.
unsafe impl Send for AlignedBuffer {}
// SAFETY: shared access only reads.
unsafe impl Sync for AlignedBuffer {}

impl Deref for AlignedBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl DerefMut for AlignedBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}

impl fmt::Debug for AlignedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("len", &self.len)
            .field("alignment", &self.alignment)
            .finish_non_exhaustive()
    }
}
