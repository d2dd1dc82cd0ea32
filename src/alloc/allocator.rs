//! Plain allocation through the process-wide C allocator.
//!
//! `free` releases a block without being told its size, so these functions
//! sit directly on `libc::malloc`/`free`/`realloc` rather than `std::alloc`.
//! No locking happens here: thread safety is whatever the C allocator gives.

use core::ptr::NonNull;

/// The error type for allocation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The underlying allocator returned no memory.
    OutOfMemory {
        /// Requested size in bytes.
        size: usize,
        /// Requested alignment in bytes.
        alignment: usize,
    },
    /// The size/alignment combination cannot be represented.
    InvalidLayout,
}

impl core::fmt::Display for AllocError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfMemory { size, alignment } => write!(
                f,
                "memory allocation of {size} bytes (alignment {alignment}) failed"
            ),
            Self::InvalidLayout => f.write_str("invalid allocation layout"),
        }
    }
}

impl std::error::Error for AllocError {}

/// Allocates `size` bytes.
///
/// Returns `None` when `size == 0` or the allocator is out of memory. The
/// block must be released with [`free`], never with
/// [`free_align`](super::free_align).
pub fn allocate(size: usize) -> Option<NonNull<u8>> {
    if size == 0 {
        return None;
    }
    // SAFETY: `malloc` has no preconditions.
    let pointer = NonNull::new(unsafe { libc::malloc(size) }.cast::<u8>());
    #[cfg(feature = "tracing")]
    if pointer.is_none() {
        tracing::warn!(size, "allocate: out of memory");
    }
    pointer
}

/// Releases a block obtained from [`allocate`] or [`reallocate`]. `None` is a no-op.
///
/// # Safety
/// `pointer` must come from this module's allocation functions and must not
/// have been released already.
pub unsafe fn free(pointer: Option<NonNull<u8>>) {
    if let Some(pointer) = pointer {
        // SAFETY: caller guarantees a live `malloc` block.
        unsafe { libc::free(pointer.as_ptr().cast()) }
    }
}

/// Resizes a block obtained from [`allocate`].
///
/// - `pointer == None` behaves as [`allocate`].
/// - `size == 0` releases the block and returns `None`.
/// - On failure `None` is returned and the original block stays valid.
///
/// # Safety
/// As for [`free`]. On success the old pointer must no longer be used.
pub unsafe fn reallocate(pointer: Option<NonNull<u8>>, size: usize) -> Option<NonNull<u8>> {
    let Some(pointer) = pointer else {
        return allocate(size);
    };
    if size == 0 {
        // SAFETY: forwarded contract.
        unsafe { free(Some(pointer)) };
        return None;
    }
    // SAFETY: caller guarantees a live `malloc` block.
    let resized = NonNull::new(unsafe { libc::realloc(pointer.as_ptr().cast(), size) }.cast::<u8>());
    #[cfg(feature = "tracing")]
    if resized.is_none() {
        tracing::warn!(size, "reallocate: out of memory");
    }
    resized
}
