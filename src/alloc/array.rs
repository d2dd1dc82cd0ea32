//! Typed array storage from the global Rust allocator.

use core::alloc::Layout;
use core::ptr::NonNull;
use std::alloc::{alloc, dealloc};

use super::allocator::AllocError;

/// Allocates uninitialized storage for `count` values of `T`.
///
/// Zero-sized requests (`count == 0` or a zero-sized `T`) allocate nothing
/// and return a dangling, well-aligned pointer.
///
/// # Errors
/// [`AllocError::InvalidLayout`] if the array size overflows `isize`,
/// [`AllocError::OutOfMemory`] if the global allocator fails.
pub fn allocate_array<T>(count: usize) -> Result<NonNull<T>, AllocError> {
    let layout = Layout::array::<T>(count).map_err(|_| AllocError::InvalidLayout)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    // SAFETY: layout has non-zero size.
    let raw = unsafe { alloc(layout) }.cast::<T>();
    NonNull::new(raw).ok_or_else(|| {
        #[cfg(feature = "tracing")]
        tracing::warn!(count, size = layout.size(), "allocate_array: out of memory");
        AllocError::OutOfMemory { size: layout.size(), alignment: layout.align() }
    })
}

/// Releases storage obtained from [`allocate_array`]. The values in it are not dropped.
///
/// # Safety
/// `pointer` must come from `allocate_array::<T>(count)` with the same
/// `count` and must not have been released already.
pub unsafe fn free_array<T>(pointer: NonNull<T>, count: usize) {
    // `count` matched a successful allocation, so the layout is valid.
    let Ok(layout) = Layout::array::<T>(count) else {
        return;
    };
    if layout.size() != 0 {
        // SAFETY: caller guarantees the block came from `alloc(layout)`.
        unsafe { dealloc(pointer.as_ptr().cast::<u8>(), layout) }
    }
}
