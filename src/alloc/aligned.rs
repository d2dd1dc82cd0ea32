//! Over-aligned allocation with an in-band header.
//!
//! Layout of one aligned block:
//!
//! ```text
//! unaligned_pointer                       returned pointer (aligned)
//! |<- slack ->|<- AlignedHeader ->|<- size bytes ... ->|
//! ```
//!
//! The header records where the underlying `malloc` block starts and how many
//! user bytes were requested, so [`free_align`] and [`reallocate_align`] need
//! nothing but the pointer.

use core::mem;
use core::ptr::NonNull;

use num_traits::PrimInt;

use super::allocator::{allocate, free};
use crate::memory::bytes::copy_memory;

/// Bookkeeping stored immediately before every aligned pointer.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
struct AlignedHeader {
    unaligned_pointer: *mut u8,
    allocation_size: usize,
}

/// Bytes reserved in front of every aligned pointer.
pub const ALIGNED_HEADER_SIZE: usize = mem::size_of::<AlignedHeader>();

/// Requested alignments below this are raised to it, keeping the header
/// naturally aligned.
pub const MIN_ALIGNMENT: usize = mem::align_of::<AlignedHeader>();

/// Rounds `value` up to a multiple of `alignment` (a power of two).
pub const fn align_up(value: usize, alignment: usize) -> usize {
    if alignment == 0 {
        value
    } else {
        (value + (alignment - 1)) & !(alignment - 1)
    }
}

/// Rounds `address` up to the next multiple of `alignment`.
///
/// `alignment` must be a non-zero power of two; this is not checked.
#[inline]
pub fn align_address<I: PrimInt>(address: I, alignment: I) -> I {
    let mask = alignment - I::one();
    (address + mask) & !mask
}

/// Returns `true` if `address` is a multiple of `alignment` (a power of two).
#[inline]
pub fn is_address_aligned<I: PrimInt>(address: I, alignment: I) -> bool {
    address & (alignment - I::one()) == I::zero()
}

/// Advances `pointer` to the next multiple of `alignment`, keeping provenance.
#[inline]
pub fn align_pointer<T>(pointer: *mut T, alignment: usize) -> *mut T {
    let address = pointer as usize;
    let offset = align_address(address, alignment) - address;
    pointer.cast::<u8>().wrapping_add(offset).cast::<T>()
}

/// Returns `true` if `pointer` is a multiple of `alignment`.
#[inline]
pub fn is_pointer_aligned<T>(pointer: *const T, alignment: usize) -> bool {
    is_address_aligned(pointer as usize, alignment)
}

#[inline]
fn header_of(pointer: NonNull<u8>) -> *mut AlignedHeader {
    pointer.as_ptr().wrapping_sub(ALIGNED_HEADER_SIZE).cast::<AlignedHeader>()
}

/// Allocates `size` bytes aligned to `alignment`.
///
/// Returns `None` when `size == 0`, when the padded size overflows, or when
/// the allocator is out of memory. Release with [`free_align`].
pub fn allocate_align(size: usize, alignment: usize) -> Option<NonNull<u8>> {
    debug_assert!(alignment.is_power_of_two(), "allocate_align: alignment must be a power of two");
    if size == 0 {
        return None;
    }
    let alignment = alignment.max(MIN_ALIGNMENT);
    let total = size.checked_add(alignment)?.checked_add(ALIGNED_HEADER_SIZE)?;

    let unaligned = allocate(total)?;
    let aligned = align_pointer(unaligned.as_ptr().wrapping_add(ALIGNED_HEADER_SIZE), alignment);
    // SAFETY: `aligned` lies within the block, at most `alignment - 1` bytes
    // past `unaligned + ALIGNED_HEADER_SIZE`, so the header and the `size` user
    // bytes both fit inside the `total` bytes allocated.
    let aligned = unsafe { NonNull::new_unchecked(aligned) };
    // SAFETY: the header slot is in bounds and aligned to `MIN_ALIGNMENT`.
    unsafe {
        header_of(aligned).write(AlignedHeader {
            unaligned_pointer: unaligned.as_ptr(),
            allocation_size: size,
        });
    }
    Some(aligned)
}

/// Recovers the start of the underlying `malloc` block.
///
/// # Safety
/// `pointer` must be a live block returned by [`allocate_align`] or [`reallocate_align`].
#[inline]
pub unsafe fn get_unaligned_pointer(pointer: NonNull<u8>) -> NonNull<u8> {
    // SAFETY: the header was written at allocation time and the block start is non-null.
    unsafe { NonNull::new_unchecked((*header_of(pointer)).unaligned_pointer) }
}

/// Returns the user size recorded at allocation time.
///
/// # Safety
/// As for [`get_unaligned_pointer`].
#[inline]
pub unsafe fn get_allocation_size(pointer: NonNull<u8>) -> usize {
    // SAFETY: the header was written at allocation time.
    unsafe { (*header_of(pointer)).allocation_size }
}

/// Releases an aligned block. `None` is a no-op.
///
/// # Safety
/// `pointer` must come from [`allocate_align`]/[`reallocate_align`] and must
/// not have been released already.
pub unsafe fn free_align(pointer: Option<NonNull<u8>>) {
    if let Some(pointer) = pointer {
        // SAFETY: forwarded contract; the header gives back the `malloc` block.
        unsafe { free(Some(get_unaligned_pointer(pointer))) }
    }
}

/// Resizes an aligned block.
///
/// - `pointer == None` behaves as [`allocate_align`].
/// - `size == 0` releases the block and returns `None`.
/// - An unchanged size returns `pointer` itself.
/// - Otherwise a new block receives the first `min(old, new)` bytes and the
///   old block is released. If the new allocation fails, `None` is returned
///   and the old block stays valid.
///
/// # Safety
/// As for [`free_align`]. Unless the size was unchanged, the old pointer must
/// not be used after a successful call.
pub unsafe fn reallocate_align(
    pointer: Option<NonNull<u8>>,
    size: usize,
    alignment: usize,
) -> Option<NonNull<u8>> {
    let Some(pointer) = pointer else {
        return allocate_align(size, alignment);
    };
    if size == 0 {
        // SAFETY: forwarded contract.
        unsafe { free_align(Some(pointer)) };
        return None;
    }

    // SAFETY: live aligned block.
    let old_size = unsafe { get_allocation_size(pointer) };
    if old_size == size {
        return Some(pointer);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(old_size, size, alignment, "reallocate_align");

    let resized = allocate_align(size, alignment)?;
    // SAFETY: both blocks hold at least `min(old_size, size)` bytes and are
    // distinct allocations.
    unsafe {
        copy_memory(resized.as_ptr(), pointer.as_ptr(), old_size.min(size));
        free_align(Some(pointer));
    }
    Some(resized)
}
