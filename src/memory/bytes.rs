//! Runtime byte operations over raw pointers.
//!
//! These are the bulk primitives the object layer reaches for on its bitwise
//! paths. They lower to the platform block intrinsics (`memcpy`, `memmove`,
//! `memset`, `memcmp`). Every operation with `size == 0` is a no-op and
//! accepts dangling pointers, matching `core::ptr` semantics.
//!
//! ## Preconditions
//! Null pointers and, for [`copy_memory`], overlapping ranges are programmer
//! errors. They are caught by `debug_assert!` in debug builds and are
//! undefined behaviour in release builds.

use core::ffi::c_void;
use core::ptr;
use core::sync::atomic::{compiler_fence, Ordering};

/// Returns `true` if `[a, a + size)` and `[b, b + size)` share a byte.
#[inline]
pub fn ranges_overlap(a: *const u8, b: *const u8, size: usize) -> bool {
    let (a, b) = (a as usize, b as usize);
    a < b.wrapping_add(size) && b < a.wrapping_add(size)
}

/// Copies `size` bytes from `src` to `dst`.
///
/// # Safety
/// - `src` must be valid for reads and `dst` for writes of `size` bytes.
/// - The two ranges must not overlap; use [`move_memory`] when they may.
#[inline]
pub unsafe fn copy_memory(dst: *mut u8, src: *const u8, size: usize) {
    if size == 0 {
        return;
    }
    debug_assert!(!dst.is_null() && !src.is_null(), "copy_memory: null pointer");
    debug_assert!(
        !ranges_overlap(dst, src, size),
        "copy_memory: overlapping ranges, use move_memory"
    );
    // SAFETY: validity and non-overlap are the caller's contract.
    unsafe { ptr::copy_nonoverlapping(src, dst, size) }
}

/// Copies `size` bytes from `src` to `dst`; the ranges may overlap.
///
/// # Safety
/// `src` must be valid for reads and `dst` for writes of `size` bytes.
#[inline]
pub unsafe fn move_memory(dst: *mut u8, src: *const u8, size: usize) {
    if size == 0 {
        return;
    }
    debug_assert!(!dst.is_null() && !src.is_null(), "move_memory: null pointer");
    // SAFETY: validity is the caller's contract; `ptr::copy` handles overlap.
    unsafe { ptr::copy(src, dst, size) }
}

/// Fills `size` bytes at `dst` with `value`.
///
/// # Safety
/// `dst` must be valid for writes of `size` bytes.
#[inline]
pub unsafe fn set_memory(dst: *mut u8, size: usize, value: u8) {
    if size == 0 {
        return;
    }
    debug_assert!(!dst.is_null(), "set_memory: null pointer");
    // SAFETY: validity is the caller's contract.
    unsafe { ptr::write_bytes(dst, value, size) }
}

/// Fills `size` bytes at `dst` with `value`, and the writes are never elided.
///
/// Use this for wiping secrets: a plain fill of memory that is about to be
/// freed is a dead store the optimizer is allowed to remove.
///
/// # Safety
/// `dst` must be valid for writes of `size` bytes.
pub unsafe fn set_memory_safe(dst: *mut u8, size: usize, value: u8) {
    if size == 0 {
        return;
    }
    debug_assert!(!dst.is_null(), "set_memory_safe: null pointer");
    for offset in 0..size {
        // SAFETY: `offset < size` and the range is valid for writes.
        unsafe { ptr::write_volatile(dst.add(offset), value) };
    }
    compiler_fence(Ordering::SeqCst);
}

/// Zeroes `size` bytes at `dst`.
///
/// # Safety
/// `dst` must be valid for writes of `size` bytes.
#[inline]
pub unsafe fn zero_memory(dst: *mut u8, size: usize) {
    // SAFETY: forwarded contract.
    unsafe { set_memory(dst, size, 0) }
}

/// Lexicographically compares `size` bytes, returning a negative, zero or
/// positive value like `memcmp`.
///
/// # Safety
/// `a` and `b` must be valid for reads of `size` bytes.
#[inline]
pub unsafe fn compare_memory(a: *const u8, b: *const u8, size: usize) -> i32 {
    if size == 0 {
        return 0;
    }
    debug_assert!(!a.is_null() && !b.is_null(), "compare_memory: null pointer");
    // SAFETY: validity is the caller's contract.
    unsafe { libc::memcmp(a.cast::<c_void>(), b.cast::<c_void>(), size) }
}

/// `compare_memory(a, b, size) == 0`.
///
/// # Safety
/// See [`compare_memory`].
#[inline]
pub unsafe fn is_memory_compare_equal(a: *const u8, b: *const u8, size: usize) -> bool {
    // SAFETY: forwarded contract.
    unsafe { compare_memory(a, b, size) == 0 }
}

/// `compare_memory(a, b, size) < 0`.
///
/// # Safety
/// See [`compare_memory`].
#[inline]
pub unsafe fn is_memory_compare_less(a: *const u8, b: *const u8, size: usize) -> bool {
    // SAFETY: forwarded contract.
    unsafe { compare_memory(a, b, size) < 0 }
}

/// `compare_memory(a, b, size) > 0`.
///
/// # Safety
/// See [`compare_memory`].
#[inline]
pub unsafe fn is_memory_compare_greater(a: *const u8, b: *const u8, size: usize) -> bool {
    // SAFETY: forwarded contract.
    unsafe { compare_memory(a, b, size) > 0 }
}
