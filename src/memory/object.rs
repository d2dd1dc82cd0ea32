//! Object lifecycle primitives over caller-owned storage.
//!
//! Each bulk operation decides *once per call* between two paths:
//! - **bitwise**: one byte copy or move covering `count * size_of::<T>()`;
//! - **element-wise**: one constructor, assignment or destructor per slot.
//!
//! The decision is a `const bool` from [`crate::traits`], so the untaken path
//! is compiled out.
//!
//! ## Ownership model
//! Moves are destructive. After a move-based primitive returns, the source
//! slots are logically uninitialized: the caller must not read or drop them
//! again, only reuse or free their storage. The "then destroy" relocation
//! primitives therefore destroy explicitly only on their copy path.
//!
//! ## Panics
//! A user conversion or `Default` that panics inside an element-wise loop
//! leaves the already constructed prefix in place (leaked, never dropped
//! twice). The primitives themselves never panic.

use core::mem;
use core::ptr;

use super::bytes::{compare_memory, copy_memory, move_memory, set_memory};
use crate::traits::{
    is_bitwise_comparable, is_bitwise_copy_assignable, is_bitwise_copy_constructible,
    is_bitwise_move_assignable, is_bitwise_move_constructible, is_trivially_destructible,
    is_zero_constructible, CopyFrom, MoveFrom, TypeRelation, TypeTraits,
};

/// Layout sanity for a declared cross-type relation.
const fn relation_layout_ok<T: TypeRelation<U>, U>() -> bool {
    !T::IS_BITWISE_CONVERTIBLE || mem::size_of::<T>() == mem::size_of::<U>()
}

#[inline(always)]
const fn byte_len<T>(count: usize) -> usize {
    count * mem::size_of::<T>()
}

/// Constructs a `T` from `args` at `address`.
///
/// # Safety
/// `address` must be valid for writes and properly aligned. Any value already
/// there is overwritten without being dropped.
#[inline]
pub unsafe fn construct_object_at<T: From<A>, A>(address: *mut T, args: A) {
    debug_assert!(!address.is_null(), "construct_object_at: null pointer");
    // SAFETY: caller guarantees a writable, aligned slot.
    unsafe { ptr::write(address, T::from(args)) }
}

/// Constructs `count` objects at `address`, each copied from `args`.
///
/// # Safety
/// `address` must be valid for writes of `count` aligned `T`s. Existing
/// values are overwritten without being dropped.
pub unsafe fn construct_array_at<T: CopyFrom<A>, A>(address: *mut T, count: usize, args: &A) {
    debug_assert!(count == 0 || !address.is_null(), "construct_array_at: null pointer");
    for index in 0..count {
        // SAFETY: `index < count`, slot is writable.
        unsafe { ptr::write(address.add(index), T::copy_from(args)) };
    }
}

/// Default-constructs a `T` at `address`.
///
/// # Safety
/// As for [`construct_object_at`].
#[inline]
pub unsafe fn default_construct<T: Default>(address: *mut T) {
    debug_assert!(!address.is_null(), "default_construct: null pointer");
    // SAFETY: caller guarantees a writable, aligned slot.
    unsafe { ptr::write(address, T::default()) }
}

/// Default-constructs `count` objects at `address`.
///
/// Zero-constructible types are filled with a single `memset`.
///
/// # Safety
/// As for [`construct_array_at`].
pub unsafe fn default_construct_array<T: Default + TypeTraits>(address: *mut T, count: usize) {
    if is_zero_constructible::<T>() {
        // SAFETY: the range is writable; all-zero bytes form `T::default()`.
        unsafe { set_memory(address.cast::<u8>(), byte_len::<T>(count), 0) };
    } else {
        for index in 0..count {
            // SAFETY: `index < count`, slot is writable.
            unsafe { ptr::write(address.add(index), T::default()) };
        }
    }
}

/// Runs the destructor of the object at `object`, if it has one.
///
/// # Safety
/// `object` must point to a live `T` that is not used afterwards.
#[inline]
pub unsafe fn destroy_object<T>(object: *mut T) {
    if !is_trivially_destructible::<T>() {
        // SAFETY: caller guarantees a live object that is never touched again.
        unsafe { ptr::drop_in_place(object) }
    }
}

/// Runs the destructors of `count` objects starting at `begin`, first to last.
///
/// # Safety
/// `begin` must point to `count` live `T`s that are not used afterwards.
#[inline]
pub unsafe fn destroy_object_array<T>(begin: *mut T, count: usize) {
    if !is_trivially_destructible::<T>() {
        // SAFETY: caller guarantees `count` live objects.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(begin, count)) }
    }
}

/// Copy-constructs `count` objects at `dst` from the `U`s at `src`.
///
/// # Safety
/// - `src` must point to `count` live `U`s, `dst` to `count` writable slots.
/// - The ranges must not overlap.
pub unsafe fn copy_construct_array<T, U>(dst: *mut T, src: *const U, count: usize)
where
    T: TypeRelation<U> + TypeTraits + CopyFrom<U>,
{
    const { assert!(relation_layout_ok::<T, U>(), "bitwise convertible types differ in size") };

    if is_bitwise_copy_constructible::<T, U>() {
        // SAFETY: bytes of a `U` form the copy; ranges are disjoint.
        unsafe { copy_memory(dst.cast::<u8>(), src.cast::<u8>(), byte_len::<T>(count)) };
    } else {
        for index in 0..count {
            // SAFETY: `index < count`; source live, destination writable.
            unsafe { ptr::write(dst.add(index), T::copy_from(&*src.add(index))) };
        }
    }
}

/// Move-constructs `count` objects at `dst` from the `U`s at `src`.
///
/// The sources are consumed. The bitwise path is a single `memmove`, so the
/// ranges may overlap when it applies; the element-wise path walks forward
/// and tolerates overlap only when `dst` does not come after `src`.
///
/// # Safety
/// `src` must point to `count` live `U`s and `dst` to `count` writable slots.
pub unsafe fn move_or_copy_construct_array<T, U>(dst: *mut T, src: *mut U, count: usize)
where
    T: TypeRelation<U> + TypeTraits + MoveFrom<U>,
{
    const { assert!(relation_layout_ok::<T, U>(), "bitwise convertible types differ in size") };

    if is_bitwise_move_constructible::<T, U>() {
        // SAFETY: bytes of a `U` form the moved `T`; memmove handles overlap.
        unsafe { move_memory(dst.cast::<u8>(), src.cast::<u8>().cast_const(), byte_len::<T>(count)) };
    } else {
        for index in 0..count {
            // SAFETY: each source is read exactly once and ownership moves into `dst`.
            unsafe { ptr::write(dst.add(index), T::move_from(ptr::read(src.add(index)))) };
        }
    }
}

/// Copy-assigns the `U`s at `src` over the live `T`s at `dst`.
///
/// # Safety
/// - `src` must point to `count` live `U`s, `dst` to `count` live `T`s.
/// - The ranges must not overlap.
pub unsafe fn copy_assign_object_array<T, U>(dst: *mut T, src: *const U, count: usize)
where
    T: TypeRelation<U> + TypeTraits + CopyFrom<U>,
{
    const { assert!(relation_layout_ok::<T, U>(), "bitwise convertible types differ in size") };

    if is_bitwise_copy_assignable::<T, U>() {
        // SAFETY: the overwritten `T`s have no drop glue; ranges are disjoint.
        unsafe { copy_memory(dst.cast::<u8>(), src.cast::<u8>(), byte_len::<T>(count)) };
    } else {
        for index in 0..count {
            // SAFETY: both slots live and distinct.
            unsafe { (*dst.add(index)).copy_assign_from(&*src.add(index)) };
        }
    }
}

/// Move-assigns the `U`s at `src` over the live `T`s at `dst`.
///
/// The sources are consumed; the previous destination values are dropped.
/// The bitwise path is only taken when both element types have the same size.
///
/// # Safety
/// `src` must point to `count` live `U`s and `dst` to `count` live `T`s.
/// On the element-wise path the ranges must not overlap.
pub unsafe fn move_or_copy_assign_object_array<T, U>(dst: *mut T, src: *mut U, count: usize)
where
    T: TypeRelation<U> + TypeTraits + MoveFrom<U>,
{
    const { assert!(relation_layout_ok::<T, U>(), "bitwise convertible types differ in size") };

    if is_bitwise_move_assignable::<T, U>() && mem::size_of::<T>() == mem::size_of::<U>() {
        // SAFETY: the overwritten `T`s have no drop glue; memmove handles overlap.
        unsafe { move_memory(dst.cast::<u8>(), src.cast::<u8>().cast_const(), byte_len::<T>(count)) };
    } else {
        for index in 0..count {
            // SAFETY: destination live (assignment drops it), source read once.
            unsafe { *dst.add(index) = T::move_from(ptr::read(src.add(index))) };
        }
    }
}

/// Relocates one object: constructs `dst` from `src`, consuming `src`.
///
/// # Safety
/// `src` must point to a live `U` and `dst` to a writable slot.
#[inline]
pub unsafe fn move_or_copy_construct_object_then_destroy<T, U>(dst: *mut T, src: *mut U)
where
    T: TypeRelation<U> + TypeTraits + MoveFrom<U>,
{
    // SAFETY: forwarded contract with a count of one.
    unsafe { move_or_copy_construct_array(dst, src, 1) }
}

/// Relocates `count` objects from `src` to `dst`.
///
/// When a `U` can be *copied* bitwise into a `T`, this performs a single
/// non-overlapping `memcpy` and then destroys the sources. Otherwise it falls
/// back to [`move_or_copy_construct_array`], which consumes the sources.
///
/// # Safety
/// - `src` must point to `count` live `U`s, `dst` to `count` writable slots.
/// - The ranges must not overlap.
pub unsafe fn fast_move_or_copy_construct_object_array_then_destroy<T, U>(
    dst: *mut T,
    src: *mut U,
    count: usize,
) where
    T: TypeRelation<U> + TypeTraits + MoveFrom<U>,
{
    const { assert!(relation_layout_ok::<T, U>(), "bitwise convertible types differ in size") };

    if is_bitwise_copy_constructible::<T, U>() {
        // SAFETY: disjoint ranges; the copies are independent of the sources.
        unsafe {
            copy_memory(dst.cast::<u8>(), src.cast::<u8>().cast_const(), byte_len::<T>(count));
            destroy_object_array(src, count);
        }
    } else {
        // SAFETY: forwarded contract.
        unsafe { move_or_copy_construct_array(dst, src, count) }
    }
}

/// Relocates `count` objects from `src` to `dst`, last element first.
///
/// This is the primitive for shifting elements towards higher addresses
/// inside one buffer (`dst` after `src`, ranges overlapping). The bitwise
/// path is a single `memmove`.
///
/// # Safety
/// - `src` must point to `count` live `U`s, `dst` to `count` writable slots.
/// - If the ranges overlap, `dst` must not come before `src` and
///   `size_of::<T>() >= size_of::<U>()`.
pub unsafe fn move_or_copy_construct_object_array_then_destroy_backward<T, U>(
    dst: *mut T,
    src: *mut U,
    count: usize,
) where
    T: TypeRelation<U> + TypeTraits + MoveFrom<U>,
{
    const { assert!(relation_layout_ok::<T, U>(), "bitwise convertible types differ in size") };

    if is_bitwise_move_constructible::<T, U>() {
        // SAFETY: memmove handles overlap in either direction.
        unsafe { move_memory(dst.cast::<u8>(), src.cast::<u8>().cast_const(), byte_len::<T>(count)) };
    } else {
        for index in (0..count).rev() {
            // SAFETY: walking backwards never reads a source slot already overwritten.
            unsafe { ptr::write(dst.add(index), T::move_from(ptr::read(src.add(index)))) };
        }
    }
}

/// Compares `count` objects pairwise for equality.
///
/// Byte-comparable pairs are decided with one `memcmp`.
///
/// # Safety
/// `a` must point to `count` live `T`s and `b` to `count` live `U`s.
pub unsafe fn is_object_array_equal<T, U>(a: *const T, b: *const U, count: usize) -> bool
where
    T: TypeRelation<U> + PartialEq<U>,
{
    if is_bitwise_comparable::<T, U>() {
        // SAFETY: both ranges readable; byte equality is value equality.
        unsafe { compare_memory(a.cast::<u8>(), b.cast::<u8>(), byte_len::<T>(count)) == 0 }
    } else {
        // SAFETY: `index < count` for both ranges.
        (0..count).all(|index| unsafe { *a.add(index) == *b.add(index) })
    }
}
