//! The predicate catalog.
//!
//! Every function here is a `const fn` usable in `const` items and in `if`
//! conditions that the optimizer resolves at monomorphization time.
//!
//! The single-type predicates are total. The pair predicates are total over
//! *related* pairs: `T: TypeRelation<U>` is a bound, so every `T` with
//! itself, and every pair some implementation declares, gets an answer.
//! A pair that does not qualify answers `false`. An unrelated pair such as
//! `(u32, String)` is rejected at compile time instead, because stable Rust
//! cannot fall back to a default answer for types with no implementation.

use core::mem;

use super::type_traits::{TypeRelation, TypeTraits};

/// `T` and `U` are the same type.
#[inline(always)]
pub const fn is_same<T: TypeRelation<U>, U>() -> bool {
    T::IS_SAME
}

/// `T` occupies no storage.
#[inline(always)]
pub const fn is_empty<T>() -> bool {
    mem::size_of::<T>() == 0
}

/// The bytes of a `U` are a valid `T` (explicit cross-type declaration).
#[inline(always)]
pub const fn is_bitwise_convertible<T: TypeRelation<U>, U>() -> bool {
    T::IS_BITWISE_CONVERTIBLE && mem::size_of::<T>() == mem::size_of::<U>()
}

/// Dropping a `T` does nothing, so its storage can be reused or freed as is.
#[inline(always)]
pub const fn is_trivially_destructible<T>() -> bool {
    !mem::needs_drop::<T>()
}

/// Moving a `T` is a byte copy. Always true in Rust.
#[inline(always)]
pub const fn is_trivially_move_constructible<T>() -> bool {
    true
}

/// Move-assigning a `T` is a byte copy: the overwritten value has nothing to drop.
#[inline(always)]
pub const fn is_trivially_move_assignable<T>() -> bool {
    is_trivially_destructible::<T>()
}

/// Cloning a `T` is a byte copy.
#[inline(always)]
pub const fn is_trivially_copy_constructible<T: TypeTraits>() -> bool {
    T::IS_TRIVIALLY_COPYABLE && is_trivially_destructible::<T>()
}

/// `clone_from` on a `T` is a byte copy.
#[inline(always)]
pub const fn is_trivially_copy_assignable<T: TypeTraits>() -> bool {
    is_trivially_copy_constructible::<T>()
}

/// `T::default()` is the all-zero byte pattern.
#[inline(always)]
pub const fn is_zero_constructible<T: TypeTraits>() -> bool {
    T::IS_ZERO_CONSTRUCTIBLE
}

/// A `U` can be moved into `T` storage with a byte copy.
#[inline(always)]
pub const fn is_bitwise_move_constructible<T, U>() -> bool
where
    T: TypeRelation<U> + TypeTraits,
{
    is_bitwise_convertible::<T, U>() || (is_same::<T, U>() && is_trivially_move_constructible::<T>())
}

/// A `U` can be copied into `T` storage with a byte copy.
#[inline(always)]
pub const fn is_bitwise_copy_constructible<T, U>() -> bool
where
    T: TypeRelation<U> + TypeTraits,
{
    (is_bitwise_convertible::<T, U>() && is_trivially_destructible::<U>())
        || (is_same::<T, U>() && is_trivially_copy_constructible::<T>())
}

/// A `U` can be moved over a live `T` with a byte copy.
#[inline(always)]
pub const fn is_bitwise_move_assignable<T, U>() -> bool
where
    T: TypeRelation<U> + TypeTraits,
{
    (is_bitwise_convertible::<T, U>() && is_trivially_destructible::<T>())
        || (is_same::<T, U>() && is_trivially_move_assignable::<T>())
}

/// A `U` can be copied over a live `T` with a byte copy.
#[inline(always)]
pub const fn is_bitwise_copy_assignable<T, U>() -> bool
where
    T: TypeRelation<U> + TypeTraits,
{
    (is_bitwise_convertible::<T, U>()
        && is_trivially_destructible::<T>()
        && is_trivially_destructible::<U>())
        || (is_same::<T, U>() && is_trivially_copy_assignable::<T>())
}

/// `T == U` can be decided by comparing bytes.
#[inline(always)]
pub const fn is_bitwise_comparable<T: TypeRelation<U>, U>() -> bool {
    T::IS_BITWISE_COMPARABLE && mem::size_of::<T>() == mem::size_of::<U>()
}
