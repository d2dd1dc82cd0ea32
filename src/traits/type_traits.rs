use core::mem::{self, ManuallyDrop};
use core::ptr;

use zerocopy::{AsBytes, FromBytes};

/// Per-type facts consumed by the memory layer.
///
/// All constants default to `false`, which is always a sound answer: it only
/// sends the memory layer down the element-wise path. Most types therefore
/// only need the one-liner `unsafe impl TypeTraits for MyType {}`.
///
/// # Safety
///
/// Each constant set to `true` is a promise the memory layer relies on for
/// soundness:
///
/// - `IS_TRIVIALLY_COPYABLE`: a byte copy of a value is a valid value that is
///   indistinguishable from `Clone::clone`, and the type has no drop glue.
/// - `IS_BITWISE_COMPARABLE`: two values compare equal under `PartialEq`
///   exactly when their bytes are equal. The type must not contain padding.
/// - `IS_ZERO_CONSTRUCTIBLE`: the all-zero byte pattern is a valid value equal
///   to `Default::default()`.
pub unsafe trait TypeTraits: Sized {
    /// A byte copy is equivalent to `Clone::clone`.
    const IS_TRIVIALLY_COPYABLE: bool = false;
    /// Byte equality is equivalent to `PartialEq::eq`.
    const IS_BITWISE_COMPARABLE: bool = false;
    /// `Default::default()` is the all-zero byte pattern.
    const IS_ZERO_CONSTRUCTIBLE: bool = false;
}

/// Facts about producing a `Self` from a `U`.
///
/// The blanket implementation relates every [`TypeTraits`] type to itself.
/// Other pairs are related only where an implementation says so: an
/// implementation with every constant at its default declares a pair that
/// converts element by element. Bitwise cross-type relations are only sound
/// when the bytes of any `U` form a valid `Self`; use [`impl_bitwise_convertible!`](crate::impl_bitwise_convertible)
/// to declare them, which checks the layout at compile time.
///
/// # Safety
///
/// - `IS_SAME` must be `true` only for the blanket `Self == U` implementation.
/// - `IS_BITWISE_CONVERTIBLE`: `size_of::<Self>() == size_of::<U>()` and the
///   bytes of any `U` are a valid `Self` equal to what [`MoveFrom<U>`] (or
///   [`CopyFrom<U>`]) produces.
/// - `IS_BITWISE_COMPARABLE`: byte equality of a `Self` and a `U` is
///   equivalent to `PartialEq<U>`.
pub unsafe trait TypeRelation<U>: Sized {
    /// `Self` and `U` are the same type.
    const IS_SAME: bool = false;
    /// The bytes of a `U` can be reused verbatim as a `Self`.
    const IS_BITWISE_CONVERTIBLE: bool = false;
    /// Byte equality of `Self` and `U` matches `PartialEq<U>`.
    const IS_BITWISE_COMPARABLE: bool = false;
}

// SAFETY: a type is trivially the same as itself, and byte comparability is
// inherited from the single-type promise.
unsafe impl<T: TypeTraits> TypeRelation<T> for T {
    const IS_SAME: bool = true;
    const IS_BITWISE_COMPARABLE: bool = T::IS_BITWISE_COMPARABLE;
}

/// Copy construction and copy assignment of `Self` from a borrowed `U`.
///
/// Every `Clone` type copies from itself through `clone`/`clone_from`.
/// Conversions between distinct types implement this by hand.
pub trait CopyFrom<U>: Sized {
    /// Builds a new value from `source`, leaving `source` untouched.
    fn copy_from(source: &U) -> Self;

    /// Overwrites `self` with a copy of `source`.
    #[inline]
    fn copy_assign_from(&mut self, source: &U) {
        *self = Self::copy_from(source);
    }
}

impl<T: Clone> CopyFrom<T> for T {
    #[inline]
    fn copy_from(source: &T) -> Self {
        source.clone()
    }

    #[inline]
    fn copy_assign_from(&mut self, source: &T) {
        self.clone_from(source);
    }
}

/// Move construction of `Self` from a consumed `U`.
///
/// The lifecycle primitives move through this trait rather than `From`, so
/// the crate can relate types it does not own (`u32` from `i32`). Every type
/// moves from itself; `From` conversions opt in with a one-line impl.
pub trait MoveFrom<U>: Sized {
    /// Builds a new value by consuming `source`.
    fn move_from(source: U) -> Self;
}

impl<T> MoveFrom<T> for T {
    #[inline]
    fn move_from(source: T) -> Self {
        source
    }
}

/// Reads the bytes of `source` as a `T`.
///
/// Used by [`impl_bitwise_convertible!`](crate::impl_bitwise_convertible).
#[doc(hidden)]
#[inline]
pub fn reinterpret_copy<T: FromBytes, U: AsBytes>(source: &U) -> T {
    const { assert!(mem::size_of::<T>() == mem::size_of::<U>(), "reinterpreted types differ in size") };
    // SAFETY: the sizes match, every byte of a `U` is initialized (`AsBytes`)
    // and every byte pattern is a valid `T` (`FromBytes`). The read is
    // unaligned because `T` may be more strictly aligned than `U`.
    unsafe { ptr::read_unaligned(ptr::from_ref(source).cast::<T>()) }
}

/// Consumes `source`, handing its bytes over to a `T`.
#[doc(hidden)]
#[inline]
pub fn reinterpret_move<T: FromBytes, U: AsBytes>(source: U) -> T {
    let source = ManuallyDrop::new(source);
    reinterpret_copy(&*source)
}
