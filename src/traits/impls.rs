//! `TypeTraits` for the standard vocabulary types.

use core::marker::PhantomData;
use core::mem;
use core::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
};

use super::type_traits::{CopyFrom, MoveFrom, TypeRelation, TypeTraits};

crate::impl_type_traits!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    bool, char, () => {
        IS_TRIVIALLY_COPYABLE = true,
        IS_BITWISE_COMPARABLE = true,
        IS_ZERO_CONSTRUCTIBLE = true,
    }
);

// `0.0 == -0.0` and `NaN != NaN`: bytes and `PartialEq` disagree.
crate::impl_type_traits!(f32, f64 => {
    IS_TRIVIALLY_COPYABLE = true,
    IS_ZERO_CONSTRUCTIBLE = true,
});

crate::impl_type_traits!(
    NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize => {
        IS_TRIVIALLY_COPYABLE = true,
        IS_BITWISE_COMPARABLE = true,
    }
);

crate::impl_bitwise_convertible!(
    u8 => i8, i8 => u8,
    u16 => i16, i16 => u16,
    u32 => i32, i32 => u32,
    u64 => i64, i64 => u64,
    u128 => i128, i128 => u128,
    usize => isize, isize => usize,
);

macro_rules! impl_widening_relations {
    ($($to:ty => [$($from:ty),+]),+ $(,)?) => {
        $($(
            // SAFETY: defaults only; related through `From`, never bitwise.
            unsafe impl TypeRelation<$from> for $to {}

            impl CopyFrom<$from> for $to {
                #[inline]
                fn copy_from(source: &$from) -> Self {
                    <$to>::from(*source)
                }
            }

            impl MoveFrom<$from> for $to {
                #[inline]
                fn move_from(source: $from) -> Self {
                    <$to>::from(source)
                }
            }
        )+)+
    };
}

// Lossless `From` conversions, copied and moved element by element.
impl_widening_relations!(
    u16 => [u8],
    u32 => [u8, u16],
    u64 => [u8, u16, u32],
    u128 => [u8, u16, u32, u64],
    i16 => [i8, u8],
    i32 => [i8, i16, u8, u16],
    i64 => [i8, i16, i32, u8, u16, u32],
    i128 => [i8, i16, i32, i64, u8, u16, u32, u64],
    f64 => [f32],
);

// SAFETY: pointers are plain addresses; `==` compares the address (and
// metadata for wide pointers), which is exactly their byte representation.
unsafe impl<T: ?Sized> TypeTraits for *const T {
    const IS_TRIVIALLY_COPYABLE: bool = true;
    const IS_BITWISE_COMPARABLE: bool = true;
}

// SAFETY: as for `*const T`.
unsafe impl<T: ?Sized> TypeTraits for *mut T {
    const IS_TRIVIALLY_COPYABLE: bool = true;
    const IS_BITWISE_COMPARABLE: bool = true;
}

// SAFETY: copying a shared reference copies the address. Equality compares
// the referents, so it is not byte comparable.
unsafe impl<T: ?Sized> TypeTraits for &T {
    const IS_TRIVIALLY_COPYABLE: bool = true;
}

// SAFETY: defaults only.
unsafe impl<T: ?Sized> TypeTraits for &mut T {}

// SAFETY: zero-sized; every value is equal and made of zero bytes.
unsafe impl<T: ?Sized> TypeTraits for PhantomData<T> {
    const IS_TRIVIALLY_COPYABLE: bool = true;
    const IS_BITWISE_COMPARABLE: bool = true;
    const IS_ZERO_CONSTRUCTIBLE: bool = true;
}

// SAFETY: arrays have no padding between elements, so every element fact
// extends to the whole array.
unsafe impl<T: TypeTraits, const N: usize> TypeTraits for [T; N] {
    const IS_TRIVIALLY_COPYABLE: bool = T::IS_TRIVIALLY_COPYABLE;
    const IS_BITWISE_COMPARABLE: bool = T::IS_BITWISE_COMPARABLE;
    const IS_ZERO_CONSTRUCTIBLE: bool = T::IS_ZERO_CONSTRUCTIBLE;
}

// SAFETY: the discriminant layout is unspecified, so only copyability is
// inherited from the payload.
unsafe impl<T: TypeTraits> TypeTraits for Option<T> {
    const IS_TRIVIALLY_COPYABLE: bool = T::IS_TRIVIALLY_COPYABLE;
}

// SAFETY: defaults only; all three own heap storage.
unsafe impl TypeTraits for String {}
// SAFETY: defaults only.
unsafe impl<T> TypeTraits for Vec<T> {}
// SAFETY: defaults only.
unsafe impl<T: ?Sized> TypeTraits for Box<T> {}

macro_rules! impl_tuple_traits {
    ($($name:ident),+) => {
        // SAFETY: copying and zero-filling each field covers the whole tuple.
        // Byte comparison additionally requires the absence of padding, which
        // holds when the fields add up to the tuple's size.
        unsafe impl<$($name: TypeTraits),+> TypeTraits for ($($name,)+) {
            const IS_TRIVIALLY_COPYABLE: bool = true $(&& $name::IS_TRIVIALLY_COPYABLE)+;
            const IS_BITWISE_COMPARABLE: bool = true $(&& $name::IS_BITWISE_COMPARABLE)+
                && mem::size_of::<Self>() == 0 $(+ mem::size_of::<$name>())+;
            const IS_ZERO_CONSTRUCTIBLE: bool = true $(&& $name::IS_ZERO_CONSTRUCTIBLE)+;
        }
    };
}

impl_tuple_traits!(A);
impl_tuple_traits!(A, B);
impl_tuple_traits!(A, B, C);
impl_tuple_traits!(A, B, C, D);
impl_tuple_traits!(A, B, C, D, E);
impl_tuple_traits!(A, B, C, D, E, F);

#[cfg(test)]
mod tests {
    use crate::traits::{
        is_bitwise_comparable, is_bitwise_copy_constructible, is_zero_constructible,
    };

    #[test]
    fn test_tuple_padding_blocks_comparison() {
        // (u8, u32) carries three padding bytes.
        assert!(!is_bitwise_comparable::<(u8, u32), (u8, u32)>());
        assert!(is_bitwise_comparable::<(u32, u32), (u32, u32)>());
        assert!(is_bitwise_copy_constructible::<(u8, u32), (u8, u32)>());
    }

    #[test]
    fn test_arrays_inherit_element_facts() {
        assert!(is_bitwise_comparable::<[u16; 8], [u16; 8]>());
        assert!(is_zero_constructible::<[i64; 4]>());
        assert!(!is_bitwise_copy_constructible::<[String; 2], [String; 2]>());
    }

    #[test]
    fn test_non_zero_is_not_zero_constructible() {
        assert!(!is_zero_constructible::<core::num::NonZeroU32>());
        assert!(!is_zero_constructible::<String>());
    }
}
