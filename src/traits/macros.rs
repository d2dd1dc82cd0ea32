/// Implements [`TypeTraits`](crate::traits::TypeTraits) for one or more types
/// with the listed facts set.
///
/// ```
/// use keystone::impl_type_traits;
///
/// #[derive(Clone, Copy, Default, PartialEq)]
/// struct Rgba([u8; 4]);
///
/// impl_type_traits!(Rgba => {
///     IS_TRIVIALLY_COPYABLE = true,
///     IS_BITWISE_COMPARABLE = true,
///     IS_ZERO_CONSTRUCTIBLE = true,
/// });
///
/// assert!(keystone::traits::is_bitwise_copy_constructible::<Rgba, Rgba>());
/// ```
///
/// The expansion is an `unsafe impl`: invoking the macro is the caller's
/// promise that every listed fact holds.
#[macro_export]
macro_rules! impl_type_traits {
    (@facts { $($name:ident = $value:expr),* $(,)? }) => {
        $(const $name: bool = $value;)*
    };
    ($($ty:ty),+ $(,)? => $facts:tt) => {
        $(
            unsafe impl $crate::traits::TypeTraits for $ty {
                $crate::impl_type_traits!(@facts $facts);
            }
        )+
    };
}

/// Declares that the bytes of `$from` are a valid `$to`.
///
/// The declaration is checked at compile time: both types must have the same
/// size, `$from` must be `zerocopy::AsBytes` and `$to` must be
/// `zerocopy::FromBytes`. Besides the [`TypeRelation`](crate::traits::TypeRelation)
/// facts, the expansion provides [`CopyFrom`](crate::traits::CopyFrom) and
/// [`MoveFrom`](crate::traits::MoveFrom) as byte reinterpretations, so the
/// lifecycle primitives accept the pair.
///
/// ```
/// use keystone::traits::is_bitwise_copy_constructible;
///
/// // Provided by the crate for same-width integers.
/// assert!(is_bitwise_copy_constructible::<u16, i16>());
/// ```
#[macro_export]
macro_rules! impl_bitwise_convertible {
    ($($to:ty => $from:ty),+ $(,)?) => {
        $(
            const _: () = assert!(
                ::core::mem::size_of::<$to>() == ::core::mem::size_of::<$from>(),
                "bitwise convertible types must have the same size",
            );

            unsafe impl $crate::traits::TypeRelation<$from> for $to {
                const IS_BITWISE_CONVERTIBLE: bool = true;
            }

            impl $crate::traits::CopyFrom<$from> for $to {
                #[inline]
                fn copy_from(source: &$from) -> Self {
                    $crate::traits::reinterpret_copy::<$to, $from>(source)
                }
            }

            impl $crate::traits::MoveFrom<$from> for $to {
                #[inline]
                fn move_from(source: $from) -> Self {
                    $crate::traits::reinterpret_move::<$to, $from>(source)
                }
            }
        )+
    };
}
