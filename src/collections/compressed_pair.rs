//! `CompressedPair` - two values stored without paying for empty ones.
//!
//! Rust lays out zero-sized fields in zero bytes, so a plain two-field struct
//! already elides the storage of any empty component, whichever slot it is
//! in and whether or not both slots share a type. `CompressedPair` keeps the
//! slot-oriented API of a compressed pair (independent construction,
//! per-slot accessors, whole-pair copy/move/assignment) on top of that, and
//! [`PairLayout`] names which of the classic storage arrangements a given
//! `(F, S)` corresponds to.
//!
//! Zero-sized values carry no identity: references to two empty slots may
//! compare equal, and no layout can make them differ without storing a byte.

use core::any::TypeId;
use core::mem;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::traits::TypeTraits;

/// Storage arrangement of a `CompressedPair<F, S>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairLayout {
    /// Distinct types, both with storage.
    BothStored,
    /// Distinct types, `first` is empty and folded away.
    FirstElided,
    /// Distinct types, `second` is empty and folded away.
    SecondElided,
    /// Distinct types, both empty.
    BothElided,
    /// One type in both slots, with storage.
    SameStored,
    /// One empty type in both slots.
    SameElided,
}

impl PairLayout {
    /// Classifies a pair from the emptiness of its slots and whether they share a type.
    pub const fn classify(first_empty: bool, second_empty: bool, same: bool) -> Self {
        match (same, first_empty, second_empty) {
            (true, true, _) => Self::SameElided,
            (true, false, _) => Self::SameStored,
            (false, false, false) => Self::BothStored,
            (false, true, false) => Self::FirstElided,
            (false, false, true) => Self::SecondElided,
            (false, true, true) => Self::BothElided,
        }
    }

    /// Classifies `CompressedPair<F, S>`.
    pub fn of<F: 'static, S: 'static>() -> Self {
        Self::classify(
            mem::size_of::<F>() == 0,
            mem::size_of::<S>() == 0,
            TypeId::of::<F>() == TypeId::of::<S>(),
        )
    }

    /// Returns `true` if at least one slot takes no storage.
    pub const fn elides_storage(self) -> bool {
        !matches!(self, Self::BothStored | Self::SameStored)
    }
}

/// A pair whose empty components occupy no storage.
///
/// `size_of::<CompressedPair<F, S>>()` never exceeds
/// `size_of::<F>() + size_of::<S>()` rounded up to the pair's alignment, and
/// equals `size_of` of the non-empty component when the other is empty.
///
/// ```
/// use keystone::CompressedPair;
///
/// #[derive(Default)]
/// struct Stateless;
///
/// let pair = CompressedPair::new(Stateless, 64u64);
/// assert_eq!(core::mem::size_of_val(&pair), 8);
/// assert_eq!(*pair.second(), 64);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompressedPair<F, S> {
    first: F,
    second: S,
}

impl<F, S> CompressedPair<F, S> {
    /// Builds a pair from both slot values.
    #[inline]
    pub const fn new(first: F, second: S) -> Self {
        Self { first, second }
    }

    /// Builds a pair from `first`, default-constructing `second`.
    #[inline]
    pub fn from_first(first: F) -> Self
    where
        S: Default,
    {
        Self { first, second: S::default() }
    }

    /// Builds a pair from `second`, default-constructing `first`.
    #[inline]
    pub fn from_second(second: S) -> Self
    where
        F: Default,
    {
        Self { first: F::default(), second }
    }

    /// Shared access to the first slot.
    #[inline]
    pub const fn first(&self) -> &F {
        &self.first
    }

    /// Exclusive access to the first slot.
    #[inline]
    pub fn first_mut(&mut self) -> &mut F {
        &mut self.first
    }

    /// Consumes the pair, returning the first slot.
    #[inline]
    pub fn into_first(self) -> F {
        self.first
    }

    /// Shared access to the second slot.
    #[inline]
    pub const fn second(&self) -> &S {
        &self.second
    }

    /// Exclusive access to the second slot.
    #[inline]
    pub fn second_mut(&mut self) -> &mut S {
        &mut self.second
    }

    /// Consumes the pair, returning the second slot.
    #[inline]
    pub fn into_second(self) -> S {
        self.second
    }

    /// Shared access to both slots at once.
    #[inline]
    pub const fn as_refs(&self) -> (&F, &S) {
        (&self.first, &self.second)
    }

    /// Exclusive access to both slots at once.
    #[inline]
    pub fn as_mut_refs(&mut self) -> (&mut F, &mut S) {
        (&mut self.first, &mut self.second)
    }

    /// Consumes the pair, returning both slots.
    #[inline]
    pub fn into_parts(self) -> (F, S) {
        (self.first, self.second)
    }

    /// Exchanges the contents of two pairs.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// The storage arrangement of this pair type.
    pub fn layout() -> PairLayout
    where
        F: 'static,
        S: 'static,
    {
        PairLayout::of::<F, S>()
    }
}

impl<F, S> From<(F, S)> for CompressedPair<F, S> {
    #[inline]
    fn from((first, second): (F, S)) -> Self {
        Self::new(first, second)
    }
}

impl<F, S> From<CompressedPair<F, S>> for (F, S) {
    #[inline]
    fn from(pair: CompressedPair<F, S>) -> Self {
        pair.into_parts()
    }
}

// SAFETY: the pair is exactly its two fields; byte comparison additionally
// requires that no padding sits between or after them.
unsafe impl<F: TypeTraits, S: TypeTraits> TypeTraits for CompressedPair<F, S> {
    const IS_TRIVIALLY_COPYABLE: bool = F::IS_TRIVIALLY_COPYABLE && S::IS_TRIVIALLY_COPYABLE;
    const IS_BITWISE_COMPARABLE: bool = F::IS_BITWISE_COMPARABLE
        && S::IS_BITWISE_COMPARABLE
        && mem::size_of::<Self>() == mem::size_of::<F>() + mem::size_of::<S>();
    const IS_ZERO_CONSTRUCTIBLE: bool = F::IS_ZERO_CONSTRUCTIBLE && S::IS_ZERO_CONSTRUCTIBLE;
}

impl<F: Serialize, S: Serialize> Serialize for CompressedPair<F, S> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        (&self.first, &self.second).serialize(serializer)
    }
}

impl<'de, F: Deserialize<'de>, S: Deserialize<'de>> Deserialize<'de> for CompressedPair<F, S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <(F, S)>::deserialize(deserializer).map(Self::from)
    }
}
