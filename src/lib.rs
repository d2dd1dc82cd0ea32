//! # `keystone` - Foundation Memory Utilities
//!
//! Low-level building blocks for containers: raw and over-aligned allocation,
//! byte operations, trait-driven object lifecycle primitives and a compressed
//! pair. Everything is single-threaded and synchronous; all state lives in
//! the memory ranges the caller passes in.
//!
//! ## Architecture
//!
//! 1. **Type classification** ([`traits`]):
//!    - `TypeTraits` / `TypeRelation` facts as associated `const bool`s
//!    - `const fn` predicates (`is_bitwise_copy_constructible::<T, U>()`, ...)
//!      resolved at monomorphization time
//!
//! 2. **Raw allocation** ([`alloc`]):
//!    - `allocate`/`free` over the C allocator
//!    - `allocate_align`/`free_align` with an in-band header
//!    - `AlignedBuffer` as the owning handle
//!
//! 3. **Memory layer** ([`memory`]):
//!    - byte copy/move/fill/compare, runtime and `const fn` backends
//!    - bulk construction, assignment, relocation and destruction that
//!      collapse to a single byte operation whenever the types allow it
//!
//! 4. **Containers** ([`collections`]):
//!    - `CompressedPair<F, S>`, free of storage for empty components
//!
//! ## Example
//!
//! ```rust
//! use core::mem::MaybeUninit;
//! use keystone::memory::{copy_construct_array, is_object_array_equal};
//!
//! let source = [1u32, 2, 3, 4];
//! let mut target = [MaybeUninit::<u32>::uninit(); 4];
//!
//! // `u32` is trivially copyable: this is a single memcpy.
//! unsafe {
//!     let target = target.as_mut_ptr().cast::<u32>();
//!     copy_construct_array(target, source.as_ptr(), 4);
//!     assert!(is_object_array_equal(target.cast_const(), source.as_ptr(), 4));
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: log allocation failures and aligned reallocations.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod alloc;
pub mod collections;
pub mod memory;
pub mod traits;

pub use alloc::{AlignedBuffer, AllocError};
pub use collections::{CompressedPair, PairLayout};
pub use traits::{CopyFrom, MoveFrom, TypeRelation, TypeTraits};

// Compile-time assertions for layout guarantees
const _: () = {
    use core::mem;

    // The aligned header is exactly a pointer and a size.
    assert!(alloc::ALIGNED_HEADER_SIZE == 2 * mem::size_of::<usize>());
    assert!(alloc::MIN_ALIGNMENT.is_power_of_two());

    // Empty slots cost nothing.
    assert!(mem::size_of::<CompressedPair<u64, ()>>() == mem::size_of::<u64>());
    assert!(mem::size_of::<CompressedPair<(), u64>>() == mem::size_of::<u64>());
    assert!(mem::size_of::<CompressedPair<(), ()>>() == 0);
    assert!(
        mem::size_of::<CompressedPair<u32, u16>>() <= mem::size_of::<u32>() + mem::size_of::<u16>() + 2
    );

    // Same-type moves are always bitwise; copies only for trivially copyable types.
    assert!(traits::is_bitwise_move_constructible::<String, String>());
    assert!(!traits::is_bitwise_copy_constructible::<String, String>());
    assert!(traits::is_bitwise_copy_constructible::<u64, u64>());
};
