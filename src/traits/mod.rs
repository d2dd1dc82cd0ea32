//! Compile-time type classification driving the memory layer.
//!
//! Every decision the lifecycle primitives make ("one byte copy for the whole
//! range" versus "one constructor call per element") is a `const bool`
//! computed from the items in this module. Nothing here has a runtime cost;
//! `if is_bitwise_copy_constructible::<T, U>() { .. }` folds away during
//! monomorphization exactly like a branch on a literal.
//!
//! The catalog has three layers:
//!
//! 1. [`TypeTraits`]: single-type facts Rust cannot derive on its own
//!    (bitwise copy equals `Clone`, byte equality equals `PartialEq`,
//!    all-zero bytes equal `Default`).
//! 2. [`TypeRelation`]: facts about a *pair* of types (`Self` built from `U`).
//!    Every `T: TypeTraits` is related to itself; cross-type relations are
//!    declared with [`impl_bitwise_convertible!`](crate::impl_bitwise_convertible).
//! 3. The `const fn` predicates (`is_bitwise_move_constructible` and friends)
//!    composing both layers with the facts Rust does know
//!    (`needs_drop`, `size_of`).
//!
//! Pair predicates need a declared relation. Declaring one with every
//! constant at its default makes the pair answer `false`:
//!
//! ```
//! use keystone::traits::{is_bitwise_copy_constructible, is_bitwise_move_constructible};
//! use keystone::{TypeRelation, TypeTraits};
//!
//! struct Handle(u32);
//!
//! // SAFETY: defaults only.
//! unsafe impl TypeTraits for Handle {}
//! // SAFETY: defaults only.
//! unsafe impl TypeRelation<String> for Handle {}
//!
//! assert!(!is_bitwise_copy_constructible::<Handle, String>());
//! assert!(!is_bitwise_move_constructible::<Handle, String>());
//! ```
//!
//! A pair with no relation at all does not compile:
//!
//! ```compile_fail
//! use keystone::traits::is_bitwise_copy_constructible;
//!
//! let _ = is_bitwise_copy_constructible::<u32, String>();
//! ```

mod impls;
mod macros;
mod predicates;
mod type_traits;

pub use predicates::{
    is_bitwise_comparable, is_bitwise_convertible, is_bitwise_copy_assignable,
    is_bitwise_copy_constructible, is_bitwise_move_assignable, is_bitwise_move_constructible,
    is_empty, is_same, is_trivially_copy_assignable, is_trivially_copy_constructible,
    is_trivially_destructible, is_trivially_move_assignable, is_trivially_move_constructible,
    is_zero_constructible,
};
pub use type_traits::{CopyFrom, MoveFrom, TypeRelation, TypeTraits};

#[doc(hidden)]
pub use type_traits::{reinterpret_copy, reinterpret_move};
