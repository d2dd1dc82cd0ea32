//! Memory utility layer.
//!
//! - `bytes`: raw byte copy/move/fill/compare over pointers (runtime backend).
//! - `constant`: the same operations as `const fn`s over slices.
//! - `object`: construction, destruction, copy, move and relocation of
//!   object arrays, choosing bitwise transfer whenever the trait layer allows.

pub mod bytes;
pub mod constant;
pub mod object;

pub use bytes::{
    compare_memory, copy_memory, is_memory_compare_equal, is_memory_compare_greater,
    is_memory_compare_less, move_memory, set_memory, set_memory_safe, zero_memory,
};
pub use object::{
    construct_array_at, construct_object_at, copy_assign_object_array, copy_construct_array,
    default_construct, default_construct_array, destroy_object, destroy_object_array,
    fast_move_or_copy_construct_object_array_then_destroy, is_object_array_equal,
    move_or_copy_assign_object_array, move_or_copy_construct_array,
    move_or_copy_construct_object_array_then_destroy_backward,
    move_or_copy_construct_object_then_destroy,
};
