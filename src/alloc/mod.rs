//! Raw allocation primitives.
//!
//! Two families that must never be mixed:
//! - [`allocate`]/[`reallocate`]/[`free`]: plain blocks from the C allocator;
//! - [`allocate_align`]/[`reallocate_align`]/[`free_align`]: over-aligned
//!   blocks carrying an [`ALIGNED_HEADER_SIZE`]-byte header before the
//!   returned pointer.
//!
//! [`allocate_array`]/[`free_array`] hand out typed storage from the global
//! Rust allocator, and [`AlignedBuffer`] owns one aligned block.

pub mod aligned;
pub mod allocator;
pub mod array;
pub mod buffer;

pub use aligned::{
    align_address, align_pointer, align_up, allocate_align, free_align, get_allocation_size,
    get_unaligned_pointer, is_address_aligned, is_pointer_aligned, reallocate_align,
    ALIGNED_HEADER_SIZE, MIN_ALIGNMENT,
};
pub use allocator::{allocate, free, reallocate, AllocError};
pub use array::{allocate_array, free_array};
pub use buffer::AlignedBuffer;
