//! Constant-evaluable counterparts of the byte operations.
//!
//! Constant evaluation forbids the block intrinsics on raw pointers and
//! pointer comparisons, so this backend works on slices with explicit loops.
//! Overlap can only occur inside a single buffer here, which is why
//! [`move_memory`] takes offsets into one slice and picks the copy direction
//! from them.
//!
//! Every function is a `const fn` and may be used to build `const` and
//! `static` items; called at run time it behaves identically to its
//! counterpart in [`bytes`](super::bytes).

/// Copies `size` bytes from the front of `src` into the front of `dst`.
///
/// # Panics
/// Panics (a compile error in const context) if either slice is shorter than `size`.
pub const fn copy_memory(dst: &mut [u8], src: &[u8], size: usize) {
    assert!(size <= dst.len() && size <= src.len(), "copy_memory: range out of bounds");
    let mut index = 0;
    while index < size {
        dst[index] = src[index];
        index += 1;
    }
}

/// Copies `size` bytes inside `buffer` from offset `src` to offset `dst`;
/// the two ranges may overlap.
///
/// # Panics
/// Panics if either range leaves the buffer.
pub const fn move_memory(buffer: &mut [u8], dst: usize, src: usize, size: usize) {
    assert!(
        dst + size <= buffer.len() && src + size <= buffer.len(),
        "move_memory: range out of bounds"
    );
    if dst <= src {
        let mut index = 0;
        while index < size {
            buffer[dst + index] = buffer[src + index];
            index += 1;
        }
    } else {
        let mut index = size;
        while index > 0 {
            index -= 1;
            buffer[dst + index] = buffer[src + index];
        }
    }
}

/// Fills the first `size` bytes of `dst` with `value`.
///
/// # Panics
/// Panics if `dst` is shorter than `size`.
pub const fn set_memory(dst: &mut [u8], size: usize, value: u8) {
    assert!(size <= dst.len(), "set_memory: range out of bounds");
    let mut index = 0;
    while index < size {
        dst[index] = value;
        index += 1;
    }
}

/// Lexicographically compares the first `size` bytes, stopping at the first
/// difference.
///
/// # Panics
/// Panics if either slice is shorter than `size`.
pub const fn compare_memory(a: &[u8], b: &[u8], size: usize) -> i32 {
    assert!(size <= a.len() && size <= b.len(), "compare_memory: range out of bounds");
    let mut index = 0;
    while index < size {
        if a[index] != b[index] {
            return a[index] as i32 - b[index] as i32;
        }
        index += 1;
    }
    0
}

/// Element-wise copy for trivially copyable elements.
///
/// # Panics
/// Panics if either slice is shorter than `count`.
pub const fn copy_object_array<T: Copy>(dst: &mut [T], src: &[T], count: usize) {
    assert!(count <= dst.len() && count <= src.len(), "copy_object_array: range out of bounds");
    let mut index = 0;
    while index < count {
        dst[index] = src[index];
        index += 1;
    }
}
