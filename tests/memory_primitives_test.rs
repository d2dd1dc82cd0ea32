use core::cell::Cell;
use core::mem::{ManuallyDrop, MaybeUninit};

use keystone::{impl_type_traits, MoveFrom, TypeRelation};
use keystone::memory::{
    copy_assign_object_array, copy_construct_array, destroy_object_array,
    fast_move_or_copy_construct_object_array_then_destroy, is_object_array_equal, move_memory,
    move_or_copy_construct_array, move_or_copy_construct_object_array_then_destroy_backward,
};

thread_local! {
    static CLONES: Cell<usize> = const { Cell::new(0) };
    static DROPS: Cell<usize> = const { Cell::new(0) };
}

/// A trivially copyable `int` whose `Clone` is instrumented.
#[derive(Copy, Debug, PartialEq)]
struct CountedInt(i32);

impl Clone for CountedInt {
    fn clone(&self) -> Self {
        CLONES.set(CLONES.get() + 1);
        *self
    }
}

impl_type_traits!(CountedInt => {
    IS_TRIVIALLY_COPYABLE = true,
    IS_BITWISE_COMPARABLE = true,
});

impl MoveFrom<i32> for CountedInt {
    fn move_from(value: i32) -> Self {
        CountedInt(value)
    }
}

// Related, but never reinterpreted: conversion goes through `MoveFrom`.
unsafe impl TypeRelation<i32> for CountedInt {}

/// Owns nothing, but records every drop.
#[derive(Debug, PartialEq)]
struct Noisy(u32);

impl Clone for Noisy {
    fn clone(&self) -> Self {
        CLONES.set(CLONES.get() + 1);
        Noisy(self.0)
    }
}

impl Drop for Noisy {
    fn drop(&mut self) {
        DROPS.set(DROPS.get() + 1);
    }
}

impl_type_traits!(Noisy => {});

fn take_counts() -> (usize, usize) {
    (CLONES.replace(0), DROPS.replace(0))
}

fn uninit_array<T, const N: usize>() -> [MaybeUninit<T>; N] {
    [const { MaybeUninit::uninit() }; N]
}

#[test]
fn test_fast_relocate_ints_is_one_bulk_copy() {
    take_counts();
    let mut src: [CountedInt; 8] = core::array::from_fn(|i| CountedInt(i as i32 * 3));
    let original = src;
    let mut dst = uninit_array::<CountedInt, 8>();

    unsafe {
        fast_move_or_copy_construct_object_array_then_destroy(
            dst.as_mut_ptr().cast::<CountedInt>(),
            src.as_mut_ptr(),
            8,
        );
    }

    // No element-wise construction happened.
    assert_eq!(take_counts(), (0, 0));
    let dst = dst.map(|slot| unsafe { slot.assume_init() });
    assert_eq!(dst, original);
}

#[test]
fn test_fast_relocate_non_trivial_moves_without_drops() {
    take_counts();
    let mut src = ManuallyDrop::new([Noisy(1), Noisy(2), Noisy(3)]);
    let mut dst = uninit_array::<Noisy, 3>();

    unsafe {
        fast_move_or_copy_construct_object_array_then_destroy(
            dst.as_mut_ptr().cast::<Noisy>(),
            src.as_mut_ptr(),
            3,
        );
    }

    // Ownership moved: nothing cloned, nothing dropped yet.
    assert_eq!(take_counts(), (0, 0));
    let dst = dst.map(|slot| unsafe { slot.assume_init() });
    assert_eq!(dst.iter().map(|n| n.0).collect::<Vec<_>>(), [1, 2, 3]);
    drop(dst);
    assert_eq!(take_counts(), (0, 3));
}

#[test]
fn test_copy_construct_round_trip_equality() {
    let src: Vec<u64> = (0..257).map(|i| i * 0x0101_0101).collect();
    let mut dst: Vec<u64> = Vec::with_capacity(src.len());
    unsafe {
        copy_construct_array(dst.as_mut_ptr(), src.as_ptr(), src.len());
        dst.set_len(src.len());
        assert!(is_object_array_equal(dst.as_ptr(), src.as_ptr(), src.len()));
    }
    assert_eq!(dst, src);
}

#[test]
fn test_copy_construct_non_trivial_clones_each() {
    take_counts();
    let src = vec![Noisy(5), Noisy(6)];
    let mut dst: Vec<Noisy> = Vec::with_capacity(2);
    unsafe {
        copy_construct_array(dst.as_mut_ptr(), src.as_ptr(), 2);
        dst.set_len(2);
    }
    assert_eq!(take_counts(), (2, 0));
    assert_eq!(dst, src);
}

#[test]
fn test_copy_assign_trivial_is_bitwise() {
    take_counts();
    let src = [CountedInt(9); 4];
    let mut dst = [CountedInt(0); 4];
    unsafe { copy_assign_object_array(dst.as_mut_ptr(), src.as_ptr(), 4) };
    assert_eq!(take_counts(), (0, 0));
    assert_eq!(dst, src);
}

#[test]
fn test_convert_while_moving() {
    take_counts();
    let mut src = [10i32, 20, 30];
    let mut dst = uninit_array::<CountedInt, 3>();
    unsafe { move_or_copy_construct_array(dst.as_mut_ptr().cast::<CountedInt>(), src.as_mut_ptr(), 3) };
    let dst = dst.map(|slot| unsafe { slot.assume_init() });
    assert_eq!(dst, [CountedInt(10), CountedInt(20), CountedInt(30)]);
}

#[test]
fn test_move_memory_shift_matches_manual() {
    let mut buffer: [u8; 16] = core::array::from_fn(|i| (i * 7) as u8);
    let mut manual = buffer;
    manual.copy_within(0..12, 4);

    let base = buffer.as_mut_ptr();
    unsafe { move_memory(base.add(4), base, 12) };
    assert_eq!(buffer, manual);
}

#[test]
fn test_insert_gap_with_backward_relocation() {
    take_counts();
    let mut items: Vec<Noisy> = (0..5).map(Noisy).collect();
    items.reserve(2);
    let base = items.as_mut_ptr();
    unsafe {
        // Open a two-slot gap at index 1.
        move_or_copy_construct_object_array_then_destroy_backward(base.add(3), base.add(1), 4);
        base.add(1).write(Noisy(100));
        base.add(2).write(Noisy(200));
        items.set_len(7);
    }
    assert_eq!(take_counts(), (0, 0));
    assert_eq!(items.iter().map(|n| n.0).collect::<Vec<_>>(), [0, 100, 200, 1, 2, 3, 4]);
}

#[test]
fn test_destroy_object_array_drops_each_once() {
    take_counts();
    let mut items = ManuallyDrop::new([Noisy(1), Noisy(2), Noisy(3), Noisy(4)]);
    unsafe { destroy_object_array(items.as_mut_ptr(), 4) };
    assert_eq!(take_counts(), (0, 4));

    // Trivially destructible types are skipped entirely.
    let mut ints = [1u32, 2, 3];
    unsafe { destroy_object_array(ints.as_mut_ptr(), 3) };
    assert_eq!(ints, [1, 2, 3]);
}
