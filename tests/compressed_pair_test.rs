use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher};
use std::mem;

use keystone::{CompressedPair, PairLayout};

/// Stateless comparator, the typical empty slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Less;

impl Less {
    fn compare(self, a: u32, b: u32) -> bool {
        a < b
    }
}

#[test]
fn test_stateless_hasher_costs_nothing() {
    type Map = CompressedPair<BuildHasherDefault<DefaultHasher>, Vec<u64>>;
    assert_eq!(mem::size_of::<Map>(), mem::size_of::<Vec<u64>>());
    assert_eq!(Map::layout(), PairLayout::FirstElided);

    // A stateful hasher keeps its storage.
    type Seeded = CompressedPair<RandomState, Vec<u64>>;
    assert!(mem::size_of::<Seeded>() > mem::size_of::<Vec<u64>>());
    assert_eq!(Seeded::layout(), PairLayout::BothStored);

    let map = Map::from_second(vec![1, 2, 3]);
    let first = map.first().hash_one(42u64);
    let second = BuildHasherDefault::<DefaultHasher>::default().hash_one(42u64);
    assert_eq!(first, second);
}

#[test]
fn test_empty_slot_behaves_normally() {
    let mut pair = CompressedPair::new(Less, 10u32);
    assert!(pair.first().compare(1, 2));
    *pair.second_mut() += 5;
    assert_eq!(*pair.second(), 15);
    let (less, value) = pair.into_parts();
    assert_eq!(less, Less);
    assert_eq!(value, 15);
}

#[test]
fn test_same_type_slots_stay_independent() {
    let mut pair = CompressedPair::new(Less, Less);
    assert_eq!(mem::size_of_val(&pair), 0);
    assert_eq!(CompressedPair::<Less, Less>::layout(), PairLayout::SameElided);
    let (a, b) = pair.as_mut_refs();
    *a = Less;
    *b = Less;

    let mut stored = CompressedPair::new(1u16, 2u16);
    *stored.first_mut() = 7;
    assert_eq!(stored.as_refs(), (&7, &2));
}

#[test]
fn test_construction_moves_or_copies_arguments() {
    // Moving a temporary.
    let moved = CompressedPair::new(String::from("key"), vec![1u8]);
    assert_eq!(moved.first(), "key");

    // Copying from named values leaves the originals usable.
    let name = String::from("named");
    let bytes = vec![9u8, 8];
    let copied = CompressedPair::new(name.clone(), bytes.clone());
    assert_eq!((copied.first(), copied.second()), (&name, &bytes));

    // Whole-pair copy and assignment.
    let mut target = CompressedPair::<String, Vec<u8>>::default();
    target.clone_from(&copied);
    assert_eq!(target, copied);

    let tuple: (String, Vec<u8>) = target.into();
    assert_eq!(tuple, (name, bytes));
}

#[test]
fn test_serde_round_trip() {
    let pair = CompressedPair::new(3u8, String::from("three"));
    let json = serde_json::to_string(&pair).unwrap();
    assert_eq!(json, r#"[3,"three"]"#);
    let back: CompressedPair<u8, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pair);

    let layout = serde_json::to_string(&PairLayout::SecondElided).unwrap();
    assert_eq!(serde_json::from_str::<PairLayout>(&layout).unwrap(), PairLayout::SecondElided);
}

#[test]
fn test_ordering_is_lexicographic() {
    let a = CompressedPair::new(1, 9);
    let b = CompressedPair::new(2, 0);
    assert!(a < b);
    assert!(CompressedPair::new(1, 1) < CompressedPair::new(1, 2));
}
