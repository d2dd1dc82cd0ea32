//! Storage-optimized containers built on the memory layer.

pub mod compressed_pair;

pub use compressed_pair::{CompressedPair, PairLayout};
