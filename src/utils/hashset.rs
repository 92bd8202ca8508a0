//! A hash-set with deterministic hashing and iteration order.

use core::hash::BuildHasherDefault;

use super::fx_hasher::FxHasher32;

/// A deterministic, insertion-ordered hash-set.
pub type HashSet<K> = indexmap::IndexSet<K, BuildHasherDefault<FxHasher32>>;
