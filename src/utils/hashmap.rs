//! A hash-map with deterministic hashing and iteration order.
//!
//! Broadphase results must be reproducible run to run, so the grid is built
//! on [`indexmap::IndexMap`] (insertion-ordered iteration) keyed through the
//! fixed-state [`FxHasher32`](super::fx_hasher::FxHasher32).

use core::hash::BuildHasherDefault;

use super::fx_hasher::FxHasher32;

/// A deterministic, insertion-ordered hash-map.
pub type HashMap<K, V> = indexmap::IndexMap<K, V, BuildHasherDefault<FxHasher32>>;

pub use indexmap::map::Entry;
