//! Various unsorted geometric and hashing utilities.

pub mod fx_hasher;
pub mod hashmap;
pub mod hashset;
#[cfg(feature = "dim3")]
pub mod trs;

pub use self::hashmap::HashMap;
pub use self::hashset::HashSet;
