use std::hash::Hash;

use fnv::FnvBuildHasher;
pub use fnv::{FnvHashMap, FnvHashSet};

/// Hash map keyed by small values such as grid coordinates, with room for `capacity` entries.
/// Much faster than the default hasher on short keys, slower on large ones.
pub fn fnv_hashmap<K: Hash + Eq, V>(capacity: usize) -> FnvHashMap<K, V> {
    FnvHashMap::with_capacity_and_hasher(capacity, FnvBuildHasher::default())
}

pub fn fnv_hashset<T: Hash + Eq>(capacity: usize) -> FnvHashSet<T> {
    FnvHashSet::with_capacity_and_hasher(capacity, FnvBuildHasher::default())
}
