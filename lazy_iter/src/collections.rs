use {
  fnv::FnvHasher,
  std::hash::BuildHasherDefault,
};

////////////////////////////////////////////////////////////////////////////////////////////////

pub use {
  indexmap::{
    map as index_map,
    set as index_set,
  },
};

////////////////////////////////////////////////////////////////////////////////////////////////

/// Insertion-ordered map produced by [`Iter::to_map`](crate::Iter::to_map).
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, BuildHasherDefault<FnvHasher>>;

/// Insertion-ordered set produced by [`Iter::to_set`](crate::Iter::to_set).
pub type IndexSet<K> = indexmap::IndexSet<K, BuildHasherDefault<FnvHasher>>;

////////////////////////////////////////////////////////////////////////////////////////////////
