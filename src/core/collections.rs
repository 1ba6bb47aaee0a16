//! Hash collection aliases used across the crate.
//!
//! Points, edges and triangles hash cheaply (a handful of `u64` words), so
//! the crate uses `rustc_hash`'s Fx hasher instead of the DoS-resistant
//! default `SipHash`.
//!
//! # Security Warning
//!
//! ⚠️ **Not DoS-resistant**: do not key these maps with attacker-controlled
//! data in long-running services.

use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};

/// `HashMap` with the Fx hasher.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::collections::FastHashMap;
/// use delaunay2d::point;
///
/// let mut index: FastHashMap<_, usize> = FastHashMap::default();
/// index.insert(point!(1.0, 2.0), 0);
/// assert_eq!(index.get(&point!(1.0, 2.0)), Some(&0));
/// ```
pub type FastHashMap<K, V> = FxHashMap<K, V>;

/// `HashSet` with the Fx hasher.
pub type FastHashSet<T> = FxHashSet<T>;

/// Re-export of the `Entry` API for [`FastHashMap`].
pub use std::collections::hash_map::Entry;

/// Creates a [`FastHashMap`] with at least the given capacity.
#[must_use]
pub fn fast_hash_map_with_capacity<K, V>(capacity: usize) -> FastHashMap<K, V> {
    FastHashMap::with_capacity_and_hasher(capacity, FxBuildHasher)
}

/// Creates a [`FastHashSet`] with at least the given capacity.
#[must_use]
pub fn fast_hash_set_with_capacity<T>(capacity: usize) -> FastHashSet<T> {
    FastHashSet::with_capacity_and_hasher(capacity, FxBuildHasher)
}
