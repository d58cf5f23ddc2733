// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! [`Mapping`] for the persistent maps from [`imbl`].
//!
//! These are only available when using the `imbl` feature flag.
//!
//! Copies of these maps share structure with their source, so
//! [`copy`][crate::copy] is cheap, but a copy can still be changed
//! without affecting the map it came from.
//!
//! [`imbl`]: https://docs.rs/imbl/latest/

use ::imbl::hashmap::{self, HashMap};
use ::imbl::ordmap::{self, OrdMap};
use ::imbl::shared_ptr::DefaultSharedPtr;
use std::hash::Hash;

use crate::mapping::{Mapping, MappingMut};

impl<K, V> Mapping for HashMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;
    type Owned = Self;
    type Iter<'a>
        = hashmap::Iter<'a, K, V, DefaultSharedPtr>
    where
        Self: 'a;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }
}

impl<K, V> MappingMut for HashMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }
}

impl<K, V> Mapping for OrdMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;
    type Owned = Self;
    type Iter<'a>
        = ordmap::Iter<'a, K, V, DefaultSharedPtr>
    where
        Self: 'a;

    fn len(&self) -> usize {
        OrdMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        OrdMap::get(self, key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        OrdMap::iter(self)
    }
}

impl<K, V> MappingMut for OrdMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        OrdMap::insert(self, key, value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{copy, equal, keys, keys_match, merge, select, set};
    use static_assertions::assert_impl_all;
    use std::collections::BTreeMap;

    assert_impl_all!(HashMap<i32, bool>: Mapping, MappingMut);
    assert_impl_all!(OrdMap<i32, bool>: Mapping, MappingMut);

    fn sample() -> OrdMap<i32, bool> {
        OrdMap::from_iter([(0, true), (1, false), (2, true)])
    }

    #[test]
    fn copy_shares_nothing_observable() {
        let original = sample();
        let mut copied = copy(&original);
        set(&mut copied, 0, false);
        assert_eq!(Some(&true), original.get(&0));
        assert_eq!(Some(&false), copied.get(&0));
    }

    #[test]
    fn keys_come_out_ordered() {
        assert_eq!(vec![0, 1, 2], keys(&sample()));
    }

    #[test]
    fn compares_against_std_maps() {
        let std_map = BTreeMap::from([(0, true), (1, false), (2, true)]);
        assert!(equal(&sample(), &std_map));
        assert!(keys_match(&std_map, &sample()));
    }

    #[test]
    fn merge_and_select_over_hash_maps() {
        let base: HashMap<&str, i32> = HashMap::from_iter([("a", 1), ("b", 2)]);
        let overlay: HashMap<&str, i32> = HashMap::from_iter([("b", 3)]);
        let merged = merge(&base, [&overlay]);
        assert_eq!(Some(&3), merged.get("b"));
        assert_eq!(Some(&2), base.get("b"));
        let picked = select(&merged, ["a", "z"]);
        assert_eq!(1, picked.len());
        assert_eq!(Some(&1), picked.get("a"));
    }
}
