// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Traits abstracting over key-value containers.
//!
//! [`Mapping`] is the read side every helper in this crate is written
//! against, and [`MappingMut`] is what the helpers build their results
//! into. Implementations are provided for the standard library maps, for
//! borrowed maps, and for [`Option`], where `None` stands for an absent
//! mapping and reads as empty.

use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::iter::{Flatten, FusedIterator};
use std::option;

/// Read access to a map from `Key` to `Value`.
pub trait Mapping {
    /// The key type.
    type Key;
    /// The value type.
    type Value;
    /// The concrete map type that copies of this mapping are built into.
    ///
    /// For borrowed and optional mappings this is the underlying map, so
    /// a copy of an absent mapping is an empty map rather than `None`.
    type Owned: MappingMut<Key = Self::Key, Value = Self::Value>;
    /// An iterator over the mapping's entries, in the container's
    /// natural order.
    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// The number of entries.
    fn len(&self) -> usize;

    /// Test whether the mapping has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up the value stored under `key`.
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Test whether `key` is present.
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over `(key, value)` pairs.
    fn iter(&self) -> Self::Iter<'_>;

    /// Iterate over keys.
    fn keys(&self) -> Keys<'_, Self>
    where
        Self: Sized,
    {
        Keys { it: self.iter() }
    }
}

/// Write access to a map, plus the ability to start from an empty one.
pub trait MappingMut: Mapping + Default {
    /// Associate `value` with `key`, returning the value it replaced.
    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;
}

/// An iterator over the keys of a [`Mapping`].
pub struct Keys<'a, M: Mapping + 'a> {
    it: M::Iter<'a>,
}

impl<'a, M: Mapping + 'a> Iterator for Keys<'a, M> {
    type Item = &'a M::Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a, M> FusedIterator for Keys<'a, M>
where
    M: Mapping + 'a,
    M::Iter<'a>: FusedIterator,
{
}

// std::collections::HashMap

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    type Key = K;
    type Value = V;
    type Owned = Self;
    type Iter<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }
}

impl<K, V, S> MappingMut for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }
}

// std::collections::BTreeMap

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Owned = Self;
    type Iter<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }
}

impl<K: Ord, V> MappingMut for BTreeMap<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }
}

// Absent mappings

impl<M: Mapping> Mapping for Option<M> {
    type Key = M::Key;
    type Value = M::Value;
    type Owned = M::Owned;
    type Iter<'a>
        = Flatten<option::IntoIter<M::Iter<'a>>>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.as_ref().map_or(0, Mapping::len)
    }

    fn get(&self, key: &M::Key) -> Option<&M::Value> {
        self.as_ref().and_then(|map| map.get(key))
    }

    fn contains_key(&self, key: &M::Key) -> bool {
        self.as_ref().map_or(false, |map| map.contains_key(key))
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_ref().map(Mapping::iter).into_iter().flatten()
    }
}

impl<M: MappingMut> MappingMut for Option<M> {
    /// Inserting into an absent mapping first makes it an empty one.
    fn insert(&mut self, key: M::Key, value: M::Value) -> Option<M::Value> {
        MappingMut::insert(self.get_or_insert_with(M::default), key, value)
    }
}

// Borrowed mappings

impl<'r, M: Mapping> Mapping for &'r M {
    type Key = M::Key;
    type Value = M::Value;
    type Owned = M::Owned;
    type Iter<'a>
        = M::Iter<'a>
    where
        Self: 'a;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, key: &M::Key) -> Option<&M::Value> {
        (**self).get(key)
    }

    fn contains_key(&self, key: &M::Key) -> bool {
        (**self).contains_key(key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        (**self).iter()
    }
}

impl<'r, M: Mapping> Mapping for &'r mut M {
    type Key = M::Key;
    type Value = M::Value;
    type Owned = M::Owned;
    type Iter<'a>
        = M::Iter<'a>
    where
        Self: 'a;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, key: &M::Key) -> Option<&M::Value> {
        (**self).get(key)
    }

    fn contains_key(&self, key: &M::Key) -> bool {
        (**self).contains_key(key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        (**self).iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(HashMap<i32, bool>: Mapping, MappingMut);
    assert_impl_all!(BTreeMap<i32, bool>: Mapping, MappingMut);
    assert_impl_all!(Option<HashMap<i32, bool>>: Mapping, MappingMut);
    assert_impl_all!(&'static BTreeMap<i32, bool>: Mapping);
    assert_impl_all!(Option<&'static HashMap<i32, bool>>: Mapping);
    assert_not_impl_any!(&'static HashMap<i32, bool>: MappingMut);
    assert_not_impl_any!(Vec<(i32, bool)>: Mapping);

    #[test]
    fn absent_mapping_reads_as_empty() {
        let none: Option<HashMap<i32, bool>> = None;
        assert_eq!(0, Mapping::len(&none));
        assert!(Mapping::is_empty(&none));
        assert_eq!(None, Mapping::get(&none, &0));
        assert!(!Mapping::contains_key(&none, &0));
        assert_eq!(0, Mapping::iter(&none).count());
        assert_eq!(0, none.keys().count());
    }

    #[test]
    fn present_option_delegates() {
        let some = Some(BTreeMap::from([(0, true), (1, false)]));
        assert_eq!(2, Mapping::len(&some));
        assert_eq!(Some(&false), Mapping::get(&some, &1));
        assert_eq!(vec![&0, &1], some.keys().collect::<Vec<_>>());
    }

    #[test]
    fn insert_into_absent_mapping_materialises_it() {
        let mut none: Option<BTreeMap<i32, bool>> = None;
        assert_eq!(None, MappingMut::insert(&mut none, 3, true));
        assert_eq!(Some(BTreeMap::from([(3, true)])), none);
        assert_eq!(Some(true), MappingMut::insert(&mut none, 3, false));
        assert_eq!(Some(&false), Mapping::get(&none, &3));
    }

    #[test]
    fn borrowed_mappings_delegate() {
        let mut map = HashMap::from([(0, "zero"), (1, "one")]);
        {
            let by_ref = &map;
            assert_eq!(2, Mapping::len(&by_ref));
            assert_eq!(Some(&"one"), Mapping::get(&by_ref, &1));
        }
        let by_mut = &mut map;
        assert!(Mapping::contains_key(&by_mut, &0));
        assert_eq!(2, Mapping::iter(&by_mut).count());
    }

    #[test]
    fn keys_iterator_reports_exact_size() {
        let map = BTreeMap::from([(0, ()), (1, ()), (2, ())]);
        let mut keys = Mapping::keys(&map);
        assert_eq!((3, Some(3)), Iterator::size_hint(&keys));
        keys.next();
        assert_eq!((2, Some(2)), Iterator::size_hint(&keys));
    }
}
