// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Helpers over any [`Mapping`].
//!
//! Every function here accepts absent mappings (`Option<M>::None`) and
//! treats them as empty. Functions that build a new mapping always return
//! the concrete [`Mapping::Owned`] type, never `None`, and never share
//! storage with their inputs.

use std::borrow::Borrow;

use log::trace;

use crate::mapping::{Mapping, MappingMut};

/// Merge a base mapping with any number of overlays.
///
/// `merge!(base)` copies `base`; `merge!(base, a, b)` is
/// [`merge(&base, [&a, &b])`][merge].
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate mapkit;
/// # use std::collections::HashMap;
/// # fn main() {
/// let defaults = HashMap::from([("colour", "red"), ("size", "m")]);
/// let overrides = HashMap::from([("size", "xl")]);
/// assert_eq!(
///     HashMap::from([("colour", "red"), ("size", "xl")]),
///     merge!(defaults, overrides)
/// );
/// # }
/// ```
#[macro_export]
macro_rules! merge {
    ( $base:expr $(,)? ) => { $crate::copy(&$base) };

    ( $base:expr, $( $overlay:expr ),+ $(,)? ) => {
        $crate::merge(&$base, [$( &$overlay ),+])
    };
}

/// Select a set of keys from a mapping.
///
/// `select!(map, a, b)` is [`select(&map, [a, b])`][select].
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate mapkit;
/// # use std::collections::BTreeMap;
/// # fn main() {
/// let map = BTreeMap::from([(0, true), (1, false), (2, true)]);
/// assert_eq!(BTreeMap::from([(0, true), (2, true)]), select!(map, 0, 2));
/// # }
/// ```
#[macro_export]
macro_rules! select {
    ( $map:expr, $( $key:expr ),+ $(,)? ) => {
        $crate::select(&$map, [$( $key ),+])
    };
}

/// The number of entries in `map`. Absent mappings have length zero.
pub fn len<M: Mapping>(map: &M) -> usize {
    map.len()
}

/// Look up `key` in `map`, or `None` if it isn't there.
pub fn get<'a, M: Mapping>(map: &'a M, key: &M::Key) -> Option<&'a M::Value> {
    map.get(key)
}

/// Store `value` under `key` in place, overwriting and returning any
/// previous value.
///
/// Setting a key in an absent mapping (`Option<M>::None`) first replaces
/// it with an empty one.
pub fn set<M: MappingMut>(map: &mut M, key: M::Key, value: M::Value) -> Option<M::Value> {
    map.insert(key, value)
}

/// Collect every key of `map`, in the container's iteration order.
///
/// The result has exactly [`len(map)`][len] elements and no duplicates.
/// No ordering is promised beyond what the container itself provides.
pub fn keys<M>(map: &M) -> Vec<M::Key>
where
    M: Mapping,
    M::Key: Clone,
{
    map.keys().cloned().collect()
}

/// Test whether two mappings have the same set of keys, ignoring values.
///
/// The two sides may be different container types. Two absent mappings
/// match, and an absent mapping matches any empty one.
pub fn keys_match<M, O>(map: &M, other: &O) -> bool
where
    M: Mapping,
    O: Mapping<Key = M::Key>,
{
    map.len() == other.len() && map.keys().all(|key| other.contains_key(key))
}

/// Test whether two mappings hold the same keys with equal values.
///
/// Stops at the first missing key or differing value.
pub fn equal<M, O>(map: &M, other: &O) -> bool
where
    M: Mapping,
    M::Value: PartialEq,
    O: Mapping<Key = M::Key, Value = M::Value>,
{
    map.len() == other.len()
        && map
            .iter()
            .all(|(key, value)| other.get(key).map_or(false, |found| found == value))
}

/// Make an independent copy of `map`.
///
/// Copying an absent mapping gives an empty one.
pub fn copy<M>(map: &M) -> M::Owned
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
{
    let mut out = M::Owned::default();
    extend(&mut out, map);
    out
}

/// Copy `map`, then write each overlay over the result in order.
///
/// When a key appears in more than one overlay, the last one wins. Absent
/// overlays contribute nothing, and with no overlays at all this is
/// [`copy`].
///
/// # Examples
///
/// ```
/// # use std::collections::HashMap;
/// let base = HashMap::from([(0, true)]);
/// let first = HashMap::from([(0, false), (1, false)]);
/// let merged = mapkit::merge(&base, [Some(&first), None]);
/// assert_eq!(HashMap::from([(0, false), (1, false)]), merged);
/// ```
pub fn merge<M, I>(map: &M, overlays: I) -> M::Owned
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
    I: IntoIterator,
    I::Item: Mapping<Key = M::Key, Value = M::Value>,
{
    let mut out = copy(map);
    let mut count = 0;
    for overlay in overlays {
        extend(&mut out, &overlay);
        count += 1;
    }
    trace!("merged {count} overlay(s) into {} entries", out.len());
    out
}

/// Build a new mapping holding only the requested keys.
///
/// Requested keys missing from `map` are skipped, and a key requested
/// more than once still yields a single entry.
pub fn select<M, I>(map: &M, keys: I) -> M::Owned
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
    I: IntoIterator,
    I::Item: Borrow<M::Key>,
{
    let mut out = M::Owned::default();
    let mut requested = 0;
    for key in keys {
        let key = key.borrow();
        if let Some(value) = map.get(key) {
            out.insert(key.clone(), value.clone());
        }
        requested += 1;
    }
    trace!("selected {} of {requested} requested key(s)", out.len());
    out
}

fn extend<T, M>(target: &mut T, source: &M)
where
    T: MappingMut,
    M: Mapping<Key = T::Key, Value = T::Value>,
    M::Key: Clone,
    M::Value: Clone,
{
    for (key, value) in source.iter() {
        target.insert(key.clone(), value.clone());
    }
}
