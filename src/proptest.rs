// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Proptest strategies.
//!
//! These are only available when using the `proptest` feature flag.
//!
//! They generate the inputs the helpers in this crate care about: maps
//! that may be absent, stacks of overlays for [`merge`][crate::merge],
//! and key lists with repeats for [`select`][crate::select].

use ::proptest::collection::{hash_map, vec, SizeRange};
use ::proptest::option;
use ::proptest::strategy::Strategy;
use std::collections::HashMap;
use std::hash::Hash;

/// A strategy for an optional [`HashMap`], `None` about half the time.
///
/// # Examples
///
/// ```rust,no_run
/// # use ::proptest::proptest;
/// proptest! {
///     #[test]
///     fn absent_maps_are_empty(ref m in mapkit::proptest::maybe_hash_map(".*", 0..9999, 0..10)) {
///         if m.is_none() {
///             assert_eq!(0, mapkit::len(m));
///         }
///     }
/// }
/// ```
pub fn maybe_hash_map<K, V>(
    key: K,
    value: V,
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = Option<HashMap<K::Value, V::Value>>>
where
    K: Strategy,
    K::Value: Hash + Eq,
    V: Strategy,
{
    option::of(hash_map(key, value, size))
}

/// A strategy for a list of overlay maps, each drawn with `size` entries.
pub fn overlays<K, V>(
    key: K,
    value: V,
    size: impl Into<SizeRange>,
    count: impl Into<SizeRange>,
) -> impl Strategy<Value = Vec<HashMap<K::Value, V::Value>>>
where
    K: Strategy,
    K::Value: Hash + Eq,
    V: Strategy,
{
    vec(hash_map(key, value, size), count)
}

/// A strategy for a list of requested keys, repeats allowed.
pub fn selection<K: Strategy>(
    key: K,
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = Vec<K::Value>> {
    vec(key, size)
}
