// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! # Helpers for key-value maps
//!
//! This library provides a handful of small operations that work the same
//! way over any map: count, look up and store entries, list keys, compare
//! key sets or whole contents, copy, merge overlays on top of a base, and
//! pick out a subset of keys.
//!
//! All of them are written against the [`Mapping`] trait, which is
//! implemented for [`std::collections::HashMap`],
//! [`std::collections::BTreeMap`], references to any mapping, and
//! [`Option`] of any mapping. With the `imbl` feature the persistent maps
//! from [`imbl`][imbl] are supported as well.
//!
//! ## Absent mappings
//!
//! A mapping that doesn't exist is written `None`. Every read treats it
//! as empty, so `len(&None::<HashMap<i32, i32>>)` is `0` and two `None`s
//! have matching keys. Operations that build a new mapping ([`copy`],
//! [`merge`], [`select`]) always return a real, empty-if-need-be map of
//! the underlying type. [`set`] on a `None` turns it into a map holding
//! the one entry.
//!
//! ## Merging
//!
//! [`merge`] copies the base mapping, then writes each overlay over it in
//! the order given. The last overlay to mention a key decides its value,
//! which is the usual layering for defaults, then overrides, then
//! per-call overrides.
//!
//! ```
//! # #[macro_use] extern crate mapkit;
//! use std::collections::HashMap;
//! use mapkit::{equal, keys_match};
//!
//! # fn main() {
//! let m = HashMap::from([(0, true), (1, false), (2, true)]);
//! let flipped = HashMap::from([(0, false), (1, true), (2, false)]);
//!
//! assert_eq!(HashMap::from([(0, true), (2, true)]), select!(m, 0, 2));
//! assert_eq!(m, mapkit::merge(&HashMap::new(), [&m]));
//! assert!(keys_match(&m, &flipped));
//! assert!(!equal(&m, &flipped));
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Nothing here locks. Borrowing rules already stop a map being changed
//! while it is being read; share a map across threads behind your own
//! `Mutex` or `RwLock`.
//!
//! ## Feature flags
//!
//! | Feature | Description |
//! | ------- | ----------- |
//! | [`imbl`](https://crates.io/crates/imbl) | [`Mapping`] for `imbl::HashMap` and `imbl::OrdMap` |
//! | [`proptest`](https://crates.io/crates/proptest) | Strategies for generating test inputs |
//!
//! [imbl]: https://docs.rs/imbl/latest/

#![forbid(rust_2018_idioms)]
#![deny(unsafe_code, nonstandard_style)]
#![warn(unreachable_pub, missing_docs)]

pub mod mapping;
mod ops;

#[cfg(feature = "imbl")]
mod persistent;

#[cfg(any(test, feature = "proptest"))]
pub mod proptest;

pub use crate::mapping::{Mapping, MappingMut};
pub use crate::ops::{copy, equal, get, keys, keys_match, len, merge, select, set};
