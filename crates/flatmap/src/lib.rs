// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Maps stored in contiguous memory.
//!
//! # Motivation
//!
//! The standard library's maps allocate a node per entry (`BTreeMap`) or
//! keep entries in a sparse bucket array (`HashMap`). For small to medium
//! maps, and for workloads dominated by lookups and iteration, storing the
//! entries in one or two vectors is often faster: traversal is a linear walk
//! over memory, and bulk operations don't chase pointers.
//!
//! This crate provides four such maps, varying along two axes:
//!
//! | | array of entries | split keys/values |
//! |---|---|---|
//! | **sorted** (comparator) | [`FlatMap`] | [`SplitFlatMap`] |
//! | **unordered** (hash) | [`UnorderedFlatMap`] | [`UnorderedSplitFlatMap`] |
//!
//! The split variants keep keys and values in two separate, index-aligned
//! vectors. Searches then only touch key memory.
//!
//! # Examples
//!
//! ```
//! use flatmap::FlatMap;
//!
//! let mut map = FlatMap::<String, u32>::new();
//! map.insert("two".to_owned(), 2);
//! map.insert("one".to_owned(), 1);
//!
//! // Lookups accept borrowed forms of the key.
//! assert_eq!(map.get("one"), Some(&1));
//! assert_eq!(map.count("three"), 0);
//!
//! // Iteration is in key order.
//! let keys: Vec<_> = map.keys().map(String::as_str).collect();
//! assert_eq!(keys, ["one", "two"]);
//! ```
//!
//! # Insertion flavors
//!
//! All maps offer the same family of insertion methods, which differ in what
//! happens when the key is already present:
//!
//! * [`insert`](FlatMap::insert) keeps the existing entry and drops the
//!   arguments.
//! * [`emplace`](FlatMap::emplace) converts its arguments into a key and value
//!   up front, whether or not they end up being stored.
//! * [`try_emplace`](FlatMap::try_emplace) only converts its arguments if the
//!   key is absent.
//! * [`insert_or_assign`](FlatMap::insert_or_assign) overwrites the existing
//!   value.
//!
//! Each returns an [`EntryMut`] pointing at the entry now associated with the
//! key, along with whether an insertion happened.

#![no_std]
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod compare;
mod entry_mut;
#[doc(hidden)]
pub mod internal;
pub mod iter;
pub mod layout;
pub mod sorted_map;
mod support;
pub mod unordered_map;

pub use compare::{Ascending, Comparator, Descending, Reversed};
pub use entry_mut::EntryMut;
pub use equivalent::{Comparable, Equivalent};
pub use layout::{Layout, Paired, Split};
pub use sorted_map::{FlatMap, SortedMap, SplitFlatMap};
pub use support::hash_builder::DefaultHashBuilder;
pub use unordered_map::{HashedMap, UnorderedFlatMap, UnorderedSplitFlatMap};
