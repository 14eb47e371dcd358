// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sorted maps backed by contiguous storage.
//!
//! For more information, see [`SortedMap`].

pub(crate) mod imp;
#[cfg(feature = "serde")]
mod serde_impls;

use crate::{
    compare::Ascending,
    layout::{Paired, Split},
};
pub use imp::SortedMap;

/// A sorted map storing its entries as a single vector of `(K, V)` pairs.
///
/// # Examples
///
/// ```
/// use flatmap::FlatMap;
///
/// let map = FlatMap::from([(2, "b"), (1, "a"), (3, "c")]);
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub type FlatMap<K, V, C = Ascending> = SortedMap<K, V, C, Paired<K, V>>;

/// A sorted map storing keys and values in two index-aligned vectors.
///
/// Searches only touch the key vector, which makes this variant a good fit
/// for large values that are rarely read during lookups.
///
/// # Examples
///
/// ```
/// use flatmap::{Descending, SplitFlatMap};
///
/// let mut map = SplitFlatMap::with_comparator(Descending);
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
pub type SplitFlatMap<K, V, C = Ascending> = SortedMap<K, V, C, Split<K, V>>;
