// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hash maps backed by contiguous storage.
//!
//! For more information, see [`HashedMap`].

pub(crate) mod imp;
#[cfg(feature = "serde")]
mod serde_impls;

use crate::{
    layout::{Paired, Split},
    DefaultHashBuilder,
};
pub use imp::HashedMap;

/// A hash map storing its entries as a single vector of `(K, V)` pairs.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use flatmap::UnorderedFlatMap;
///
/// let mut map = UnorderedFlatMap::new();
/// map.insert("a".to_owned(), 1);
/// map.insert("b".to_owned(), 2);
/// assert_eq!(map.get("b"), Some(&2));
/// assert_eq!(map.erase("a"), 1);
/// assert_eq!(map.len(), 1);
/// # }
/// ```
pub type UnorderedFlatMap<K, V, S = DefaultHashBuilder> =
    HashedMap<K, V, S, Paired<K, V>>;

/// A hash map storing keys and values in two index-aligned vectors.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use flatmap::UnorderedSplitFlatMap;
///
/// let map: UnorderedSplitFlatMap<&str, u32> =
///     [("one", 1), ("two", 2), ("one", 11)].into_iter().collect();
/// // The first entry for a key wins.
/// assert_eq!(map["one"], 1);
/// assert_eq!(map.len(), 2);
/// # }
/// ```
pub type UnorderedSplitFlatMap<K, V, S = DefaultHashBuilder> =
    HashedMap<K, V, S, Split<K, V>>;
