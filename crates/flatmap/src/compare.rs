// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordering policies for sorted maps.
//!
//! A sorted map is parameterized by a comparator type `C`. To insert keys of
//! type `K`, the map requires `C: Comparator<K, K>`. Each lookup method is
//! generic over a query type `Q` and requires `C: Comparator<Q, K>`, which
//! lets callers search with a borrowed form of the key (for example `&str`
//! for a map keyed by `String`) without constructing a `K`.
//!
//! For a lookup to be meaningful, `compare(q, k)` must agree with what
//! `compare(&q_as_key, k)` would return if `q` were converted to a `K`.

use core::cmp::Ordering;
use equivalent::Comparable;

/// A comparison policy between a query of type `Q` and a stored key of type
/// `K`.
///
/// Implementations must be consistent across query types: if `q` and `k`
/// represent the same logical key, `compare(q, x)` and `compare(k, x)` must
/// return the same ordering for every stored `x`.
///
/// # Examples
///
/// A case-insensitive ordering over ASCII strings, which also supports
/// lookups by `&str`:
///
/// ```
/// use core::cmp::Ordering;
/// use flatmap::{Comparator, FlatMap};
///
/// #[derive(Clone, Copy, Debug, Default)]
/// struct CaseInsensitive;
///
/// impl Comparator<str, String> for CaseInsensitive {
///     fn compare(&self, query: &str, key: &String) -> Ordering {
///         let query = query.bytes().map(|b| b.to_ascii_lowercase());
///         let key = key.bytes().map(|b| b.to_ascii_lowercase());
///         query.cmp(key)
///     }
/// }
///
/// impl Comparator<String, String> for CaseInsensitive {
///     fn compare(&self, query: &String, key: &String) -> Ordering {
///         <Self as Comparator<str, String>>::compare(self, query, key)
///     }
/// }
///
/// let mut map = FlatMap::with_comparator(CaseInsensitive);
/// map.insert("Hello".to_owned(), 1);
/// assert_eq!(map.get("HELLO"), Some(&1));
/// ```
pub trait Comparator<Q: ?Sized, K: ?Sized> {
    /// Compares `query` against the stored `key`.
    fn compare(&self, query: &Q, key: &K) -> Ordering;
}

/// Natural (ascending) order, as defined by [`Ord`].
///
/// Lookups are supported for any `Q` that implements [`Comparable<K>`]. That
/// includes every `Q: Ord` that `K` can [`Borrow`](core::borrow::Borrow).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Ascending;

impl<Q, K> Comparator<Q, K> for Ascending
where
    Q: ?Sized + Comparable<K>,
    K: ?Sized,
{
    #[inline]
    fn compare(&self, query: &Q, key: &K) -> Ordering {
        Comparable::compare(query, key)
    }
}

/// Reverse natural order: the map iterates from the greatest key to the
/// least.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Descending;

impl<Q, K> Comparator<Q, K> for Descending
where
    Q: ?Sized + Comparable<K>,
    K: ?Sized,
{
    #[inline]
    fn compare(&self, query: &Q, key: &K) -> Ordering {
        Comparable::compare(query, key).reverse()
    }
}

/// Reverses an arbitrary comparator.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Reversed<C>(pub C);

impl<Q, K, C> Comparator<Q, K> for Reversed<C>
where
    Q: ?Sized,
    K: ?Sized,
    C: Comparator<Q, K>,
{
    #[inline]
    fn compare(&self, query: &Q, key: &K) -> Ordering {
        Comparator::compare(&self.0, query, key).reverse()
    }
}
