// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Iterators over the maps in this crate.
//!
//! All maps share these iterator types, parameterized by the map's storage
//! [`Layout`]. Sorted maps yield entries in comparator order. Unordered maps
//! yield entries in storage order, which is insertion order until the first
//! removal.

use crate::layout::Layout;
use core::{fmt, iter::FusedIterator};

// Implements the iterator traits for a wrapper with an `inner` field.
macro_rules! forward_iterator {
    ($name:ident, $item:ty) => {
        impl<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> Iterator
            for $name<'a, K, V, L>
        {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next()
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> DoubleEndedIterator
            for $name<'a, K, V, L>
        {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back()
            }
        }

        impl<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> ExactSizeIterator
            for $name<'a, K, V, L>
        {
            #[inline]
            fn len(&self) -> usize {
                self.inner.len()
            }
        }

        // The layout's iterators are fused, so this one is as well.
        impl<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> FusedIterator
            for $name<'a, K, V, L>
        {
        }
    };
}

/// An iterator over the entries of a map, as `(&K, &V)` pairs.
///
/// Created by the maps' `iter` methods.
pub struct Iter<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> {
    inner: L::Iter<'a>,
}

impl<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> Iter<'a, K, V, L> {
    #[inline]
    pub(crate) fn new(layout: &'a L) -> Self {
        Self { inner: layout.iter() }
    }
}

impl<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> Clone for Iter<'a, K, V, L> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<'a, K, V, L> fmt::Debug for Iter<'a, K, V, L>
where
    K: fmt::Debug + 'a,
    V: fmt::Debug + 'a,
    L: Layout<K, V> + 'a,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.clone()).finish()
    }
}

forward_iterator!(Iter, (&'a K, &'a V));

/// An iterator over the entries of a map, as `(&K, &mut V)` pairs.
///
/// Created by the maps' `iter_mut` methods. Keys cannot be modified, since
/// that could break the map's ordering or hashing invariants.
pub struct IterMut<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> {
    inner: L::IterMut<'a>,
}

impl<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> IterMut<'a, K, V, L> {
    #[inline]
    pub(crate) fn new(layout: &'a mut L) -> Self {
        Self { inner: layout.iter_mut() }
    }
}

impl<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> fmt::Debug
    for IterMut<'a, K, V, L>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.inner.len()).finish()
    }
}

forward_iterator!(IterMut, (&'a K, &'a mut V));

/// An iterator over the keys of a map.
///
/// Created by the maps' `keys` methods.
pub struct Keys<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> {
    inner: L::Keys<'a>,
}

impl<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> Keys<'a, K, V, L> {
    #[inline]
    pub(crate) fn new(layout: &'a L) -> Self {
        Self { inner: layout.keys() }
    }
}

impl<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> Clone for Keys<'a, K, V, L> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<'a, K, V, L> fmt::Debug for Keys<'a, K, V, L>
where
    K: fmt::Debug + 'a,
    V: 'a,
    L: Layout<K, V> + 'a,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.clone()).finish()
    }
}

forward_iterator!(Keys, &'a K);

/// An iterator over the values of a map.
///
/// Created by the maps' `values` methods.
pub struct Values<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> {
    inner: L::Values<'a>,
}

impl<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> Values<'a, K, V, L> {
    #[inline]
    pub(crate) fn new(layout: &'a L) -> Self {
        Self { inner: layout.values() }
    }
}

impl<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> Clone for Values<'a, K, V, L> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<'a, K, V, L> fmt::Debug for Values<'a, K, V, L>
where
    K: 'a,
    V: fmt::Debug + 'a,
    L: Layout<K, V> + 'a,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.clone()).finish()
    }
}

forward_iterator!(Values, &'a V);

/// A mutable iterator over the values of a map.
///
/// Created by the maps' `values_mut` methods.
pub struct ValuesMut<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> {
    inner: L::ValuesMut<'a>,
}

impl<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> ValuesMut<'a, K, V, L> {
    #[inline]
    pub(crate) fn new(layout: &'a mut L) -> Self {
        Self { inner: layout.values_mut() }
    }
}

impl<'a, K: 'a, V: 'a, L: Layout<K, V> + 'a> fmt::Debug
    for ValuesMut<'a, K, V, L>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuesMut")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

forward_iterator!(ValuesMut, &'a mut V);

/// An owning iterator over the entries of a map.
///
/// Created by the maps' [`IntoIterator`] implementations.
pub struct IntoIter<K, V, L: Layout<K, V>> {
    inner: L::IntoIter,
}

impl<K, V, L: Layout<K, V>> IntoIter<K, V, L> {
    #[inline]
    pub(crate) fn new(layout: L) -> Self {
        Self { inner: layout.into_entries() }
    }
}

impl<K, V, L: Layout<K, V>> fmt::Debug for IntoIter<K, V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

impl<K, V, L: Layout<K, V>> Iterator for IntoIter<K, V, L> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, L: Layout<K, V>> DoubleEndedIterator for IntoIter<K, V, L> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V, L: Layout<K, V>> ExactSizeIterator for IntoIter<K, V, L> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, L: Layout<K, V>> FusedIterator for IntoIter<K, V, L> {}
