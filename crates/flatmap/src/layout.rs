// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Storage layouts for the maps in this crate.
//!
//! Every map stores its entries densely, in one of two layouts:
//!
//! * [`Paired`] keeps a single vector of `(K, V)` tuples (array of entries).
//! * [`Split`] keeps keys and values in two separate vectors, aligned by
//!   index (structure of arrays). Operations that only look at keys, such as
//!   binary search, never touch value memory.
//!
//! Both layouts present entries as `(&K, &V)` pairs. For [`Split`], the pair
//! is put together on demand from `keys[i]` and `values[i]`.
//!
//! The [`Layout`] trait is sealed: it cannot be implemented outside this
//! crate.

use crate::internal::TableValidationError;
use alloc::{collections::TryReserveError, vec, vec::Vec};
use core::{
    cmp::Ordering,
    iter::{FusedIterator, Map, Zip},
    slice,
};
use derive_where::derive_where;

mod private {
    pub trait Sealed {}
}

/// A dense, index-addressed buffer of entries.
///
/// Methods that take an `index` panic if it is out of bounds.
pub trait Layout<K, V>: private::Sealed {
    /// Iterator over `(&K, &V)` pairs.
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
        + DoubleEndedIterator
        + ExactSizeIterator
        + FusedIterator
        + Clone
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Iterator over `(&K, &mut V)` pairs.
    type IterMut<'a>: Iterator<Item = (&'a K, &'a mut V)>
        + DoubleEndedIterator
        + ExactSizeIterator
        + FusedIterator
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Owning iterator over `(K, V)` pairs.
    type IntoIter: Iterator<Item = (K, V)>
        + DoubleEndedIterator
        + ExactSizeIterator
        + FusedIterator;

    /// Iterator over keys.
    type Keys<'a>: Iterator<Item = &'a K>
        + DoubleEndedIterator
        + ExactSizeIterator
        + FusedIterator
        + Clone
    where
        Self: 'a,
        K: 'a;

    /// Iterator over values.
    type Values<'a>: Iterator<Item = &'a V>
        + DoubleEndedIterator
        + ExactSizeIterator
        + FusedIterator
        + Clone
    where
        Self: 'a,
        V: 'a;

    /// Iterator over mutable references to values.
    type ValuesMut<'a>: Iterator<Item = &'a mut V>
        + DoubleEndedIterator
        + ExactSizeIterator
        + FusedIterator
    where
        Self: 'a,
        V: 'a;

    /// Creates an empty buffer with room for at least `capacity` entries.
    fn with_capacity(capacity: usize) -> Self;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns true if there are no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of entries that fit without reallocating.
    fn capacity(&self) -> usize;

    /// Returns the key at `index`.
    fn key(&self, index: usize) -> &K;

    /// Returns the value at `index`.
    fn value(&self, index: usize) -> &V;

    /// Returns the value at `index` mutably.
    fn value_mut(&mut self, index: usize) -> &mut V;

    /// Returns the entry at `index`.
    fn entry(&self, index: usize) -> (&K, &V);

    /// Returns the entry at `index`, with the value borrowed mutably.
    fn entry_mut(&mut self, index: usize) -> (&K, &mut V);

    /// Binary searches the keys with `f`, which returns the ordering of each
    /// probed key relative to the target.
    ///
    /// Same contract as [`slice::binary_search_by`].
    fn search_by<F>(&self, f: F) -> Result<usize, usize>
    where
        F: FnMut(&K) -> Ordering;

    /// Inserts an entry at `index`, shifting every later entry right by one.
    fn insert_at(&mut self, index: usize, key: K, value: V);

    /// Appends an entry.
    fn push(&mut self, key: K, value: V);

    /// Removes the entry at `index`, shifting every later entry left by one.
    fn remove_at(&mut self, index: usize) -> (K, V);

    /// Removes the entry at `index`, moving the last entry into its place.
    fn swap_remove_at(&mut self, index: usize) -> (K, V);

    /// Retains the entries for which `f` returns true, preserving their
    /// relative order.
    ///
    /// If `f` panics, the layout is left consistent, but entries already
    /// rejected may have been removed.
    fn retain_mut<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool;

    /// Removes all entries, keeping the allocation.
    fn clear(&mut self);

    /// Reserves room for at least `additional` more entries.
    fn reserve(&mut self, additional: usize);

    /// Tries to reserve room for at least `additional` more entries.
    ///
    /// On error, the entries are unchanged.
    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError>;

    /// Shrinks the allocation to fit the current entries.
    fn shrink_to_fit(&mut self);

    /// Iterates over the entries in index order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Iterates over the entries in index order, with mutable values.
    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    /// Consumes the buffer, yielding entries in index order.
    fn into_entries(self) -> Self::IntoIter;

    /// Iterates over the keys in index order.
    fn keys(&self) -> Self::Keys<'_>;

    /// Iterates over the values in index order.
    fn values(&self) -> Self::Values<'_>;

    /// Iterates over the values in index order, mutably.
    fn values_mut(&mut self) -> Self::ValuesMut<'_>;

    /// Checks the layout's internal invariants.
    #[doc(hidden)]
    fn validate(&self) -> Result<(), TableValidationError>;
}

/// Array-of-entries layout: a single vector of `(K, V)` tuples.
#[derive_where(Clone; K: Clone, V: Clone)]
#[derive_where(Debug; K: core::fmt::Debug, V: core::fmt::Debug)]
#[derive_where(Default)]
pub struct Paired<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> private::Sealed for Paired<K, V> {}

fn entry_ref<K, V>(entry: &(K, V)) -> (&K, &V) {
    (&entry.0, &entry.1)
}

fn entry_mut<K, V>(entry: &mut (K, V)) -> (&K, &mut V) {
    (&entry.0, &mut entry.1)
}

fn entry_key<K, V>(entry: &(K, V)) -> &K {
    &entry.0
}

fn entry_value<K, V>(entry: &(K, V)) -> &V {
    &entry.1
}

fn entry_value_mut<K, V>(entry: &mut (K, V)) -> &mut V {
    &mut entry.1
}

impl<K, V> Layout<K, V> for Paired<K, V> {
    type Iter<'a>
        = Map<slice::Iter<'a, (K, V)>, fn(&(K, V)) -> (&K, &V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    type IterMut<'a>
        = Map<slice::IterMut<'a, (K, V)>, fn(&mut (K, V)) -> (&K, &mut V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    type IntoIter = vec::IntoIter<(K, V)>;
    type Keys<'a>
        = Map<slice::Iter<'a, (K, V)>, fn(&(K, V)) -> &K>
    where
        Self: 'a,
        K: 'a;
    type Values<'a>
        = Map<slice::Iter<'a, (K, V)>, fn(&(K, V)) -> &V>
    where
        Self: 'a,
        V: 'a;
    type ValuesMut<'a>
        = Map<slice::IterMut<'a, (K, V)>, fn(&mut (K, V)) -> &mut V>
    where
        Self: 'a,
        V: 'a;

    fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    #[inline]
    fn key(&self, index: usize) -> &K {
        &self.entries[index].0
    }

    #[inline]
    fn value(&self, index: usize) -> &V {
        &self.entries[index].1
    }

    #[inline]
    fn value_mut(&mut self, index: usize) -> &mut V {
        &mut self.entries[index].1
    }

    #[inline]
    fn entry(&self, index: usize) -> (&K, &V) {
        entry_ref(&self.entries[index])
    }

    #[inline]
    fn entry_mut(&mut self, index: usize) -> (&K, &mut V) {
        entry_mut(&mut self.entries[index])
    }

    #[inline]
    fn search_by<F>(&self, mut f: F) -> Result<usize, usize>
    where
        F: FnMut(&K) -> Ordering,
    {
        self.entries.binary_search_by(|(key, _)| f(key))
    }

    #[inline]
    fn insert_at(&mut self, index: usize, key: K, value: V) {
        self.entries.insert(index, (key, value));
    }

    #[inline]
    fn push(&mut self, key: K, value: V) {
        self.entries.push((key, value));
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> (K, V) {
        self.entries.remove(index)
    }

    #[inline]
    fn swap_remove_at(&mut self, index: usize) -> (K, V) {
        self.entries.swap_remove(index)
    }

    fn retain_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.entries.retain_mut(|(key, value)| f(key, value));
    }

    #[inline]
    fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    #[inline]
    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.entries.try_reserve(additional)
    }

    #[inline]
    fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.entries.iter().map(entry_ref as fn(&(K, V)) -> (&K, &V))
    }

    #[inline]
    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.entries.iter_mut().map(entry_mut as fn(&mut (K, V)) -> (&K, &mut V))
    }

    #[inline]
    fn into_entries(self) -> Self::IntoIter {
        self.entries.into_iter()
    }

    #[inline]
    fn keys(&self) -> Self::Keys<'_> {
        self.entries.iter().map(entry_key as fn(&(K, V)) -> &K)
    }

    #[inline]
    fn values(&self) -> Self::Values<'_> {
        self.entries.iter().map(entry_value as fn(&(K, V)) -> &V)
    }

    #[inline]
    fn values_mut(&mut self) -> Self::ValuesMut<'_> {
        self.entries.iter_mut().map(entry_value_mut as fn(&mut (K, V)) -> &mut V)
    }

    fn validate(&self) -> Result<(), TableValidationError> {
        // A single buffer can't be misaligned.
        Ok(())
    }
}

/// Structure-of-arrays layout: keys and values in two vectors of equal
/// length, where `keys[i]` is the key for `values[i]`.
///
/// Every operation that changes the shape of one vector performs the same
/// change on the other.
#[derive_where(Clone; K: Clone, V: Clone)]
#[derive_where(Debug; K: core::fmt::Debug, V: core::fmt::Debug)]
#[derive_where(Default)]
pub struct Split<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> private::Sealed for Split<K, V> {}

impl<K, V> Split<K, V> {
    /// Returns the keys as a slice.
    #[inline]
    pub fn key_slice(&self) -> &[K] {
        &self.keys
    }

    /// Returns the values as a slice.
    #[inline]
    pub fn value_slice(&self) -> &[V] {
        &self.values
    }

    #[inline]
    fn assert_in_bounds(&self, index: usize) {
        let len = self.keys.len();
        if index >= len {
            panic!("index {index} out of bounds for split layout of length {len}");
        }
    }
}

impl<K, V> Layout<K, V> for Split<K, V> {
    type Iter<'a>
        = Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    type IterMut<'a>
        = Zip<slice::Iter<'a, K>, slice::IterMut<'a, V>>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    type IntoIter = Zip<vec::IntoIter<K>, vec::IntoIter<V>>;
    type Keys<'a>
        = slice::Iter<'a, K>
    where
        Self: 'a,
        K: 'a;
    type Values<'a>
        = slice::Iter<'a, V>
    where
        Self: 'a,
        V: 'a;
    type ValuesMut<'a>
        = slice::IterMut<'a, V>
    where
        Self: 'a,
        V: 'a;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        // The two buffers grow independently, so the usable capacity is the
        // smaller of the two.
        self.keys.capacity().min(self.values.capacity())
    }

    #[inline]
    fn key(&self, index: usize) -> &K {
        &self.keys[index]
    }

    #[inline]
    fn value(&self, index: usize) -> &V {
        &self.values[index]
    }

    #[inline]
    fn value_mut(&mut self, index: usize) -> &mut V {
        &mut self.values[index]
    }

    #[inline]
    fn entry(&self, index: usize) -> (&K, &V) {
        (&self.keys[index], &self.values[index])
    }

    #[inline]
    fn entry_mut(&mut self, index: usize) -> (&K, &mut V) {
        (&self.keys[index], &mut self.values[index])
    }

    #[inline]
    fn search_by<F>(&self, f: F) -> Result<usize, usize>
    where
        F: FnMut(&K) -> Ordering,
    {
        self.keys.binary_search_by(f)
    }

    fn insert_at(&mut self, index: usize, key: K, value: V) {
        let len = self.keys.len();
        if index > len {
            panic!("insertion index {index} is out of bounds for length {len}");
        }
        // Grow both buffers before touching either, so that neither insert
        // below can reallocate.
        self.keys.reserve(1);
        self.values.reserve(1);
        self.keys.insert(index, key);
        self.values.insert(index, value);
    }

    fn push(&mut self, key: K, value: V) {
        self.keys.reserve(1);
        self.values.reserve(1);
        self.keys.push(key);
        self.values.push(value);
    }

    fn remove_at(&mut self, index: usize) -> (K, V) {
        self.assert_in_bounds(index);
        let key = self.keys.remove(index);
        let value = self.values.remove(index);
        (key, value)
    }

    fn swap_remove_at(&mut self, index: usize) -> (K, V) {
        self.assert_in_bounds(index);
        let key = self.keys.swap_remove(index);
        let value = self.values.swap_remove(index);
        (key, value)
    }

    fn retain_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        // Decide everything up front. If `f` panics partway through, neither
        // buffer has been compacted yet.
        let keep: Vec<bool> = self
            .keys
            .iter()
            .zip(self.values.iter_mut())
            .map(|(key, value)| f(key, value))
            .collect();
        if keep.iter().all(|&k| k) {
            return;
        }

        let mut decisions = keep.iter();
        self.keys.retain(|_| decisions.next().copied().unwrap_or(true));
        let mut decisions = keep.iter();
        self.values.retain(|_| decisions.next().copied().unwrap_or(true));
    }

    #[inline]
    fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        self.keys.reserve(additional);
        self.values.reserve(additional);
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        // If the second reservation fails, the first one only leaves extra
        // capacity behind. No entries move.
        self.keys.try_reserve(additional)?;
        self.values.try_reserve(additional)
    }

    #[inline]
    fn shrink_to_fit(&mut self) {
        self.keys.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.keys.iter().zip(self.values.iter())
    }

    #[inline]
    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.keys.iter().zip(self.values.iter_mut())
    }

    #[inline]
    fn into_entries(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.values)
    }

    #[inline]
    fn keys(&self) -> Self::Keys<'_> {
        self.keys.iter()
    }

    #[inline]
    fn values(&self) -> Self::Values<'_> {
        self.values.iter()
    }

    #[inline]
    fn values_mut(&mut self) -> Self::ValuesMut<'_> {
        self.values.iter_mut()
    }

    fn validate(&self) -> Result<(), TableValidationError> {
        if self.keys.len() != self.values.len() {
            return Err(TableValidationError::new(alloc::format!(
                "split layout is misaligned: {} keys, {} values",
                self.keys.len(),
                self.values.len(),
            )));
        }
        Ok(())
    }
}
