// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A common interface over the four map variants, so that property tests can
//! be written once.

use flatmap::{
    internal::ValidationError, Ascending, HashedMap, Layout, SortedMap,
};
use std::{
    fmt,
    hash::{BuildHasher, Hash},
};

/// Whether a map orders its entries by key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MapKind {
    Sorted,
    Unordered,
}

/// Operations shared by every map in the crate.
///
/// Methods have a trailing underscore so they don't shadow the inherent
/// methods they forward to. Insertion methods return the entry's position
/// and the inserted flag, which is what the oracle can check.
pub trait TestMap<K, V>: Clone + fmt::Debug + Sized {
    fn map_kind() -> MapKind;
    fn make_new() -> Self;
    fn make_with_capacity(capacity: usize) -> Self;

    fn validate_(&self) -> Result<(), ValidationError>;
    fn len_(&self) -> usize;
    fn capacity_(&self) -> usize;

    fn insert_(&mut self, key: K, value: V) -> (usize, bool);
    fn try_emplace_with_(
        &mut self,
        key: &K,
        f: impl FnOnce() -> V,
    ) -> (usize, bool);
    fn insert_or_assign_(&mut self, key: &K, value: V) -> (usize, bool);
    fn try_emplace_owned_with_(
        &mut self,
        key: K,
        f: impl FnOnce() -> V,
    ) -> (usize, bool);
    fn insert_or_assign_owned_(&mut self, key: K, value: V) -> (usize, bool);
    fn get_or_insert_default_(&mut self, key: &K) -> &mut V
    where
        V: Default;

    fn get_(&self, key: &K) -> Option<&V>;
    fn find_index_(&self, key: &K) -> Option<usize>;
    fn count_(&self, key: &K) -> usize;

    fn remove_(&mut self, key: &K) -> Option<V>;
    fn remove_index_(&mut self, index: usize) -> Option<(K, V)>;
    fn retain_(&mut self, f: impl FnMut(&K, &mut V) -> bool);
    fn clear_(&mut self);

    fn entries_(&self) -> Vec<(&K, &V)>;
    fn into_entries_(self) -> Vec<(K, V)>;
}

impl<K, V, L> TestMap<K, V> for SortedMap<K, V, Ascending, L>
where
    K: Ord + Clone + fmt::Debug,
    V: fmt::Debug,
    L: Layout<K, V> + Clone,
{
    fn map_kind() -> MapKind {
        MapKind::Sorted
    }

    fn make_new() -> Self {
        Self::new()
    }

    fn make_with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    fn validate_(&self) -> Result<(), ValidationError> {
        self.validate()
    }

    fn len_(&self) -> usize {
        self.len()
    }

    fn capacity_(&self) -> usize {
        self.capacity()
    }

    fn insert_(&mut self, key: K, value: V) -> (usize, bool) {
        let (entry, inserted) = self.insert(key, value);
        (entry.index(), inserted)
    }

    fn try_emplace_with_(
        &mut self,
        key: &K,
        f: impl FnOnce() -> V,
    ) -> (usize, bool) {
        let (entry, inserted) = self.try_emplace_with(key, f);
        (entry.index(), inserted)
    }

    fn insert_or_assign_(&mut self, key: &K, value: V) -> (usize, bool) {
        let (entry, inserted) = self.insert_or_assign(key, value);
        (entry.index(), inserted)
    }

    fn try_emplace_owned_with_(
        &mut self,
        key: K,
        f: impl FnOnce() -> V,
    ) -> (usize, bool) {
        let (entry, inserted) = self.try_emplace_owned_with(key, f);
        (entry.index(), inserted)
    }

    fn insert_or_assign_owned_(&mut self, key: K, value: V) -> (usize, bool) {
        let (entry, inserted) = self.insert_or_assign_owned(key, value);
        (entry.index(), inserted)
    }

    fn get_or_insert_default_(&mut self, key: &K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_default(key)
    }

    fn get_(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn find_index_(&self, key: &K) -> Option<usize> {
        self.find_index(key)
    }

    fn count_(&self, key: &K) -> usize {
        self.count(key)
    }

    fn remove_(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn remove_index_(&mut self, index: usize) -> Option<(K, V)> {
        self.remove_index(index)
    }

    fn retain_(&mut self, f: impl FnMut(&K, &mut V) -> bool) {
        self.retain(f)
    }

    fn clear_(&mut self) {
        self.clear()
    }

    fn entries_(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    fn into_entries_(self) -> Vec<(K, V)> {
        self.into_iter().collect()
    }
}

impl<K, V, S, L> TestMap<K, V> for HashedMap<K, V, S, L>
where
    K: Hash + Eq + Clone + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher + Clone + Default,
    L: Layout<K, V> + Clone,
{
    fn map_kind() -> MapKind {
        MapKind::Unordered
    }

    fn make_new() -> Self {
        Self::with_hasher(S::default())
    }

    fn make_with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }

    fn validate_(&self) -> Result<(), ValidationError> {
        self.validate()
    }

    fn len_(&self) -> usize {
        self.len()
    }

    fn capacity_(&self) -> usize {
        self.capacity()
    }

    fn insert_(&mut self, key: K, value: V) -> (usize, bool) {
        let (entry, inserted) = self.insert(key, value);
        (entry.index(), inserted)
    }

    fn try_emplace_with_(
        &mut self,
        key: &K,
        f: impl FnOnce() -> V,
    ) -> (usize, bool) {
        let (entry, inserted) = self.try_emplace_with(key, f);
        (entry.index(), inserted)
    }

    fn insert_or_assign_(&mut self, key: &K, value: V) -> (usize, bool) {
        let (entry, inserted) = self.insert_or_assign(key, value);
        (entry.index(), inserted)
    }

    fn try_emplace_owned_with_(
        &mut self,
        key: K,
        f: impl FnOnce() -> V,
    ) -> (usize, bool) {
        let (entry, inserted) = self.try_emplace_owned_with(key, f);
        (entry.index(), inserted)
    }

    fn insert_or_assign_owned_(&mut self, key: K, value: V) -> (usize, bool) {
        let (entry, inserted) = self.insert_or_assign_owned(key, value);
        (entry.index(), inserted)
    }

    fn get_or_insert_default_(&mut self, key: &K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_default(key)
    }

    fn get_(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn find_index_(&self, key: &K) -> Option<usize> {
        self.find_index(key)
    }

    fn count_(&self, key: &K) -> usize {
        self.count(key)
    }

    fn remove_(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn remove_index_(&mut self, index: usize) -> Option<(K, V)> {
        self.remove_index(index)
    }

    fn retain_(&mut self, f: impl FnMut(&K, &mut V) -> bool) {
        self.retain(f)
    }

    fn clear_(&mut self) {
        self.clear()
    }

    fn entries_(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    fn into_entries_(self) -> Vec<(K, V)> {
        self.into_iter().collect()
    }
}
