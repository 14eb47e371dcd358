// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::test_map::MapKind;

/// A naive, inefficient map that acts as an oracle for property-based tests.
///
/// This map is stored as a vector without any index, and performs linear
/// scans. It models the storage order of the map under test exactly:
///
/// * for sorted maps, entries are kept in key order;
/// * for unordered maps, new entries are appended, and a removal moves the
///   last entry into the hole.
///
/// So positions and iteration order can be compared directly.
#[derive(Clone, Debug)]
pub struct NaiveMap<K, V> {
    entries: Vec<(K, V)>,
    kind: MapKind,
}

impl<K: Ord + Clone, V> NaiveMap<K, V> {
    pub fn new(kind: MapKind) -> Self {
        Self { entries: Vec::new(), kind }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find_index(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Inserts the entry if the key is absent. Returns the entry's position
    /// and whether it was inserted.
    pub fn insert(&mut self, key: K, value: V) -> (usize, bool) {
        if let Some(index) = self.find_index(&key) {
            return (index, false);
        }
        let index = match self.kind {
            MapKind::Sorted => self
                .entries
                .iter()
                .position(|(k, _)| *k > key)
                .unwrap_or(self.entries.len()),
            MapKind::Unordered => self.entries.len(),
        };
        self.entries.insert(index, (key, value));
        (index, true)
    }

    pub fn insert_or_assign(&mut self, key: &K, value: V) -> (usize, bool) {
        if let Some(index) = self.find_index(key) {
            self.entries[index].1 = value;
            return (index, false);
        }
        self.insert(key.clone(), value)
    }

    pub fn try_emplace_with<F>(&mut self, key: &K, f: F) -> (usize, bool)
    where
        F: FnOnce() -> V,
    {
        match self.find_index(key) {
            Some(index) => (index, false),
            None => self.insert(key.clone(), f()),
        }
    }

    pub fn get_or_insert_default(&mut self, key: &K) -> &mut V
    where
        V: Default,
    {
        let (index, _) = self.try_emplace_with(key, V::default);
        &mut self.entries[index].1
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.find_index(key)?;
        self.remove_index(index).map(|(_, v)| v)
    }

    pub fn remove_index(&mut self, index: usize) -> Option<(K, V)> {
        if index >= self.entries.len() {
            return None;
        }
        let entry = match self.kind {
            MapKind::Sorted => self.entries.remove(index),
            MapKind::Unordered => self.entries.swap_remove(index),
        };
        Some(entry)
    }

    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.entries.retain_mut(|(k, v)| f(k, v));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> Vec<(&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v)).collect()
    }
}
