// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::fmt;

/// A handle to an entry in a map, returned by the insertion methods.
///
/// The key is shared, and the value can be modified through
/// [`get_mut`](Self::get_mut) or [`into_mut`](Self::into_mut). The handle
/// borrows the map mutably, so the map cannot be used while it is alive.
///
/// # Examples
///
/// ```
/// use flatmap::FlatMap;
///
/// let mut map = FlatMap::<&str, u32>::new();
/// let (mut entry, inserted) = map.insert("a", 1);
/// assert!(inserted);
/// *entry.get_mut() += 10;
/// assert_eq!(entry.index(), 0);
///
/// assert_eq!(map["a"], 11);
/// ```
pub struct EntryMut<'a, K, V> {
    index: usize,
    key: &'a K,
    value: &'a mut V,
}

impl<'a, K, V> EntryMut<'a, K, V> {
    #[inline]
    pub(crate) fn new(index: usize, (key, value): (&'a K, &'a mut V)) -> Self {
        Self { index, key, value }
    }

    /// Returns the position of the entry in the map's storage.
    ///
    /// For sorted maps, this is the entry's rank in iteration order. For
    /// unordered maps, it is the entry's current position in iteration
    /// order, which can change on removal.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the key.
    #[inline]
    pub fn key(&self) -> &'a K {
        self.key
    }

    /// Returns the value.
    #[inline]
    pub fn get(&self) -> &V {
        self.value
    }

    /// Returns the value, mutably.
    #[inline]
    pub fn get_mut(&mut self) -> &mut V {
        self.value
    }

    /// Converts the handle into a mutable reference to the value, bound to
    /// the map's lifetime.
    #[inline]
    pub fn into_mut(self) -> &'a mut V {
        self.value
    }

    /// Converts the handle into its key and value references.
    #[inline]
    pub fn into_pair(self) -> (&'a K, &'a mut V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for EntryMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryMut")
            .field("index", &self.index)
            .field("key", self.key)
            .field("value", &*self.value)
            .finish()
    }
}
