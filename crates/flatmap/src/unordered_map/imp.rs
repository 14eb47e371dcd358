// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    entry_mut::EntryMut,
    internal::ValidationError,
    iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut},
    layout::{Layout, Split},
    support::probe_table::{Found, ProbeTable},
};
use alloc::{borrow::ToOwned, collections::TryReserveError, format, vec::Vec};
use core::{
    convert::Infallible,
    fmt,
    hash::{BuildHasher, Hash},
    marker::PhantomData,
    ops::Index,
};
use derive_where::derive_where;
use equivalent::Equivalent;

/// A hash map whose entries live in contiguous storage.
///
/// Entries are stored densely in the layout `L`, in no particular order. A
/// separate open-addressed table maps each key's hash to the entry's
/// position. Most code uses one of the aliases, [`UnorderedFlatMap`] or
/// [`UnorderedSplitFlatMap`].
///
/// Lookups, insertions and removals are expected `O(1)`. Iteration walks the
/// dense storage, so it never visits empty buckets. It yields entries in
/// insertion order until the first removal; a removal moves the last entry
/// into the hole it leaves.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use flatmap::UnorderedFlatMap;
///
/// let mut map = UnorderedFlatMap::<String, u32>::new();
/// *map.get_or_insert_default("hits") += 1;
/// *map.get_or_insert_default("hits") += 1;
/// assert_eq!(map["hits"], 2);
///
/// let (entry, inserted) = map.insert_or_assign("hits", 10);
/// assert!(!inserted);
/// assert_eq!(*entry.get(), 10);
/// # }
/// ```
///
/// [`UnorderedFlatMap`]: crate::UnorderedFlatMap
/// [`UnorderedSplitFlatMap`]: crate::UnorderedSplitFlatMap
#[derive_where(Clone; S: Clone, L: Clone)]
#[derive_where(Default; S: Default, L: Default)]
pub struct HashedMap<K, V, S, L> {
    entries: L,
    table: ProbeTable,
    hasher: S,
    _marker: PhantomData<(K, V)>,
}

#[cfg(feature = "default-hasher")]
impl<K, V, L: Layout<K, V>> HashedMap<K, V, crate::DefaultHashBuilder, L> {
    /// Creates a new, empty map using the default hasher.
    ///
    /// No memory is allocated until the first insertion.
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher(crate::DefaultHashBuilder::default())
    }

    /// Creates a new map using the default hasher, with room for at least
    /// `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(
            capacity,
            crate::DefaultHashBuilder::default(),
        )
    }
}

impl<K, V, S, L: Layout<K, V>> HashedMap<K, V, S, L> {
    /// Creates a new, empty map using the given hasher.
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates a new map using the given hasher, with room for at least
    /// `capacity` entries.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            entries: L::with_capacity(capacity),
            table: ProbeTable::with_capacity(capacity),
            hasher,
            _marker: PhantomData,
        }
    }

    /// Returns the hasher.
    #[inline]
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Returns the number of entries in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries the map can hold without reallocating
    /// either its storage or its probe table.
    pub fn capacity(&self) -> usize {
        self.entries.capacity().min(self.table.capacity())
    }

    /// Iterates over the entries in storage order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V, L> {
        Iter::new(&self.entries)
    }

    /// Iterates over the entries in storage order, with mutable values.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V, L> {
        IterMut::new(&mut self.entries)
    }

    /// Iterates over the keys in storage order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V, L> {
        Keys::new(&self.entries)
    }

    /// Iterates over the values in storage order.
    #[inline]
    pub fn values(&self) -> Values<'_, K, V, L> {
        Values::new(&self.entries)
    }

    /// Iterates over the values in storage order, mutably.
    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V, L> {
        ValuesMut::new(&mut self.entries)
    }

    /// Keeps only the entries for which `f` returns true.
    ///
    /// Surviving entries keep their relative order. If `f` panics, no entry
    /// is removed.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let keep: Vec<bool> =
            self.entries.iter_mut().map(|(key, value)| f(key, value)).collect();
        if keep.iter().all(|&k| k) {
            return;
        }

        // Map each old index to its index after compaction.
        let mut next = 0;
        let new_indexes: Vec<Option<usize>> = keep
            .iter()
            .map(|&k| {
                k.then(|| {
                    next += 1;
                    next - 1
                })
            })
            .collect();

        let mut decisions = keep.iter();
        self.entries
            .retain_mut(|_, _| decisions.next().copied().unwrap_or(true));
        self.table.remap(|index| new_indexes.get(index).copied().flatten());
    }

    /// Removes all entries, keeping the allocations.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.table.clear();
    }

    /// Reserves room for at least `additional` more entries.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `isize::MAX` bytes.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
        self.table.reserve(additional);
    }

    /// Tries to reserve room for at least `additional` more entries.
    ///
    /// On error, the map's entries are unchanged.
    pub fn try_reserve(
        &mut self,
        additional: usize,
    ) -> Result<(), TryReserveError> {
        self.entries.try_reserve(additional)?;
        self.table.try_reserve(additional)
    }

    /// Shrinks the storage and the probe table as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
        self.table.shrink_to_fit();
    }

    #[inline]
    fn entry_at(&mut self, index: usize) -> EntryMut<'_, K, V> {
        EntryMut::new(index, self.entries.entry_mut(index))
    }
}

impl<K, V, S, L> HashedMap<K, V, S, L>
where
    K: Hash + Eq,
    S: BuildHasher,
    L: Layout<K, V>,
{
    /// Checks general invariants of the map.
    ///
    /// The code below always upholds these invariants, but it's useful to
    /// have an explicit check for tests.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), ValidationError>
    where
        K: fmt::Debug,
    {
        self.entries.validate().map_err(ValidationError::table("entries"))?;
        self.table
            .validate(self.len())
            .map_err(ValidationError::table("probe_table"))?;

        // Every entry must be reachable from its own hash, and must be the
        // first match for its key.
        for (index, key) in self.keys().enumerate() {
            let hash = self.hasher.hash_one(key);
            if self.table.find(hash, |i| i == index).is_none() {
                return Err(ValidationError::general(format!(
                    "entry {index} with key {key:?} is not reachable \
                     from its hash"
                )));
            }
            match self.lookup(hash, key) {
                Some(found) if found.index == index => {}
                Some(found) => {
                    return Err(ValidationError::general(format!(
                        "key {key:?} is stored at both index {index} \
                         and index {}",
                        found.index,
                    )));
                }
                None => {
                    return Err(ValidationError::general(format!(
                        "key {key:?} at index {index} is not found by lookup"
                    )));
                }
            }
        }

        Ok(())
    }

    // ---
    // Lookups
    // ---

    fn lookup<Q>(&self, hash: u64, key: &Q) -> Option<Found>
    where
        Q: ?Sized + Equivalent<K>,
    {
        let entries = &self.entries;
        self.table.find(hash, |index| key.equivalent(entries.key(index)))
    }

    fn find_hashed<Q>(&self, key: &Q) -> Option<Found>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        if self.is_empty() {
            return None;
        }
        self.lookup(self.hasher.hash_one(key), key)
    }

    /// Returns the entry matching `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let found = self.find_hashed(key)?;
        Some(self.entries.entry(found.index))
    }

    /// Returns the entry matching `key`, with the value borrowed mutably.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<(&K, &mut V)>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let found = self.find_hashed(key)?;
        Some(self.entries.entry_mut(found.index))
    }

    /// Returns the position of the entry matching `key` in storage order.
    ///
    /// The position is invalidated by any insertion or removal.
    pub fn find_index<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.find_hashed(key).map(|found| found.index)
    }

    /// Returns the value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let found = self.find_hashed(key)?;
        Some(self.entries.value(found.index))
    }

    /// Returns the value for `key`, mutably.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let found = self.find_hashed(key)?;
        Some(self.entries.value_mut(found.index))
    }

    /// Returns the number of entries matching `key`: either 0 or 1.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        usize::from(self.contains_key(key))
    }

    /// Returns true if the map has an entry matching `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.find_hashed(key).is_some()
    }

    // ---
    // Insertion
    // ---

    /// Appends a new entry and records it in the probe table. The key must
    /// be absent, and `hash` must be its hash.
    fn push_new(
        &mut self,
        hash: u64,
        key: K,
        value: V,
    ) -> (EntryMut<'_, K, V>, bool) {
        self.table.reserve_one();
        let index = self.entries.len();
        self.entries.push(key, value);
        self.table.insert(hash, index);
        (self.entry_at(index), true)
    }

    /// Inserts `key` and `value` if no entry matches `key`.
    ///
    /// Returns the entry now associated with the key, and whether it was
    /// inserted. If the key was already present, the map is unchanged and
    /// both arguments are dropped.
    pub fn insert(&mut self, key: K, value: V) -> (EntryMut<'_, K, V>, bool) {
        let hash = self.hasher.hash_one(&key);
        if let Some(found) = self.lookup(hash, &key) {
            return (self.entry_at(found.index), false);
        }
        self.push_new(hash, key, value)
    }

    /// Converts the arguments into a key and a value, then inserts them if
    /// no entry matches the key.
    ///
    /// The conversions always happen, even if the key turns out to be
    /// present. To skip them in that case, use
    /// [`try_emplace`](Self::try_emplace).
    pub fn emplace<KA, VA>(
        &mut self,
        key: KA,
        value: VA,
    ) -> (EntryMut<'_, K, V>, bool)
    where
        K: From<KA>,
        V: From<VA>,
    {
        let key = K::from(key);
        let value = V::from(value);
        self.insert(key, value)
    }

    /// Inserts a value converted from `args` if no entry matches `key`.
    ///
    /// If the key is present, `args` is dropped without being converted.
    /// The key is only cloned into an owned `K` when an insertion happens.
    /// To move an owned key in instead, use
    /// [`try_emplace_owned`](Self::try_emplace_owned).
    pub fn try_emplace<Q, A>(
        &mut self,
        key: &Q,
        args: A,
    ) -> (EntryMut<'_, K, V>, bool)
    where
        Q: ?Sized + Hash + Equivalent<K> + ToOwned<Owned = K>,
        V: From<A>,
    {
        self.try_emplace_with(key, || V::from(args))
    }

    /// Inserts the value returned by `f` if no entry matches `key`.
    ///
    /// `f` is only called if the key is absent.
    pub fn try_emplace_with<Q, F>(
        &mut self,
        key: &Q,
        f: F,
    ) -> (EntryMut<'_, K, V>, bool)
    where
        Q: ?Sized + Hash + Equivalent<K> + ToOwned<Owned = K>,
        F: FnOnce() -> V,
    {
        match self.try_emplace_fallible(key, || Ok::<_, Infallible>(f())) {
            Ok(ret) => ret,
            Err(infallible) => match infallible {},
        }
    }

    /// Inserts the value returned by `f` if no entry matches `key`, passing
    /// through any error `f` returns.
    ///
    /// `f` is only called if the key is absent. If it fails, the map is
    /// unchanged.
    pub fn try_emplace_fallible<Q, F, E>(
        &mut self,
        key: &Q,
        f: F,
    ) -> Result<(EntryMut<'_, K, V>, bool), E>
    where
        Q: ?Sized + Hash + Equivalent<K> + ToOwned<Owned = K>,
        F: FnOnce() -> Result<V, E>,
    {
        let hash = self.hasher.hash_one(key);
        let found = self.lookup(hash, key);
        self.emplace_found(hash, found, || key.to_owned(), f)
    }

    /// Overwrites the value for `key`, or inserts it if the key is absent.
    ///
    /// The returned flag is true if an insertion happened.
    pub fn insert_or_assign<Q>(
        &mut self,
        key: &Q,
        value: V,
    ) -> (EntryMut<'_, K, V>, bool)
    where
        Q: ?Sized + Hash + Equivalent<K> + ToOwned<Owned = K>,
    {
        let hash = self.hasher.hash_one(key);
        let found = self.lookup(hash, key);
        self.assign_found(hash, found, || key.to_owned(), value)
    }

    /// Returns the value for `key`, inserting `V::default()` first if the
    /// key is absent.
    pub fn get_or_insert_default<Q>(&mut self, key: &Q) -> &mut V
    where
        Q: ?Sized + Hash + Equivalent<K> + ToOwned<Owned = K>,
        V: Default,
    {
        self.try_emplace_with(key, V::default).0.into_mut()
    }

    /// Like [`try_emplace`](Self::try_emplace), but takes the key by value.
    ///
    /// The key is moved into the map on insertion and dropped otherwise, so
    /// `K` does not need to be `Clone`.
    pub fn try_emplace_owned<A>(
        &mut self,
        key: K,
        args: A,
    ) -> (EntryMut<'_, K, V>, bool)
    where
        V: From<A>,
    {
        self.try_emplace_owned_with(key, || V::from(args))
    }

    /// Like [`try_emplace_with`](Self::try_emplace_with), but takes the key
    /// by value.
    pub fn try_emplace_owned_with<F>(
        &mut self,
        key: K,
        f: F,
    ) -> (EntryMut<'_, K, V>, bool)
    where
        F: FnOnce() -> V,
    {
        match self.try_emplace_owned_fallible(key, || Ok::<_, Infallible>(f()))
        {
            Ok(ret) => ret,
            Err(infallible) => match infallible {},
        }
    }

    /// Like [`try_emplace_fallible`](Self::try_emplace_fallible), but takes
    /// the key by value.
    pub fn try_emplace_owned_fallible<F, E>(
        &mut self,
        key: K,
        f: F,
    ) -> Result<(EntryMut<'_, K, V>, bool), E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let hash = self.hasher.hash_one(&key);
        let found = self.lookup(hash, &key);
        self.emplace_found(hash, found, || key, f)
    }

    /// Like [`insert_or_assign`](Self::insert_or_assign), but takes the key
    /// by value.
    ///
    /// If the key is already present, the stored key is kept and `key` is
    /// dropped.
    pub fn insert_or_assign_owned(
        &mut self,
        key: K,
        value: V,
    ) -> (EntryMut<'_, K, V>, bool) {
        let hash = self.hasher.hash_one(&key);
        let found = self.lookup(hash, &key);
        self.assign_found(hash, found, || key, value)
    }

    /// Finishes a `try_emplace` family call once the lookup is done.
    /// `make_key` and `f` only run if the key is absent.
    fn emplace_found<MK, F, E>(
        &mut self,
        hash: u64,
        found: Option<Found>,
        make_key: MK,
        f: F,
    ) -> Result<(EntryMut<'_, K, V>, bool), E>
    where
        MK: FnOnce() -> K,
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(found) = found {
            return Ok((self.entry_at(found.index), false));
        }
        let key = make_key();
        let value = f()?;
        Ok(self.push_new(hash, key, value))
    }

    fn assign_found<MK>(
        &mut self,
        hash: u64,
        found: Option<Found>,
        make_key: MK,
        value: V,
    ) -> (EntryMut<'_, K, V>, bool)
    where
        MK: FnOnce() -> K,
    {
        if let Some(found) = found {
            *self.entries.value_mut(found.index) = value;
            return (self.entry_at(found.index), false);
        }
        let key = make_key();
        self.push_new(hash, key, value)
    }

    // ---
    // Removal
    // ---

    /// Removes the entry found at `found`, moving the last entry into its
    /// place.
    fn remove_found(&mut self, found: Found) -> (K, V) {
        let last = self.entries.len() - 1;
        // Hash the entry that is about to move before changing anything, so
        // that a panicking hasher leaves the map intact.
        let moved_hash = (found.index != last)
            .then(|| self.hasher.hash_one(self.entries.key(last)));

        self.table.remove(found.slot);
        let entry = self.entries.swap_remove_at(found.index);
        if let Some(hash) = moved_hash {
            self.table.retarget(hash, last, found.index);
        }
        entry
    }

    /// Removes the entry matching `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry matching `key`, returning it.
    ///
    /// The last entry in storage order takes the removed entry's position.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let found = self.find_hashed(key)?;
        Some(self.remove_found(found))
    }

    /// Removes the entry matching `key`, returning the number of entries
    /// removed: either 0 or 1.
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        usize::from(self.remove_entry(key).is_some())
    }

    /// Removes and returns the entry at position `index` in storage order.
    /// Returns `None` if `index` is out of range.
    ///
    /// The last entry takes the removed entry's position.
    pub fn remove_index(&mut self, index: usize) -> Option<(K, V)> {
        if index >= self.len() {
            return None;
        }
        let hash = self.hasher.hash_one(self.entries.key(index));
        let Some(found) = self.table.find(hash, |i| i == index) else {
            panic!("probe table has no slot for entry {index}");
        };
        Some(self.remove_found(found))
    }
}

impl<K, V, S> HashedMap<K, V, S, Split<K, V>> {
    /// Returns the keys as a slice, in storage order.
    #[inline]
    pub fn key_slice(&self) -> &[K] {
        self.entries.key_slice()
    }

    /// Returns the values as a slice, aligned with
    /// [`key_slice`](Self::key_slice).
    #[inline]
    pub fn value_slice(&self) -> &[V] {
        self.entries.value_slice()
    }
}

impl<K, V, S, L> fmt::Debug for HashedMap<K, V, S, L>
where
    K: fmt::Debug,
    V: fmt::Debug,
    L: Layout<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S, L> PartialEq for HashedMap<K, V, S, L>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    L: Layout<K, V>,
{
    fn eq(&self, other: &Self) -> bool {
        // Two maps are equal if they hold the same entries, in any order. So
        // look up each of this map's keys in the other map.
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, S, L> Eq for HashedMap<K, V, S, L>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
    L: Layout<K, V>,
{
}

/// Looks up the value for a key.
///
/// # Panics
///
/// Panics if the key is not present.
impl<K, V, S, L, Q> Index<&Q> for HashedMap<K, V, S, L>
where
    K: Hash + Eq,
    Q: ?Sized + Hash + Equivalent<K>,
    S: BuildHasher,
    L: Layout<K, V>,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in map"),
        }
    }
}

impl<'a, K, V, S, L: Layout<K, V>> IntoIterator for &'a HashedMap<K, V, S, L> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, L>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S, L: Layout<K, V>> IntoIterator
    for &'a mut HashedMap<K, V, S, L>
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V, L>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S, L: Layout<K, V>> IntoIterator for HashedMap<K, V, S, L> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, L>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.entries)
    }
}

/// The `Extend` implementation keeps the first entry for each key, like
/// [`insert`](HashedMap::insert).
impl<K, V, S, L> Extend<(K, V)> for HashedMap<K, V, S, L>
where
    K: Hash + Eq,
    S: BuildHasher,
    L: Layout<K, V>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, S, L> Extend<(&'a K, &'a V)> for HashedMap<K, V, S, L>
where
    K: Hash + Eq + Copy + 'a,
    V: Copy + 'a,
    S: BuildHasher,
    L: Layout<K, V>,
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(|(&key, &value)| (key, value)));
    }
}

/// The `FromIterator` implementation keeps the first entry for each key.
impl<K, V, S, L> FromIterator<(K, V)> for HashedMap<K, V, S, L>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    L: Layout<K, V>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_hasher(S::default());
        map.extend(iter);
        map
    }
}

/// Builds a map with the default hasher from an array of entries, keeping the
/// first entry for each key.
#[cfg(feature = "default-hasher")]
impl<K, V, L, const N: usize> From<[(K, V); N]>
    for HashedMap<K, V, crate::DefaultHashBuilder, L>
where
    K: Hash + Eq,
    L: Layout<K, V>,
{
    fn from(entries: [(K, V); N]) -> Self {
        Self::from_iter(entries)
    }
}
