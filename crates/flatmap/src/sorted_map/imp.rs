// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    compare::{Ascending, Comparator},
    entry_mut::EntryMut,
    internal::ValidationError,
    iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut},
    layout::{Layout, Split},
};
use alloc::{borrow::ToOwned, collections::TryReserveError, format};
use core::{
    cmp::Ordering, convert::Infallible, fmt, marker::PhantomData, ops::Index,
};
use derive_where::derive_where;

/// A map that keeps its entries sorted by key, in contiguous storage.
///
/// Entries are ordered by the comparator `C` and stored in the layout `L`.
/// Most code uses one of the aliases, [`FlatMap`] or [`SplitFlatMap`].
///
/// Lookups are binary searches, `O(log n)`. Insertions and removals shift
/// the entries after the affected position, `O(n)`. Iteration is a linear
/// walk over memory, in comparator order.
///
/// Keys are never handed out mutably, so the order invariant cannot be
/// broken through the map's API. (A key type with interior mutability that
/// changes its ordering can still break it, as with the std maps.)
///
/// # Examples
///
/// ```
/// use flatmap::FlatMap;
///
/// let mut map = FlatMap::new();
/// let (entry, inserted) = map.insert("b".to_owned(), 2);
/// assert!(inserted);
/// assert_eq!(entry.index(), 0);
///
/// // A duplicate key leaves the existing entry in place.
/// let (entry, inserted) = map.insert("b".to_owned(), 20);
/// assert!(!inserted);
/// assert_eq!(*entry.get(), 2);
///
/// map.insert("a".to_owned(), 1);
/// assert_eq!(map.find_index("b"), Some(1));
/// assert_eq!(map.first(), Some((&"a".to_owned(), &1)));
/// ```
///
/// [`FlatMap`]: crate::FlatMap
/// [`SplitFlatMap`]: crate::SplitFlatMap
#[derive_where(Clone; C: Clone, L: Clone)]
#[derive_where(Default; C: Default, L: Default)]
pub struct SortedMap<K, V, C, L> {
    entries: L,
    comparator: C,
    _marker: PhantomData<(K, V)>,
}

impl<K, V, L: Layout<K, V>> SortedMap<K, V, Ascending, L> {
    /// Creates a new, empty map in ascending key order.
    #[inline]
    pub fn new() -> Self {
        Self::with_comparator(Ascending)
    }

    /// Creates a new map in ascending key order, with room for at least
    /// `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Ascending)
    }
}

impl<K, V, C, L: Layout<K, V>> SortedMap<K, V, C, L> {
    /// Creates a new, empty map ordered by `comparator`.
    #[inline]
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    /// Creates a new map ordered by `comparator`, with room for at least
    /// `capacity` entries.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            entries: L::with_capacity(capacity),
            comparator,
            _marker: PhantomData,
        }
    }

    /// Returns the comparator.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
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

    /// Returns the number of entries the map can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Iterates over the entries in key order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V, L> {
        Iter::new(&self.entries)
    }

    /// Iterates over the entries in key order, with mutable values.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V, L> {
        IterMut::new(&mut self.entries)
    }

    /// Iterates over the keys in order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V, L> {
        Keys::new(&self.entries)
    }

    /// Iterates over the values in key order.
    #[inline]
    pub fn values(&self) -> Values<'_, K, V, L> {
        Values::new(&self.entries)
    }

    /// Iterates over the values in key order, mutably.
    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V, L> {
        ValuesMut::new(&mut self.entries)
    }

    /// Returns the entry at position `index` in key order.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        (index < self.len()).then(|| self.entries.entry(index))
    }

    /// Returns the entry at position `index` in key order, with the value
    /// borrowed mutably.
    pub fn get_index_mut(&mut self, index: usize) -> Option<(&K, &mut V)> {
        if index < self.len() {
            Some(self.entries.entry_mut(index))
        } else {
            None
        }
    }

    /// Returns the first entry in key order.
    #[inline]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.get_index(0)
    }

    /// Returns the last entry in key order.
    #[inline]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.get_index(self.len().checked_sub(1)?)
    }

    /// Removes and returns the first entry.
    ///
    /// This shifts every other entry, so it is `O(n)`.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.remove_index(0)
    }

    /// Removes and returns the last entry.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.remove_index(self.len().checked_sub(1)?)
    }

    /// Removes and returns the entry at position `index`, shifting later
    /// entries left. Returns `None` if `index` is out of range.
    pub fn remove_index(&mut self, index: usize) -> Option<(K, V)> {
        (index < self.len()).then(|| self.entries.remove_at(index))
    }

    /// Keeps only the entries for which `f` returns true.
    ///
    /// Entries are visited in key order. If `f` panics, the map stays valid
    /// but may have lost entries that `f` had already rejected.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.entries.retain_mut(f);
    }

    /// Removes all entries, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Reserves room for at least `additional` more entries.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `isize::MAX` bytes.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Tries to reserve room for at least `additional` more entries.
    ///
    /// On error, the map's entries are unchanged.
    #[inline]
    pub fn try_reserve(
        &mut self,
        additional: usize,
    ) -> Result<(), TryReserveError> {
        self.entries.try_reserve(additional)
    }

    /// Shrinks the allocation as much as possible.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
    }

    /// Checks general invariants of the map.
    ///
    /// The code below always upholds these invariants, but it's useful to
    /// have an explicit check for tests.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), ValidationError>
    where
        K: fmt::Debug,
        C: Comparator<K, K>,
    {
        self.entries.validate().map_err(ValidationError::table("entries"))?;

        let mut keys = self.keys().enumerate();
        let Some((_, mut prev)) = keys.next() else {
            return Ok(());
        };
        for (index, key) in keys {
            match Comparator::compare(&self.comparator, prev, key) {
                Ordering::Less => {}
                Ordering::Equal => {
                    return Err(ValidationError::general(format!(
                        "duplicate key {key:?} at indexes {} and {index}",
                        index - 1,
                    )));
                }
                Ordering::Greater => {
                    return Err(ValidationError::general(format!(
                        "key {prev:?} at index {} sorts after \
                         key {key:?} at index {index}",
                        index - 1,
                    )));
                }
            }
            prev = key;
        }

        Ok(())
    }

    // ---
    // Lookups
    // ---

    /// Binary searches for `key`. `Ok` holds the position of the matching
    /// entry, `Err` the position where it would be inserted.
    fn search<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        Q: ?Sized,
        C: Comparator<Q, K>,
    {
        let comparator = &self.comparator;
        // `search_by` wants the ordering of each stored key relative to the
        // target, which is the reverse of comparing the target to the key.
        self.entries.search_by(|probe| {
            Comparator::compare(comparator, key, probe).reverse()
        })
    }

    #[inline]
    fn entry_at(&mut self, index: usize) -> EntryMut<'_, K, V> {
        EntryMut::new(index, self.entries.entry_mut(index))
    }

    /// Returns the entry matching `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: ?Sized,
        C: Comparator<Q, K>,
    {
        let index = self.search(key).ok()?;
        Some(self.entries.entry(index))
    }

    /// Returns the entry matching `key`, with the value borrowed mutably.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<(&K, &mut V)>
    where
        Q: ?Sized,
        C: Comparator<Q, K>,
    {
        let index = self.search(key).ok()?;
        Some(self.entries.entry_mut(index))
    }

    /// Returns the position of the entry matching `key` in key order.
    ///
    /// The position is invalidated by any insertion or removal.
    pub fn find_index<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized,
        C: Comparator<Q, K>,
    {
        self.search(key).ok()
    }

    /// Returns the value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized,
        C: Comparator<Q, K>,
    {
        let index = self.search(key).ok()?;
        Some(self.entries.value(index))
    }

    /// Returns the value for `key`, mutably.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized,
        C: Comparator<Q, K>,
    {
        let index = self.search(key).ok()?;
        Some(self.entries.value_mut(index))
    }

    /// Returns the number of entries matching `key`: either 0 or 1.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        C: Comparator<Q, K>,
    {
        usize::from(self.contains_key(key))
    }

    /// Returns true if the map has an entry matching `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        C: Comparator<Q, K>,
    {
        self.search(key).is_ok()
    }

    // ---
    // Insertion
    // ---

    /// Inserts `key` and `value` if no entry matches `key`.
    ///
    /// Returns the entry now associated with the key, and whether it was
    /// inserted. If the key was already present, the map is unchanged and
    /// both arguments are dropped.
    pub fn insert(&mut self, key: K, value: V) -> (EntryMut<'_, K, V>, bool)
    where
        C: Comparator<K, K>,
    {
        match self.search(&key) {
            Ok(index) => (self.entry_at(index), false),
            Err(index) => {
                self.entries.insert_at(index, key, value);
                (self.entry_at(index), true)
            }
        }
    }

    /// Converts the arguments into a key and a value, then inserts them if
    /// no entry matches the key.
    ///
    /// The conversions always happen, even if the key turns out to be
    /// present. To skip them in that case, use
    /// [`try_emplace`](Self::try_emplace).
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<String, Box<u32>>::new();
    /// let (entry, inserted) = map.emplace("one", 1u32);
    /// assert!(inserted);
    /// assert_eq!(**entry.get(), 1);
    /// ```
    pub fn emplace<KA, VA>(
        &mut self,
        key: KA,
        value: VA,
    ) -> (EntryMut<'_, K, V>, bool)
    where
        K: From<KA>,
        V: From<VA>,
        C: Comparator<K, K>,
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
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<String, String>::new();
    /// map.try_emplace("greeting", "hello");
    /// let (entry, inserted) = map.try_emplace("greeting", "goodbye");
    /// assert!(!inserted);
    /// assert_eq!(entry.get(), "hello");
    /// ```
    pub fn try_emplace<Q, A>(
        &mut self,
        key: &Q,
        args: A,
    ) -> (EntryMut<'_, K, V>, bool)
    where
        Q: ?Sized + ToOwned<Owned = K>,
        V: From<A>,
        C: Comparator<Q, K>,
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
        Q: ?Sized + ToOwned<Owned = K>,
        F: FnOnce() -> V,
        C: Comparator<Q, K>,
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
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<String, u32>::new();
    /// let res = map.try_emplace_fallible("port", || "80x".parse::<u32>());
    /// assert!(res.is_err());
    /// assert!(map.is_empty());
    /// ```
    pub fn try_emplace_fallible<Q, F, E>(
        &mut self,
        key: &Q,
        f: F,
    ) -> Result<(EntryMut<'_, K, V>, bool), E>
    where
        Q: ?Sized + ToOwned<Owned = K>,
        F: FnOnce() -> Result<V, E>,
        C: Comparator<Q, K>,
    {
        let search = self.search(key);
        self.emplace_at(search, || key.to_owned(), f)
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
        Q: ?Sized + ToOwned<Owned = K>,
        C: Comparator<Q, K>,
    {
        let search = self.search(key);
        self.assign_at(search, || key.to_owned(), value)
    }

    /// Returns the value for `key`, inserting `V::default()` first if the
    /// key is absent.
    pub fn get_or_insert_default<Q>(&mut self, key: &Q) -> &mut V
    where
        Q: ?Sized + ToOwned<Owned = K>,
        V: Default,
        C: Comparator<Q, K>,
    {
        self.try_emplace_with(key, V::default).0.into_mut()
    }

    /// Like [`try_emplace`](Self::try_emplace), but takes the key by value.
    ///
    /// The key is moved into the map on insertion and dropped otherwise, so
    /// `K` does not need to be `Clone`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<String, String>::new();
    /// let key = String::from("greeting");
    /// let (entry, inserted) = map.try_emplace_owned(key, "hello");
    /// assert!(inserted);
    /// assert_eq!(entry.get(), "hello");
    /// ```
    pub fn try_emplace_owned<A>(
        &mut self,
        key: K,
        args: A,
    ) -> (EntryMut<'_, K, V>, bool)
    where
        V: From<A>,
        C: Comparator<K, K>,
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
        C: Comparator<K, K>,
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
        C: Comparator<K, K>,
    {
        let search = self.search(&key);
        self.emplace_at(search, || key, f)
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
    ) -> (EntryMut<'_, K, V>, bool)
    where
        C: Comparator<K, K>,
    {
        let search = self.search(&key);
        self.assign_at(search, || key, value)
    }

    /// Finishes a `try_emplace` family call once the search is done.
    /// `make_key` and `f` only run if the key is absent.
    fn emplace_at<MK, F, E>(
        &mut self,
        search: Result<usize, usize>,
        make_key: MK,
        f: F,
    ) -> Result<(EntryMut<'_, K, V>, bool), E>
    where
        MK: FnOnce() -> K,
        F: FnOnce() -> Result<V, E>,
    {
        match search {
            Ok(index) => Ok((self.entry_at(index), false)),
            Err(index) => {
                // Build both halves before touching the storage, so that a
                // failure or panic leaves the map as it was.
                let key = make_key();
                let value = f()?;
                self.entries.insert_at(index, key, value);
                Ok((self.entry_at(index), true))
            }
        }
    }

    fn assign_at<MK>(
        &mut self,
        search: Result<usize, usize>,
        make_key: MK,
        value: V,
    ) -> (EntryMut<'_, K, V>, bool)
    where
        MK: FnOnce() -> K,
    {
        match search {
            Ok(index) => {
                *self.entries.value_mut(index) = value;
                (self.entry_at(index), false)
            }
            Err(index) => {
                let key = make_key();
                self.entries.insert_at(index, key, value);
                (self.entry_at(index), true)
            }
        }
    }

    // ---
    // Removal
    // ---

    /// Removes the entry matching `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: ?Sized,
        C: Comparator<Q, K>,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry matching `key`, returning it.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: ?Sized,
        C: Comparator<Q, K>,
    {
        let index = self.search(key).ok()?;
        Some(self.entries.remove_at(index))
    }

    /// Removes the entry matching `key`, returning the number of entries
    /// removed: either 0 or 1.
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        Q: ?Sized,
        C: Comparator<Q, K>,
    {
        usize::from(self.remove_entry(key).is_some())
    }
}

impl<K, V, C> SortedMap<K, V, C, Split<K, V>> {
    /// Returns the keys as a slice, in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::SplitFlatMap;
    ///
    /// let map = SplitFlatMap::from([(3, 'c'), (1, 'a'), (2, 'b')]);
    /// assert_eq!(map.key_slice(), [1, 2, 3]);
    /// assert_eq!(map.value_slice(), ['a', 'b', 'c']);
    /// ```
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

impl<K, V, C, L> fmt::Debug for SortedMap<K, V, C, L>
where
    K: fmt::Debug,
    V: fmt::Debug,
    L: Layout<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two sorted maps are equal if they hold equal entries in the same order.
///
/// The comparators are not compared.
impl<K, V, C, L> PartialEq for SortedMap<K, V, C, L>
where
    K: PartialEq,
    V: PartialEq,
    L: Layout<K, V>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C, L: Layout<K, V>> Eq for SortedMap<K, V, C, L> {}

/// Looks up the value for a key.
///
/// # Panics
///
/// Panics if the key is not present.
impl<K, V, C, L, Q> Index<&Q> for SortedMap<K, V, C, L>
where
    Q: ?Sized,
    C: Comparator<Q, K>,
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

impl<'a, K, V, C, L: Layout<K, V>> IntoIterator for &'a SortedMap<K, V, C, L> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, L>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, C, L: Layout<K, V>> IntoIterator
    for &'a mut SortedMap<K, V, C, L>
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V, L>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, C, L: Layout<K, V>> IntoIterator for SortedMap<K, V, C, L> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, L>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.entries)
    }
}

/// The `Extend` implementation keeps the first entry for each key, like
/// [`insert`](SortedMap::insert).
impl<K, V, C, L> Extend<(K, V)> for SortedMap<K, V, C, L>
where
    C: Comparator<K, K>,
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

impl<'a, K, V, C, L> Extend<(&'a K, &'a V)> for SortedMap<K, V, C, L>
where
    K: Copy + 'a,
    V: Copy + 'a,
    C: Comparator<K, K>,
    L: Layout<K, V>,
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(|(&key, &value)| (key, value)));
    }
}

/// The `FromIterator` implementation keeps the first entry for each key.
impl<K, V, C, L> FromIterator<(K, V)> for SortedMap<K, V, C, L>
where
    C: Comparator<K, K> + Default,
    L: Layout<K, V>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_comparator(C::default());
        map.extend(iter);
        map
    }
}

/// Builds a map in ascending key order from an array of entries, keeping the
/// first entry for each key.
impl<K, V, L, const N: usize> From<[(K, V); N]> for SortedMap<K, V, Ascending, L>
where
    K: Ord,
    L: Layout<K, V>,
{
    fn from(entries: [(K, V); N]) -> Self {
        Self::from_iter(entries)
    }
}
