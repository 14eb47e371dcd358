// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{compare::Comparator, layout::Layout, SortedMap};
use core::{fmt, marker::PhantomData};
use serde_core::{
    de::{self, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// A `SortedMap` serializes as a map, in key order.
///
/// # Examples
///
/// ```
/// use flatmap::FlatMap;
///
/// let map = FlatMap::from([("b".to_owned(), 2), ("a".to_owned(), 1)]);
/// let serialized = serde_json::to_string(&map).unwrap();
/// assert_eq!(serialized, r#"{"a":1,"b":2}"#);
/// ```
impl<K, V, C, L> Serialize for SortedMap<K, V, C, L>
where
    K: Serialize,
    V: Serialize,
    L: Layout<K, V>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// The `Deserialize` impl for `SortedMap` reads a map, producing an error if
/// any key appears more than once.
///
/// The `fmt::Debug` bound on `K` ensures better error reporting.
impl<'de, K, V, C, L> Deserialize<'de> for SortedMap<K, V, C, L>
where
    K: Deserialize<'de> + fmt::Debug,
    V: Deserialize<'de>,
    C: Comparator<K, K> + Default,
    L: Layout<K, V>,
{
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        Self::deserialize_with_comparator(deserializer, C::default())
    }
}

impl<'de, K, V, C, L> SortedMap<K, V, C, L>
where
    K: Deserialize<'de> + fmt::Debug,
    V: Deserialize<'de>,
    C: Comparator<K, K>,
    L: Layout<K, V>,
{
    /// Deserializes from a map, ordering the result with `comparator`.
    pub fn deserialize_with_comparator<D: Deserializer<'de>>(
        deserializer: D,
        comparator: C,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MapVisitor {
            comparator,
            _marker: PhantomData,
        })
    }
}

struct MapVisitor<K, V, C, L> {
    comparator: C,
    _marker: PhantomData<fn() -> (K, V, L)>,
}

impl<'de, K, V, C, L> Visitor<'de> for MapVisitor<K, V, C, L>
where
    K: Deserialize<'de> + fmt::Debug,
    V: Deserialize<'de>,
    C: Comparator<K, K>,
    L: Layout<K, V>,
{
    type Value = SortedMap<K, V, C, L>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with unique keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        // Cap the preallocation so that a bogus size hint can't exhaust
        // memory.
        let capacity = access.size_hint().unwrap_or(0).min(4096);
        let mut map =
            SortedMap::with_capacity_and_comparator(capacity, self.comparator);
        while let Some((key, value)) = access.next_entry::<K, V>()? {
            if map.contains_key(&key) {
                return Err(de::Error::custom(format_args!(
                    "duplicate key in map: {key:?}"
                )));
            }
            map.insert(key, value);
        }
        Ok(map)
    }
}
