// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{layout::Layout, HashedMap};
use core::{
    fmt,
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};
use serde_core::{
    de::{self, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// A `HashedMap` serializes as a map. Entries are serialized in storage
/// order.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use flatmap::UnorderedFlatMap;
///
/// let mut map = UnorderedFlatMap::new();
/// map.insert("a".to_owned(), 1);
/// let serialized = serde_json::to_string(&map).unwrap();
/// assert_eq!(serialized, r#"{"a":1}"#);
/// # }
/// ```
impl<K, V, S, L> Serialize for HashedMap<K, V, S, L>
where
    K: Serialize,
    V: Serialize,
    L: Layout<K, V>,
{
    fn serialize<Ser: Serializer>(
        &self,
        serializer: Ser,
    ) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_map(self.iter())
    }
}

/// The `Deserialize` impl for `HashedMap` reads a map, producing an error if
/// any key appears more than once.
///
/// The `fmt::Debug` bound on `K` ensures better error reporting.
impl<'de, K, V, S, L> Deserialize<'de> for HashedMap<K, V, S, L>
where
    K: Deserialize<'de> + Hash + Eq + fmt::Debug,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
    L: Layout<K, V>,
{
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        Self::deserialize_with_hasher(deserializer, S::default())
    }
}

impl<'de, K, V, S, L> HashedMap<K, V, S, L>
where
    K: Deserialize<'de> + Hash + Eq + fmt::Debug,
    V: Deserialize<'de>,
    S: BuildHasher,
    L: Layout<K, V>,
{
    /// Deserializes from a map, with the given hasher.
    pub fn deserialize_with_hasher<D: Deserializer<'de>>(
        deserializer: D,
        hasher: S,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MapVisitor { hasher, _marker: PhantomData })
    }
}

struct MapVisitor<K, V, S, L> {
    hasher: S,
    _marker: PhantomData<fn() -> (K, V, L)>,
}

impl<'de, K, V, S, L> Visitor<'de> for MapVisitor<K, V, S, L>
where
    K: Deserialize<'de> + Hash + Eq + fmt::Debug,
    V: Deserialize<'de>,
    S: BuildHasher,
    L: Layout<K, V>,
{
    type Value = HashedMap<K, V, S, L>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with unique keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let capacity = access.size_hint().unwrap_or(0).min(4096);
        let mut map = HashedMap::with_capacity_and_hasher(capacity, self.hasher);
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
