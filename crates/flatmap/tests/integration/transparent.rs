// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lookups with borrowed or otherwise non-key query types.

use flatmap::{
    Comparable, Comparator, Equivalent, FlatMap, SplitFlatMap,
    UnorderedFlatMap, UnorderedSplitFlatMap,
};
use flatmap_test_utils::hashers::HashBuilder;
use std::cmp::Ordering;

/// A borrowed view of a `(String, u32)` key.
#[derive(Clone, Copy, Debug, Hash)]
struct PairRef<'a>(&'a str, u32);

impl Equivalent<(String, u32)> for PairRef<'_> {
    fn equivalent(&self, key: &(String, u32)) -> bool {
        self.0 == key.0 && self.1 == key.1
    }
}

impl Comparable<(String, u32)> for PairRef<'_> {
    fn compare(&self, key: &(String, u32)) -> Ordering {
        (self.0, self.1).cmp(&(key.0.as_str(), key.1))
    }
}

macro_rules! transparent_tests {
    ($mod_name:ident, $new:expr) => {
        mod $mod_name {
            use super::*;

            #[test]
            fn str_queries_on_string_keys() {
                let mut map = $new;
                map.insert("alpha".to_owned(), 1);
                map.insert("beta".to_owned(), 2);

                assert_eq!(map.find("alpha"), Some((&"alpha".to_owned(), &1)));
                assert_eq!(map.get("beta"), Some(&2));
                assert_eq!(map["beta"], 2);
                assert_eq!(map.count("gamma"), 0);
                assert!(map.contains_key("alpha"));
                assert!(map.find_index("beta").is_some());

                if let Some(value) = map.get_mut("alpha") {
                    *value = 10;
                }
                *map.get_or_insert_default("gamma") += 3;
                let (_, inserted) = map.try_emplace("gamma", 100);
                assert!(!inserted);
                let (_, inserted) = map.insert_or_assign("beta", 20);
                assert!(!inserted);

                assert_eq!(map.get("alpha"), Some(&10));
                assert_eq!(map.get("beta"), Some(&20));
                assert_eq!(map.get("gamma"), Some(&3));

                assert_eq!(map.erase("alpha"), 1);
                assert_eq!(map.erase("alpha"), 0);
                assert_eq!(
                    map.remove_entry("beta"),
                    Some(("beta".to_owned(), 20))
                );
                assert_eq!(map.remove("gamma"), Some(3));
                assert!(map.is_empty());
                map.validate().expect("map should be valid");
            }

            #[test]
            fn compound_key_queries() {
                let mut map = $new;
                map.insert(("a".to_owned(), 1u32), 10);
                map.insert(("a".to_owned(), 2u32), 20);
                map.insert(("b".to_owned(), 1u32), 30);

                assert_eq!(map.get(&PairRef("a", 2)), Some(&20));
                assert_eq!(map.get(&PairRef("b", 2)), None);
                assert_eq!(map.count(&PairRef("b", 1)), 1);
                assert_eq!(map.remove(&PairRef("a", 1)), Some(10));
                assert_eq!(map.len(), 2);
                map.validate().expect("map should be valid");
            }
        }
    };
}

transparent_tests!(flat_map, FlatMap::new());
transparent_tests!(split_flat_map, SplitFlatMap::new());
transparent_tests!(
    unordered_flat_map,
    UnorderedFlatMap::with_hasher(HashBuilder::default())
);
transparent_tests!(
    unordered_split_flat_map,
    UnorderedSplitFlatMap::with_hasher(HashBuilder::default())
);

/// Orders ASCII strings ignoring case.
#[derive(Clone, Copy, Debug, Default)]
struct CaseInsensitive;

impl Comparator<str, String> for CaseInsensitive {
    fn compare(&self, query: &str, key: &String) -> Ordering {
        let query = query.bytes().map(|b| b.to_ascii_lowercase());
        let key = key.bytes().map(|b| b.to_ascii_lowercase());
        query.cmp(key)
    }
}

impl Comparator<String, String> for CaseInsensitive {
    fn compare(&self, query: &String, key: &String) -> Ordering {
        <Self as Comparator<str, String>>::compare(self, query, key)
    }
}

#[test]
fn custom_comparator_with_borrowed_queries() {
    let mut map = FlatMap::with_comparator(CaseInsensitive);
    map.insert("Banana".to_owned(), 2);
    map.insert("apple".to_owned(), 1);
    map.insert("Cherry".to_owned(), 3);

    // A key equal under the comparator counts as present.
    let (entry, inserted) = map.insert("APPLE".to_owned(), 100);
    assert!(!inserted);
    assert_eq!(entry.key(), "apple");

    let keys: Vec<_> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["apple", "Banana", "Cherry"]);

    assert_eq!(map.get("BANANA"), Some(&2));
    assert_eq!(map.count("cherry"), 1);
    let (_, inserted) = map.try_emplace("DATE", 4);
    assert!(inserted);
    assert_eq!(map.erase("date"), 1);
    assert_eq!(map.len(), 3);
    map.validate().expect("map should be valid");

    let mut split = SplitFlatMap::with_comparator(CaseInsensitive);
    split.extend(map.iter().map(|(k, v)| (k.clone(), *v)));
    assert_eq!(split.find_index("CHERRY"), Some(2));
    assert_eq!(split.remove("apple"), Some(1));
    split.validate().expect("map should be valid");
}
