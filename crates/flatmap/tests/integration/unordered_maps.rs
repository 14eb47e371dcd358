// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tests shared by `UnorderedFlatMap` and `UnorderedSplitFlatMap`.

use crate::ops::{check_ops, Operation, OP_LEN};
use flatmap::{UnorderedFlatMap, UnorderedSplitFlatMap};
use flatmap_test_utils::{
    eq_props::{assert_eq_props, assert_ne_props},
    hashers::{CollidingState, FewBucketsState, HashBuilder},
    test_key::{
        ChaosKey, KeyChaos, MoveSource, Moved, PanicOnConvert, Ticket,
    },
    test_map::TestMap,
    unwind::catch_panic,
};
use proptest::prelude::*;
use test_strategy::proptest;

macro_rules! unordered_map_tests {
    ($mod_name:ident, $map:ident) => {
        mod $mod_name {
            use super::*;

            fn new_map<K, V>() -> $map<K, V, HashBuilder> {
                $map::with_hasher(HashBuilder::default())
            }

            fn keys_of<V>(
                map: &$map<&'static str, V, HashBuilder>,
            ) -> Vec<&'static str> {
                map.keys().copied().collect()
            }

            #[proptest(cases = 16)]
            fn proptest_ops(
                #[strategy(prop::collection::vec(any::<Operation>(), 0..OP_LEN))]
                ops: Vec<Operation>,
            ) {
                check_ops::<$map<u8, String, HashBuilder>>(ops);
            }

            #[proptest(cases = 16)]
            fn proptest_ops_colliding(
                #[strategy(prop::collection::vec(any::<Operation>(), 0..OP_LEN))]
                ops: Vec<Operation>,
            ) {
                check_ops::<$map<u8, String, CollidingState>>(ops);
            }

            #[proptest(cases = 16)]
            fn proptest_ops_few_buckets(
                #[strategy(prop::collection::vec(any::<Operation>(), 0..OP_LEN))]
                ops: Vec<Operation>,
            ) {
                check_ops::<$map<u8, String, FewBucketsState>>(ops);
            }

            #[proptest(cases = 64)]
            fn proptest_permutation_eq(
                #[strategy(
                    prop::collection::btree_map(any::<u8>(), any::<u32>(), 0..64)
                        .prop_map(|m| m.into_iter().collect::<Vec<_>>())
                        .prop_shuffle()
                )]
                entries: Vec<(u8, u32)>,
            ) {
                let forward: $map<u8, u32, HashBuilder> =
                    entries.iter().copied().collect();
                let backward: $map<u8, u32, HashBuilder> =
                    entries.iter().rev().copied().collect();
                forward.validate().expect("map should be valid");
                backward.validate().expect("map should be valid");
                assert_eq_props(&forward, &backward);
            }

            #[test]
            fn iterates_in_insertion_order() {
                let mut map = new_map();
                for key in ["c", "a", "d", "b"] {
                    map.insert(key, key.len());
                }
                assert_eq!(keys_of(&map), ["c", "a", "d", "b"]);
                assert_eq!(
                    map.iter().rev().map(|(k, _)| *k).collect::<Vec<_>>(),
                    ["b", "d", "a", "c"]
                );
                assert_eq!(map.values().len(), 4);
                map.validate().expect("map should be valid");
            }

            #[test]
            fn removal_moves_last_entry_into_hole() {
                let mut map = new_map();
                for (index, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
                    map.insert(key, index);
                }
                assert_eq!(map.remove_index(1), Some(("b", 1)));
                assert_eq!(keys_of(&map), ["a", "d", "c"]);
                assert_eq!(map.find_index("d"), Some(1));

                // Removing the last entry moves nothing.
                assert_eq!(map.remove("c"), Some(2));
                assert_eq!(keys_of(&map), ["a", "d"]);
                assert_eq!(map.remove_index(2), None);
                map.validate().expect("map should be valid");
            }

            #[test]
            fn colliding_keys_survive_removals() {
                let mut map = $map::with_hasher(CollidingState);
                for key in 0..32u32 {
                    map.insert(key, key * 2);
                }
                // Leave tombstones all over the single probe chain.
                for key in (0..32u32).step_by(2) {
                    assert_eq!(map.remove(&key), Some(key * 2));
                }
                map.validate().expect("map should be valid");
                for key in 0..32u32 {
                    let expected = (key % 2 == 1).then_some(key * 2);
                    assert_eq!(map.get(&key).copied(), expected, "key {key}");
                }

                // Reinserting reuses the chain.
                for key in (0..32u32).step_by(2) {
                    let (_, inserted) = map.insert(key, key);
                    assert!(inserted);
                }
                assert_eq!(map.len(), 32);
                map.validate().expect("map should be valid");

                // Draining everything and starting over works too.
                map.retain(|_, _| false);
                assert!(map.is_empty());
                map.insert(7, 7);
                assert_eq!(map[&7u32], 7);
                map.validate().expect("map should be valid");
            }

            #[test]
            fn insert_keeps_existing_entry() {
                let mut map = new_map();
                let (entry, inserted) = map.insert(5u32, "first");
                assert!(inserted);
                assert_eq!(entry.index(), 0);

                let (mut entry, inserted) = map.insert(5, "second");
                assert!(!inserted);
                assert_eq!((entry.key(), *entry.get()), (&5, "first"));
                *entry.get_mut() = "changed";

                let (entry, inserted) = map.insert(1, "one");
                assert!(inserted);
                assert_eq!(entry.index(), 1);

                assert_eq!(map.len(), 2);
                assert_eq!(map[&5u32], "changed");
            }

            #[test]
            fn emplace_converts_eagerly_try_emplace_lazily() {
                let mut map = new_map::<String, Moved>();
                map.emplace("one", Moved::new(1));
                map.emplace("two", Moved::new(2));

                let mut source = MoveSource::new(22);
                let (entry, inserted) = map.try_emplace("two", &mut source);
                assert!(!inserted);
                assert_eq!(*entry.get(), Moved::new(2));
                assert!(!source.is_consumed());

                let (entry, inserted) = map.emplace("two", &mut source);
                assert!(!inserted);
                assert_eq!(*entry.get(), Moved::new(2));
                assert!(source.is_consumed());

                let mut source = MoveSource::new(3);
                let (entry, inserted) = map.try_emplace("three", &mut source);
                assert!(inserted);
                assert_eq!(*entry.get(), Moved::new(3));
                assert!(source.is_consumed());

                assert_eq!(map.len(), 3);
                map.validate().expect("map should be valid");
            }

            #[test]
            fn owned_keys_move_into_the_map() {
                let mut map = new_map::<Ticket, u32>();
                let (entry, inserted) =
                    map.try_emplace_owned(Ticket::new(2, 0), 20u32);
                assert!(inserted);
                assert_eq!(entry.key().serial, 0);

                // The key is present: the stored key stays and the argument
                // is dropped.
                let (entry, inserted) =
                    map.try_emplace_owned(Ticket::new(2, 1), 99u32);
                assert!(!inserted);
                assert_eq!(entry.key().serial, 0);
                assert_eq!(*entry.get(), 20);

                let (entry, inserted) =
                    map.insert_or_assign_owned(Ticket::new(1, 2), 10);
                assert!(inserted);
                assert_eq!(entry.key().serial, 2);
                let (entry, inserted) =
                    map.insert_or_assign_owned(Ticket::new(1, 3), 11);
                assert!(!inserted);
                assert_eq!(entry.key().serial, 2);
                assert_eq!(*entry.get(), 11);

                let (_, inserted) =
                    map.try_emplace_owned_with(Ticket::new(3, 4), || 30);
                assert!(inserted);
                let res = map.try_emplace_owned_fallible(Ticket::new(4, 5), || {
                    Err::<u32, _>("no value")
                });
                assert_eq!(res.err(), Some("no value"));

                assert_eq!(map.len(), 3);
                assert_eq!(map.get(&Ticket::new(1, 0)), Some(&11));
                assert_eq!(map.get(&Ticket::new(3, 0)), Some(&30));
                assert_eq!(map.get(&Ticket::new(4, 0)), None);
                map.validate().expect("map should be valid");
            }

            #[test]
            fn insert_or_assign_and_get_or_insert_default() {
                let mut map = new_map::<String, u32>();
                let (entry, inserted) = map.insert_or_assign("a", 1);
                assert!(inserted);
                assert_eq!(*entry.get(), 1);
                let (entry, inserted) = map.insert_or_assign("a", 2);
                assert!(!inserted);
                assert_eq!(*entry.into_mut(), 2);

                *map.get_or_insert_default("b") += 5;
                *map.get_or_insert_default("b") += 5;
                assert_eq!(map["b"], 10);
                assert_eq!(map.len(), 2);
            }

            #[test]
            fn erase_round_trip() {
                let mut map: $map<String, u32, HashBuilder> = [
                    ("one".to_owned(), 1),
                    ("two".to_owned(), 2),
                    ("three".to_owned(), 3),
                ]
                .into_iter()
                .collect();
                assert_eq!(map.erase("two"), 1);
                assert_eq!(map.count("two"), 0);
                assert!(!map.contains_key("two"));

                let before = map.clone();
                assert_eq!(map.erase("two"), 0);
                assert_eq!(map, before);

                assert_eq!(map.remove_entry("one"), Some(("one".to_owned(), 1)));
                assert_eq!(map.remove("three"), Some(3));
                assert!(map.is_empty());
                map.validate().expect("map should be valid");
            }

            #[test]
            fn construct_from_iterators() {
                // The first entry for a duplicate key wins.
                let map: $map<&str, u32, HashBuilder> =
                    [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
                assert_eq!(map.len(), 2);
                assert_eq!(map["a"], 1);
                assert_eq!(keys_of(&map), ["a", "b"]);

                let mut extended = map.clone();
                extended.extend([("b", 20), ("c", 30)]);
                extended.extend(map.iter());
                assert_eq!(extended.len(), 3);
                assert_eq!(extended["b"], 2);
                assert_eq!(extended["c"], 30);
                assert_ne_props(&map, &extended);
                extended.validate().expect("map should be valid");
            }

            #[cfg(feature = "default-hasher")]
            #[test]
            fn construct_from_literal() {
                let map = $map::from([("one", 1), ("two", 2), ("three", 3)]);
                assert_eq!(map.len(), 3);
                assert_eq!(map["one"], 1);
                assert_eq!(map["two"], 2);
                assert_eq!(map["three"], 3);
                assert_eq!(
                    map,
                    $map::from([("three", 3), ("two", 2), ("one", 1)])
                );
            }

            #[test]
            fn equality_ignores_storage_order() {
                let mut a = new_map();
                let mut b = new_map();
                for key in 0..10u8 {
                    a.insert(key, u32::from(key));
                    b.insert(9 - key, u32::from(9 - key));
                }
                assert_eq_props(&a, &b);
                b.insert_or_assign(&3u8, 100);
                assert_ne_props(&a, &b);
                b.insert_or_assign(&3u8, 3);
                b.insert(10, 10);
                assert_ne_props(&a, &b);
            }

            #[test]
            #[should_panic(expected = "key not found")]
            fn index_panics_on_missing_key() {
                let mut map = new_map();
                map.insert(1u32, "one");
                let _ = map[&2u32];
            }

            #[test]
            fn mutation_through_iterators() {
                let mut map: $map<u32, u32, HashBuilder> =
                    [(1, 1), (2, 2), (3, 3)].into_iter().collect();
                for (key, value) in map.iter_mut() {
                    *value += key * 100;
                }
                for value in map.values_mut() {
                    *value += 1;
                }
                for (_, value) in &mut map {
                    *value *= 2;
                }
                if let Some((_, value)) = map.find_mut(&2u32) {
                    *value = 0;
                }
                let entries: Vec<_> = map.into_iter().collect();
                assert_eq!(entries, [(1, 204), (2, 0), (3, 608)]);
            }

            #[test]
            fn retain_keeps_relative_order() {
                let mut map: $map<u32, u32, HashBuilder> =
                    (0..20).map(|k| (k, k)).collect();
                map.retain(|key, value| {
                    *value += 1;
                    key % 3 == 0
                });
                assert_eq!(
                    map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
                    [(0, 1), (3, 4), (6, 7), (9, 10), (12, 13), (15, 16), (18, 19)]
                );
                for key in 0..20u32 {
                    assert_eq!(map.contains_key(&key), key % 3 == 0, "key {key}");
                }
                map.validate().expect("map should be valid");
            }

            #[test]
            fn panicking_retain_removes_nothing() {
                let mut map: $map<u32, u32, HashBuilder> =
                    (0..10).map(|k| (k, k)).collect();
                let before = map.clone();
                let res = catch_panic(|| {
                    map.retain(|key, _| {
                        if *key == 7 {
                            panic!("chaos: retain predicate");
                        }
                        key % 2 == 0
                    })
                });
                assert_eq!(res, None);
                assert_eq!(map, before);
                map.validate().expect("map should be valid");
            }

            #[test]
            fn failed_constructors_leave_map_unchanged() {
                let mut map = new_map::<String, String>();
                map.insert("a".to_owned(), "x".to_owned());
                let before = map.clone();

                let res = catch_panic(|| map.try_emplace("b", PanicOnConvert).1);
                assert_eq!(res, None);
                assert_eq!(map, before);

                let res = catch_panic(|| map.emplace("b", PanicOnConvert).1);
                assert_eq!(res, None);
                assert_eq!(map, before);

                let res = map.try_emplace_fallible("b", || Err::<String, _>(42));
                assert_eq!(res.map(|(_, inserted)| inserted), Err(42));
                assert_eq!(map, before);

                let (entry, inserted) = map.try_emplace("a", PanicOnConvert);
                assert!(!inserted);
                assert_eq!(entry.get(), "x");
                map.validate().expect("map should be valid");
            }

            #[test]
            fn panicking_hash_leaves_map_unchanged() {
                let mut map = new_map::<ChaosKey, u32>();
                for key in 0..8 {
                    map.insert(ChaosKey::new(key), u32::from(key));
                }
                let chaos = ChaosKey::new(100).with_chaos(KeyChaos::PanicOnHash);
                assert_eq!(catch_panic(|| map.insert(chaos, 100).1), None);
                assert!(catch_panic(|| map.remove(&chaos)).is_none());
                assert!(catch_panic(|| map.contains_key(&chaos)).is_none());
                assert_eq!(map.len(), 8);
                map.validate().expect("map should be valid");
            }

            #[test]
            fn panicking_comparison_leaves_map_unchanged() {
                // Every key shares a hash, so any lookup has to compare.
                let mut map = $map::with_hasher(CollidingState);
                for key in 0..8 {
                    map.insert(ChaosKey::new(key), u32::from(key));
                }
                let chaos =
                    ChaosKey::new(100).with_chaos(KeyChaos::PanicOnCompare);
                assert_eq!(catch_panic(|| map.insert(chaos, 100).1), None);
                assert!(catch_panic(|| map.remove(&chaos)).is_none());
                assert_eq!(map.len(), 8);
                map.validate().expect("map should be valid");
            }

            #[test]
            fn clones_are_deep() {
                let mut map = new_map();
                map.insert(1u32, vec![1]);
                map.insert(2, vec![2]);
                let clone = map.clone();
                if let Some(value) = map.get_mut(&1u32) {
                    value.push(10);
                }
                map.insert(3, vec![3]);
                assert_eq!(clone.len(), 2);
                assert_eq!(clone[&1u32], [1]);
                assert_ne_props(&map, &clone);
                clone.validate().expect("map should be valid");
            }

            #[test]
            fn debug_formats_as_map() {
                let mut map = new_map();
                map.insert(2u32, "b");
                map.insert(1, "a");
                assert_eq!(format!("{map:?}"), r#"{2: "b", 1: "a"}"#);
            }

            #[test]
            fn capacity_management() {
                let mut map =
                    <$map<u32, String, HashBuilder>>::make_with_capacity(64);
                assert!(map.capacity() >= 64);
                let table_capacity = map.capacity();
                for key in 0..64 {
                    map.insert(key, key.to_string());
                }
                // Filling the requested capacity doesn't reallocate.
                assert_eq!(map.capacity(), table_capacity);

                map.try_reserve(128).expect("small reservation succeeds");
                assert!(map.capacity() >= 192);
                map.try_reserve(usize::MAX).unwrap_err();
                assert_eq!(map.len(), 64);

                map.retain(|key, _| *key < 4);
                map.shrink_to_fit();
                assert!(map.capacity() >= 4);
                assert_eq!(map.get(&3u32).map(String::as_str), Some("3"));

                map.clear();
                assert!(map.is_empty());
                assert_eq!(map.get(&3u32), None);
                map.validate().expect("map should be valid");
            }
        }
    };
}

unordered_map_tests!(unordered_flat_map, UnorderedFlatMap);
unordered_map_tests!(unordered_split_flat_map, UnorderedSplitFlatMap);

#[test]
fn split_layout_keeps_keys_and_values_aligned() {
    let mut map = UnorderedSplitFlatMap::with_hasher(FewBucketsState);
    for key in 0..16u8 {
        map.insert(key, u32::from(key) * 3);
    }
    for key in [3u8, 0, 15] {
        map.remove(&key);
    }
    for (key, value) in &map {
        assert_eq!(*value, u32::from(*key) * 3);
    }
    assert_eq!(map.key_slice().len(), 13);
    for (key, value) in map.key_slice().iter().zip(map.value_slice()) {
        assert_eq!(*value, u32::from(*key) * 3);
    }
    map.validate().expect("map should be valid");
}
