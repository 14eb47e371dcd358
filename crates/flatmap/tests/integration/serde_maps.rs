// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use flatmap::{
    Descending, FlatMap, SplitFlatMap, UnorderedFlatMap, UnorderedSplitFlatMap,
};
use flatmap_test_utils::{
    hashers::{CollidingState, HashBuilder},
    serde_json,
    serde_utils::{assert_rejects_duplicate_keys, assert_serialize_roundtrip},
};
use test_strategy::proptest;

macro_rules! serde_tests {
    ($mod_name:ident, $map:ty) => {
        mod $mod_name {
            use super::*;

            #[proptest(cases = 64)]
            fn proptest_serialize_roundtrip(entries: Vec<(u8, String)>) {
                assert_serialize_roundtrip::<$map>(entries);
            }

            #[test]
            fn rejects_duplicate_keys() {
                assert_rejects_duplicate_keys::<$map>();
            }
        }
    };
}

serde_tests!(flat_map, FlatMap<u8, String>);
serde_tests!(split_flat_map, SplitFlatMap<u8, String>);
serde_tests!(unordered_flat_map, UnorderedFlatMap<u8, String, HashBuilder>);
serde_tests!(
    unordered_split_flat_map,
    UnorderedSplitFlatMap<u8, String, HashBuilder>
);

#[test]
fn sorted_maps_serialize_in_key_order() {
    let map = FlatMap::<&str, u32>::from([("b", 2), ("c", 3), ("a", 1)]);
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"a":1,"b":2,"c":3}"#);

    let descending: FlatMap<String, u32, Descending> =
        serde_json::from_str(&json).unwrap();
    let keys: Vec<_> = descending.keys().map(String::as_str).collect();
    assert_eq!(keys, ["c", "b", "a"]);
    assert_eq!(
        serde_json::to_string(&descending).unwrap(),
        r#"{"c":3,"b":2,"a":1}"#
    );
}

#[test]
fn deserialize_with_explicit_policy() {
    let json = r#"{"x":1,"y":2,"z":3}"#;

    let mut de = serde_json::Deserializer::from_str(json);
    let sorted =
        SplitFlatMap::<String, u32, Descending>::deserialize_with_comparator(
            &mut de, Descending,
        )
        .unwrap();
    assert_eq!(sorted.first(), Some((&"z".to_owned(), &3)));

    let mut de = serde_json::Deserializer::from_str(json);
    let hashed =
        UnorderedFlatMap::<String, u32, CollidingState>::deserialize_with_hasher(
            &mut de,
            CollidingState,
        )
        .unwrap();
    hashed.validate().expect("map should be valid");
    // Entries are inserted in input order.
    let keys: Vec<_> = hashed.keys().map(String::as_str).collect();
    assert_eq!(keys, ["x", "y", "z"]);
    assert_eq!(hashed["y"], 2);
}
