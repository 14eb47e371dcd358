// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serde-related test utilities.

use crate::test_map::TestMap;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;

/// Serializes a map built from `entries`, then checks that deserializing it
/// reproduces the same map in the same storage order.
pub fn assert_serialize_roundtrip<M>(entries: Vec<(u8, String)>)
where
    M: TestMap<u8, String> + Serialize + DeserializeOwned,
{
    let mut map = M::make_new();
    for (key, value) in entries {
        // Duplicates are dropped, as with any insertion.
        map.insert_(key, value);
    }

    let serialized = serde_json::to_string(&map).unwrap();
    let deserialized: M = serde_json::from_str(&serialized).unwrap();
    deserialized.validate_().expect("deserialized map is valid");

    // Entries are inserted in the order they were serialized, which is the
    // source map's storage order.
    assert_eq!(map.entries_(), deserialized.entries_());

    // Also check that the output is an ordinary JSON map.
    let btree_map: BTreeMap<u8, String> =
        serde_json::from_str(&serialized).unwrap();
    assert_eq!(btree_map.len(), map.len_());
    for (key, value) in map.entries_() {
        assert_eq!(btree_map.get(key), Some(value));
    }
}

/// Checks that deserializing a JSON object with a repeated key fails.
pub fn assert_rejects_duplicate_keys<M>()
where
    M: TestMap<u8, String> + DeserializeOwned,
{
    let input = r#"{"1":"a","2":"b","1":"c"}"#;
    let error = serde_json::from_str::<M>(input)
        .expect_err("duplicate keys should be rejected");
    let message = error.to_string();
    assert!(
        message.contains("duplicate key in map: 1"),
        "unexpected error message: {message}"
    );
}
