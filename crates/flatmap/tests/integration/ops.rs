// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Random operation sequences, checked against [`NaiveMap`].

use flatmap_test_utils::{naive_map::NaiveMap, test_map::TestMap};
use proptest::sample::Index;
use std::cell::Cell;
use test_strategy::Arbitrary;

// Miri is quite slow, so run fewer operations.
#[cfg(miri)]
pub const OP_LEN: usize = 64;
#[cfg(not(miri))]
pub const OP_LEN: usize = 1024;

#[derive(Debug, Arbitrary)]
pub enum Operation {
    // Make inserts a bit more common to try and fill up the map.
    #[weight(6)]
    Insert(u8, String),
    // The flag picks the owned-key form over the borrowed-key one.
    #[weight(3)]
    TryEmplace(u8, String, bool),
    #[weight(2)]
    InsertOrAssign(u8, String, bool),
    #[weight(2)]
    GetOrInsertDefault(u8),
    #[weight(3)]
    Get(u8),
    #[weight(4)]
    Remove(u8),
    #[weight(2)]
    RemoveIndex(Index),
    #[weight(1)]
    Retain(u8),
    // Clearing resets everything, so keep it rare.
    #[weight(1)]
    Clear,
}

/// Applies `ops` to a fresh `M` and to the oracle, checking after each step
/// that the map is valid and holds the same entries in the same order.
pub fn check_ops<M: TestMap<u8, String>>(ops: Vec<Operation>) {
    let mut map = M::make_new();
    let mut naive = NaiveMap::new(M::map_kind());

    for (step, op) in ops.into_iter().enumerate() {
        match op {
            Operation::Insert(key, value) => {
                let map_res = map.insert_(key, value.clone());
                let naive_res = naive.insert(key, value);
                assert_eq!(map_res, naive_res, "insert({key})");
            }
            Operation::TryEmplace(key, value, owned) => {
                let called = Cell::new(false);
                let make = || {
                    called.set(true);
                    value.clone()
                };
                let map_res = if owned {
                    map.try_emplace_owned_with_(key, make)
                } else {
                    map.try_emplace_with_(&key, make)
                };
                let naive_res = naive.try_emplace_with(&key, || value);
                assert_eq!(map_res, naive_res, "try_emplace({key})");
                assert_eq!(
                    called.get(),
                    map_res.1,
                    "constructor runs exactly when inserting"
                );
            }
            Operation::InsertOrAssign(key, value, owned) => {
                let map_res = if owned {
                    map.insert_or_assign_owned_(key, value.clone())
                } else {
                    map.insert_or_assign_(&key, value.clone())
                };
                let naive_res = naive.insert_or_assign(&key, value);
                assert_eq!(map_res, naive_res, "insert_or_assign({key})");
            }
            Operation::GetOrInsertDefault(key) => {
                let map_value = map.get_or_insert_default_(&key).clone();
                let naive_value = naive.get_or_insert_default(&key).clone();
                assert_eq!(map_value, naive_value);
            }
            Operation::Get(key) => {
                assert_eq!(map.get_(&key), naive.get(&key));
                assert_eq!(map.find_index_(&key), naive.find_index(&key));
                assert_eq!(
                    map.count_(&key),
                    usize::from(naive.get(&key).is_some())
                );
            }
            Operation::Remove(key) => {
                assert_eq!(map.remove_(&key), naive.remove(&key));
            }
            Operation::RemoveIndex(index) => {
                // Occasionally exercise the out-of-range path as well.
                let index = index.index(naive.len() + 1);
                assert_eq!(map.remove_index_(index), naive.remove_index(index));
            }
            Operation::Retain(seed) => {
                let modulus = u8::max(seed % 5, 2);
                let keep = |key: &u8, _: &mut String| key % modulus != 0;
                map.retain_(keep);
                naive.retain(keep);
            }
            Operation::Clear => {
                map.clear_();
                naive.clear();
            }
        }

        map.validate_().unwrap_or_else(|error| {
            panic!("step {step}: map invalid: {error}")
        });
        assert_eq!(map.len_(), naive.len());
        assert_eq!(map.entries_(), naive.entries(), "step {step}: entries");
    }

    // The owning iterator yields the same entries as the borrowing one.
    let expected: Vec<(u8, String)> =
        naive.entries().into_iter().map(|(k, v)| (*k, v.clone())).collect();
    assert_eq!(map.into_entries_(), expected);
}
