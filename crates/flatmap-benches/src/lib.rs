// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inputs shared by the benchmarks.

/// A value with some heap data, so that moving entries around has a cost
/// beyond copying a few words.
#[derive(Clone, Debug, Default)]
pub struct Record {
    pub index: u32,
    pub data: String,
}

impl Record {
    pub fn new(index: u32) -> Self {
        Self { index, data: format!("data{index}") }
    }
}

/// Returns `size` distinct keys in a scrambled but deterministic order.
///
/// Multiplying by an odd constant permutes `u32`, so the keys stay distinct,
/// and sorted maps see insertions all over the key range rather than only at
/// the end.
pub fn scrambled_keys(size: usize) -> Vec<u32> {
    (0..size as u32).map(|i| i.wrapping_mul(0x9e37_79b9)).collect()
}

/// Returns `size` distinct string keys, in the same order as
/// [`scrambled_keys`].
pub fn scrambled_string_keys(size: usize) -> Vec<String> {
    scrambled_keys(size).into_iter().map(|key| format!("key{key:08x}")).collect()
}
