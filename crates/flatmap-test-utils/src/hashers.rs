// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hash builders for exercising the probe table.

use std::hash::{BuildHasher, Hasher};

#[cfg(feature = "default-hasher")]
pub type HashBuilder = flatmap::DefaultHashBuilder;

#[cfg(not(feature = "default-hasher"))]
pub type HashBuilder = std::hash::RandomState;

/// Hashes every key to the same value.
///
/// All entries then share one probe sequence, so lookups must step past every
/// tombstone and non-matching slot in it.
#[derive(Clone, Copy, Debug, Default)]
pub struct CollidingState;

impl BuildHasher for CollidingState {
    type Hasher = ConstantHasher;

    fn build_hasher(&self) -> ConstantHasher {
        ConstantHasher
    }
}

/// The hasher built by [`CollidingState`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstantHasher;

impl Hasher for ConstantHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

/// Hashes keys into only four distinct values.
///
/// This produces several interleaved probe chains that run into each other,
/// rather than the single chain of [`CollidingState`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FewBucketsState;

impl BuildHasher for FewBucketsState {
    type Hasher = FewBucketsHasher;

    fn build_hasher(&self) -> FewBucketsHasher {
        FewBucketsHasher(0xcbf2_9ce4_8422_2325)
    }
}

/// The hasher built by [`FewBucketsState`]: FNV-1a, truncated to two bits.
#[derive(Clone, Copy, Debug)]
pub struct FewBucketsHasher(u64);

impl Hasher for FewBucketsHasher {
    fn finish(&self) -> u64 {
        self.0 & 0b11
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 ^= u64::from(byte);
            self.0 = self.0.wrapping_mul(0x0100_0000_01b3);
        }
    }
}
