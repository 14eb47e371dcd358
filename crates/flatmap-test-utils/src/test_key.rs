// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key and value types with observable side effects.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

/// How a [`ChaosKey`] misbehaves.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum KeyChaos {
    /// Behaves like its inner `u8`.
    #[default]
    None,
    /// Panics when hashed.
    PanicOnHash,
    /// Panics when compared with another key, for equality or order.
    PanicOnCompare,
}

/// A key that can be set up to panic inside the map's hashing or comparison
/// code.
#[derive(Clone, Copy, Debug)]
pub struct ChaosKey {
    pub key: u8,
    pub chaos: KeyChaos,
}

impl ChaosKey {
    pub fn new(key: u8) -> Self {
        Self { key, chaos: KeyChaos::None }
    }

    pub fn with_chaos(self, chaos: KeyChaos) -> Self {
        Self { chaos, ..self }
    }

    fn check_compare(&self, other: &Self) {
        if self.chaos == KeyChaos::PanicOnCompare
            || other.chaos == KeyChaos::PanicOnCompare
        {
            panic!("chaos: comparing key {} with {}", self.key, other.key);
        }
    }
}

impl Hash for ChaosKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.chaos == KeyChaos::PanicOnHash {
            panic!("chaos: hashing key {}", self.key);
        }
        self.key.hash(state);
    }
}

impl PartialEq for ChaosKey {
    fn eq(&self, other: &Self) -> bool {
        self.check_compare(other);
        self.key == other.key
    }
}

impl Eq for ChaosKey {}

impl PartialOrd for ChaosKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChaosKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.check_compare(other);
        self.key.cmp(&other.key)
    }
}

/// A key that implements neither `Clone` nor `Copy`.
///
/// Equality, ordering and hashing only look at `id`, so `serial` tells apart
/// two keys the map considers equal.
#[derive(Debug)]
pub struct Ticket {
    pub id: u32,
    pub serial: u32,
}

impl Ticket {
    pub fn new(id: u32, serial: u32) -> Self {
        Self { id, serial }
    }
}

impl Hash for Ticket {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq for Ticket {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ticket {}

impl PartialOrd for Ticket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ticket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// A payload that can be moved out of exactly once.
///
/// Converting a `&mut MoveSource` into a [`Moved`] takes the payload, so
/// tests can tell whether a map converted its arguments.
#[derive(Debug, Default)]
pub struct MoveSource(Option<Box<u32>>);

impl MoveSource {
    pub fn new(value: u32) -> Self {
        Self(Some(Box::new(value)))
    }

    /// Returns true if the payload has been moved out.
    pub fn is_consumed(&self) -> bool {
        self.0.is_none()
    }
}

/// A value built by moving out of a [`MoveSource`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Moved(pub Option<Box<u32>>);

impl Moved {
    pub fn new(value: u32) -> Self {
        Self(Some(Box::new(value)))
    }
}

impl From<&mut MoveSource> for Moved {
    fn from(source: &mut MoveSource) -> Self {
        Moved(source.0.take())
    }
}

/// A value whose conversion always panics.
#[derive(Clone, Copy, Debug)]
pub struct PanicOnConvert;

impl From<PanicOnConvert> for String {
    fn from(_: PanicOnConvert) -> Self {
        panic!("chaos: converting value")
    }
}
