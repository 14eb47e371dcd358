// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An open-addressed table from hashes to entry indexes.
//!
//! The unordered maps keep their entries densely in a [`Layout`] buffer. This
//! table maps each entry's hash to its position in that buffer. Collisions
//! are resolved by linear probing, and removals leave tombstones behind so
//! that probe sequences passing through a removed slot stay intact.
//!
//! [`Layout`]: crate::Layout

use crate::internal::TableValidationError;
use alloc::{collections::TryReserveError, format, vec, vec::Vec};
use hashbrown::HashSet;
use rustc_hash::FxBuildHasher;

/// The number of slots allocated on first insertion.
pub(crate) const MIN_SLOTS: usize = 8;

// The table is rebuilt before live entries plus tombstones would exceed
// 3/4 of the slots. This also guarantees that every probe sequence reaches
// an empty slot.
const MAX_LOAD_NUM: usize = 3;
const MAX_LOAD_DEN: usize = 4;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Slot {
    /// Never used since the last rebuild. Terminates probing.
    Empty,
    /// Previously occupied. Probing continues past it.
    Tombstone,
    /// Holds the full hash of the entry at `index`, so that rebuilds don't
    /// need to rehash keys.
    Occupied { hash: u64, index: usize },
}

/// The location of a matching entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Found {
    pub(crate) slot: usize,
    pub(crate) index: usize,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct ProbeTable {
    slots: Vec<Slot>,
    live: usize,
    tombstones: usize,
}

impl ProbeTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::Empty; slots_for(capacity)],
            live: 0,
            tombstones: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.live
    }

    #[cfg(test)]
    pub(crate) fn tombstones(&self) -> usize {
        self.tombstones
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The number of entries that fit without a rebuild, assuming no
    /// tombstones.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len() * MAX_LOAD_NUM / MAX_LOAD_DEN
    }

    /// Walks the probe sequence for `hash`, returning the first occupied slot
    /// with the same hash for which `eq` returns true.
    pub(crate) fn find<F>(&self, hash: u64, mut eq: F) -> Option<Found>
    where
        F: FnMut(usize) -> bool,
    {
        if self.slots.is_empty() {
            return None;
        }
        let mask = self.slots.len() - 1;
        let mut pos = start(hash, mask);
        for _ in 0..self.slots.len() {
            match self.slots[pos] {
                Slot::Empty => return None,
                Slot::Tombstone => {}
                Slot::Occupied { hash: h, index } => {
                    if h == hash && eq(index) {
                        return Some(Found { slot: pos, index });
                    }
                }
            }
            pos = (pos + 1) & mask;
        }
        None
    }

    /// Makes room for one more entry, rebuilding the table if the insertion
    /// would push it past its load bound.
    ///
    /// When tombstones account for the excess, the table is rebuilt at the
    /// same size. Otherwise it doubles.
    pub(crate) fn reserve_one(&mut self) {
        let slot_count = self.slots.len();
        if slot_count == 0 {
            self.rebuild(MIN_SLOTS);
            return;
        }
        if !over_load(self.live + self.tombstones + 1, slot_count) {
            return;
        }
        if (self.live + 1) * 2 <= slot_count {
            self.rebuild(slot_count);
        } else {
            self.rebuild(slot_count * 2);
        }
    }

    /// Ensures that `additional` more entries fit without a rebuild.
    pub(crate) fn reserve(&mut self, additional: usize) {
        let wanted = slots_for(self.live.saturating_add(additional));
        if wanted > self.slots.len() {
            self.rebuild(wanted);
        }
    }

    /// Like [`Self::reserve`], but reports allocation failure instead of
    /// aborting. On error, the table is unchanged.
    pub(crate) fn try_reserve(
        &mut self,
        additional: usize,
    ) -> Result<(), TryReserveError> {
        let wanted = slots_for(self.live.saturating_add(additional));
        if wanted > self.slots.len() {
            let mut slots = Vec::new();
            slots.try_reserve_exact(wanted)?;
            slots.resize(wanted, Slot::Empty);
            self.rebuild_into(slots);
        }
        Ok(())
    }

    /// Rebuilds the table at the smallest size that holds the live entries.
    pub(crate) fn shrink_to_fit(&mut self) {
        let wanted = slots_for(self.live);
        if wanted < self.slots.len() {
            self.rebuild(wanted);
        }
    }

    /// Records that the entry at `index` has the given hash.
    ///
    /// The caller must have called [`Self::reserve_one`] and checked that
    /// the key is absent. The first empty or tombstoned slot in the probe
    /// sequence is used.
    pub(crate) fn insert(&mut self, hash: u64, index: usize) {
        let mask = self.slots.len() - 1;
        let mut pos = start(hash, mask);
        for _ in 0..self.slots.len() {
            match self.slots[pos] {
                Slot::Empty => {
                    self.slots[pos] = Slot::Occupied { hash, index };
                    self.live += 1;
                    return;
                }
                Slot::Tombstone => {
                    self.slots[pos] = Slot::Occupied { hash, index };
                    self.live += 1;
                    self.tombstones -= 1;
                    return;
                }
                Slot::Occupied { .. } => pos = (pos + 1) & mask,
            }
        }
        panic!("probe table has no free slot (reserve_one was not called)");
    }

    /// Marks `slot` as removed.
    pub(crate) fn remove(&mut self, slot: usize) {
        debug_assert!(matches!(self.slots[slot], Slot::Occupied { .. }));
        self.slots[slot] = Slot::Tombstone;
        self.live -= 1;
        self.tombstones += 1;
        if self.live == 0 {
            // Nothing left to probe past, so every tombstone can go.
            self.reset();
        }
    }

    /// Points the slot that refers to entry `from` at entry `to` instead.
    ///
    /// Used after the entry at `from` has been moved to `to` in the dense
    /// buffer.
    pub(crate) fn retarget(&mut self, hash: u64, from: usize, to: usize) {
        let Some(found) = self.find(hash, |index| index == from) else {
            panic!("probe table has no slot for entry {from}");
        };
        self.slots[found.slot] = Slot::Occupied { hash, index: to };
    }

    /// Rewrites every occupied slot after the dense buffer has been
    /// compacted. `f` maps an old index to its new one, or to `None` if the
    /// entry was removed, in which case the slot becomes a tombstone.
    ///
    /// No hashing is needed, since slots keep their hashes.
    pub(crate) fn remap<F>(&mut self, mut f: F)
    where
        F: FnMut(usize) -> Option<usize>,
    {
        for slot in &mut self.slots {
            if let Slot::Occupied { hash, index } = *slot {
                match f(index) {
                    Some(index) => *slot = Slot::Occupied { hash, index },
                    None => {
                        *slot = Slot::Tombstone;
                        self.live -= 1;
                        self.tombstones += 1;
                    }
                }
            }
        }
        if self.live == 0 {
            self.reset();
        }
    }

    /// Empties the table, keeping its allocation.
    pub(crate) fn clear(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.slots.fill(Slot::Empty);
        self.live = 0;
        self.tombstones = 0;
    }

    fn rebuild(&mut self, slot_count: usize) {
        self.rebuild_into(vec![Slot::Empty; slot_count]);
    }

    /// Moves every occupied slot into `slots`, which must be all empty.
    fn rebuild_into(&mut self, slots: Vec<Slot>) {
        let old = core::mem::replace(&mut self.slots, slots);
        self.tombstones = 0;
        if self.slots.is_empty() {
            // Only reachable when shrinking a table with no live entries.
            debug_assert_eq!(self.live, 0);
            return;
        }
        debug_assert!(self.slots.len().is_power_of_two());
        let mask = self.slots.len() - 1;
        for slot in old {
            if let Slot::Occupied { hash, index } = slot {
                let mut pos = start(hash, mask);
                while self.slots[pos] != Slot::Empty {
                    pos = (pos + 1) & mask;
                }
                self.slots[pos] = Slot::Occupied { hash, index };
            }
        }
    }

    /// Checks slot counts, the load bound, and that every index in
    /// `0..expected_len` is referenced exactly once.
    pub(crate) fn validate(
        &self,
        expected_len: usize,
    ) -> Result<(), TableValidationError> {
        let slot_count = self.slots.len();
        if slot_count != 0
            && (!slot_count.is_power_of_two() || slot_count < MIN_SLOTS)
        {
            return Err(TableValidationError::new(format!(
                "slot count {slot_count} is not a power of two >= {MIN_SLOTS}"
            )));
        }

        let mut indexes =
            HashSet::with_capacity_and_hasher(self.live, FxBuildHasher);
        let mut tombstones = 0;
        let mut empty = 0;
        for slot in &self.slots {
            match *slot {
                Slot::Empty => empty += 1,
                Slot::Tombstone => tombstones += 1,
                Slot::Occupied { index, .. } => {
                    if index >= expected_len {
                        return Err(TableValidationError::new(format!(
                            "slot refers to index {index}, \
                             but there are only {expected_len} entries"
                        )));
                    }
                    if !indexes.insert(index) {
                        return Err(TableValidationError::new(format!(
                            "index {index} is referenced by more than one slot"
                        )));
                    }
                }
            }
        }

        if indexes.len() != self.live || self.live != expected_len {
            return Err(TableValidationError::new(format!(
                "expected {expected_len} entries, found {} occupied slots \
                 (live count {})",
                indexes.len(),
                self.live,
            )));
        }
        if tombstones != self.tombstones {
            return Err(TableValidationError::new(format!(
                "found {tombstones} tombstones, but the count is {}",
                self.tombstones,
            )));
        }
        if slot_count != 0 {
            if over_load(self.live + self.tombstones, slot_count) {
                return Err(TableValidationError::new(format!(
                    "{} live and {} tombstoned slots exceed the load bound \
                     for {slot_count} slots",
                    self.live, self.tombstones,
                )));
            }
            if empty == 0 {
                return Err(TableValidationError::new(
                    "no empty slot: probes for absent keys would not end",
                ));
            }
        }

        Ok(())
    }
}

#[inline]
fn start(hash: u64, mask: usize) -> usize {
    // Truncation on 32-bit targets is fine: only the low bits are used.
    (hash as usize) & mask
}

#[inline]
fn over_load(used: usize, slot_count: usize) -> bool {
    used.saturating_mul(MAX_LOAD_DEN) > slot_count.saturating_mul(MAX_LOAD_NUM)
}

/// The number of slots needed to hold `capacity` entries within the load
/// bound.
fn slots_for(capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    // On overflow, ask for an impossible size so that allocation fails the
    // same way an oversized `Vec` does.
    capacity
        .saturating_mul(MAX_LOAD_DEN)
        .div_ceil(MAX_LOAD_NUM)
        .max(MIN_SLOTS)
        .checked_next_power_of_two()
        .unwrap_or(usize::MAX)
}
