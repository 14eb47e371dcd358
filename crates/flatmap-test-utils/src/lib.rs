// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared helpers for the `flatmap` test suite.

pub mod eq_props;
pub mod hashers;
pub mod naive_map;
#[cfg(feature = "serde")]
pub mod serde_utils;
pub mod test_key;
pub mod test_map;
pub mod unwind;

/// Re-exports `serde_json` for doctests and integration tests.
#[cfg(feature = "serde")]
pub use serde_json;
