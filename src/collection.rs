//! Adapters over the three standard containers under test.
//!
//! The sequential list answers membership in `O(n)` by scanning; the two
//! hashed containers answer in `O(1)` on average by hashing the key and
//! comparing on collision. Exposing that gap as datasets grow is the whole
//! point of the harness.

use std::collections::{HashMap, HashSet};

use crate::dataset::Key;

/// Common interface over the collections being measured.
///
/// Every adapter builds itself from a dataset in a single pass and answers
/// membership queries; the cost profile of those two operations is what the
/// scenarios time.
pub trait Membership: Sized {
    /// Construct the collection from `dataset` in one pass.
    #[must_use]
    fn build(dataset: &[Key]) -> Self;

    /// Membership test for `key`.
    #[must_use]
    fn contains(&self, key: &Key) -> bool;
}

/// Sequential list: `O(n)` append on build, `O(n)` worst-case linear scan on
/// lookup, no hashing involved.
impl Membership for Vec<Key> {
    #[inline]
    fn build(dataset: &[Key]) -> Self {
        dataset.to_vec()
    }

    #[inline]
    fn contains(&self, key: &Key) -> bool {
        self.as_slice().contains(key)
    }
}

/// Hash-keyed dictionary mapping every identifier to itself, the way a keyed
/// index over the dataset would be built. `O(n)` average-case build (one hash
/// per insert), `O(1)` average-case lookup.
impl Membership for HashMap<Key, Key> {
    #[inline]
    fn build(dataset: &[Key]) -> Self {
        dataset.iter().map(|&key| (key, key)).collect()
    }

    #[inline]
    fn contains(&self, key: &Key) -> bool {
        self.contains_key(key)
    }
}

/// Hash set of the identifiers. Same cost profile as the dictionary without
/// the redundant values.
impl Membership for HashSet<Key> {
    #[inline]
    fn build(dataset: &[Key]) -> Self {
        dataset.iter().copied().collect()
    }

    #[inline]
    fn contains(&self, key: &Key) -> bool {
        HashSet::contains(self, key)
    }
}
