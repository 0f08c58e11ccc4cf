//! Dataset generation.
//!
//! A dataset is an ordered sequence of unique 128-bit identifiers which
//! doubles as both the contents of every collection under test and the pool
//! of lookup keys. Datasets are generated fresh for each measurement and
//! discarded afterwards.

use std::collections::HashSet;

use rand::{
    Rng, SeedableRng,
    distr::{Distribution, StandardUniform},
    rngs::SmallRng,
};

/// An opaque 128-bit identifier.
///
/// Keys carry no structure beyond equality and hashability; the collections
/// under test only ever store them and answer membership queries about them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key(u128);

impl Distribution<Key> for StandardUniform {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Key {
        Key(rng.random())
    }
}

/// Generate `n` pairwise-distinct random keys.
///
/// A colliding draw is discarded and redrawn, so distinctness holds by
/// construction rather than by the (overwhelming) odds of 128-bit
/// randomness. The keys are returned in generation order; the last element
/// is the probe key used by the single-lookup scenarios.
#[must_use]
pub fn generate(n: usize) -> Vec<Key> {
    let mut rng = SmallRng::from_os_rng();
    let mut seen = HashSet::with_capacity(n);
    let mut dataset = Vec::with_capacity(n);

    while dataset.len() < n {
        let key: Key = rng.random();
        if seen.insert(key) {
            dataset.push(key);
        }
    }

    dataset
}
