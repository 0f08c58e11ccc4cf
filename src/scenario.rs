//! The access patterns measured per collection kind.
//!
//! Every scenario generates a fresh dataset, runs the same operation
//! sequence once per collection kind and reports one elapsed duration per
//! kind. Kinds are measured one after the other, never interleaved, so no
//! measurement carries another's residual cache or allocator state. Repeated
//! lookups run inside a single timed region and are reported as one
//! aggregate duration for all repetitions.

use std::{
    collections::{HashMap, HashSet},
    hint::black_box,
    time::Duration,
};

use crate::{
    collection::Membership,
    dataset::{self, Key},
    timer,
};

/// One measurement row: a dataset size and the elapsed time of the same
/// operation sequence for each collection kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    /// Number of identifiers in the measured dataset.
    pub items_count: usize,
    /// Elapsed time for the sequential list.
    pub list_time: Duration,
    /// Elapsed time for the hash-keyed dictionary.
    pub dictionary_time: Duration,
    /// Elapsed time for the hash set.
    pub hashset_time: Duration,
}

/// Measure construction alone for each collection kind.
#[must_use]
pub fn creation(items_count: usize) -> Stats {
    let dataset = dataset::generate(items_count);

    Stats {
        items_count,
        list_time: timed_build::<Vec<Key>>(&dataset),
        dictionary_time: timed_build::<HashMap<Key, Key>>(&dataset),
        hashset_time: timed_build::<HashSet<Key>>(&dataset),
    }
}

/// Measure construction plus `lookups` membership checks of a single key,
/// all inside one timed region.
///
/// The probed key is the last element of the dataset, so every check is a
/// present-key lookup and the linear scan pays for a full traversal.
///
/// # Panics
///
/// Panics if `items_count` is zero.
#[must_use]
pub fn creation_and_lookup(items_count: usize, lookups: usize) -> Stats {
    let dataset = dataset::generate(items_count);
    let probe = *dataset.last().expect("dataset must not be empty");

    Stats {
        items_count,
        list_time: timed_build_and_probe::<Vec<Key>>(&dataset, &probe, lookups),
        dictionary_time: timed_build_and_probe::<HashMap<Key, Key>>(&dataset, &probe, lookups),
        hashset_time: timed_build_and_probe::<HashSet<Key>>(&dataset, &probe, lookups),
    }
}

/// Measure `lookups` membership checks of a single key against collections
/// built outside the timed region.
///
/// # Panics
///
/// Panics if `items_count` is zero.
#[must_use]
pub fn lookup(items_count: usize, lookups: usize) -> Stats {
    let dataset = dataset::generate(items_count);
    let probe = *dataset.last().expect("dataset must not be empty");

    let list = <Vec<Key>>::build(&dataset);
    let dictionary = <HashMap<Key, Key>>::build(&dataset);
    let hashset = <HashSet<Key>>::build(&dataset);

    Stats {
        items_count,
        list_time: timed_probe(&list, &probe, lookups),
        dictionary_time: timed_probe(&dictionary, &probe, lookups),
        hashset_time: timed_probe(&hashset, &probe, lookups),
    }
}

/// Measure the filtered cross-join: every dataset element tested for
/// membership against the collection, survivors collected. Collections are
/// built outside the timed region.
///
/// For the sequential list this is the quadratic case the harness exists to
/// expose: `items_count` probes, each an `O(n)` scan.
#[must_use]
pub fn multi_lookup(items_count: usize, lookups: usize) -> Stats {
    let dataset = dataset::generate(items_count);

    let list = <Vec<Key>>::build(&dataset);
    let dictionary = <HashMap<Key, Key>>::build(&dataset);
    let hashset = <HashSet<Key>>::build(&dataset);

    Stats {
        items_count,
        list_time: timed_filter(&list, &dataset, lookups),
        dictionary_time: timed_filter(&dictionary, &dataset, lookups),
        hashset_time: timed_filter(&hashset, &dataset, lookups),
    }
}

fn timed_build<C: Membership>(dataset: &[Key]) -> Duration {
    timer::measure(|| {
        black_box(C::build(dataset));
    })
}

fn timed_build_and_probe<C: Membership>(dataset: &[Key], probe: &Key, lookups: usize) -> Duration {
    timer::measure(|| {
        let collection = C::build(dataset);
        for _ in 0..lookups {
            black_box(collection.contains(probe));
        }
    })
}

fn timed_probe<C: Membership>(collection: &C, probe: &Key, lookups: usize) -> Duration {
    timer::measure(|| {
        for _ in 0..lookups {
            black_box(collection.contains(probe));
        }
    })
}

fn timed_filter<C: Membership>(collection: &C, dataset: &[Key], lookups: usize) -> Duration {
    timer::measure(|| {
        for _ in 0..lookups {
            let cross: Vec<Key> = dataset
                .iter()
                .filter(|&key| collection.contains(key))
                .copied()
                .collect();
            black_box(cross);
        }
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{creation, creation_and_lookup, lookup, multi_lookup, timed_filter};
    use crate::{
        collection::Membership,
        dataset::{self, Key},
    };

    #[rstest]
    fn rows_carry_the_requested_size(#[values(10, 100)] n: usize) {
        assert_eq!(creation(n).items_count, n);
        assert_eq!(creation_and_lookup(n, 1).items_count, n);
        assert_eq!(lookup(n, 3).items_count, n);
        assert_eq!(multi_lookup(n, 1).items_count, n);
    }

    #[test]
    fn repeated_invocations_yield_fresh_rows() {
        let first = lookup(50, 10);
        let second = lookup(50, 10);
        assert_eq!(first.items_count, second.items_count);
    }

    /// A list stand-in whose scan never early-exits, counting every
    /// key-to-key comparison it performs.
    struct CountingScan {
        keys: Vec<Key>,
        comparisons: Cell<usize>,
    }

    impl Membership for CountingScan {
        fn build(dataset: &[Key]) -> Self {
            CountingScan {
                keys: dataset.to_vec(),
                comparisons: Cell::new(0),
            }
        }

        fn contains(&self, key: &Key) -> bool {
            let mut found = false;
            for candidate in &self.keys {
                self.comparisons.set(self.comparisons.get() + 1);
                if candidate == key {
                    found = true;
                }
            }
            found
        }
    }

    #[test]
    fn cross_join_is_quadratic_for_a_linear_scan() {
        let dataset = dataset::generate(5);
        let scan = CountingScan::build(&dataset);

        let _elapsed = timed_filter(&scan, &dataset, 1);
        assert_eq!(scan.comparisons.get(), 25);
    }
}
