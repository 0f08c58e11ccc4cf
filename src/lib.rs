//! Micro-benchmark harness for membership lookups over the standard
//! collections.
//!
//! The harness generates datasets of unique 128-bit identifiers, builds a
//! sequential list ([`Vec`]), a hash-keyed dictionary ([`HashMap`]) and a
//! hash set ([`HashSet`]) from each one, and measures the wall-clock cost of
//! building and querying them across exponentially growing sizes. The point
//! is the asymptotic gap this exposes: the list answers membership in `O(n)`,
//! the hashed containers in `O(1)` on average, and across six or seven orders
//! of magnitude of dataset size that difference dominates everything else.
//!
//! Measurement is deliberately single-threaded and sequential. Running
//! sizes, scenarios or collection kinds in parallel would let cache
//! contention and scheduler noise bleed between measurements and invalidate
//! the wall-clock comparison.
//!
//! [`HashMap`]: std::collections::HashMap
//! [`HashSet`]: std::collections::HashSet

pub mod collection;
pub mod dataset;
pub mod driver;
pub mod report;
pub mod scenario;
pub mod timer;

pub use collection::Membership;
pub use dataset::{Key, generate};
pub use report::{ReportError, Reporter, TextTable};
pub use scenario::Stats;
pub use timer::measure;
