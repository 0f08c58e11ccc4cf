//! Scoped wall-clock measurement.

use std::time::{Duration, Instant};

/// Run `operation` exactly once on the calling thread and return the
/// wall-clock time it took.
///
/// Everything performed inside the closure is included in the measurement
/// and nothing outside of it is. A panicking operation propagates unmeasured.
#[inline]
pub fn measure(operation: impl FnOnce()) -> Duration {
    let start = Instant::now();
    operation();
    start.elapsed()
}

#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};

    use pretty_assertions::assert_eq;

    use super::measure;

    #[test]
    fn covers_the_whole_operation() {
        let elapsed = measure(|| thread::sleep(Duration::from_millis(25)));
        assert!(elapsed >= Duration::from_millis(25));
    }

    #[test]
    fn runs_the_operation_exactly_once() {
        let mut calls = 0;
        let _elapsed = measure(|| calls += 1);
        assert_eq!(calls, 1);
    }
}
