//! Clock seam for the past-booking check.
//!
//! The ledger reads "now" through a single injectable trait object so tests
//! and embedders can pin the current instant deterministically. `SystemClock`
//! is the production implementation; `FixedClock` is the test double.

use chrono::{Local, NaiveDateTime};

/// Provider of the current instant.
pub trait Clock: Send + Sync {
    /// The current instant as a naive local timestamp.
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock implementation backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_always_returns_its_instant() {
        let instant = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn system_clock_is_monotonic_enough_for_ordering() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(first <= second);
    }
}
