//! Wall-clock abstraction used for creation times, expiry checks and click timestamps.
//!
//! Every time-dependent decision in the registry reads the time through a
//! [`Clock`], so tests can move time forward instead of sleeping.

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use parking_lot::RwLock;

/// Source of the current time, truncated to whole seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(0)
    }
}

/// Manually driven clock for tests.
#[derive(Debug)]
pub struct MockClock {
    now: RwLock<DateTime<Utc>>,
}

impl MockClock {
    pub fn with_time(time: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(time.trunc_subsecs(0)),
        }
    }

    pub fn new() -> Self {
        Self::with_time(Utc::now())
    }

    pub fn advance(&self, duration: TimeDelta) {
        let mut now = self.now.write();
        *now += duration;
    }

    pub fn set_time(&self, time: DateTime<Utc>) {
        *self.now.write() = time.trunc_subsecs(0);
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_system_clock_has_no_subseconds() {
        assert_eq!(SystemClock.now().nanosecond(), 0);
    }

    #[test]
    fn test_mock_clock_advance() {
        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let clock = MockClock::with_time(start);

        clock.advance(TimeDelta::seconds(90));

        assert_eq!(clock.now().timestamp(), 1_700_000_090);
    }

    #[test]
    fn test_mock_clock_set_time_truncates() {
        let clock = MockClock::new();
        let target = DateTime::from_timestamp(1_700_000_000, 500_000_000).unwrap();

        clock.set_time(target);

        assert_eq!(clock.now().timestamp(), 1_700_000_000);
        assert_eq!(clock.now().nanosecond(), 0);
    }
}
