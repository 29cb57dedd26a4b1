//! Wall-clock sources for game timing.
//!
//! Games never run a timer; elapsed minutes are computed from clock reads
//! when asked. `SystemClock` reads the real time, `ManualClock` is moved by
//! hand for script replays and tests.

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::sync::{Arc, Mutex};

/// Source of the current time.
pub trait Clock: fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock handle shared between games and the code driving them.
pub type SharedClock = Arc<dyn Clock>;

/// Reads `Utc::now()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Convenience constructor returning the clock already wrapped in an `Arc`.
    pub fn shared(start: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self::new(start))
    }

    pub fn set(&self, time: DateTime<Utc>) {
        *self.lock() = time;
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.lock();
        *current += by;
    }

    pub fn advance_minutes(&self, minutes: i64) {
        self.advance(Duration::minutes(minutes));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        // A poisoned lock still holds a valid timestamp.
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.lock()
    }
}

/// Whole minutes between `from` and `to`, floored. Negative spans count as zero.
pub fn whole_minutes_between(from: DateTime<Utc>, to: DateTime<Utc>) -> u32 {
    let seconds = (to - from).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    u32::try_from(seconds / 60).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 1, 1, 14, 0, 0).unwrap()
    }

    #[test]
    fn test_manual_clock_moves_only_when_told() {
        let clock = ManualClock::new(kickoff());
        assert_eq!(clock.now(), kickoff());

        clock.advance_minutes(45);
        assert_eq!(clock.now(), kickoff() + Duration::minutes(45));

        clock.set(kickoff());
        assert_eq!(clock.now(), kickoff());
    }

    #[test]
    fn test_shared_manual_clock_is_visible_through_trait_object() {
        let clock = ManualClock::shared(kickoff());
        let shared: SharedClock = clock.clone();
        clock.advance(Duration::seconds(90));
        assert_eq!(shared.now(), kickoff() + Duration::seconds(90));
    }

    #[test]
    fn test_whole_minutes_floors_partial_minutes() {
        let start = kickoff();
        assert_eq!(whole_minutes_between(start, start), 0);
        assert_eq!(whole_minutes_between(start, start + Duration::seconds(59)), 0);
        assert_eq!(whole_minutes_between(start, start + Duration::seconds(60)), 1);
        assert_eq!(whole_minutes_between(start, start + Duration::seconds(2699)), 44);
        assert_eq!(whole_minutes_between(start, start + Duration::minutes(45)), 45);
    }

    #[test]
    fn test_whole_minutes_clamps_backwards_clock() {
        let start = kickoff();
        assert_eq!(whole_minutes_between(start, start - Duration::minutes(5)), 0);
    }

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
