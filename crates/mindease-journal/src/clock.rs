//! Injectable time source.
//!
//! Streak bucketing truncates instants to local calendar days through
//! this trait so tests can pin both the current instant and the
//! timezone.

use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The calendar day `instant` falls on in the journal's timezone.
    fn local_day(&self, instant: DateTime<Utc>) -> NaiveDate;

    fn today(&self) -> NaiveDate {
        self.local_day(self.now())
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn local_day(&self, instant: DateTime<Utc>) -> NaiveDate {
        (**self).local_day(instant)
    }
}

/// Wall clock in the system's local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_day(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&Local).date_naive()
    }
}

/// Settable clock with a fixed UTC offset, for tests.
#[derive(Debug)]
pub struct FixedClock {
    now: std::sync::Mutex<DateTime<Utc>>,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self {
            now: std::sync::Mutex::new(now),
            offset,
        }
    }

    /// Fixed clock pinned to UTC
    pub fn utc(now: DateTime<Utc>) -> Self {
        Self::new(now, FixedOffset::east_opt(0).expect("zero offset"))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("clock lock") = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().expect("clock lock");
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }

    fn local_day(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_advance() {
        let clock = FixedClock::utc(Utc.with_ymd_and_hms(2024, 6, 2, 10, 0, 0).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());

        clock.advance(Duration::days(1));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    }

    #[test]
    fn test_offset_changes_local_day() {
        // 23:30 UTC is already the next day at UTC+9
        let instant = Utc.with_ymd_and_hms(2024, 6, 2, 23, 30, 0).unwrap();
        let tokyo = FixedClock::new(instant, FixedOffset::east_opt(9 * 3600).unwrap());
        assert_eq!(
            tokyo.local_day(instant),
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
        );
    }
}
