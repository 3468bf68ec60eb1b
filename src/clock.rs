//! Wall-clock source and the fixed display formats of the ticket clock.

use chrono::{Local, NaiveDateTime};
use parking_lot::Mutex;
use std::sync::Arc;

/// `HH:MM:SS`, zero padded, 24-hour.
pub const TIME_FORMAT: &str = "%H:%M:%S";
/// `DD MonthName YYYY`, e.g. `03 March 2025`.
pub const DATE_FORMAT: &str = "%d %B %Y";

/// Source of local wall-clock time.
pub trait Clock: Send {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the operating system clock in the local timezone.
///
/// This is wall-clock time: when daylight saving ends, or the system
/// clock is set back, the next reading is earlier than the last one and
/// the ticket shows it as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock whose time only changes when told to.
///
/// Clones share the same instant, so a test can keep one handle and
/// advance the time seen by a controller holding another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock() = now;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}

/// Time and date strings rendered for one instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClockReading {
    pub time: String,
    pub date: String,
}

impl ClockReading {
    pub fn at(instant: NaiveDateTime) -> Self {
        Self {
            time: instant.format(TIME_FORMAT).to_string(),
            date: instant.format(DATE_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn reading_is_zero_padded() {
        let reading = ClockReading::at(at(2025, 3, 3, 7, 5, 9));
        assert_eq!(reading.time, "07:05:09");
        assert_eq!(reading.date, "03 March 2025");
    }

    #[test]
    fn reading_uses_24_hour_clock() {
        let reading = ClockReading::at(at(2024, 7, 13, 23, 59, 59));
        assert_eq!(reading.time, "23:59:59");
        assert_eq!(reading.date, "13 July 2024");
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(at(2024, 1, 1, 0, 0, 0));
        let handle = clock.clone();
        handle.advance(chrono::Duration::seconds(61));
        assert_eq!(clock.now(), at(2024, 1, 1, 0, 1, 1));
    }
}
