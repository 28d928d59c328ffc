//! Time source and timestamp formatting
//!
//! Every time-dependent decision the logger makes (the line stamp, the day
//! in the log file name, the crash dump name) goes through a [`Clock`], so
//! day rotation can be exercised without waiting for midnight.

use chrono::{DateTime, Local, NaiveDate, TimeDelta};
use parking_lot::Mutex;
use std::fmt;

/// Line stamp: `2024/03/05 10:11:12`
pub const LINE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Day stamp used in log file names: `20240305`
pub const DAY_FORMAT: &str = "%Y%m%d";

/// Stamp used in crash dump names: `0305-101112`
pub const DUMP_FORMAT: &str = "%m%d-%H%M%S";

/// Source of the current local time
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Local>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock that only moves when told to
///
/// # Examples
///
/// ```
/// use rust_daily_logger::core::{Clock, ManualClock};
/// use chrono::{Local, TimeDelta, TimeZone};
///
/// let start = Local.with_ymd_and_hms(2024, 3, 5, 23, 59, 0).unwrap();
/// let clock = ManualClock::new(start);
/// clock.advance(TimeDelta::minutes(2));
/// assert_eq!(clock.today().to_string(), "2024-03-06");
/// ```
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Local>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Local>) {
        *self.now.lock() = now;
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock();
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock()
    }
}

#[must_use]
pub fn line_stamp(datetime: &DateTime<Local>) -> String {
    datetime.format(LINE_FORMAT).to_string()
}

#[must_use]
pub fn day_stamp(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

#[must_use]
pub fn dump_stamp(datetime: &DateTime<Local>) -> String {
    datetime.format(DUMP_FORMAT).to_string()
}
