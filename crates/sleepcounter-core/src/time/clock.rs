//! Clock abstraction.
//!
//! Everything that needs "now" or "today" asks a [`Clock`]. Production code
//! uses [`SystemClock`]; tests pin the moment with [`FixedClock`].

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

/// Source of the current local wall-clock time.
pub trait Clock {
    /// The current moment, in local time without a timezone.
    fn now(&self) -> NaiveDateTime;

    /// The current calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stopped at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }

    /// Stop the clock at `year-month-day hour:minute:00`.
    ///
    /// # Panics
    ///
    /// Panics if the components do not form a valid date and time. Meant for
    /// tests and fixtures with literal values.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        let instant = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .unwrap_or_else(|| {
                panic!("invalid fixed clock instant {year}-{month}-{day} {hour}:{minute}")
            });
        Self { instant }
    }

    /// Move the clock forwards (or backwards, for negative durations).
    pub fn advance(&mut self, by: Duration) {
        self.instant += by;
    }

    pub fn set(&mut self, instant: NaiveDateTime) {
        self.instant = instant;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
