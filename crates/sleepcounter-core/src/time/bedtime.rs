//! Day boundary policy: when the household wakes up and when it goes to bed.
//!
//! A "sleep" is counted each time the wake-up time passes, and special day
//! status is held back overnight until the next wake-up.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::clock::Clock;

/// Time of day at which a new day "starts" (06:30:00).
pub const WAKE_UP_TIME: NaiveTime = match NaiveTime::from_hms_opt(6, 30, 0) {
    Some(t) => t,
    None => panic!("invalid wake up time"),
};

/// Time of day after which it counts as night (19:00:00).
pub const BEDTIME: NaiveTime = match NaiveTime::from_hms_opt(19, 0, 0) {
    Some(t) => t,
    None => panic!("invalid bedtime"),
};

/// Answers whether it is nighttime. Stateless; all methods are associated.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepChecker;

impl SleepChecker {
    /// True when `now` is after bedtime or before wake-up time.
    ///
    /// Both boundaries are exclusive: exactly 06:30:00 and exactly 19:00:00
    /// are daytime.
    pub fn is_nighttime(now: NaiveTime) -> bool {
        now > BEDTIME || now < WAKE_UP_TIME
    }

    /// Nighttime check against the current moment of `clock`.
    pub fn is_nighttime_at<C: Clock + ?Sized>(clock: &C) -> bool {
        Self::is_nighttime(clock.now().time())
    }

    /// The wake-up instant on `date`.
    pub fn wake_up_on(date: NaiveDate) -> NaiveDateTime {
        date.and_time(WAKE_UP_TIME)
    }
}
