//! Special day events.
//!
//! Two kinds of event exist:
//!
//! - [`Anniversary`]: the same month/day every year (Christmas, Halloween).
//! - [`SpecialDay`]: a single fixed date that happens once (a trip).
//!
//! Both are counted down to the wake-up instant of their date, measured in
//! seconds and in "sleeps" (wake-up times still to pass). All queries take
//! the current moment explicitly so the caller decides which clock to trust.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::bedtime::SleepChecker;
use crate::error::CalendarError;

pub const SECONDS_PER_DAY: i64 = 24 * 3600;

/// Leap year used to check that a month/day can exist at all.
const LEAP_YEAR: i32 = 2000;

/// Feb 29 can be missing for up to eight years in a row (2096 to 2104).
const MAX_YEARS_BETWEEN_OCCURRENCES: i32 = 8;

/// Behaviour shared by every kind of event.
///
/// Implementors provide the identity fields and [`Countdown::date`]; the
/// countdown arithmetic is common.
pub trait Countdown {
    fn name(&self) -> &str;
    fn month(&self) -> u32;
    fn day(&self) -> u32;

    /// Lead-in window in sleeps. `None` means visible until the event passes.
    fn sleeps_to_count(&self) -> Option<u32>;

    /// The date this event resolves to, as seen from `now`.
    fn date(&self, now: NaiveDateTime) -> NaiveDate;

    fn year(&self, now: NaiveDateTime) -> i32 {
        self.date(now).year()
    }

    /// Signed time between `now` and the wake-up instant on the event date.
    fn time_remaining(&self, now: NaiveDateTime) -> Duration {
        time_until(self.date(now), now)
    }

    /// Whole seconds to the event, rounded down; negative as soon as the
    /// wake-up instant has passed.
    fn seconds_remaining(&self, now: NaiveDateTime) -> i64 {
        floor_seconds(self.time_remaining(now))
    }

    /// Sleeps to the event: the remaining time in days, rounded up.
    fn sleeps_remaining(&self, now: NaiveDateTime) -> i64 {
        let sleeps = ceil_days(self.time_remaining(now));
        tracing::debug!("{} sleeps to event {}", sleeps, self.name());
        sleeps
    }

    /// False once the event has passed, or while it is still further away
    /// than its lead-in window.
    fn is_active(&self, now: NaiveDateTime) -> bool {
        let sleeps = self.sleeps_remaining(now);
        if sleeps < 0 {
            return false;
        }
        match self.sleeps_to_count() {
            Some(window) => sleeps <= i64::from(window),
            None => true,
        }
    }

    /// True when it is daytime and today's month/day match the event.
    ///
    /// Overnight this is always false: the special day starts at wake-up.
    fn is_today(&self, now: NaiveDateTime) -> bool {
        if SleepChecker::is_nighttime(now.time()) {
            tracing::debug!("It's nighttime right now. Wait until morning");
            return false;
        }
        let special = self.month() == now.month() && self.day() == now.day();
        tracing::debug!(
            "Date: {}; It {} {}",
            now,
            if special { "is" } else { "is not" },
            self.name()
        );
        special
    }
}

fn time_until(date: NaiveDate, now: NaiveDateTime) -> Duration {
    SleepChecker::wake_up_on(date) - now
}

/// Floor of `delta` measured in seconds.
fn floor_seconds(delta: Duration) -> i64 {
    let secs = delta.num_seconds();
    if delta < Duration::seconds(secs) {
        secs - 1
    } else {
        secs
    }
}

/// Ceiling of `delta` measured in days.
fn ceil_days(delta: Duration) -> i64 {
    let days = delta.num_days();
    if delta - Duration::days(days) > Duration::zero() {
        days + 1
    } else {
        days
    }
}

/// An event on the same month and day every year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anniversary {
    name: String,
    month: u32,
    day: u32,
    sleeps: Option<u32>,
}

impl Anniversary {
    /// Create a yearly event.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the month/day cannot occur in
    /// any year. February 29 is accepted.
    pub fn new(name: impl Into<String>, month: u32, day: u32) -> Result<Self, CalendarError> {
        let name = name.into();
        if NaiveDate::from_ymd_opt(LEAP_YEAR, month, day).is_none() {
            return Err(CalendarError::InvalidDate {
                name,
                year: None,
                month,
                day,
            });
        }
        Ok(Self {
            name,
            month,
            day,
            sleeps: None,
        })
    }

    /// Only show the event once it is `sleeps` or fewer sleeps away.
    pub fn with_sleeps(mut self, sleeps: u32) -> Self {
        self.sleeps = Some(sleeps);
        self
    }

    /// First occurrence in `year` or later.
    fn occurrence_from(&self, year: i32) -> NaiveDate {
        (year..year + MAX_YEARS_BETWEEN_OCCURRENCES + 1)
            .find_map(|y| NaiveDate::from_ymd_opt(y, self.month, self.day))
            .unwrap_or(NaiveDate::MAX)
    }
}

impl Countdown for Anniversary {
    fn name(&self) -> &str {
        &self.name
    }

    fn month(&self) -> u32 {
        self.month
    }

    fn day(&self) -> u32 {
        self.day
    }

    fn sleeps_to_count(&self) -> Option<u32> {
        self.sleeps
    }

    /// This year's date while it is still ahead or is today, otherwise the
    /// next year's.
    ///
    /// "Today" honours the nighttime rule, so after bedtime on the day
    /// itself the anniversary has already moved on to next year.
    fn date(&self, now: NaiveDateTime) -> NaiveDate {
        let year = now.year();
        match NaiveDate::from_ymd_opt(year, self.month, self.day) {
            Some(this_year) if time_until(this_year, now) > Duration::zero() => this_year,
            Some(this_year) if self.is_today(now) => this_year,
            _ => self.occurrence_from(year + 1),
        }
    }
}

/// An event that happens once, on a fixed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialDay {
    name: String,
    date: NaiveDate,
    sleeps: Option<u32>,
}

impl SpecialDay {
    /// Create a one-off event.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the date does not exist.
    pub fn new(
        name: impl Into<String>,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Self, CalendarError> {
        let name = name.into();
        let date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| CalendarError::InvalidDate {
                name: name.clone(),
                year: Some(year),
                month,
                day,
            })?;
        Ok(Self {
            name,
            date,
            sleeps: None,
        })
    }

    pub fn with_sleeps(mut self, sleeps: u32) -> Self {
        self.sleeps = Some(sleeps);
        self
    }
}

impl Countdown for SpecialDay {
    fn name(&self) -> &str {
        &self.name
    }

    fn month(&self) -> u32 {
        self.date.month()
    }

    fn day(&self) -> u32 {
        self.date.day()
    }

    fn sleeps_to_count(&self) -> Option<u32> {
        self.sleeps
    }

    fn date(&self, _now: NaiveDateTime) -> NaiveDate {
        self.date
    }
}

/// Declarative description of an event, as found in configuration.
///
/// A present `year` makes a [`SpecialDay`], an absent one an [`Anniversary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    pub name: String,
    pub month: u32,
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, alias = "sleeps_to_count", skip_serializing_if = "Option::is_none")]
    pub sleeps: Option<u32>,
}

impl EventConfig {
    pub fn anniversary(name: impl Into<String>, month: u32, day: u32) -> Self {
        Self {
            name: name.into(),
            month,
            day,
            year: None,
            sleeps: None,
        }
    }

    pub fn special_day(name: impl Into<String>, year: i32, month: u32, day: u32) -> Self {
        Self {
            name: name.into(),
            month,
            day,
            year: Some(year),
            sleeps: None,
        }
    }

    pub fn with_sleeps(mut self, sleeps: u32) -> Self {
        self.sleeps = Some(sleeps);
        self
    }
}

/// Any event held by a [`Calendar`](super::Calendar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Anniversary(Anniversary),
    SpecialDay(SpecialDay),
}

impl Event {
    fn inner(&self) -> &dyn Countdown {
        match self {
            Event::Anniversary(a) => a,
            Event::SpecialDay(s) => s,
        }
    }

    pub fn is_recurring(&self) -> bool {
        matches!(self, Event::Anniversary(_))
    }

    /// Descriptor that rebuilds this event.
    pub fn to_config(&self) -> EventConfig {
        let year = match self {
            Event::Anniversary(_) => None,
            Event::SpecialDay(s) => Some(s.date.year()),
        };
        EventConfig {
            name: self.name().to_string(),
            month: self.month(),
            day: self.day(),
            year,
            sleeps: self.sleeps_to_count(),
        }
    }
}

impl Countdown for Event {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn month(&self) -> u32 {
        self.inner().month()
    }

    fn day(&self) -> u32 {
        self.inner().day()
    }

    fn sleeps_to_count(&self) -> Option<u32> {
        self.inner().sleeps_to_count()
    }

    fn date(&self, now: NaiveDateTime) -> NaiveDate {
        self.inner().date(now)
    }
}

impl From<Anniversary> for Event {
    fn from(event: Anniversary) -> Self {
        Event::Anniversary(event)
    }
}

impl From<SpecialDay> for Event {
    fn from(event: SpecialDay) -> Self {
        Event::SpecialDay(event)
    }
}

impl TryFrom<EventConfig> for Event {
    type Error = CalendarError;

    fn try_from(config: EventConfig) -> Result<Self, Self::Error> {
        let event: Event = match config.year {
            Some(year) => SpecialDay::new(config.name, year, config.month, config.day)?.into(),
            None => Anniversary::new(config.name, config.month, config.day)?.into(),
        };
        Ok(match (event, config.sleeps) {
            (Event::Anniversary(a), Some(n)) => a.with_sleeps(n).into(),
            (Event::SpecialDay(s), Some(n)) => s.with_sleeps(n).into(),
            (event, None) => event,
        })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Anniversary(a) => write!(f, "{} ({:02}-{:02})", a.name, a.month, a.day),
            Event::SpecialDay(s) => write!(f, "{} ({})", s.name, s.date.format("%Y-%m-%d")),
        }
    }
}
