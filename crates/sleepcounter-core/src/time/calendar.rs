//! The calendar of special events.
//!
//! A [`Calendar`] owns an insertion-ordered list of events and a [`Clock`].
//! Every query samples the clock once and evaluates all events against that
//! single moment, so the answers within one call always agree.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::bedtime::SleepChecker;
use super::clock::{Clock, SystemClock};
use super::event::{Countdown, Event, EventConfig};
use crate::error::CalendarError;

/// Interface to the library of special events: look up the next event and
/// find out what is happening today.
#[derive(Debug, Clone)]
pub struct Calendar<C: Clock = SystemClock> {
    clock: C,
    events: Vec<Event>,
}

impl Calendar<SystemClock> {
    /// An empty calendar on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Calendar<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Calendar<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            events: Vec::new(),
        }
    }

    /// Build a calendar from event descriptors, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] for the first descriptor that
    /// does not form a real date.
    pub fn from_configs<I>(clock: C, configs: I) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = EventConfig>,
    {
        let events = configs
            .into_iter()
            .map(Event::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { clock, events })
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// The current moment according to this calendar's clock.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    // ── Construction ─────────────────────────────────────────────────

    /// Append an event. Duplicates are kept.
    pub fn add_event(&mut self, event: impl Into<Event>) -> &mut Self {
        self.events.push(event.into());
        self
    }

    /// Builder form of [`Calendar::add_event`].
    pub fn with_event(mut self, event: impl Into<Event>) -> Self {
        self.add_event(event);
        self
    }

    /// Replace every event in the calendar.
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Every stored event, active or not, in insertion order.
    pub fn all_events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events inside their visibility window, in insertion order.
    pub fn events(&self) -> Vec<&Event> {
        self.active_at(self.now()).collect()
    }

    /// Whether `event` is currently among the active events.
    pub fn is_listed(&self, event: &Event) -> bool {
        self.active_at(self.now()).any(|e| e == event)
    }

    pub fn seconds_to_event(&self, event: &Event) -> i64 {
        event.seconds_remaining(self.now())
    }

    pub fn sleeps_to_event(&self, event: &Event) -> i64 {
        event.sleeps_remaining(self.now())
    }

    /// The active event with the least time remaining. On a tie the event
    /// added first wins.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptyActiveSet`] if no event is active.
    pub fn next_event(&self) -> Result<&Event, CalendarError> {
        let event = self.next_event_at(self.now())?;
        tracing::info!("Next event is {}", event.name());
        Ok(event)
    }

    /// # Errors
    ///
    /// Returns [`CalendarError::EmptyActiveSet`] if no event is active.
    pub fn sleeps_to_next_event(&self) -> Result<i64, CalendarError> {
        let now = self.now();
        let event = self.next_event_at(now)?;
        Ok(event.sleeps_remaining(now))
    }

    /// # Errors
    ///
    /// Returns [`CalendarError::EmptyActiveSet`] if no event is active.
    pub fn seconds_to_next_event(&self) -> Result<i64, CalendarError> {
        let now = self.now();
        let event = self.next_event_at(now)?;
        let seconds = event.seconds_remaining(now);
        tracing::info!("{} seconds to next event ({})", seconds, event.name());
        Ok(seconds)
    }

    /// Whether any active event is happening today.
    pub fn special_day_today(&self) -> bool {
        let now = self.now();
        let result = self.active_at(now).any(|e| e.is_today(now));
        tracing::info!("Today {} special", if result { "is" } else { "is not" });
        result
    }

    /// The first event, in insertion order, happening today.
    ///
    /// Unlike [`Calendar::special_day_today`] this looks at every stored
    /// event, not just the active ones.
    pub fn todays_event(&self) -> Option<&Event> {
        let now = self.now();
        let result = self.events.iter().find(|e| e.is_today(now));
        tracing::info!(
            "It's {} today",
            result.map(|e| e.name()).unwrap_or("not a special day")
        );
        result
    }

    pub fn is_nighttime(&self) -> bool {
        SleepChecker::is_nighttime_at(&self.clock)
    }

    /// The first event whose resolved date is `date`.
    pub fn event_on(&self, date: NaiveDate) -> Option<&Event> {
        let now = self.now();
        self.events.iter().find(|e| e.date(now) == date)
    }

    /// Everything a display needs, evaluated at a single moment.
    pub fn snapshot(&self) -> CountdownSnapshot {
        let now = self.now();
        let active: Vec<&Event> = self.active_at(now).collect();
        CountdownSnapshot {
            at: now,
            is_nighttime: SleepChecker::is_nighttime(now.time()),
            special_day_today: active.iter().any(|e| e.is_today(now)),
            todays_event: self
                .events
                .iter()
                .find(|e| e.is_today(now))
                .map(|e| e.name().to_string()),
            next_event: self
                .next_event_at(now)
                .ok()
                .map(|e| EventSummary::of(e, now)),
            events: active.iter().map(|e| EventSummary::of(e, now)).collect(),
        }
    }

    fn active_at(&self, now: NaiveDateTime) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter().filter(move |e| e.is_active(now))
    }

    fn next_event_at(&self, now: NaiveDateTime) -> Result<&Event, CalendarError> {
        // min_by_key keeps the first of equal minimums.
        self.active_at(now)
            .min_by_key(|e| e.time_remaining(now))
            .ok_or(CalendarError::EmptyActiveSet)
    }
}

/// Countdown state of one event at a given moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub name: String,
    pub date: NaiveDate,
    pub recurring: bool,
    pub sleeps_remaining: i64,
    pub seconds_remaining: i64,
    pub is_today: bool,
}

impl EventSummary {
    pub fn of(event: &Event, now: NaiveDateTime) -> Self {
        Self {
            name: event.name().to_string(),
            date: event.date(now),
            recurring: event.is_recurring(),
            sleeps_remaining: event.sleeps_remaining(now),
            seconds_remaining: event.seconds_remaining(now),
            is_today: event.is_today(now),
        }
    }
}

/// Point-in-time view of a calendar, as polled by display widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub at: NaiveDateTime,
    pub is_nighttime: bool,
    pub special_day_today: bool,
    pub todays_event: Option<String>,
    /// Absent when no event is active.
    pub next_event: Option<EventSummary>,
    pub events: Vec<EventSummary>,
}
