//! # Sleepcounter Core Library
//!
//! Counts down the "sleeps" to a child's next special day.
//!
//! ## Architecture
//!
//! - **Bedtime**: wake-up time and bedtime split each day into day and night
//! - **Events**: yearly anniversaries and one-off special days, each resolved
//!   to its next date and counted down to that day's wake-up time
//! - **Calendar**: the ordered event library; picks the next event and says
//!   whether today is special
//! - **Widgets**: display collaborators that poll a calendar, started and
//!   stopped by an [`Application`]
//!
//! All time queries go through a [`Clock`] so tests can pin the moment.
//!
//! ## Key Components
//!
//! - [`Calendar`]: event library and countdown queries
//! - [`Event`]: [`Anniversary`] or [`SpecialDay`], with the [`Countdown`] trait
//! - [`SleepChecker`]: nighttime policy
//! - [`Widget`] / [`Application`]: display boundary

pub mod application;
pub mod diary;
pub mod error;
pub mod time;
pub mod widget;

pub use application::Application;
pub use diary::{custom_diary, default_events, DEFAULT_SLEEPS_TO_COUNT};
pub use error::{CalendarError, ConfigError, CoreError};
pub use time::{
    Anniversary, Calendar, Clock, Countdown, CountdownSnapshot, Event, EventConfig, EventSummary,
    FixedClock, SleepChecker, SpecialDay, SystemClock, BEDTIME, SECONDS_PER_DAY, WAKE_UP_TIME,
};
pub use widget::Widget;
