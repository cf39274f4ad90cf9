//! The stock diary of special days shipped with Sleepcounter.

use crate::error::CalendarError;
use crate::time::{Calendar, Clock, EventConfig};

/// Lead-in window used by the stock events that have one.
pub const DEFAULT_SLEEPS_TO_COUNT: u32 = 20;

/// Descriptors for the stock events, in display priority order.
pub fn default_events() -> Vec<EventConfig> {
    vec![
        EventConfig::anniversary("Bonfire Night", 11, 5).with_sleeps(DEFAULT_SLEEPS_TO_COUNT),
        EventConfig::anniversary("Halloween", 10, 31).with_sleeps(DEFAULT_SLEEPS_TO_COUNT),
        EventConfig::anniversary("Christmas", 12, 25),
        EventConfig::special_day("Legoland", 2019, 4, 27).with_sleeps(DEFAULT_SLEEPS_TO_COUNT),
    ]
}

/// A calendar holding the stock events.
///
/// # Errors
///
/// Only fails if the stock descriptors are invalid, which the tests rule out.
pub fn custom_diary<C: Clock>(clock: C) -> Result<Calendar<C>, CalendarError> {
    Calendar::from_configs(clock, default_events())
}
