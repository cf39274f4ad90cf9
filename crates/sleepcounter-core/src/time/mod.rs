pub mod bedtime;
pub mod calendar;
pub mod clock;
pub mod event;

pub use bedtime::{SleepChecker, BEDTIME, WAKE_UP_TIME};
pub use calendar::{Calendar, CountdownSnapshot, EventSummary};
pub use clock::{Clock, FixedClock, SystemClock};
pub use event::{Anniversary, Countdown, Event, EventConfig, SpecialDay, SECONDS_PER_DAY};
