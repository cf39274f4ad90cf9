//! Property tests for event resolution and calendar selection.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;
use sleepcounter_core::{
    Anniversary, Calendar, Countdown, Event, FixedClock, SpecialDay, WAKE_UP_TIME,
};

fn instant(year: i32, ordinal: u32, secs: u32) -> NaiveDateTime {
    let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
    let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap();
    date.and_time(time)
}

proptest! {
    /// Anniversaries later in the year resolve to this year.
    #[test]
    fn prop_anniversary_ahead_stays_this_year(
        year in 2000..2100i32,
        ordinal in 1..=300u32,
        secs in 0..86_400u32,
        ahead in 1..60i64,
    ) {
        let now = instant(year, ordinal, secs);
        let target = now.date() + Duration::days(ahead);
        prop_assume!(target.year() == year);
        let event = Anniversary::new("e", target.month(), target.day()).unwrap();
        prop_assert_eq!(event.date(now), target);
    }

    /// Anniversaries already gone this year (and not today) resolve to next year.
    #[test]
    fn prop_anniversary_passed_rolls_over(
        year in 2000..2100i32,
        ordinal in 60..=365u32,
        secs in 0..86_400u32,
        behind in 1..59i64,
    ) {
        let now = instant(year, ordinal, secs);
        let target = now.date() - Duration::days(behind);
        prop_assume!(target.year() == year);
        prop_assume!(!(target.month() == 2 && target.day() == 29));
        let event = Anniversary::new("e", target.month(), target.day()).unwrap();
        prop_assert_eq!(event.date(now).year(), year + 1);
    }

    /// One-off events never move, whatever the time.
    #[test]
    fn prop_special_day_is_fixed(
        year in 2000..2100i32,
        ordinal in 1..=365u32,
        offset_days in -2000..2000i64,
    ) {
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let event = SpecialDay::new("e", date.year(), date.month(), date.day()).unwrap();
        let now = date.and_time(WAKE_UP_TIME) + Duration::days(offset_days);
        prop_assert_eq!(event.date(now), date);
        prop_assert_eq!(event.year(now), year);
    }

    /// Sleeps never go up as time moves on, and hit zero at the wake-up instant.
    #[test]
    fn prop_sleeps_non_increasing(
        year in 2000..2100i32,
        ordinal in 1..=365u32,
        steps in proptest::collection::vec(1..200_000i64, 1..20),
    ) {
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let event = SpecialDay::new("e", date.year(), date.month(), date.day()).unwrap();
        let mut now = date.and_time(WAKE_UP_TIME) - Duration::days(30);
        let mut previous = event.sleeps_remaining(now);
        for step in steps {
            now += Duration::seconds(step);
            let sleeps = event.sleeps_remaining(now);
            prop_assert!(sleeps <= previous);
            previous = sleeps;
        }
        prop_assert_eq!(event.sleeps_remaining(date.and_time(WAKE_UP_TIME)), 0);
    }

    /// An event with a lead-in window is listed iff 0 <= sleeps <= window.
    #[test]
    fn prop_window_membership(
        offset_hours in -100..2000i64,
        window in 0..60u32,
    ) {
        let event: Event = SpecialDay::new("e", 2030, 6, 15).unwrap().with_sleeps(window).into();
        let wake = NaiveDate::from_ymd_opt(2030, 6, 15).unwrap().and_time(WAKE_UP_TIME);
        let now = wake - Duration::hours(offset_hours);
        let calendar = Calendar::with_clock(FixedClock::new(now)).with_event(event.clone());
        let sleeps = event.sleeps_remaining(now);
        let expected = sleeps >= 0 && sleeps <= i64::from(window);
        prop_assert_eq!(calendar.is_listed(&event), expected);
    }

    /// The next event always has the least time remaining of the active set.
    #[test]
    fn prop_next_event_is_minimal(
        dates in proptest::collection::vec((1..=12u32, 1..=28u32), 1..8),
        ordinal in 1..=365u32,
    ) {
        let now = instant(2019, ordinal, 12 * 3600);
        let mut calendar = Calendar::with_clock(FixedClock::new(now));
        for (i, (month, day)) in dates.iter().enumerate() {
            calendar.add_event(Anniversary::new(format!("e{i}"), *month, *day).unwrap());
        }
        let next = calendar.next_event().unwrap();
        for event in calendar.events() {
            prop_assert!(next.time_remaining(now) <= event.time_remaining(now));
        }
    }
}
